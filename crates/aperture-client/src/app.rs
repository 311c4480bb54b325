//! Main application component.

use yew::prelude::*;

use crate::pages::{DiskAnalysis, RingAnalysis};
use crate::state::{AnalysisAction, AnalysisState};

/// Root component: owns the parameter store and wires the analysis
/// panels into it. The store snapshot is the only source of truth the
/// widgets render from; they write back exclusively through dispatched
/// update actions.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AnalysisState::default);

    let on_disk_update = {
        let state = state.clone();
        Callback::from(move |update| state.dispatch(AnalysisAction::UpdateDisk(update)))
    };
    let on_ring_update = {
        let state = state.clone();
        Callback::from(move |update| state.dispatch(AnalysisAction::UpdateRing(update)))
    };

    html! {
        <main class="aperture-app">
            <h1>{ "Aperture" }</h1>
            <div class="analysis-grid">
                <DiskAnalysis
                    params={state.disk}
                    shape={state.shape}
                    preview_url={state.preview_url.clone()}
                    on_update={on_disk_update}
                />
                <RingAnalysis
                    params={state.ring}
                    shape={state.shape}
                    preview_url={state.preview_url.clone()}
                    on_update={on_ring_update}
                />
            </div>
        </main>
    }
}
