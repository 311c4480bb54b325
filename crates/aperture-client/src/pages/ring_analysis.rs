//! Ring analysis panel.

use aperture_core::Point;
use aperture_core::params::{DatasetShape, RingParams, RingUpdate};
use yew::prelude::*;

use crate::components::Ring;
use crate::hooks::use_debounce;
use crate::util::DEFAULT_DEBOUNCE_MS;

#[derive(Properties, PartialEq)]
pub struct RingAnalysisProps {
    pub params: RingParams,
    pub shape: DatasetShape,
    #[prop_or_default]
    pub preview_url: Option<AttrValue>,
    /// Parameter-change intents, already collapsed per debounce window.
    pub on_update: Callback<RingUpdate>,
}

/// Hosts the [`Ring`] widget against the store snapshot, with one
/// debounce window per handler (center, inner radius, outer radius).
#[function_component(RingAnalysis)]
pub fn ring_analysis(props: &RingAnalysisProps) -> Html {
    let (image_width, image_height) = props.shape.image_size();

    let handle_center_change = use_debounce(
        {
            let on_update = props.on_update.clone();
            Callback::from(move |p: Point| on_update.emit(RingUpdate::Center { cx: p.x, cy: p.y }))
        },
        DEFAULT_DEBOUNCE_MS,
    );
    let handle_ri_change = use_debounce(
        {
            let on_update = props.on_update.clone();
            Callback::from(move |ri: f32| on_update.emit(RingUpdate::Inner { ri }))
        },
        DEFAULT_DEBOUNCE_MS,
    );
    let handle_ro_change = use_debounce(
        {
            let on_update = props.on_update.clone();
            Callback::from(move |ro: f32| on_update.emit(RingUpdate::Outer { ro }))
        },
        DEFAULT_DEBOUNCE_MS,
    );

    let params = props.params;
    html! {
        <section class="analysis-panel">
            <h3>{ "Ring analysis" }</h3>
            <Ring
                image_width={image_width}
                image_height={image_height}
                cx={params.cx}
                cy={params.cy}
                ri={params.ri}
                ro={params.ro}
                image={props.preview_url.clone()}
                on_center_change={handle_center_change}
                on_ri_change={handle_ri_change}
                on_ro_change={handle_ro_change}
            />
            <p>
                { format!(
                    "Ring: center=({:.1}, {:.1}), ri={:.1}, ro={:.1}",
                    params.cx, params.cy, params.ri, params.ro
                ) }
            </p>
        </section>
    }
}
