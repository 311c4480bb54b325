//! Disk analysis panel.

use aperture_core::Point;
use aperture_core::params::{DatasetShape, DiskParams, DiskUpdate};
use yew::prelude::*;

use crate::components::Disk;
use crate::hooks::use_debounce;
use crate::util::DEFAULT_DEBOUNCE_MS;

#[derive(Properties, PartialEq)]
pub struct DiskAnalysisProps {
    pub params: DiskParams,
    pub shape: DatasetShape,
    #[prop_or_default]
    pub preview_url: Option<AttrValue>,
    /// Parameter-change intents, already collapsed per debounce window.
    pub on_update: Callback<DiskUpdate>,
}

/// Hosts the [`Disk`] widget against the store snapshot.
///
/// Center and radius movements are debounced independently, so a burst
/// of drag events dispatches at most one update per handler per window
/// while the last value of the burst always goes through.
#[function_component(DiskAnalysis)]
pub fn disk_analysis(props: &DiskAnalysisProps) -> Html {
    let (image_width, image_height) = props.shape.image_size();

    let handle_center_change = use_debounce(
        {
            let on_update = props.on_update.clone();
            Callback::from(move |p: Point| on_update.emit(DiskUpdate::Center { cx: p.x, cy: p.y }))
        },
        DEFAULT_DEBOUNCE_MS,
    );
    let handle_r_change = use_debounce(
        {
            let on_update = props.on_update.clone();
            Callback::from(move |r: f32| on_update.emit(DiskUpdate::Radius { r }))
        },
        DEFAULT_DEBOUNCE_MS,
    );

    let params = props.params;
    html! {
        <section class="analysis-panel">
            <h3>{ "Disk analysis" }</h3>
            <Disk
                image_width={image_width}
                image_height={image_height}
                cx={params.cx}
                cy={params.cy}
                r={params.r}
                image={props.preview_url.clone()}
                on_center_change={handle_center_change}
                on_r_change={handle_r_change}
            />
            <p>
                { format!("Disk: center=({:.1}, {:.1}), r={:.1}", params.cx, params.cy, params.r) }
            </p>
        </section>
    }
}
