//! Analysis parameter store.
//!
//! The store owns the authoritative aperture parameters; widgets never
//! mutate them directly. Handle movements arrive as partial updates
//! through the debounced dispatchers and are merged here.

use std::rc::Rc;

use aperture_core::params::{DatasetShape, DiskParams, DiskUpdate, RingParams, RingUpdate};
use yew::prelude::*;

/// Snapshot of the analysis parameters plus dataset context.
#[derive(Clone, PartialEq)]
pub struct AnalysisState {
    pub shape: DatasetShape,
    pub disk: DiskParams,
    pub ring: RingParams,
    /// Preview image URL from the external dataset provider (may be an
    /// object URL backed by an in-memory blob).
    pub preview_url: Option<AttrValue>,
}

impl AnalysisState {
    /// Seed parameters centered in the image of the given dataset.
    pub fn for_shape(shape: DatasetShape) -> Self {
        let (width, height) = shape.image_size();
        let cx = width / 2.0;
        let cy = height / 2.0;
        Self {
            shape,
            disk: DiskParams {
                cx,
                cy,
                r: width / 4.0,
            },
            ring: RingParams {
                cx,
                cy,
                ri: width / 8.0,
                ro: width / 4.0,
            },
            preview_url: None,
        }
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::for_shape(DatasetShape {
            result_height: 256,
            result_width: 256,
            image_height: 256,
            image_width: 256,
        })
    }
}

/// Actions for analysis state updates.
pub enum AnalysisAction {
    /// Merge a partial disk parameter update.
    UpdateDisk(DiskUpdate),
    /// Merge a partial ring parameter update.
    UpdateRing(RingUpdate),
    /// Switch to a different dataset, reseeding the parameters.
    SetShape(DatasetShape),
    /// Replace the preview image URL.
    SetPreview(Option<AttrValue>),
}

impl Reducible for AnalysisState {
    type Action = AnalysisAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AnalysisAction::UpdateDisk(update) => Rc::new(Self {
                disk: self.disk.apply(update),
                ..(*self).clone()
            }),
            AnalysisAction::UpdateRing(update) => Rc::new(Self {
                ring: self.ring.apply(update),
                ..(*self).clone()
            }),
            AnalysisAction::SetShape(shape) => Rc::new(Self {
                preview_url: self.preview_url.clone(),
                ..Self::for_shape(shape)
            }),
            AnalysisAction::SetPreview(preview_url) => Rc::new(Self {
                preview_url,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_disk_update_leaves_ring_untouched() {
        let state = Rc::new(AnalysisState::default());
        let ring_before = state.ring;
        let state = state.reduce(AnalysisAction::UpdateDisk(DiskUpdate::Radius { r: 17.0 }));
        assert_eq!(state.disk.r, 17.0);
        assert_eq!(state.ring, ring_before);
    }

    #[wasm_bindgen_test]
    fn test_set_shape_reseeds_but_keeps_preview() {
        let state = Rc::new(AnalysisState::default());
        let state = state.reduce(AnalysisAction::SetPreview(Some(AttrValue::from(
            "blob:preview",
        ))));
        let shape = DatasetShape {
            result_height: 16,
            result_width: 16,
            image_height: 128,
            image_width: 512,
        };
        let state = state.reduce(AnalysisAction::SetShape(shape));
        assert_eq!(state.disk.cx, 256.0);
        assert_eq!(state.disk.cy, 64.0);
        assert_eq!(state.preview_url.as_deref(), Some("blob:preview"));
    }
}
