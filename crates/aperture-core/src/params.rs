//! Analysis parameters and the dataset-shape boundary.
//!
//! The parameter structs are owned by the external store; widgets only
//! propose partial updates which the store merges via [`DiskParams::apply`]
//! and [`RingParams::apply`]. Degenerate geometry (zero radius, `ri == ro`)
//! is legal and drawable, never an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Disk aperture: center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskParams {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

/// Ring (annulus) aperture: center plus inner and outer radius, with the
/// invariant `0 <= ri <= ro` maintained by the handle constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingParams {
    pub cx: f32,
    pub cy: f32,
    pub ri: f32,
    pub ro: f32,
}

/// Partial update to a disk aperture.
///
/// Center and radius arrive through independently debounced handlers, so
/// an update carries only the fields its handler derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskUpdate {
    Center { cx: f32, cy: f32 },
    Radius { r: f32 },
}

/// Partial update to a ring aperture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingUpdate {
    Center { cx: f32, cy: f32 },
    Inner { ri: f32 },
    Outer { ro: f32 },
}

impl DiskParams {
    /// Merge a partial update, leaving the other fields untouched.
    #[must_use]
    pub fn apply(self, update: DiskUpdate) -> Self {
        tracing::debug!(?update, "disk parameter update");
        match update {
            DiskUpdate::Center { cx, cy } => Self { cx, cy, ..self },
            DiskUpdate::Radius { r } => Self { r, ..self },
        }
    }
}

impl RingParams {
    #[must_use]
    pub fn apply(self, update: RingUpdate) -> Self {
        tracing::debug!(?update, "ring parameter update");
        match update {
            RingUpdate::Center { cx, cy } => Self { cx, cy, ..self },
            RingUpdate::Inner { ri } => Self { ri, ..self },
            RingUpdate::Outer { ro } => Self { ro, ..self },
        }
    }

    pub fn is_ordered(&self) -> bool {
        0.0 <= self.ri && self.ri <= self.ro
    }
}

/// Error parsing a dataset shape from the external provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("dataset shape needs 4 dimensions, got {0}")]
    WrongRank(usize),
}

/// Dataset shape as delivered by the external store, consumed positionally
/// as `[result_height, result_width, image_height, image_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetShape {
    pub result_height: u32,
    pub result_width: u32,
    pub image_height: u32,
    pub image_width: u32,
}

impl DatasetShape {
    pub fn from_slice(dims: &[u32]) -> Result<Self, ShapeError> {
        match dims {
            &[result_height, result_width, image_height, image_width] => Ok(Self {
                result_height,
                result_width,
                image_height,
                image_width,
            }),
            other => Err(ShapeError::WrongRank(other.len())),
        }
    }

    /// Image-space extent, the coordinate scope handles live in.
    pub fn image_size(&self) -> (f32, f32) {
        (self.image_width as f32, self.image_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_update_merges_partially() {
        let params = DiskParams {
            cx: 128.0,
            cy: 128.0,
            r: 40.0,
        };
        let moved = params.apply(DiskUpdate::Center { cx: 10.0, cy: 20.0 });
        assert_eq!(moved.r, 40.0);
        let resized = moved.apply(DiskUpdate::Radius { r: 56.0 });
        assert_eq!((resized.cx, resized.cy, resized.r), (10.0, 20.0, 56.0));
    }

    #[test]
    fn test_ring_update_keeps_sibling_radius() {
        let params = RingParams {
            cx: 64.0,
            cy: 64.0,
            ri: 10.0,
            ro: 30.0,
        };
        let updated = params.apply(RingUpdate::Inner { ri: 25.0 });
        assert_eq!(updated.ro, 30.0);
        assert!(updated.is_ordered());
    }

    #[test]
    fn test_zero_radius_ring_is_ordered() {
        let params = RingParams {
            cx: 0.0,
            cy: 0.0,
            ri: 0.0,
            ro: 0.0,
        };
        assert!(params.is_ordered());
    }

    #[test]
    fn test_shape_is_positional() {
        let shape = DatasetShape::from_slice(&[32, 64, 256, 512]).unwrap();
        assert_eq!(shape.result_height, 32);
        assert_eq!(shape.result_width, 64);
        assert_eq!(shape.image_height, 256);
        assert_eq!(shape.image_width, 512);
        assert_eq!(shape.image_size(), (512.0, 256.0));
    }

    #[test]
    fn test_short_shape_is_rejected() {
        assert_eq!(
            DatasetShape::from_slice(&[32, 64, 256]),
            Err(ShapeError::WrongRank(3))
        );
    }

    #[test]
    fn test_update_payload_wire_format() {
        let json = serde_json::to_value(DiskUpdate::Center { cx: 1.0, cy: 2.0 }).unwrap();
        assert_eq!(json, serde_json::json!({"center": {"cx": 1.0, "cy": 2.0}}));
    }
}
