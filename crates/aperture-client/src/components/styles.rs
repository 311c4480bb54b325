//! Shared presentation constants for the overlay widgets.

/// Semi-transparent shading for the masked aperture region.
pub const MASK_STYLE: &str = "fill: rgba(255, 255, 255, 0.4); stroke: black; stroke-width: 0.5;";

/// Handle marker radius, in image pixels.
pub const HANDLE_RADIUS: f32 = 6.0;

pub const HANDLE_STYLE: &str =
    "fill: rgba(136, 136, 136, 0.5); stroke: black; stroke-width: 1; cursor: move;";

pub const FRAME_STYLE: &str = "border: 1px solid black; width: 100%; height: auto;";
