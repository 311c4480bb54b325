//! Geometry primitives shared by all overlay widgets.
//!
//! Coordinates are image pixels: x grows right, y grows down, matching
//! the svg viewBox the widgets render into.

use serde::{Deserialize, Serialize};

/// A point in image-pixel space.
///
/// Immutable value type: constrained moves always produce a fresh point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn dist(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Point on the circle around `center` at `angle_deg` (counter-clockwise
/// from the positive x axis, in screen coordinates).
fn polar(center: Point, radius: f32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// SVG path spec for a circular arc starting at `start_deg` and sweeping
/// `sweep_deg` counter-clockwise.
///
/// A sweep of 360° or more yields a closed full circle built from two
/// half arcs; a single arc command with coincident endpoints would
/// collapse to nothing. `radius == 0` degenerates to a point but stays a
/// syntactically valid path.
pub fn arc_path(center: Point, start_deg: f32, sweep_deg: f32, radius: f32) -> String {
    if sweep_deg.abs() >= 360.0 {
        let a = polar(center, radius, start_deg);
        let b = polar(center, radius, start_deg + 180.0);
        return format!(
            "M {} {} A {r} {r} 0 1 0 {} {} A {r} {r} 0 1 0 {} {} Z",
            a.x,
            a.y,
            b.x,
            b.y,
            a.x,
            a.y,
            r = radius,
        );
    }
    let a = polar(center, radius, start_deg);
    let b = polar(center, radius, start_deg + sweep_deg);
    let large_arc = u8::from(sweep_deg.abs() > 180.0);
    format!(
        "M {} {} A {r} {r} 0 {large_arc} 0 {} {}",
        a.x,
        a.y,
        b.x,
        b.y,
        r = radius,
    )
}

/// Full circle outline as a closed path.
pub fn circle_path(center: Point, radius: f32) -> String {
    arc_path(center, 90.0, 360.0, radius)
}

/// Annulus between `ri` and `ro`: two nested full circles joined into one
/// path, shaded with `fill-rule="evenodd"` so the inner disk is excluded.
pub fn annulus_path(center: Point, ri: f32, ro: f32) -> String {
    format!("{} {}", circle_path(center, ro), circle_path(center, ri))
}
