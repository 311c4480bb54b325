//! Core logic for aperture overlay widgets.
//!
//! Everything in this crate is plain geometry and value types: no DOM, no
//! wasm bindings. The client crate layers pointer handling and rendering
//! on top, so this crate builds and runs its tests headless on native.

pub mod constraint;
pub mod geometry;
pub mod params;

pub use constraint::Constraint;
pub use geometry::{Point, dist};
pub use params::{DatasetShape, DiskParams, DiskUpdate, RingParams, RingUpdate};
