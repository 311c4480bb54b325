//! Overlay widgets and their building blocks.

mod disk;
mod handle;
mod handle_parent;
mod ring;
mod styles;

pub use disk::Disk;
pub use handle::DraggableHandle;
pub use handle_parent::{HandleParent, HandleScope};
pub use ring::Ring;
