pub mod debounce;

pub use debounce::{DEFAULT_DEBOUNCE_MS, Debounce};
