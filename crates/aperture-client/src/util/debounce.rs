//! Trailing-edge debounce around a `Callback`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::Callback;

/// Debounce delay shared by all parameter-update handlers.
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Collapses a burst of `emit` calls into a single delivery of the most
/// recent value once the burst has been quiet for `delay_ms`.
///
/// Each `emit` replaces the pending [`Timeout`]; dropping a `Timeout`
/// clears the underlying browser timer, so rescheduling, `cancel` and
/// dropping the whole dispatcher all release the timer deterministically.
/// Every `Debounce` instance is its own window; handlers for different
/// parameters do not share state.
pub struct Debounce<T> {
    inner: Callback<T>,
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T> Clone for Debounce<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            delay_ms: self.delay_ms,
            pending: self.pending.clone(),
        }
    }
}

impl<T: 'static> Debounce<T> {
    pub fn new(inner: Callback<T>, delay_ms: u32) -> Self {
        Self {
            inner,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `value` for delivery, discarding any value still waiting.
    pub fn emit(&self, value: T) {
        let inner = self.inner.clone();
        // Weak, since the slot stores the timeout whose closure this is;
        // a strong reference would keep the timer alive past drop.
        let slot = Rc::downgrade(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            // Clear the slot before delivering so the callback can start
            // a fresh window.
            if let Some(slot) = slot.upgrade() {
                slot.borrow_mut().take();
            }
            inner.emit(value);
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drop the pending delivery, if any.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn recording_callback() -> (Callback<u32>, Rc<RefCell<Vec<u32>>>) {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::default();
        let cb = {
            let seen = seen.clone();
            Callback::from(move |value| seen.borrow_mut().push(value))
        };
        (cb, seen)
    }

    #[wasm_bindgen_test]
    async fn test_burst_collapses_to_last_value() {
        let (cb, seen) = recording_callback();
        let debounce = Debounce::new(cb, 20);
        for value in 1..=10 {
            debounce.emit(value);
        }
        TimeoutFuture::new(80).await;
        assert_eq!(*seen.borrow(), vec![10]);
        assert!(!debounce.is_pending());
    }

    #[wasm_bindgen_test]
    async fn test_quiet_windows_deliver_separately() {
        let (cb, seen) = recording_callback();
        let debounce = Debounce::new(cb, 10);
        debounce.emit(1);
        TimeoutFuture::new(50).await;
        debounce.emit(2);
        TimeoutFuture::new(50).await;
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_drops_pending_delivery() {
        let (cb, seen) = recording_callback();
        let debounce = Debounce::new(cb, 10);
        debounce.emit(42);
        debounce.cancel();
        TimeoutFuture::new(50).await;
        assert!(seen.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_drop_cancels_pending_delivery() {
        let (cb, seen) = recording_callback();
        let debounce = Debounce::new(cb, 10);
        debounce.emit(42);
        drop(debounce);
        TimeoutFuture::new(50).await;
        assert!(seen.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_handlers_are_independent() {
        let (cb_a, seen_a) = recording_callback();
        let (cb_b, seen_b) = recording_callback();
        let debounce_a = Debounce::new(cb_a, 10);
        let debounce_b = Debounce::new(cb_b, 10);
        debounce_a.emit(1);
        debounce_b.emit(2);
        debounce_a.cancel();
        TimeoutFuture::new(50).await;
        assert!(seen_a.borrow().is_empty());
        assert_eq!(*seen_b.borrow(), vec![2]);
    }
}
