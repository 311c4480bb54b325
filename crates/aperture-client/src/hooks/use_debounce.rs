//! Debounced callback hook.

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::util::Debounce;

/// Wrap `inner` in a trailing-edge debounce window of `delay_ms`.
///
/// The returned callback is backed by one [`Debounce`] per call site that
/// survives re-renders, so a render mid-burst neither resets nor drops
/// the pending flush; the most recent `inner` is always the delivery
/// target. Any pending flush is cancelled when the component unmounts.
#[hook]
pub fn use_debounce<T: 'static>(inner: Callback<T>, delay_ms: u32) -> Callback<T> {
    let latest: Rc<RefCell<Callback<T>>> = use_mut_ref(|| inner.clone());
    *latest.borrow_mut() = inner;

    let debounce = {
        let latest = latest.clone();
        use_memo(delay_ms, move |delay_ms| {
            let forward = Callback::from(move |value: T| latest.borrow().emit(value));
            Debounce::new(forward, *delay_ms)
        })
    };

    {
        let debounce = debounce.clone();
        use_effect_with((), move |()| move || debounce.cancel());
    }

    let debounce = debounce.clone();
    Callback::from(move |value: T| debounce.emit(value))
}
