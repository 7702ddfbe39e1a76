//! Cancellable periodic refresh tied to page visibility.
//!
//! # Design
//! - The interval stops while the document is hidden and restarts on the
//!   next `visibilitychange`, with an immediate tick so a returning tab
//!   never shows a stale list for a full period.
//! - Dropping the handle cancels both the interval and the listener.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::document;
use gloo_timers::callback::Interval;
use yew::Callback;

pub(crate) struct PollHandle {
    _interval: Rc<RefCell<Option<Interval>>>,
    _visibility: EventListener,
}

/// Start ticking `tick` every `period_ms` while the document is visible.
pub(crate) fn start(period_ms: u32, tick: Callback<()>) -> PollHandle {
    let slot = Rc::new(RefCell::new(None));
    spawn_interval(period_ms, &tick, &slot);
    let visibility = EventListener::new(&document(), "visibilitychange", {
        let slot = slot.clone();
        move |_| {
            if document().hidden() {
                slot.borrow_mut().take();
            } else {
                let stopped = slot.borrow().is_none();
                if stopped {
                    tick.emit(());
                    spawn_interval(period_ms, &tick, &slot);
                }
            }
        }
    });
    PollHandle {
        _interval: slot,
        _visibility: visibility,
    }
}

fn spawn_interval(period_ms: u32, tick: &Callback<()>, slot: &Rc<RefCell<Option<Interval>>>) {
    let tick = tick.clone();
    *slot.borrow_mut() = Some(Interval::new(period_ms, move || tick.emit(())));
}
