//! Transient user notifications

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::NOTIFY_DISMISS_MS;

/// Global notification slot. One message at a time; a new message replaces
/// the current one and restarts the dismiss timer.
#[derive(Clone, Copy)]
pub struct NotifyContext {
    pub message: RwSignal<Option<String>>,
    seq: StoredValue<u64>,
}

impl NotifyContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    /// Show a transient message, auto-dismissed after [`NOTIFY_DISMISS_MS`].
    pub fn notify(&self, text: impl Into<String>) {
        let ticket = self.seq.get_value() + 1;
        self.seq.set_value(ticket);
        self.message.set(Some(text.into()));

        let message = self.message;
        let seq = self.seq;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTIFY_DISMISS_MS).await;
            // a newer notification owns the slot
            if seq.get_value() == ticket {
                message.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

pub fn provide_notify_context() -> NotifyContext {
    let context = NotifyContext::new();
    provide_context(context);
    context
}

pub fn use_notify_context() -> NotifyContext {
    expect_context::<NotifyContext>()
}
