//! Viewport width observation
//!
//! One shared `resize` listener feeds a width signal consumed by any number
//! of components. The listener attaches when the first consumer subscribes
//! and detaches when the scope of the last one is cleaned up.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

struct ViewportState {
    width: RwSignal<f64>,
    subscribers: usize,
    on_resize: Closure<dyn FnMut()>,
}

thread_local! {
    static VIEWPORT: RefCell<Option<ViewportState>> = const { RefCell::new(None) };
}

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Subscribe to the viewport width. Reads 0 until the first measurement.
pub fn use_viewport_width() -> Signal<f64> {
    let width = VIEWPORT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let state = slot.get_or_insert_with(|| {
            let width = RwSignal::new(0.0);
            let on_resize = Closure::wrap(Box::new(move || {
                width.set(current_width());
            }) as Box<dyn FnMut()>);
            if let Some(window) = web_sys::window() {
                if let Err(err) = window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                {
                    log::warn!("failed to attach resize listener: {err:?}");
                }
            }
            width.set(current_width());
            ViewportState {
                width,
                subscribers: 0,
                on_resize,
            }
        });
        state.subscribers += 1;
        state.width
    });

    on_cleanup(unsubscribe);

    width.into()
}

fn unsubscribe() {
    VIEWPORT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let last_one_out = match slot.as_mut() {
            Some(state) => {
                state.subscribers = state.subscribers.saturating_sub(1);
                state.subscribers == 0
            }
            None => false,
        };
        if last_one_out {
            if let Some(state) = slot.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        state.on_resize.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });
}
