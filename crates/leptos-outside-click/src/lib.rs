//! Leptos Outside-Click Utilities
//!
//! Scoped document-level mousedown subscription for dismissing popovers.
//! The listener is detached when the subscription drops, so handlers do
//! not leak across component mounts.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A document-level `mousedown` listener bound to one anchor element.
///
/// Fires `on_outside` whenever the event target is not contained in the
/// anchor. Clicks on the anchor itself or any of its descendants are
/// ignored. Dropping the subscription removes the listener.
pub struct OutsideClickSubscription {
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
    attached: bool,
}

impl OutsideClickSubscription {
    /// Install the listener on `document`.
    ///
    /// The anchor is read through a `NodeRef` so attachment can happen
    /// before the node is mounted; events arriving while the node is
    /// absent are ignored.
    pub fn attach(anchor: NodeRef<Div>, on_outside: impl Fn() + 'static) -> Self {
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let Some(el) = anchor.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| el.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                on_outside();
            }
        });

        let mut attached = false;
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            attached = doc
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .is_ok();
        }
        Self { closure, attached }
    }

    /// Remove the listener. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc
                .remove_event_listener_with_callback("mousedown", self.closure.as_ref().unchecked_ref());
        }
        self.attached = false;
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach an outside-click subscription for the lifetime of the current
/// reactive owner. The listener is detached on cleanup.
pub fn use_outside_click(anchor: NodeRef<Div>, on_outside: impl Fn() + 'static) {
    let sub = StoredValue::new_local(Some(OutsideClickSubscription::attach(anchor, on_outside)));
    on_cleanup(move || {
        sub.update_value(|s| {
            s.take();
        });
    });
}
