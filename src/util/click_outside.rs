//! "Click outside to close" for popover menus.
//!
//! SYSTEM CONTEXT
//! ==============
//! A window-level `mousedown` listener exists only while the popover is open.
//! It is acquired when the menu opens and released when it closes or the
//! owning component unmounts. Release happens in `Drop`, so every exit path
//! removes the listener.

#[cfg(test)]
#[path = "click_outside_test.rs"]
mod click_outside_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Holds the listener handle while the popover is open.
#[derive(Debug)]
pub struct ListenerScope<H> {
    handle: Option<H>,
}

impl<H> Default for ListenerScope<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> ListenerScope<H> {
    /// Bring the scope in line with `open`: acquire on open, drop on close.
    /// Repeated calls with the same state do nothing.
    pub fn sync(&mut self, open: bool, acquire: impl FnOnce() -> H) {
        match (open, self.handle.is_some()) {
            (true, false) => self.handle = Some(acquire()),
            (false, true) => self.release(),
            _ => {}
        }
    }

    pub fn release(&mut self) {
        self.handle = None;
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(feature = "hydrate")]
struct WindowMousedown(Option<WindowListenerHandle>);

#[cfg(feature = "hydrate")]
impl WindowMousedown {
    fn install<F>(region: NodeRef<Div>, on_outside: F) -> Self
    where
        F: Fn() + 'static,
    {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !event_within(region, &ev) {
                on_outside();
            }
        });
        Self(Some(handle))
    }
}

#[cfg(feature = "hydrate")]
impl Drop for WindowMousedown {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

#[cfg(feature = "hydrate")]
fn event_within(region: NodeRef<Div>, ev: &web_sys::MouseEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(el) = region.get_untracked() else {
        return false;
    };
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| el.contains(Some(&node)))
}

/// Call `on_outside` for every pointer press outside `region` while `open`
/// is true.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn install_click_outside<F>(region: NodeRef<Div>, open: Signal<bool>, on_outside: F)
where
    F: Fn() + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let scope = StoredValue::new_local(ListenerScope::<WindowMousedown>::default());
        Effect::new(move || {
            let is_open = open.get();
            let on_outside = on_outside.clone();
            scope.update_value(|s| s.sync(is_open, || WindowMousedown::install(region, on_outside)));
        });
        on_cleanup(move || {
            scope.try_update_value(ListenerScope::release);
        });
    }
}
