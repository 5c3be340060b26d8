//! Browser scroll glue: section offsets, the passive scroll listener, and
//! smooth scrolling to a section.

use dioxus::prelude::*;
use ijf_content::navigation::NAV_LINKS;
use ijf_content::selection::PageSelection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn section_element(anchor: &str) -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(anchor)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// `offsetTop` of each section in `NAV_LINKS` order; `None` for sections
/// not (yet) in the document.
pub fn section_tops() -> Vec<Option<f64>> {
    NAV_LINKS
        .iter()
        .map(|link| section_element(link.anchor).map(|el| f64::from(el.offset_top())))
        .collect()
}

/// Smoothly scroll the section with DOM id `anchor` into view.
/// Returns false when the element is missing.
pub fn scroll_to_section(anchor: &str) -> bool {
    match section_element(anchor) {
        Some(el) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::warn!("No section with id '{}' to scroll to", anchor);
            false
        }
    }
}

/// Re-run the scroll-spy against the live document and update the
/// highlight if it moved.
pub fn refresh_scroll_spy(mut selection: Signal<PageSelection>) {
    let tops = section_tops();
    let mut next = *selection.peek();
    if next.apply_scroll(&tops, scroll_y()) {
        log::debug!("Scroll-spy moved to #{}", next.active_nav());
        selection.set(next);
    }
}

/// A passive `scroll` listener on `window`, removed again on drop.
pub struct ScrollListener {
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Register `on_scroll` as a passive window scroll handler.
    pub fn attach(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::error!("Failed to register scroll listener: {:?}", e);
            return None;
        }
        Some(Self { closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}
