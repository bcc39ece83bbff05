use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::{
    scroll::{intercept, AnchorAction},
    state::ViewState,
};

const IN_PAGE_ANCHOR: &str = "a[href^='#']";

fn offset_top(id: &str) -> Option<f64> {
    let el = document().get_element_by_id(id)?;
    let el = el.dyn_into::<HtmlElement>().ok()?;
    Some(el.offset_top() as f64)
}

// Clicks usually land on a child of the anchor (icon, span), so walk up.
fn clicked_href(ev: &MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest(IN_PAGE_ANCHOR).ok()??;
    anchor.get_attribute("href")
}

fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Turns clicks on `#fragment` links into smooth scrolls.
///
/// A single listener sits on the document, so anchors rendered later are
/// covered too. It is removed when the calling component's owner is cleaned
/// up; remounting the page registers exactly one fresh listener.
pub fn use_anchor_scrolling() {
    let _ = use_event_listener(use_document(), ev::click, move |ev: MouseEvent| {
        let href = clicked_href(&ev);
        let action = intercept(href.as_deref(), &offset_top);
        if action.prevents_default() {
            ev.prevent_default();
        }
        match action {
            AnchorAction::ScrollTo(top) => {
                log::debug!("scrolling to {:?} at {top}", href);
                smooth_scroll_to(top);
            }
            AnchorAction::Suppress => log::debug!("no scroll target for {:?}", href),
            AnchorAction::Ignore => {}
        }
    });
}

/// Feeds pointer moves into the view state for the background glow.
pub fn use_cursor_tracking(state: RwSignal<ViewState>) {
    let _ = use_event_listener(use_document(), ev::mousemove, move |ev: MouseEvent| {
        state.update(|s| s.update_cursor(ev.client_x(), ev.client_y()));
    });
}
