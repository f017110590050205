use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::scroll::{ScrollMetrics, ScrollState, ScrollTracker, SectionBounds};
use crate::sections::Section;

#[derive(Debug, Clone, Copy)]
pub struct ScrollSignals {
    pub progress: Signal<f64>,
    pub active: Signal<Option<&'static str>>,
}

/// Track page progress and the active section. The window listener is
/// removed when the calling component is disposed.
pub fn use_scroll_tracker(sections: &'static [Section]) -> ScrollSignals {
    let tracker = StoredValue::new(ScrollTracker::new());
    let state = RwSignal::new(ScrollState::default());

    let recompute = move || {
        let Some(metrics) = read_metrics() else {
            return;
        };
        if let Some(next) = tracker.try_update_value(|t| t.observe(metrics, sections, measure)) {
            state.set(next);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| recompute());
    // effects only run in the browser, once the sections are in the DOM
    Effect::new(move |_| recompute());

    let active = Memo::new(move |_| state.with(|s| s.active));
    ScrollSignals {
        progress: Signal::derive(move || state.with(|s| s.progress)),
        active: active.into(),
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section with id '{id}'");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollMetrics::new(
        offset,
        f64::from(document_height),
        viewport_height,
    ))
}

fn measure(section: &Section) -> Option<SectionBounds> {
    let el = web_sys::window()?
        .document()?
        .get_element_by_id(section.id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        f64::from(el.offset_top()),
        f64::from(el.offset_height()),
    ))
}
