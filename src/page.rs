//! Page chrome around the canvas: the video fallback and section fade-ins.

use crate::constants::*;
use crate::dom;
use backdrop_core::RevealTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Toggle the placeholder on the video's `loadeddata` and `error` signals.
pub fn wire_video_fallback(document: &web::Document) {
    let Some(video) = document.get_element_by_id(VIDEO_ID) else {
        log::warn!("[page] missing #{}", VIDEO_ID);
        return;
    };
    let placeholder = document
        .query_selector(PLACEHOLDER_SELECTOR)
        .ok()
        .flatten()
        .and_then(dom::html_element);
    if placeholder.is_none() {
        log::warn!("[page] missing {}", PLACEHOLDER_SELECTOR);
    }

    for (event, display) in [("loadeddata", PLACEHOLDER_HIDDEN), ("error", PLACEHOLDER_SHOWN)] {
        let placeholder = placeholder.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(p) = &placeholder {
                dom::set_style(p, "display", display);
            }
            if display == PLACEHOLDER_SHOWN {
                log::warn!("[page] video failed to load; showing placeholder");
            }
        }) as Box<dyn FnMut()>);
        _ = video.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn hide_section(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", SECTION_HIDDEN_OPACITY);
    dom::set_style(el, "transform", SECTION_HIDDEN_TRANSFORM);
    dom::set_style(el, "transition", SECTION_TRANSITION);
}

fn show_section(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", SECTION_SHOWN_OPACITY);
    dom::set_style(el, "transform", SECTION_SHOWN_TRANSFORM);
}

/// Hide every `section`, then fade each one in the first time enough of it
/// scrolls into view. The hero is shown straight away.
pub fn wire_section_reveal(document: &web::Document) -> anyhow::Result<()> {
    let list = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let sections: Vec<web::HtmlElement> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect();
    for s in &sections {
        hide_section(s);
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(sections.len())));
    let sections = Rc::new(sections);

    let tracker_cb = tracker.clone();
    let sections_cb = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = sections_cb.iter().position(|s| {
                    let el: &web::Element = s.as_ref();
                    *el == target
                }) else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio() as f32
                } else {
                    0.0
                };
                if tracker_cb.borrow_mut().observe(index, ratio) {
                    log::debug!("[page] reveal section {}", index);
                    show_section(&sections_cb[index]);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tracker.borrow().threshold() as f64));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let hero = document
        .query_selector(HERO_SELECTOR)
        .ok()
        .flatten()
        .and_then(dom::html_element);
    for (i, s) in sections.iter().enumerate() {
        let is_hero = hero.as_ref().is_some_and(|h| h == s);
        if is_hero {
            tracker.borrow_mut().force(i);
            continue;
        }
        observer.observe(s);
    }
    match &hero {
        Some(h) => show_section(h),
        None => log::warn!("[page] missing {}", HERO_SELECTOR),
    }
    log::info!(
        "[page] observing {} section(s), threshold={}",
        tracker.borrow().pending(),
        tracker.borrow().threshold()
    );
    Ok(())
}
