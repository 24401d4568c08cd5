use backdrop_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current window size in CSS pixels plus the raw device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
}

/// Match the canvas backing store to its CSS size at the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport, cap: f32) {
    let (w_px, h_px) = viewport.backing_size(cap);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

/// `(scroll_y, page_height, viewport_height)` as read once per frame.
pub fn scroll_metrics(window: &web::Window) -> (f32, f32, f32) {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let page_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f32)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    (scroll_y, page_height, viewport_height)
}

pub fn html_element(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
