use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// On window resize: resync the canvas backing store and push the new
/// viewport into the scene. The surface follows the canvas on the next frame.
pub fn wire_resize(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext<'static>>>, cap: f32) {
    let window_cb = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let viewport = dom::viewport(&window_cb);
        let mut ctx = frame_ctx.borrow_mut();
        dom::sync_canvas_backing_size(&ctx.canvas, &viewport, cap);
        ctx.scene.resize(viewport);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
