use crate::dom;
use backdrop_core::{run_frame, Clock, InputState, Scene};
use backdrop_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub gpu: GpuState<'a>,
    pub input: Rc<RefCell<InputState>>,
    pub clock: Clock,
    pub canvas: web::HtmlCanvasElement,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        // Page height changes with layout (video load, resize) without a
        // scroll event, so the metrics are read fresh every frame.
        if let Some(window) = web::window() {
            let (scroll_y, page_height, viewport_height) = dom::scroll_metrics(&window);
            self.input
                .borrow_mut()
                .set_scroll(scroll_y, page_height, viewport_height);
        }

        let t = self.clock.elapsed_secs();
        let input = *self.input.borrow();
        match run_frame(&mut self.scene, t, &input, &mut self.gpu) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] surface out of memory");
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::warn!("[frame] surface error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
