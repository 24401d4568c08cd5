#![cfg(target_arch = "wasm32")]
use backdrop_core::{Clock, InputState, Scene, SceneConfig};
use backdrop_render::{GpuState, RendererOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod page;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page chrome does not depend on the GPU; wire it first.
    page::wire_video_fallback(&document);
    page::wire_section_reveal(&document)?;
    log::info!("{}", GREETING);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = SceneConfig::default();
    let viewport = dom::viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport, config.pixel_ratio_cap);
    let scene = Scene::new(&config, viewport)?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let gpu = GpuState::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        &scene,
        RendererOptions::web(),
    )
    .await?;

    let input = Rc::new(RefCell::new(InputState::default()));
    events::wire_pointer(&document, input.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        input,
        clock: Clock::new(),
        canvas,
    }));
    events::wire_resize(&window, frame_ctx.clone(), config.pixel_ratio_cap);
    frame::start_loop(frame_ctx);
    Ok(())
}
