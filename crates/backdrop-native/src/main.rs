use backdrop_core::{run_frame, Clock, InputState, Scene, SceneConfig, Viewport};
use backdrop_render::{GpuState, RendererOptions};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

const TITLE: &str = "Birthday Backdrop (native)";
const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;
/// The desktop window has no page behind it; the wheel scrolls a virtual
/// one this many viewports tall.
const VIRTUAL_PAGE_SCREENS: f32 = 3.0;
const WHEEL_LINE_PX: f32 = 40.0;
const SEED_VAR: &str = "BACKDROP_SEED";
const LOG_VAR: &str = "RUST_LOG";

/// Logger settings read from `filter_var`, falling back to `info`.
fn log_env(filter_var: &'static str) -> env_logger::Env<'static> {
    env_logger::Env::new().filter_or(filter_var, "info")
}

fn config_from_env() -> SceneConfig {
    let config = SceneConfig::default();
    let Ok(raw) = std::env::var(SEED_VAR) else {
        return config;
    };
    match raw.trim().parse::<u64>() {
        Ok(seed) => {
            log::info!("seeding scene from {}={}", SEED_VAR, seed);
            config.with_seed(seed)
        }
        Err(e) => {
            log::warn!("ignoring {}={:?}: {}", SEED_VAR, raw, e);
            config
        }
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let scale = window.scale_factor() as f32;
    let size = window.inner_size();
    Viewport::new(size.width as f32 / scale, size.height as f32 / scale, scale)
}

/// Wheel delta in logical pixels, positive scrolling down the page.
fn wheel_pixels(delta: MouseScrollDelta, scale: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(p) => -(p.y as f32) / scale,
    }
}

/// Scroll the virtual page by `dy`, keeping the offset inside the page.
fn scroll_virtual_page(input: &mut InputState, dy: f32, viewport_height: f32) {
    let page_height = viewport_height * VIRTUAL_PAGE_SCREENS;
    let max_scroll = (page_height - viewport_height).max(0.0);
    let scroll_y = (input.scroll_y + dy).clamp(0.0, max_scroll);
    input.set_scroll(scroll_y, page_height, viewport_height);
}

/// Surface size in physical pixels at the scene's capped pixel ratio.
fn surface_size(window: &Window, cap: f32) -> PhysicalSize<u32> {
    let (w, h) = viewport_of(window).backing_size(cap);
    PhysicalSize::new(w, h)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(log_env(LOG_VAR)).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let config = config_from_env();
    let cap = config.pixel_ratio_cap;
    let mut scene = Scene::new(&config, viewport_of(&window))?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let size = surface_size(&window, cap);
    let mut gpu = pollster::block_on(GpuState::new(
        &instance,
        surface,
        size.width,
        size.height,
        &scene,
        RendererOptions::native(),
    ))?;

    let mut input = InputState::default();
    scroll_virtual_page(&mut input, 0.0, viewport_of(&window).css_height);
    let clock = Clock::new();
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                let viewport = viewport_of(&window);
                scene.resize(viewport);
                let size = surface_size(&window, cap);
                gpu.resize_if_needed(size.width, size.height);
                // Keep the scroll offset inside the resized page.
                scroll_virtual_page(&mut input, 0.0, viewport.css_height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                input.set_pointer(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let viewport = viewport_of(&window);
                let dy = wheel_pixels(delta, viewport.device_pixel_ratio);
                scroll_virtual_page(&mut input, dy, viewport.css_height);
            }
            _ => {}
        },
        Event::AboutToWait => {
            match run_frame(&mut scene, clock.elapsed_secs(), &input, &mut gpu) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory; exiting");
                    elwt.exit();
                }
                Err(_) => {}
            }
            window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
