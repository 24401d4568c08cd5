//! Host-driven frame loop.
//!
//! Scheduling belongs to the host (`requestAnimationFrame` on the web, the
//! winit event loop natively). Each time the host fires, it reads the clock
//! and calls [`run_frame`], which ticks the scene and renders exactly once.

use crate::input::InputState;
use crate::scene::Scene;
use instant::Instant;

/// Monotonic seconds since construction.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Whatever draws a [`Scene`]; the GPU renderer in production, a recorder
/// in tests.
pub trait FrameSink {
    type Error;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Tick `scene` to elapsed time `t` and hand it to `sink` once.
pub fn run_frame<S: FrameSink + ?Sized>(
    scene: &mut Scene,
    t: f32,
    input: &InputState,
    sink: &mut S,
) -> Result<(), S::Error> {
    scene.tick(t, input);
    sink.render(scene)
}
