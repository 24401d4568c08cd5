pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod particles;
pub mod path;
pub mod reveal;
pub mod scene;
pub mod shapes;
pub mod viewport;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");

pub use camera::CameraRig;
pub use config::SceneConfig;
pub use constants::*;
pub use error::{ConfigError, SceneError};
pub use frame::{run_frame, Clock, FrameSink};
pub use input::InputState;
pub use reveal::RevealTracker;
pub use scene::Scene;
pub use shapes::{MaterialStyle, MeshId};
pub use viewport::Viewport;
