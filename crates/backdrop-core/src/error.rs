use lyon::tessellation::TessellationError;
use thiserror::Error;

/// Rejected [`SceneConfig`](crate::SceneConfig) values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("pixel ratio cap must be >= 1.0, got {0}")]
    PixelRatioCap(f32),
    #[error("tint list is empty")]
    NoTints,
}

/// Failure to build a [`Scene`](crate::Scene).
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("heart outline failed to tessellate: {0:?}")]
    Tessellation(TessellationError),
}

impl From<TessellationError> for SceneError {
    fn from(e: TessellationError) -> Self {
        SceneError::Tessellation(e)
    }
}
