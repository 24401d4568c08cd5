use crate::constants::{PARTICLE_COUNT, PIXEL_RATIO_CAP};
use crate::error::ConfigError;
use crate::palette::{Swatch, TINTS};

/// Build-time knobs for a [`Scene`](crate::Scene).
///
/// `seed: None` draws from OS entropy; a fixed seed reproduces the exact
/// particle cloud and shape parameters.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub pixel_ratio_cap: f32,
    pub tints: Vec<Swatch>,
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            pixel_ratio_cap: PIXEL_RATIO_CAP,
            tints: TINTS.to_vec(),
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.pixel_ratio_cap >= 1.0) {
            return Err(ConfigError::PixelRatioCap(self.pixel_ratio_cap));
        }
        if self.tints.is_empty() {
            return Err(ConfigError::NoTints);
        }
        Ok(())
    }
}
