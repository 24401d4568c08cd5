/// Host window size in CSS (logical) pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            css_width: 1280.0,
            css_height: 720.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn pixel_ratio_capped(&self, cap: f32) -> f32 {
        self.device_pixel_ratio.min(cap)
    }

    /// Width over height. Not guarded against a zero height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.css_width / self.css_height
    }

    /// Framebuffer size at the capped pixel ratio, at least 1x1.
    pub fn backing_size(&self, cap: f32) -> (u32, u32) {
        let pr = self.pixel_ratio_capped(cap);
        let w = (self.css_width * pr) as u32;
        let h = (self.css_height * pr) as u32;
        (w.max(1), h.max(1))
    }
}
