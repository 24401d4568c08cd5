use glam::Vec2;

/// Latest pointer and scroll readings.
///
/// Event handlers overwrite it whenever the host reports input; the frame
/// tick reads whatever is there. Nothing is queued.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    /// Pointer in normalised device-ish coordinates, `[-1, 1]` on both axes,
    /// +y pointing down the page.
    pub pointer: Vec2,
    pub scroll_y: f32,
    pub page_height: f32,
    pub viewport_height: f32,
}

impl InputState {
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.pointer = normalize_pointer(client_x, client_y, width, height);
    }

    pub fn set_scroll(&mut self, scroll_y: f32, page_height: f32, viewport_height: f32) {
        self.scroll_y = scroll_y;
        self.page_height = page_height;
        self.viewport_height = viewport_height;
    }

    #[inline]
    pub fn scroll_progress(&self) -> f32 {
        scroll_progress(self.scroll_y, self.page_height, self.viewport_height)
    }
}

#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(client_x / width * 2.0 - 1.0, client_y / height * 2.0 - 1.0)
}

/// Fraction of the scrollable distance covered, `scroll_y / (page - viewport)`.
///
/// Not clamped: a stale page height can push it outside `[0, 1]`. When the
/// page does not scroll at all (non-positive range) the progress is 0.
#[inline]
pub fn scroll_progress(scroll_y: f32, page_height: f32, viewport_height: f32) -> f32 {
    let range = page_height - viewport_height;
    if range > 0.0 {
        scroll_y / range
    } else {
        0.0
    }
}
