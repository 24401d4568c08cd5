use super::helpers;

/// Multisampled color target resolved into the swapchain each frame.
///
/// Absent when the renderer runs with a single sample; passes then draw
/// straight into the surface texture.
pub(crate) struct MsaaTarget {
    pub(crate) samples: u32,
    pub(crate) view: Option<wgpu::TextureView>,
    _tex: Option<wgpu::Texture>,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        samples: u32,
    ) -> Self {
        let mut target = Self {
            samples,
            view: None,
            _tex: None,
        };
        target.recreate(device, format, width, height);
        target
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        if self.samples <= 1 {
            return;
        }
        let (tex, view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width.max(1),
            height.max(1),
            format,
            self.samples,
        );
        self._tex = Some(tex);
        self.view = Some(view);
    }

    /// `(attachment view, resolve target)` for a frame rendering to `frame`.
    pub(crate) fn attachments<'a>(
        &'a self,
        frame: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.view {
            Some(msaa) => (msaa, Some(frame)),
            None => (frame, None),
        }
    }
}
