use super::helpers;
use wgpu;

/// Per-size attachments for the main pass.
///
/// - `msaa_*` is the multisampled color buffer resolved into the surface;
///   absent when the tier renders without antialiasing.
/// - `depth_*` matches the color sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: Option<wgpu::Texture>,
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    sample_count: u32,
    color_format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let (depth_tex, depth_view) = helpers::create_render_texture(
            device,
            "depth_tex",
            width,
            height,
            sample_count,
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let mut targets = Self {
            msaa_tex: None,
            msaa_view: None,
            depth_tex,
            depth_view,
            sample_count,
            color_format,
        };
        targets.recreate_color(device, width, height);
        targets
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.depth_tex, self.depth_view) = helpers::create_render_texture(
            device,
            "depth_tex",
            width,
            height,
            self.sample_count,
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.recreate_color(device, width, height);
    }

    fn recreate_color(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.sample_count <= 1 {
            self.msaa_tex = None;
            self.msaa_view = None;
            return;
        }
        let (tex, view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            self.sample_count,
            self.color_format,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.msaa_tex = Some(tex);
        self.msaa_view = Some(view);
    }

    /// Color attachment writing into `surface_view`, resolving MSAA if used.
    pub(crate) fn color_attachment<'v>(
        &'v self,
        surface_view: &'v wgpu::TextureView,
    ) -> wgpu::RenderPassColorAttachment<'v> {
        let ops = wgpu::Operations {
            load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
            store: wgpu::StoreOp::Store,
        };
        match &self.msaa_view {
            Some(msaa) => wgpu::RenderPassColorAttachment {
                view: msaa,
                resolve_target: Some(surface_view),
                ops: wgpu::Operations {
                    store: wgpu::StoreOp::Discard,
                    ..ops
                },
            },
            None => wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops,
            },
        }
    }
}
