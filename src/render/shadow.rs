use super::helpers;
use crate::core::constants::{
    KEY_LIGHT_POSITION, KEY_SHADOW_EXTENT, KEY_SHADOW_FAR, KEY_SHADOW_NEAR,
};
use glam::{Mat4, Vec3};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShadowUniforms {
    pub(crate) light_view_proj: [[f32; 4]; 4],
}

/// Depth map rendered from the key light plus the pass that fills it.
pub(crate) struct ShadowResources {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) size: u32,
}

/// Orthographic projection of the key light looking at the origin.
pub(crate) fn light_view_proj() -> Mat4 {
    let eye = Vec3::from(KEY_LIGHT_POSITION);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let e = KEY_SHADOW_EXTENT;
    let proj = Mat4::orthographic_rh(-e, e, -e, e, KEY_SHADOW_NEAR, KEY_SHADOW_FAR);
    proj * view
}

pub(crate) fn create_shadow_resources(
    device: &wgpu::Device,
    model_bgl: &wgpu::BindGroupLayout,
    size: u32,
) -> ShadowResources {
    let (texture, view) = helpers::create_render_texture(
        device,
        "shadow_map",
        size,
        size,
        1,
        helpers::DEPTH_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("shadow_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        compare: Some(wgpu::CompareFunction::LessEqual),
        ..Default::default()
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("shadow_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SHADOW_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("shadow_bgl"),
        entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("shadow_pl"),
        bind_group_layouts: &[&bgl, model_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("shadow_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_shadow"),
            buffers: &[helpers::vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState {
                constant: 2,
                slope_scale: 2.0,
                clamp: 0.0,
            },
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: None,
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer::<ShadowUniforms>(device, "shadow_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("shadow_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    ShadowResources {
        texture,
        view,
        sampler,
        pipeline,
        uniform_buffer,
        bind_group,
        size,
    }
}
