use crate::core::env_map::{EnvCube, CUBE_FACES};
use wgpu;

pub(crate) struct EnvironmentResources {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) max_lod: f32,
}

/// Upload the prefiltered room cube with its full mip chain.
pub(crate) fn create_environment(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    cube: &EnvCube,
) -> EnvironmentResources {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("room_env"),
        size: wgpu::Extent3d {
            width: cube.face_size,
            height: cube.face_size,
            depth_or_array_layers: CUBE_FACES as u32,
        },
        mip_level_count: cube.mip_count(),
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    for (level, bytes) in cube.levels.iter().enumerate() {
        let size = cube.level_size(level as u32);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: level as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytes,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size),
                rows_per_image: Some(size),
            },
            wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: CUBE_FACES as u32,
            },
        );
    }
    let view = texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("room_env_view"),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("room_env_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    EnvironmentResources {
        texture,
        view,
        sampler,
        max_lod: cube.mip_count().saturating_sub(1) as f32,
    }
}
