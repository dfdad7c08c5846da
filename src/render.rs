use crate::core::constants::{
    AMBIENT_COLOR, AMBIENT_INTENSITY, BACK_LIGHT_ANGLE, BACK_LIGHT_COLOR, BACK_LIGHT_INTENSITY,
    BACK_LIGHT_POSITION, FOG_DENSITY, KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION,
    TONE_MAPPING_EXPOSURE,
};
use crate::core::env_map::room_environment;
use crate::core::model::ModelData;
use crate::core::touch::RenderTier;
use crate::core::viewer::{color_from_hex, ViewerState};
use glam::Vec3;
use web_sys as web;

mod environment;
mod helpers;
mod mesh;
mod shadow;
mod targets;

use environment::{create_environment, EnvironmentResources};
use mesh::{ModelBuffers, ModelUniforms};
use shadow::{ShadowResources, ShadowUniforms};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_color: [f32; 4],
    base_color: [f32; 4],
    material: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    mesh_pipeline: wgpu::RenderPipeline,
    model_bgl: wgpu::BindGroupLayout,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    shadow: ShadowResources,
    environment: EnvironmentResources,
    model: Option<ModelBuffers>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, tier: RenderTier) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        // falls back to WebGL2 when navigator.gpu exists but yields no adapter
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 adapters reject the WebGPU default limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // page shows through where the model is not drawn
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if tier.antialias()
            && adapter
                .get_texture_format_features(format)
                .flags
                .sample_count_supported(tier.sample_count)
        {
            tier.sample_count
        } else {
            1
        };
        let targets = RenderTargets::new(&device, width, height, sample_count, format);

        let model_bgl = mesh::create_model_bgl(&device);
        let scene_bgl = mesh::create_scene_bgl(&device);
        let mesh_pipeline =
            mesh::create_mesh_pipeline(&device, &scene_bgl, &model_bgl, format, sample_count);
        let shadow = shadow::create_shadow_resources(&device, &model_bgl, tier.shadow_map_size);
        let environment =
            create_environment(&device, &queue, &room_environment(tier.env_face_size()));

        let scene_uniform_buffer =
            helpers::uniform_buffer::<SceneUniforms>(&device, "scene_uniforms");
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&environment.view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&environment.sampler),
                },
            ],
        });
        queue.write_buffer(
            &shadow.uniform_buffer,
            0,
            bytemuck::bytes_of(&ShadowUniforms {
                light_view_proj: helpers::mat4(shadow::light_view_proj()),
            }),
        );
        log::info!(
            "[viewer] gpu ready {}x{} format={:?} msaa={} shadow={} env={}",
            width,
            height,
            format,
            sample_count,
            shadow.size,
            environment.texture.width()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            mesh_pipeline,
            model_bgl,
            scene_uniform_buffer,
            scene_bind_group,
            shadow,
            environment,
            model: None,
            width,
            height,
        })
    }

    pub fn upload_model(&mut self, data: &ModelData) {
        self.model = Some(ModelBuffers::new(&self.device, &self.model_bgl, data));
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    fn scene_uniforms(&self, state: &ViewerState) -> SceneUniforms {
        let camera = &state.camera;
        let material = &state.material;
        let key_dir = Vec3::from(KEY_LIGHT_POSITION).normalize();
        let spot_pos = Vec3::from(BACK_LIGHT_POSITION);
        let spot_dir = (Vec3::ZERO - spot_pos).normalize();
        SceneUniforms {
            view_proj: helpers::mat4(camera.view_projection()),
            view: helpers::mat4(camera.view_matrix()),
            light_view_proj: helpers::mat4(shadow::light_view_proj()),
            camera_pos: helpers::vec4(camera.eye, TONE_MAPPING_EXPOSURE),
            fog: helpers::vec4(state.fog_color, FOG_DENSITY),
            ambient: helpers::vec4(color_from_hex(AMBIENT_COLOR) * AMBIENT_INTENSITY, 0.0),
            key_dir: helpers::vec4(key_dir, 0.0),
            key_color: helpers::vec4(
                color_from_hex(KEY_LIGHT_COLOR) * KEY_LIGHT_INTENSITY,
                1.0 / self.shadow.size as f32,
            ),
            spot_pos: helpers::vec4(spot_pos, 0.0),
            spot_dir: helpers::vec4(spot_dir, BACK_LIGHT_ANGLE.cos()),
            spot_color: helpers::vec4(color_from_hex(BACK_LIGHT_COLOR) * BACK_LIGHT_INTENSITY, 0.0),
            base_color: helpers::vec4(material.base_color, self.environment.max_lod),
            material: [
                material.metalness,
                material.roughness,
                material.env_intensity,
                if material.receive_shadow { 1.0 } else { 0.0 },
            ],
        }
    }

    pub fn render(&mut self, state: &ViewerState) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = self.scene_uniforms(state);
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        // both halves of the load must be present before drawing
        let drawable = match (&self.model, &state.model) {
            (Some(buffers), Some(pose)) => {
                self.queue.write_buffer(
                    &buffers.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&ModelUniforms {
                        matrix: helpers::mat4(pose.matrix()),
                    }),
                );
                Some(buffers)
            }
            _ => None,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let (Some(buffers), true) = (drawable, state.material.cast_shadow) {
                pass.set_pipeline(&self.shadow.pipeline);
                pass.set_bind_group(0, &self.shadow.bind_group, &[]);
                buffers.draw(&mut pass);
            }
        }
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(self.targets.color_attachment(&view))],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(buffers) = drawable {
                pass.set_pipeline(&self.mesh_pipeline);
                pass.set_bind_group(0, &self.scene_bind_group, &[]);
                buffers.draw(&mut pass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
