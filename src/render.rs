//! WebGPU renderer for the page scene.
//!
//! GPU resources mirror the core [`Scene`] by node id: buffers are created the
//! first time an id is drawn and released as soon as the id leaves the scene.
//! Sphere geometry and textures are shared by cache key.

use crate::constants::{CLEAR_RGBA, MIN_POINT_SIZE_PX, WHITE_TEXEL};
use crate::model::{DecodedImage, ModelAsset};
use fnv::{FnvHashMap, FnvHashSet};
use galaxy_core::{
    CameraRig, Geometry, MeshData, MeshVertex, ModelRef, NodeId, NodeKind, PointCloud, Scene,
};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod targets;

use targets::{DepthTarget, DEPTH_FORMAT};

const POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
const MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    viewport: [f32; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniforms {
    fn new(model: Mat4, color: [f32; 4], params: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
            color,
            params,
        }
    }
}

struct ObjectGpu {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct PointsGpu {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    count: u32,
    object: ObjectGpu,
}

struct MeshGpu {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

struct SphereGpu {
    object: ObjectGpu,
    geometry: (u8, u32, u32, u32),
    texture: Option<String>,
}

struct ModelPrimitiveGpu {
    mesh: MeshGpu,
    object: ObjectGpu,
    color: [f32; 4],
    texture: Option<usize>,
}

struct ModelGpu {
    primitives: Vec<ModelPrimitiveGpu>,
    textures: Vec<Option<wgpu::BindGroup>>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white_texture: wgpu::BindGroup,

    points_pipeline: wgpu::RenderPipeline,
    mesh_pipeline: wgpu::RenderPipeline,

    points: FnvHashMap<NodeId, PointsGpu>,
    spheres: FnvHashMap<NodeId, SphereGpu>,
    geometries: FnvHashMap<(u8, u32, u32, u32), MeshGpu>,
    textures: FnvHashMap<String, wgpu::BindGroup>,
    pending_textures: FnvHashSet<String>,
    models: FnvHashMap<ModelRef, ModelGpu>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // colors and textures are authored in display space, so skip sRGB encoding
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
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
        let depth = DepthTarget::new(&device, width, height);

        let uniform_entry = |visibility| wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(MESH_WGSL.into()),
        });
        let points_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });

        let instance_attr = |attributes: &'static [wgpu::VertexAttribute]| wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes,
        };
        let points_pipeline = helpers::make_pipeline(
            &device,
            helpers::PipelineSpec {
                label: "points_pipeline",
                layout: &points_pl,
                shader: &points_shader,
                vs_entry: "vs_points",
                fs_entry: "fs_points",
                buffers: &[instance_attr(&POSITION_ATTRS), instance_attr(&COLOR_ATTRS)],
                color_format: format,
                blend: Some(helpers::ADDITIVE_BLENDING),
                depth_format: DEPTH_FORMAT,
                depth_write: false,
                cull_mode: None,
            },
        );
        let mesh_pipeline = helpers::make_pipeline(
            &device,
            helpers::PipelineSpec {
                label: "mesh_pipeline",
                layout: &mesh_pl,
                shader: &mesh_shader,
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                        2 => Float32x2
                    ],
                }],
                color_format: format,
                blend: None,
                depth_format: DEPTH_FORMAT,
                depth_write: true,
                cull_mode: Some(wgpu::Face::Back),
            },
        );

        let white_texture = texture_bind_group(
            &device,
            &queue,
            &texture_bgl,
            &sampler,
            "white_texel",
            1,
            1,
            &WHITE_TEXEL,
        );

        let [r, g, b, a] = CLEAR_RGBA;
        let state = Self {
            surface,
            device,
            queue,
            config,
            depth,
            frame_buffer,
            frame_bind_group,
            object_bgl,
            texture_bgl,
            sampler,
            white_texture,
            points_pipeline,
            mesh_pipeline,
            points: FnvHashMap::default(),
            spheres: FnvHashMap::default(),
            geometries: FnvHashMap::default(),
            textures: FnvHashMap::default(),
            pending_textures: FnvHashSet::default(),
            models: FnvHashMap::default(),
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        };
        log::info!(
            "[gpu] surface {}x{} format={:?}",
            state.width,
            state.height,
            format
        );
        Ok(state)
    }
}

impl<'a> GpuState<'a> {
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
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Drop GPU resources for nodes that left the scene and return texture
    /// paths that newly need loading.
    pub fn sync(&mut self, scene: &Scene) -> SmallVec<[String; 4]> {
        self.points.retain(|id, _| scene.contains(*id));
        self.spheres.retain(|id, _| scene.contains(*id));

        let mut requests = SmallVec::new();
        for (_, node) in scene.iter() {
            if let NodeKind::Mesh(mesh) = &node.kind {
                if let Some(path) = &mesh.material.texture {
                    if !self.textures.contains_key(path) && self.pending_textures.insert(path.clone()) {
                        requests.push(path.clone());
                    }
                }
            }
        }
        requests
    }

    /// Store a loaded texture; `None` (failed load) maps the path to white.
    pub fn install_texture(&mut self, path: String, image: Option<DecodedImage>) {
        self.pending_textures.remove(&path);
        let bind_group = match image {
            Some(img) => self.upload_texture(&path, &img),
            None => self.white_bind_group(),
        };
        self.textures.insert(path, bind_group);
    }

    pub fn install_model(&mut self, model: ModelRef, asset: ModelAsset) {
        let textures = asset
            .images
            .iter()
            .enumerate()
            .map(|(i, img)| {
                img.as_ref()
                    .map(|img| self.upload_texture(&format!("model_image_{}", i), img))
            })
            .collect();
        let primitives = asset
            .primitives
            .iter()
            .map(|p| ModelPrimitiveGpu {
                mesh: self.upload_mesh("model_mesh", &p.mesh),
                object: self.create_object("model_object"),
                color: p.base_color,
                texture: p.texture,
            })
            .collect();
        self.models.insert(model, ModelGpu { primitives, textures });
    }

    pub fn render(&mut self, scene: &Scene, rig: &CameraRig) -> Result<(), wgpu::SurfaceError> {
        self.prepare(scene, rig);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);

            // opaque meshes first so the additive sprites depth-test against them
            rpass.set_pipeline(&self.mesh_pipeline);
            for (id, node) in scene.iter() {
                match &node.kind {
                    NodeKind::Mesh(_) => {
                        let Some(sphere) = self.spheres.get(&id) else {
                            continue;
                        };
                        let Some(mesh) = self.geometries.get(&sphere.geometry) else {
                            continue;
                        };
                        let texture = sphere
                            .texture
                            .as_ref()
                            .and_then(|p| self.textures.get(p))
                            .unwrap_or(&self.white_texture);
                        rpass.set_bind_group(1, &sphere.object.bind_group, &[]);
                        rpass.set_bind_group(2, texture, &[]);
                        draw_mesh(&mut rpass, mesh);
                    }
                    NodeKind::Model(model) => {
                        let Some(gpu) = self.models.get(model) else {
                            continue;
                        };
                        for p in &gpu.primitives {
                            let texture = p
                                .texture
                                .and_then(|i| gpu.textures.get(i))
                                .and_then(|t| t.as_ref())
                                .unwrap_or(&self.white_texture);
                            rpass.set_bind_group(1, &p.object.bind_group, &[]);
                            rpass.set_bind_group(2, texture, &[]);
                            draw_mesh(&mut rpass, &p.mesh);
                        }
                    }
                    _ => {}
                }
            }

            rpass.set_pipeline(&self.points_pipeline);
            for (id, node) in scene.iter() {
                if !matches!(node.kind, NodeKind::Points(_)) {
                    continue;
                }
                let Some(points) = self.points.get(&id) else {
                    continue;
                };
                if points.count == 0 {
                    continue;
                }
                rpass.set_bind_group(1, &points.object.bind_group, &[]);
                rpass.set_vertex_buffer(0, points.positions.slice(..));
                rpass.set_vertex_buffer(1, points.colors.slice(..));
                rpass.draw(0..6, 0..points.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    /// Create missing per-node resources and write this frame's uniforms.
    fn prepare(&mut self, scene: &Scene, rig: &CameraRig) {
        let mut frame = FrameUniforms {
            view_proj: rig.view_projection().to_cols_array_2d(),
            view: rig.view_matrix().to_cols_array_2d(),
            viewport: [self.width as f32, self.height as f32, 0.0, 0.0],
            ambient: [0.0; 4],
            light_pos: [0.0; 4],
            light_color: [0.0; 4],
        };

        for (id, node) in scene.iter() {
            let model_matrix = node.transform.matrix();
            match &node.kind {
                NodeKind::AmbientLight(light) => {
                    let c = light.color.to_array();
                    for (i, ch) in c.iter().enumerate() {
                        frame.ambient[i] += ch * light.intensity;
                    }
                }
                NodeKind::PointLight(light) => {
                    let p = node.transform.position;
                    let c = Vec3::from(light.color.to_array()) * light.intensity;
                    frame.light_pos = [p.x, p.y, p.z, light.distance];
                    frame.light_color = [c.x, c.y, c.z, 1.0];
                }
                NodeKind::Points(cloud) => {
                    if !self.points.contains_key(&id) {
                        let gpu = self.upload_points(cloud);
                        self.points.insert(id, gpu);
                    }
                    if let Some(points) = self.points.get(&id) {
                        let params = [cloud.material.size, 0.0, MIN_POINT_SIZE_PX, 0.0];
                        let u = ObjectUniforms::new(model_matrix, [1.0; 4], params);
                        self.queue
                            .write_buffer(&points.object.buffer, 0, bytemuck::bytes_of(&u));
                    }
                }
                NodeKind::Mesh(mesh) => {
                    let key = mesh.geometry.cache_key();
                    if !self.geometries.contains_key(&key) {
                        let gpu = self.upload_geometry(&mesh.geometry);
                        self.geometries.insert(key, gpu);
                    }
                    if !self.spheres.contains_key(&id) {
                        let sphere = SphereGpu {
                            object: self.create_object("sphere_object"),
                            geometry: key,
                            texture: mesh.material.texture.clone(),
                        };
                        self.spheres.insert(id, sphere);
                    }
                    if let Some(sphere) = self.spheres.get(&id) {
                        let [r, g, b] = mesh.material.color.to_array();
                        let u = ObjectUniforms::new(model_matrix, [r, g, b, 1.0], [0.0, 0.0, 0.0, 1.0]);
                        self.queue
                            .write_buffer(&sphere.object.buffer, 0, bytemuck::bytes_of(&u));
                    }
                }
                NodeKind::Model(model) => {
                    if let Some(gpu) = self.models.get(model) {
                        for p in &gpu.primitives {
                            let u = ObjectUniforms::new(model_matrix, p.color, [0.0, 1.0, 0.0, 0.0]);
                            self.queue
                                .write_buffer(&p.object.buffer, 0, bytemuck::bytes_of(&u));
                        }
                    }
                }
            }
        }

        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));
    }

    fn create_object(&self, label: &str) -> ObjectGpu {
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        ObjectGpu { buffer, bind_group }
    }

    fn upload_points(&self, cloud: &PointCloud) -> PointsGpu {
        let positions = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("galaxy_positions"),
                contents: bytemuck::cast_slice(&cloud.buffer.positions),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let colors = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("galaxy_colors"),
                contents: bytemuck::cast_slice(&cloud.buffer.colors),
                usage: wgpu::BufferUsages::VERTEX,
            });
        log::debug!("[gpu] uploaded {} galaxy particles", cloud.buffer.len());
        PointsGpu {
            positions,
            colors,
            count: cloud.buffer.len() as u32,
            object: self.create_object("galaxy_object"),
        }
    }

    fn upload_geometry(&self, geometry: &Geometry) -> MeshGpu {
        self.upload_mesh("sphere_mesh", &geometry.build())
    }

    fn upload_mesh(&self, label: &str, mesh: &MeshData) -> MeshGpu {
        let vertices = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let indices = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        MeshGpu {
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn upload_texture(&self, label: &str, img: &DecodedImage) -> wgpu::BindGroup {
        texture_bind_group(
            &self.device,
            &self.queue,
            &self.texture_bgl,
            &self.sampler,
            label,
            img.width,
            img.height,
            &img.rgba,
        )
    }

    fn white_bind_group(&self) -> wgpu::BindGroup {
        texture_bind_group(
            &self.device,
            &self.queue,
            &self.texture_bgl,
            &self.sampler,
            "white_texel",
            1,
            1,
            &WHITE_TEXEL,
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn texture_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::BindGroup {
    let (_tex, view) = helpers::upload_rgba(device, queue, label, width, height, rgba);
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn draw_mesh(rpass: &mut wgpu::RenderPass<'_>, mesh: &MeshGpu) {
    rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
    rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
}
