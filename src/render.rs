use crate::constants::*;
use crate::dom;
use glam::{Mat4, Vec3};
use vessel_core::{
    floor_disc, vessel_profile, Camera, DeformParams, LatheGeometry, MeshDeformer, RenderError,
    Vessel, VesselPose, VesselRenderer, LATHE_SEGMENTS,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

mod helpers;
use helpers::{create_depth_view, uniform_buffer, uniform_layout, MeshBuffers, DEPTH_FORMAT};

const VESSEL_WGSL: &str = include_str!("../shaders/vessel.wgsl");
const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const NORMAL_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    hemi_sky: [f32; 4],
    hemi_ground: [f32; 4],
    key_pos: [f32; 4],
    key_color: [f32; 4],
    rim_pos: [f32; 4],
    rim_color: [f32; 4],
}

impl SceneUniforms {
    fn for_camera(camera: &Camera) -> Self {
        let with_w = |v: [f32; 3], w: f32| [v[0], v[1], v[2], w];
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            hemi_sky: with_w(HEMI_SKY, HEMI_INTENSITY),
            hemi_ground: with_w(HEMI_GROUND, HEMI_INTENSITY),
            key_pos: with_w(KEY_LIGHT_POS, KEY_LIGHT_INTENSITY),
            key_color: with_w(KEY_LIGHT_COLOR, 1.0),
            rim_pos: with_w(RIM_LIGHT_POS, RIM_LIGHT_INTENSITY),
            rim_color: with_w(RIM_LIGHT_COLOR, 1.0),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4], // x = lit, y = roughness
}

/// One drawable: vertex buffers plus its own object uniform.
struct GpuMesh {
    buffers: MeshBuffers,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        geometry: &LatheGeometry,
        object: ObjectUniforms,
    ) -> Self {
        let buffers = MeshBuffers::upload(device, label, geometry);
        let (uniform, bind_group) = uniform_buffer(device, layout, label, &object);
        Self {
            buffers,
            uniform,
            bind_group,
        }
    }
}

/// WebGPU renderer for the vessel and its floor, drawn into a canvas
/// appended to the mount element.
pub struct GpuVessel {
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    vessel: GpuMesh,
    floor: GpuMesh,
    camera: Camera,
}

impl GpuVessel {
    pub async fn new(container: web::HtmlElement, geometry: &LatheGeometry) -> anyhow::Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("mount is detached"))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
        _ = canvas.style().set_property("width", "100%");
        _ = canvas.style().set_property("height", "100%");
        _ = canvas.style().set_property("display", "block");
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("mount canvas: {:?}", e))?;
        let (width, height) = dom::sync_canvas_to_container(&canvas, &container, MAX_PIXEL_RATIO);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
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
        // The page must show through around the vessel.
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
        let depth_view = create_depth_view(&device, width, height);

        let mut camera = Camera {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::from_array(CAMERA_EYE) - Vec3::Z,
            up: Vec3::Y,
            aspect: INITIAL_ASPECT,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        camera.set_viewport(width as f32, height as f32);

        let scene_layout = uniform_layout(&device, "scene_bgl");
        let object_layout = uniform_layout(&device, "object_bgl");
        let (scene_buffer, scene_bind_group) = uniform_buffer(
            &device,
            &scene_layout,
            "scene_uniforms",
            &SceneUniforms::for_camera(&camera),
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vessel_shader"),
            source: wgpu::ShaderSource::Wgsl(VESSEL_WGSL.into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vessel_pipeline_layout"),
            bind_group_layouts: &[&scene_layout, &object_layout],
            push_constant_ranges: &[],
        });
        let float3 = |attributes: &'static [wgpu::VertexAttribute]| wgpu::VertexBufferLayout {
            array_stride: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vessel_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[float3(&POSITION_ATTRS), float3(&NORMAL_ATTRS)],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vessel = GpuMesh::new(
            &device,
            &object_layout,
            "vessel",
            geometry,
            ObjectUniforms {
                model: Mat4::IDENTITY.to_cols_array_2d(),
                color: VESSEL_COLOR,
                params: [1.0, VESSEL_ROUGHNESS, 0.0, 0.0],
            },
        );
        let floor = GpuMesh::new(
            &device,
            &object_layout,
            "floor",
            &floor_disc(),
            ObjectUniforms {
                model: Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0)).to_cols_array_2d(),
                color: FLOOR_COLOR,
                params: [0.0; 4],
            },
        );

        log::info!("[vessel] WebGPU ready: {}x{} {:?}", width, height, format);
        Ok(Self {
            canvas,
            container,
            surface,
            device,
            queue,
            config,
            pipeline,
            depth_view,
            scene_buffer,
            scene_bind_group,
            vessel,
            floor,
            camera,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.config.width, self.config.height);
    }

    fn write_uniforms(&self, geometry: &LatheGeometry, pose: &VesselPose) {
        self.vessel.buffers.write_vertices(&self.queue, geometry);
        let object = ObjectUniforms {
            model: pose.model_matrix().to_cols_array_2d(),
            color: VESSEL_COLOR,
            params: [1.0, VESSEL_ROUGHNESS, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.vessel.uniform, 0, bytemuck::bytes_of(&object));
        self.queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms::for_camera(&self.camera)),
        );
    }
}

impl VesselRenderer for GpuVessel {
    fn render(&mut self, geometry: &LatheGeometry, pose: &VesselPose) -> Result<(), RenderError> {
        self.write_uniforms(geometry, pose);
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(e) => return Err(RenderError::Gpu(format!("{:?}", e))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("vessel_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vessel_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            // Opaque vessel first so the translucent floor depth-tests against it.
            for mesh in [&self.vessel, &self.floor] {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                mesh.buffers.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_container(&self.canvas, &self.container, MAX_PIXEL_RATIO);
        if w == self.config.width && h == self.config.height {
            return;
        }
        self.config.width = w;
        self.config.height = h;
        self.reconfigure();
        self.camera.set_viewport(w as f32, h as f32);
    }
}

fn has_webgpu(window: &web::Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu")).unwrap_or(false)
}

/// Build the vessel inside `#vessel-3d`. When the mount exists but WebGPU
/// cannot be brought up, the page is flagged with `no-3d` and the rest of
/// the animation runs without it.
pub async fn init_vessel(
    window: &web::Window,
    document: &web::Document,
) -> Option<Vessel<GpuVessel>> {
    let Some(container) = document
        .get_element_by_id(VESSEL_MOUNT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::info!("[vessel] no #{} mount; skipping 3D", VESSEL_MOUNT_ID);
        return None;
    };
    if !has_webgpu(window) {
        log::warn!("[vessel] WebGPU unavailable; falling back to flat page");
        dom::add_body_class(document, NO_3D_CLASS);
        return None;
    }
    let geometry = LatheGeometry::revolve(&vessel_profile(), LATHE_SEGMENTS);
    match GpuVessel::new(container, &geometry).await {
        Ok(renderer) => Some(Vessel::new(
            MeshDeformer::new(geometry, DeformParams::default()),
            renderer,
        )),
        Err(e) => {
            log::warn!("[vessel] WebGPU init failed: {:?}", e);
            dom::add_body_class(document, NO_3D_CLASS);
            None
        }
    }
}
