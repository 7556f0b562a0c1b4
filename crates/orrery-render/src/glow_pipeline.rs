//! Additive translucent shell pipeline for the sun's glow.
//!
//! The shell is depth-tested so bodies can occlude it, but does not write
//! depth; output is premultiplied by opacity and blended One/One.

use bytemuck::{Pod, Zeroable};

use crate::bindings;
use crate::depth::DepthBuffer;
use crate::mesh::VertexPositionNormalUv;

/// Uniform for the glow shell: model transform plus color and opacity.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlowUniform {
    /// Model matrix (translation × scale).
    pub model: [[f32; 4]; 4],
    /// Shell color (rgb) and opacity (w).
    pub color: [f32; 4],
}

/// WGSL source for the glow shader.
pub const GLOW_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
};

struct GlowUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> glow: GlowUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_glow(in: VertexInput) -> @builtin(position) vec4<f32> {
    return camera.view_proj * glow.model * vec4<f32>(in.position, 1.0);
}

@fragment
fn fs_glow() -> @location(0) vec4<f32> {
    // Premultiplied for One/One additive blending.
    return vec4<f32>(glow.color.rgb * glow.color.a, glow.color.a);
}
"#;

/// Render pipeline for the additive glow shell.
pub struct GlowPipeline {
    /// The wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Camera bind group layout (group 0).
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    /// Glow uniform bind group layout (group 1).
    pub glow_bind_group_layout: wgpu::BindGroupLayout,
}

impl GlowPipeline {
    /// Create the glow render pipeline.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glow-shader"),
            source: wgpu::ShaderSource::Wgsl(GLOW_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout = bindings::camera_layout(device, "glow-camera-bgl");
        let glow_bind_group_layout = bindings::uniform_layout(
            device,
            "glow-bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            std::mem::size_of::<GlowUniform>() as u64,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glow-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &glow_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glow-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_glow"),
                buffers: &[VertexPositionNormalUv::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            // Depth-tested so bodies occlude the shell, but never written.
            depth_stencil: Some(DepthBuffer::pipeline_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_glow"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent::OVER,
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group_layout,
            glow_bind_group_layout,
        }
    }
}
