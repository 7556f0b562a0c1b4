//! Textured, lit render pipeline for the spherical bodies.
//!
//! Shading is a sum of ambient fill, one directional key light, and one
//! ranged point light (the sun's warm cast on the earth), multiplied into
//! the sampled surface map and a per-body base color. The sun over-drives
//! its base color to read as emissive.

use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;

use crate::bindings;
use crate::depth::DepthBuffer;
use crate::mesh::VertexPositionNormalUv;

/// Uniform buffer for the camera view-projection matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4], // 64 bytes, mat4x4
}

/// Per-body uniform: model transform, lights, and base color.
///
/// Every vec3 is padded to a vec4; the fourth lane carries the paired
/// scalar (intensity, range) so the struct stays 16-byte aligned.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BodyUniform {
    /// Model matrix (translation × rotations × scale).
    pub model: [[f32; 4]; 4],
    /// Ambient color (rgb) and intensity (w).
    pub ambient: [f32; 4],
    /// Directional light direction (xyz, toward the light) and intensity (w).
    pub light_dir: [f32; 4],
    /// Directional light color (rgb); w unused.
    pub light_color: [f32; 4],
    /// Point light position (xyz) and intensity (w).
    pub point_pos: [f32; 4],
    /// Point light color (rgb) and falloff range (w).
    pub point_color: [f32; 4],
    /// Base color multiplier (rgb); w unused.
    pub base_color: [f32; 4],
}

/// WGSL source for the body shader.
pub const BODY_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
};

struct BodyUniform {
    model: mat4x4<f32>,
    ambient: vec4<f32>,
    light_dir: vec4<f32>,
    light_color: vec4<f32>,
    point_pos: vec4<f32>,
    point_color: vec4<f32>,
    base_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var body_texture: texture_2d<f32>;
@group(1) @binding(1)
var body_sampler: sampler;
@group(1) @binding(2)
var<uniform> body: BodyUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_body(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = body.model * vec4<f32>(in.position, 1.0);
    out.world_pos = world.xyz;
    // Uniform scale only, so the rotation part of the model transforms normals.
    out.normal = (body.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.clip_position = camera.view_proj * world;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_body(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.normal);

    var shade = body.ambient.rgb * body.ambient.w;
    shade += body.light_color.rgb * body.light_dir.w
        * max(dot(n, normalize(body.light_dir.xyz)), 0.0);

    let to_point = body.point_pos.xyz - in.world_pos;
    let dist = length(to_point);
    let falloff = clamp(1.0 - dist / body.point_color.w, 0.0, 1.0);
    shade += body.point_color.rgb * body.point_pos.w * falloff
        * max(dot(n, to_point / max(dist, 1e-4)), 0.0);

    let tex = textureSample(body_texture, body_sampler, in.uv);
    return vec4<f32>(tex.rgb * body.base_color.rgb * shade, 1.0);
}
"#;

/// Render pipeline for textured lit bodies.
pub struct BodyPipeline {
    /// The wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Camera bind group layout (group 0).
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    /// Body bind group layout (group 1): texture + sampler + uniform.
    pub body_bind_group_layout: wgpu::BindGroupLayout,
}

impl BodyPipeline {
    /// Create the body render pipeline.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("body-shader"),
            source: wgpu::ShaderSource::Wgsl(BODY_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout = bindings::camera_layout(device, "body-camera-bgl");
        let body_bind_group_layout = body_layout(device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("body-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &body_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("body-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_body"),
                buffers: &[VertexPositionNormalUv::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(DepthBuffer::pipeline_state(true)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_body"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None, // opaque
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
            body_bind_group_layout,
        }
    }

    /// Create a body bind group from its texture view, sampler, and uniform.
    pub fn create_body_bind_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        texture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        uniform_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.body_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        })
    }
}

/// Group-1 layout: surface map, its sampler, and the body uniform.
fn body_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture_entry = wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    };
    let sampler_entry = wgpu::BindGroupLayoutEntry {
        binding: 1,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };
    let uniform_entry = wgpu::BindGroupLayoutEntry {
        binding: 2,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: NonZeroU64::new(std::mem::size_of::<BodyUniform>() as u64),
        },
        count: None,
    };

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("body-bgl"),
        entries: &[texture_entry, sampler_entry, uniform_entry],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_uniform_size_alignment() {
        assert_eq!(std::mem::size_of::<BodyUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<BodyUniform>(), 64 + 6 * 16);
    }

    #[test]
    fn test_camera_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }
}
