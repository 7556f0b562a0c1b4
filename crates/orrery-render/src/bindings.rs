//! Shared bind-group plumbing for the scene pipelines.
//!
//! All three pipelines take the camera as group 0, a single mat4 uniform.
//! The helpers here keep that wiring in one place.

use std::num::NonZeroU64;

/// Layout with one uniform-buffer entry at binding 0.
pub fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
    min_size: u64,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(min_size),
            },
            count: None,
        }],
    })
}

/// The camera group layout: one mat4 visible to the vertex stage.
pub fn camera_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    uniform_layout(device, label, wgpu::ShaderStages::VERTEX, 64)
}

/// Bind a buffer as the single entry of a uniform group.
pub fn uniform_bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}
