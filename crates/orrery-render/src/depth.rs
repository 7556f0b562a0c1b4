//! Reverse-Z depth buffer.
//!
//! Depth runs backwards: the near plane clears to 1.0, the far plane to 0.0,
//! and the compare function is greater-equal. Floating point density near
//! zero then covers the far end of the scene.

/// Owns the depth texture and its attachment view.
pub struct DepthBuffer {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    size: (u32, u32),
}

impl DepthBuffer {
    /// Depth format used by every pipeline in this crate.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Clear value for the far plane under reverse-Z.
    pub const CLEAR_VALUE: f32 = 0.0;

    /// Compare function matching the reversed depth range.
    pub const COMPARE_FUNCTION: wgpu::CompareFunction = wgpu::CompareFunction::GreaterEqual;

    /// Allocate a depth buffer of the given pixel dimensions.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene-depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            size: (width, height),
        }
    }

    /// Reallocate for new dimensions; unchanged dimensions are a no-op.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.size != (width, height) {
            *self = Self::new(device, width, height);
        }
    }

    /// Current pixel dimensions.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Depth-stencil state for pipelines that target this buffer.
    pub fn pipeline_state(depth_write_enabled: bool) -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: Self::FORMAT,
            depth_write_enabled,
            depth_compare: Self::COMPARE_FUNCTION,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }
}
