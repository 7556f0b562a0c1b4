//! Vertex formats and GPU mesh buffers.

use bytemuck::{Pod, Zeroable};

/// Vertex format for the orbit-path line: position plus color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPositionColor {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl VertexPositionColor {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    /// Buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Vertex format for the body spheres: position, normal, and UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPositionNormalUv {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexPositionNormalUv {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// An uploaded mesh: vertices plus u32 indices.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Attach both buffers to the pass.
    pub fn bind<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Issue one indexed draw covering the whole mesh.
    pub fn draw(&self, pass: &mut wgpu::RenderPass) {
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Thin wrapper over `create_buffer_init` for meshes and vertex strips.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    /// Wrap a device.
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Upload raw vertex bytes plus indices as a [`MeshBuffer`].
    pub fn create_mesh(&self, label: &str, vertices: &[u8], indices: &[u32]) -> MeshBuffer {
        MeshBuffer {
            vertex_buffer: self.upload(&format!("{label}-vertices"), vertices, wgpu::BufferUsages::VERTEX),
            index_buffer: self.upload(
                &format!("{label}-indices"),
                bytemuck::cast_slice(indices),
                wgpu::BufferUsages::INDEX,
            ),
            index_count: indices.len() as u32,
        }
    }

    /// Upload raw vertex bytes alone (for non-indexed line strips).
    pub fn create_vertex_buffer(&self, label: &str, data: &[u8]) -> wgpu::Buffer {
        self.upload(label, data, wgpu::BufferUsages::VERTEX)
    }

    fn upload(&self, label: &str, contents: &[u8], usage: wgpu::BufferUsages) -> wgpu::Buffer {
        use wgpu::util::DeviceExt;

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_strides_match_layouts() {
        assert_eq!(
            VertexPositionColor::layout().array_stride,
            std::mem::size_of::<VertexPositionColor>() as u64
        );
        assert_eq!(
            VertexPositionNormalUv::layout().array_stride,
            std::mem::size_of::<VertexPositionNormalUv>() as u64
        );
    }

    #[test]
    fn test_attribute_offsets_are_packed() {
        let attrs = VertexPositionNormalUv::ATTRIBUTES;
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[2].offset, 24);
        assert_eq!(attrs[2].shader_location, 2);
    }
}
