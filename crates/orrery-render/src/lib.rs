//! wgpu rendering for the solar scene: GPU context, viewport tracking,
//! camera, meshes, pipelines, textures, and the frame renderer.

pub mod bindings;
pub mod body_pipeline;
pub mod camera;
pub mod depth;
pub mod glow_pipeline;
pub mod gpu;
pub mod mesh;
pub mod path_pipeline;
pub mod renderer;
pub mod sphere;
pub mod texture;
pub mod viewport;

pub use body_pipeline::{BodyPipeline, BodyUniform, CameraUniform};
pub use camera::Camera;
pub use depth::DepthBuffer;
pub use glow_pipeline::{GlowPipeline, GlowUniform};
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use mesh::{BufferAllocator, MeshBuffer, VertexPositionColor, VertexPositionNormalUv};
pub use path_pipeline::PathPipeline;
pub use renderer::SolarRenderer;
pub use sphere::{SphereMesh, generate_uv_sphere};
pub use texture::{TextureError, TextureRgba, upload_rgba_texture, white_texel};
pub use viewport::{PhysicalSize, ViewportResize, ViewportTracker};
