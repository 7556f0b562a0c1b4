//! High-level renderer for one solar scene.
//!
//! [`SolarRenderer`] owns the pipelines, the shared unit-sphere mesh, the
//! orbit-path vertex buffer, textures, and uniform buffers. Each frame the
//! caller runs `update` (after the controller has advanced the animation)
//! and then `render` inside a render pass, so state mutation always
//! happens-before the draw that shows it.

use glam::{Mat4, Vec3};

use orrery_scene::SolarScene;
use orrery_scene::builder::SPHERE_SEGMENTS;

use crate::bindings;
use crate::body_pipeline::{BodyPipeline, BodyUniform, CameraUniform};
use crate::camera::Camera;
use crate::glow_pipeline::{GlowPipeline, GlowUniform};
use crate::mesh::{BufferAllocator, MeshBuffer, VertexPositionColor, VertexPositionNormalUv};
use crate::path_pipeline::PathPipeline;
use crate::sphere::generate_uv_sphere;
use crate::texture::{TextureRgba, upload_rgba_texture, white_texel};

/// Orbit-path line color.
const PATH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Owns all GPU resources for rendering one [`SolarScene`].
pub struct SolarRenderer {
    body_pipeline: BodyPipeline,
    glow_pipeline: GlowPipeline,
    path_pipeline: PathPipeline,

    sphere: MeshBuffer,
    path_vertex_buffer: wgpu::Buffer,
    path_vertex_count: u32,

    camera_buffer: wgpu::Buffer,
    body_camera_bind_group: wgpu::BindGroup,
    glow_camera_bind_group: wgpu::BindGroup,
    path_camera_bind_group: wgpu::BindGroup,

    sun_bind_group: wgpu::BindGroup,
    earth_uniform_buffer: wgpu::Buffer,
    earth_bind_group: wgpu::BindGroup,
    glow_bind_group: wgpu::BindGroup,
}

impl SolarRenderer {
    /// Build all GPU resources for the scene. Missing or malformed textures
    /// fall back to a white texel; the bodies render untextured.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        scene: &SolarScene,
        sun_texture: Option<&TextureRgba>,
        earth_texture: Option<&TextureRgba>,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let body_pipeline = BodyPipeline::new(device, surface_format);
        let glow_pipeline = GlowPipeline::new(device, surface_format);
        let path_pipeline = PathPipeline::new(device, surface_format);

        let allocator = BufferAllocator::new(device);

        // Shared unit sphere; every body scales it through its model matrix.
        let sphere_mesh = generate_uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let sphere_vertices: Vec<VertexPositionNormalUv> = (0..sphere_mesh.positions.len())
            .map(|i| VertexPositionNormalUv {
                position: sphere_mesh.positions[i].to_array(),
                normal: sphere_mesh.normals[i].to_array(),
                uv: sphere_mesh.uvs[i],
            })
            .collect();
        let sphere = allocator.create_mesh(
            "body-sphere",
            bytemuck::cast_slice(&sphere_vertices),
            &sphere_mesh.indices,
        );

        let path_vertices: Vec<VertexPositionColor> = scene
            .orbit_path
            .iter()
            .map(|p| VertexPositionColor {
                position: p.to_array(),
                color: PATH_COLOR,
            })
            .collect();
        let path_vertex_buffer =
            allocator.create_vertex_buffer("orbit-path", bytemuck::cast_slice(&path_vertices));
        let path_vertex_count = path_vertices.len() as u32;

        // One camera buffer shared across the three pipelines.
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera-uniform"),
            contents: &[0u8; 64],
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let body_camera_bind_group = bindings::uniform_bind_group(
            device,
            "body-camera-bg",
            &body_pipeline.camera_bind_group_layout,
            &camera_buffer,
        );
        let glow_camera_bind_group = bindings::uniform_bind_group(
            device,
            "glow-camera-bg",
            &glow_pipeline.camera_bind_group_layout,
            &camera_buffer,
        );
        let path_camera_bind_group = bindings::uniform_bind_group(
            device,
            "path-camera-bg",
            &path_pipeline.camera_bind_group_layout,
            &camera_buffer,
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("body-sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let sun_view = body_texture_or_fallback(device, queue, "sun-texture", sun_texture);
        let earth_view = body_texture_or_fallback(device, queue, "earth-texture", earth_texture);

        // Sun and glow never move; their uniforms are written once here.
        let sun_model =
            Mat4::from_translation(scene.sun.center) * Mat4::from_scale(Vec3::splat(scene.sun.radius));
        let sun_uniform = build_body_uniform(scene, sun_model, scene.sun.color_boost);
        let sun_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sun-uniform"),
            contents: bytemuck::bytes_of(&sun_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let sun_bind_group = body_pipeline.create_body_bind_group(
            device,
            "sun-bg",
            &sun_view,
            &sampler,
            &sun_uniform_buffer,
        );

        let earth_uniform =
            build_body_uniform(scene, scene.earth.body_model_matrix(), 1.0);
        let earth_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("earth-uniform"),
            contents: bytemuck::bytes_of(&earth_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let earth_bind_group = body_pipeline.create_body_bind_group(
            device,
            "earth-bg",
            &earth_view,
            &sampler,
            &earth_uniform_buffer,
        );

        let glow_model = Mat4::from_translation(scene.glow.center)
            * Mat4::from_scale(Vec3::splat(scene.glow.radius));
        let glow_uniform = GlowUniform {
            model: glow_model.to_cols_array_2d(),
            color: [
                scene.glow.color.x,
                scene.glow.color.y,
                scene.glow.color.z,
                scene.glow.opacity,
            ],
        };
        let glow_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow-uniform"),
            contents: bytemuck::bytes_of(&glow_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let glow_bind_group = bindings::uniform_bind_group(
            device,
            "glow-bg",
            &glow_pipeline.glow_bind_group_layout,
            &glow_uniform_buffer,
        );

        log::info!(
            "Solar renderer initialized ({} sphere vertices, {} path points)",
            sphere_vertices.len(),
            path_vertex_count
        );

        Self {
            body_pipeline,
            glow_pipeline,
            path_pipeline,
            sphere,
            path_vertex_buffer,
            path_vertex_count,
            camera_buffer,
            body_camera_bind_group,
            glow_camera_bind_group,
            path_camera_bind_group,
            sun_bind_group,
            earth_uniform_buffer,
            earth_bind_group,
            glow_bind_group,
        }
    }

    /// Write the per-frame uniforms: camera view-projection and the earth's
    /// current model transform.
    pub fn update(&self, queue: &wgpu::Queue, scene: &SolarScene, camera: &Camera) {
        let camera_uniform = CameraUniform {
            view_proj: camera.view_projection_matrix().to_cols_array_2d(),
        };
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let earth_uniform =
            build_body_uniform(scene, scene.earth.body_model_matrix(), 1.0);
        queue.write_buffer(
            &self.earth_uniform_buffer,
            0,
            bytemuck::bytes_of(&earth_uniform),
        );
    }

    /// Record the scene into a render pass: opaque bodies and path first,
    /// the additive glow shell last.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.body_pipeline.pipeline);
        render_pass.set_bind_group(0, &self.body_camera_bind_group, &[]);
        self.sphere.bind(render_pass);
        render_pass.set_bind_group(1, &self.sun_bind_group, &[]);
        self.sphere.draw(render_pass);
        render_pass.set_bind_group(1, &self.earth_bind_group, &[]);
        self.sphere.draw(render_pass);

        render_pass.set_pipeline(&self.path_pipeline.pipeline);
        render_pass.set_bind_group(0, &self.path_camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.path_vertex_buffer.slice(..));
        render_pass.draw(0..self.path_vertex_count, 0..1);

        render_pass.set_pipeline(&self.glow_pipeline.pipeline);
        render_pass.set_bind_group(0, &self.glow_camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.glow_bind_group, &[]);
        self.sphere.bind(render_pass);
        self.sphere.draw(render_pass);
    }
}

/// Build the shading uniform for one body from the scene's lights.
fn build_body_uniform(scene: &SolarScene, model: Mat4, color_boost: f32) -> BodyUniform {
    BodyUniform {
        model: model.to_cols_array_2d(),
        ambient: [
            scene.ambient.color.x,
            scene.ambient.color.y,
            scene.ambient.color.z,
            scene.ambient.intensity,
        ],
        light_dir: [
            scene.directional.direction.x,
            scene.directional.direction.y,
            scene.directional.direction.z,
            scene.directional.intensity,
        ],
        light_color: [
            scene.directional.color.x,
            scene.directional.color.y,
            scene.directional.color.z,
            0.0,
        ],
        point_pos: [
            scene.sun_light.position.x,
            scene.sun_light.position.y,
            scene.sun_light.position.z,
            scene.sun_light.intensity,
        ],
        point_color: [
            scene.sun_light.color.x,
            scene.sun_light.color.y,
            scene.sun_light.color.z,
            scene.sun_light.range,
        ],
        base_color: [color_boost, color_boost, color_boost, 0.0],
    }
}

fn body_texture_or_fallback(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    data: Option<&TextureRgba>,
) -> wgpu::TextureView {
    match data {
        Some(rgba) => match upload_rgba_texture(device, queue, label, rgba) {
            Ok(view) => view,
            Err(e) => {
                log::warn!("{label}: rejected pixel data ({e}), rendering untextured");
                white_texel(device, queue)
            }
        },
        None => white_texel(device, queue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_uniform_carries_boost_and_placement() {
        let scene = SolarScene::build();
        let model = Mat4::from_translation(scene.sun.center)
            * Mat4::from_scale(Vec3::splat(scene.sun.radius));
        let uniform = build_body_uniform(&scene, model, scene.sun.color_boost);

        assert_eq!(uniform.base_color[0], 2.5);
        // Translation column of the model matrix is the sun center.
        assert_eq!(uniform.model[3][0], scene.sun.center.x);
        assert_eq!(uniform.model[3][1], scene.sun.center.y);
    }

    #[test]
    fn test_earth_uniform_tracks_the_orbit() {
        let mut scene = SolarScene::build();
        let at_rest = build_body_uniform(&scene, scene.earth.body_model_matrix(), 1.0);
        scene.earth.orbit_angle = 1.0;
        let moved = build_body_uniform(&scene, scene.earth.body_model_matrix(), 1.0);
        assert_ne!(at_rest.model[3], moved.model[3], "orbit must move the body");
    }

    #[test]
    fn test_point_light_range_rides_in_w() {
        let scene = SolarScene::build();
        let uniform = build_body_uniform(&scene, Mat4::IDENTITY, 1.0);
        assert_eq!(uniform.point_color[3], scene.sun_light.range);
        assert_eq!(uniform.point_pos[3], scene.sun_light.intensity);
    }
}
