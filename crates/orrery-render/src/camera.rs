//! Look-at camera with a cached reverse-Z projection and pointer picking.

use glam::{Mat4, Vec2, Vec3};
use orrery_math::Ray;

/// A perspective camera fixed on a look-at target.
///
/// The projection matrix is cached and recomputed only when the aspect ratio
/// actually changes, so a host resize costs exactly one recomputation.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl Camera {
    /// Creates a camera and computes its initial projection.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3, fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target,
            fov_y,
            aspect,
            near,
            far,
            projection: reverse_z_perspective(fov_y, aspect, near, far),
        }
    }

    /// Update the aspect ratio from surface dimensions. Recomputes the
    /// cached projection only when the ratio changes.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        let aspect = width / height;
        if aspect != self.aspect {
            self.aspect = aspect;
            self.projection = reverse_z_perspective(self.fov_y, aspect, self.near, self.far);
        }
    }

    /// Current width / height ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Compute the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// The cached projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Unit vector from the camera toward its target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Camera-space right axis in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Camera-space up axis in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Project a pointer position in normalized device coordinates through
    /// the camera, producing a world-space pick ray.
    #[must_use]
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;
        let direction =
            self.forward() + self.right() * (ndc.x * half_width) + self.up() * (ndc.y * half_height);
        Ray::new(self.position, direction)
    }
}

/// Reverse-Z perspective: near and far are swapped so the near plane maps to
/// depth 1 and the far plane to 0, keeping float precision for the distance.
fn reverse_z_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y, aspect, far, near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_math::Sphere;

    fn scene_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 70.0, 50.0),
            Vec3::new(0.0, 50.0, 0.0),
            70.0_f32.to_radians(),
            16.0 / 9.0,
            1.0,
            1000.0,
        )
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = scene_camera();
        let ray = camera.pick_ray(Vec2::ZERO);
        assert!((ray.origin - camera.position).length() < 1e-6);
        let to_target = (camera.target - camera.position).normalize();
        assert!((ray.direction - to_target).length() < 1e-5);
    }

    #[test]
    fn test_center_ray_hits_a_body_on_the_axis() {
        let camera = scene_camera();
        let ray = camera.pick_ray(Vec2::ZERO);
        let body = Sphere {
            center: camera.target,
            radius: 3.0,
        };
        assert!(ray.intersect_sphere(&body).is_some());
    }

    #[test]
    fn test_edge_rays_deviate_with_the_basis() {
        let camera = scene_camera();
        let center = camera.pick_ray(Vec2::ZERO);
        let right_edge = camera.pick_ray(Vec2::new(1.0, 0.0));
        let top_edge = camera.pick_ray(Vec2::new(0.0, 1.0));

        assert!(right_edge.direction.dot(camera.right()) > 0.1);
        assert!(top_edge.direction.dot(camera.up()) > 0.1);
        assert!(center.direction.dot(right_edge.direction) < 1.0);
    }

    #[test]
    fn test_aspect_change_recomputes_projection() {
        let mut camera = scene_camera();
        let before = camera.projection_matrix();
        camera.set_aspect_ratio(1024.0, 1024.0);
        let after = camera.projection_matrix();
        assert_ne!(before, after, "new aspect must produce a new projection");
        assert!((camera.aspect_ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_equal_aspect_is_a_no_op() {
        let mut camera = scene_camera();
        let before = camera.projection_matrix();
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert_eq!(before, camera.projection_matrix());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = scene_camera();
        let f = camera.forward();
        let r = camera.right();
        let u = camera.up();
        assert!((f.length() - 1.0).abs() < 1e-6);
        assert!((r.length() - 1.0).abs() < 1e-6);
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!(f.dot(r).abs() < 1e-6);
        assert!(f.dot(u).abs() < 1e-6);
        assert!(r.dot(u).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_z_maps_near_to_one() {
        let camera = scene_camera();
        // A point on the near plane straight ahead lands at depth ~1.
        let near_point = camera.position + camera.forward() * 1.0;
        let clip = camera.view_projection_matrix() * near_point.extend(1.0);
        let depth = clip.z / clip.w;
        assert!((depth - 1.0).abs() < 1e-3, "near depth {depth}");
    }
}
