//! Pivot-and-body orbit assembly.
//!
//! An invisible pivot transform owns the orbiting body at a fixed local
//! offset. Rotating the pivot about its Y axis carries the body around the
//! orbit; the body additionally rotates about its own Y axis for day/night
//! spin. The two angles are independent.

use glam::{Mat4, Quat, Vec3};
use orrery_math::Sphere;

/// An orbit pivot owning one spherical body.
#[derive(Clone, Copy, Debug)]
pub struct OrbitAssembly {
    /// World position of the pivot (orbit center).
    pub pivot: Vec3,
    /// Body offset from the pivot, in pivot-local space.
    pub body_offset: Vec3,
    /// Body sphere radius.
    pub body_radius: f32,
    /// Pivot rotation about Y, radians.
    pub orbit_angle: f32,
    /// Body self-rotation about Y, radians.
    pub spin_angle: f32,
}

impl OrbitAssembly {
    /// Creates an assembly at rest, both angles zero.
    #[must_use]
    pub fn new(pivot: Vec3, body_offset: Vec3, body_radius: f32) -> Self {
        Self {
            pivot,
            body_offset,
            body_radius,
            orbit_angle: 0.0,
            spin_angle: 0.0,
        }
    }

    /// The body's current center in world space.
    #[must_use]
    pub fn body_world_center(&self) -> Vec3 {
        self.pivot + Quat::from_rotation_y(self.orbit_angle) * self.body_offset
    }

    /// Model matrix for rendering the body from a unit sphere:
    /// pivot translation × orbit rotation × offset translation × spin
    /// rotation × radius scale.
    #[must_use]
    pub fn body_model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.pivot)
            * Mat4::from_rotation_y(self.orbit_angle)
            * Mat4::from_translation(self.body_offset)
            * Mat4::from_rotation_y(self.spin_angle)
            * Mat4::from_scale(Vec3::splat(self.body_radius))
    }

    /// Bounding sphere at the body's current world position, for picking.
    #[must_use]
    pub fn pick_sphere(&self) -> Sphere {
        Sphere {
            center: self.body_world_center(),
            radius: self.body_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembly() -> OrbitAssembly {
        OrbitAssembly::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(22.5, 7.5, 0.0), 3.0)
    }

    #[test]
    fn test_rest_center_is_pivot_plus_offset() {
        let a = assembly();
        let c = a.body_world_center();
        assert!((c - Vec3::new(22.5, 57.5, 0.0)).length() < 1e-5, "got {c}");
    }

    #[test]
    fn test_quarter_orbit_swings_offset_into_z() {
        let mut a = assembly();
        a.orbit_angle = std::f32::consts::FRAC_PI_2;
        let c = a.body_world_center();
        // R_y(pi/2) carries (x, y, z) to (z, y, -x).
        assert!((c - Vec3::new(0.0, 57.5, -22.5)).length() < 1e-4, "got {c}");
    }

    #[test]
    fn test_spin_does_not_move_the_center() {
        let mut a = assembly();
        a.spin_angle = 1.3;
        let c = a.body_world_center();
        assert!((c - Vec3::new(22.5, 57.5, 0.0)).length() < 1e-5);

        // The model matrix translation column still lands on the center.
        let translation = a.body_model_matrix().col(3).truncate();
        assert!((translation - c).length() < 1e-4);
    }

    #[test]
    fn test_model_matrix_scales_unit_sphere_to_radius() {
        let a = assembly();
        let surface_point = a.body_model_matrix() * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        let center = a.body_world_center();
        let r = (surface_point.truncate() - center).length();
        assert!((r - a.body_radius).abs() < 1e-4, "surface at distance {r}");
    }

    #[test]
    fn test_spin_rotates_surface_points() {
        let mut a = assembly();
        let before = a.body_model_matrix() * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        a.spin_angle = std::f32::consts::PI;
        let after = a.body_model_matrix() * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(
            (before - after).truncate().length() > a.body_radius,
            "half-turn spin should carry a surface point across the body"
        );
    }

    #[test]
    fn test_pick_sphere_follows_orbit() {
        let mut a = assembly();
        let at_rest = a.pick_sphere();
        a.orbit_angle = 1.0;
        let moved = a.pick_sphere();
        assert_eq!(at_rest.radius, moved.radius);
        assert!((at_rest.center - moved.center).length() > 1.0);
    }
}
