//! Ray casting against bounding spheres for pointer picking.

use glam::Vec3;

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// A sphere in world space, used as pick geometry for celestial bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// Center in world space.
    pub center: Vec3,
    /// Radius (positive).
    pub radius: f32,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the nearest non-negative parameter `t` at which the ray meets
    /// the sphere, or `None` if the sphere is missed or lies entirely behind
    /// the origin. A ray starting inside the sphere hits at the exit point.
    #[must_use]
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<f32> {
        let oc = self.origin - sphere.center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - sphere.radius * sphere.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_enter = -b - sqrt_d;
        let t_exit = -b + sqrt_d;
        if t_enter >= 0.0 {
            Some(t_enter)
        } else if t_exit >= 0.0 {
            Some(t_exit)
        } else {
            None
        }
    }

    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere {
            center,
            radius: 1.0,
        }
    }

    #[test]
    fn test_ray_through_center_hits() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray
            .intersect_sphere(&unit_sphere_at(Vec3::ZERO))
            .expect("should hit");
        assert!((t - 4.0).abs() < 1e-5, "entry at t=4, got {t}");
    }

    #[test]
    fn test_offset_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.5, 5.0), Vec3::NEG_Z);
        assert!(ray.intersect_sphere(&unit_sphere_at(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray.intersect_sphere(&unit_sphere_at(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_hits_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray
            .intersect_sphere(&unit_sphere_at(Vec3::ZERO))
            .expect("inside ray should hit the shell");
        assert!((t - 1.0).abs() < 1e-5, "exit at t=1, got {t}");
    }

    #[test]
    fn test_grazing_ray_hits_once() {
        // Ray tangent to the sphere at (0, 1, 0).
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);
        let t = ray
            .intersect_sphere(&unit_sphere_at(Vec3::ZERO))
            .expect("tangent ray should count as a hit");
        assert!((t - 5.0).abs() < 1e-3, "tangent point at t=5, got {t}");
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_advances_along_direction() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
        let p = ray.point_at(4.0);
        assert!((p - Vec3::new(1.0, 6.0, 3.0)).length() < 1e-6);
    }
}
