//! Parametric ellipse sampling for orbit-path polylines.

use glam::Vec2;

/// An axis-aligned ellipse in its own plane, optionally rotated about its
/// center, evaluated by angle parameter.
#[derive(Clone, Copy, Debug)]
pub struct Ellipse {
    /// Center of the ellipse.
    pub center: Vec2,
    /// Radius along the local X axis.
    pub x_radius: f32,
    /// Radius along the local Y axis.
    pub y_radius: f32,
    /// Rotation of the whole curve about its center, radians.
    pub rotation: f32,
}

impl Ellipse {
    /// The point at angle parameter `t` (radians, counter-clockwise).
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let local = Vec2::new(self.x_radius * t.cos(), self.y_radius * t.sin());
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let rotated = Vec2::new(
            local.x * cos_r - local.y * sin_r,
            local.x * sin_r + local.y * cos_r,
        );
        self.center + rotated
    }

    /// Samples the full curve into `segments + 1` points; the last point
    /// repeats the first so a line strip through them closes the loop.
    #[must_use]
    pub fn sample(&self, segments: u32) -> Vec<Vec2> {
        (0..=segments)
            .map(|i| {
                let t = std::f32::consts::TAU * (i as f32 / segments as f32);
                self.point_at(t)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_sample_has_constant_radius() {
        let circle = Ellipse {
            center: Vec2::ZERO,
            x_radius: 3.0,
            y_radius: 3.0,
            rotation: 0.0,
        };
        for p in circle.sample(64) {
            assert!((p.length() - 3.0).abs() < 1e-4, "point {p} off the circle");
        }
    }

    #[test]
    fn test_sample_count_and_closure() {
        let ellipse = Ellipse {
            center: Vec2::new(1.0, 2.0),
            x_radius: 5.0,
            y_radius: 2.0,
            rotation: 0.0,
        };
        let points = ellipse.sample(100);
        assert_eq!(points.len(), 101);
        assert!(
            (points[0] - points[100]).length() < 1e-4,
            "curve should close"
        );
    }

    #[test]
    fn test_axes_reach_radii() {
        let ellipse = Ellipse {
            center: Vec2::ZERO,
            x_radius: 4.0,
            y_radius: 2.0,
            rotation: 0.0,
        };
        let right = ellipse.point_at(0.0);
        let top = ellipse.point_at(std::f32::consts::FRAC_PI_2);
        assert!((right - Vec2::new(4.0, 0.0)).length() < 1e-5);
        assert!((top - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_rotation_moves_start_point() {
        let base = Ellipse {
            center: Vec2::ZERO,
            x_radius: 4.0,
            y_radius: 2.0,
            rotation: 0.0,
        };
        let rotated = Ellipse {
            rotation: std::f32::consts::FRAC_PI_2,
            ..base
        };
        // Rotating the curve by 90 degrees carries (4, 0) to (0, 4).
        let p = rotated.point_at(0.0);
        assert!((p - Vec2::new(0.0, 4.0)).length() < 1e-4, "got {p}");
    }

    #[test]
    fn test_center_offsets_every_point() {
        let ellipse = Ellipse {
            center: Vec2::new(10.0, -5.0),
            x_radius: 1.0,
            y_radius: 1.0,
            rotation: 0.0,
        };
        for p in ellipse.sample(16) {
            assert!((p - ellipse.center).length() <= 1.0 + 1e-5);
        }
    }
}
