//! Static scene construction.
//!
//! [`SolarScene::build`] deterministically assembles the camera placement,
//! lights, sun, glow shell, orbit path, and earth orbit assembly from fixed
//! placement constants. Construction is unconditional; there are no failure
//! modes.

use glam::{Vec2, Vec3};
use orrery_math::Ellipse;

use crate::lights::{AmbientLight, DirectionalLight, PointLight};
use crate::orbit::OrbitAssembly;

/// Camera position in world space.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 70.0, 50.0);
/// Fixed look-at target.
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 50.0, 0.0);
/// Vertical field of view, radians.
pub const CAMERA_FOV_Y: f32 = 70.0 * std::f32::consts::PI / 180.0;
/// Near clip plane.
pub const CAMERA_NEAR: f32 = 1.0;
/// Far clip plane.
pub const CAMERA_FAR: f32 = 1000.0;

/// Sun sphere center.
pub const SUN_CENTER: Vec3 = Vec3::new(-9.0, 55.0, 0.0);
/// Sun sphere radius.
pub const SUN_RADIUS: f32 = 7.0;
/// Sun base-color multiplier (the surface is over-driven to read as emissive).
pub const SUN_COLOR_BOOST: f32 = 2.5;

/// Glow shell radius (slightly larger than the sun).
pub const GLOW_RADIUS: f32 = 8.0;
/// Glow shell opacity.
pub const GLOW_OPACITY: f32 = 0.1;

/// Orbit pivot position (the earth swings about this point).
pub const ORBIT_PIVOT: Vec3 = Vec3::new(0.0, 50.0, 0.0);
/// Earth sphere radius.
pub const EARTH_RADIUS: f32 = 3.0;

/// Ellipse semi-major axis the earth offset is derived from.
pub const ORBIT_SEMI_MAJOR: f32 = 9.0;
/// Ellipse semi-minor axis the earth offset is derived from.
pub const ORBIT_SEMI_MINOR: f32 = 6.0;
/// Scale applied to the derived earth offset.
pub const ORBIT_SCALE: f32 = 2.5;

/// Orbit-path curve center in its authoring plane.
pub const PATH_CENTER: Vec2 = Vec2::new(0.0, 15.0);
/// Orbit-path X radius.
pub const PATH_X_RADIUS: f32 = ORBIT_SEMI_MAJOR * 3.9;
/// Orbit-path Y radius.
pub const PATH_Y_RADIUS: f32 = ORBIT_SEMI_MINOR * 6.0;
/// Start rotation of the orbit-path curve, radians.
pub const PATH_ROTATION: f32 = 2.0 * std::f32::consts::PI / 3.0;
/// Number of line segments the path is sampled into.
pub const PATH_SEGMENTS: u32 = 100;
/// Vertical lift applied to the placed path.
pub const PATH_LIFT: f32 = 50.0;
/// Depth offset applied to the placed path.
pub const PATH_DEPTH: f32 = -10.0;

/// Sphere tessellation (longitude and latitude segments) for both bodies.
pub const SPHERE_SEGMENTS: u32 = 32;

/// The sun body: a fixed textured sphere with an over-driven base color.
#[derive(Clone, Copy, Debug)]
pub struct SunBody {
    /// Center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Base-color multiplier applied on top of the surface texture.
    pub color_boost: f32,
}

/// The translucent additive shell wrapped around the sun.
#[derive(Clone, Copy, Debug)]
pub struct GlowShell {
    /// Center in world space (copies the sun's).
    pub center: Vec3,
    /// Shell radius.
    pub radius: f32,
    /// Linear RGB color.
    pub color: Vec3,
    /// Blend opacity.
    pub opacity: f32,
}

/// The complete static scene plus the earth assembly whose angles animate.
#[derive(Clone, Debug)]
pub struct SolarScene {
    /// Fixed camera placement.
    pub camera_position: Vec3,
    /// Fixed camera look-at target.
    pub camera_target: Vec3,
    /// Uniform fill light.
    pub ambient: AmbientLight,
    /// Key light.
    pub directional: DirectionalLight,
    /// Warm light emitted from the sun's center.
    pub sun_light: PointLight,
    /// The sun body.
    pub sun: SunBody,
    /// The glow shell around the sun.
    pub glow: GlowShell,
    /// The earth and its orbit pivot.
    pub earth: OrbitAssembly,
    /// World-space polyline of the decorative orbit path (closed).
    pub orbit_path: Vec<Vec3>,
}

impl SolarScene {
    /// Builds the scene from the placement constants.
    #[must_use]
    pub fn build() -> Self {
        let earth_offset = Vec3::new(
            ORBIT_SEMI_MAJOR * ORBIT_SCALE,
            ORBIT_SEMI_MINOR * (std::f32::consts::FRAC_PI_3).cos() * ORBIT_SCALE,
            ORBIT_SEMI_MINOR * (std::f32::consts::PI).sin() * ORBIT_SCALE,
        );

        Self {
            camera_position: CAMERA_POSITION,
            camera_target: CAMERA_TARGET,
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: 0.5,
            },
            directional: DirectionalLight {
                direction: Vec3::new(5.0, 3.0, 5.0).normalize(),
                color: Vec3::ONE,
                intensity: 0.25,
            },
            sun_light: PointLight {
                position: SUN_CENTER,
                // #FFE599
                color: Vec3::new(1.0, 229.0 / 255.0, 153.0 / 255.0),
                intensity: 5.0,
                range: 100.0,
            },
            sun: SunBody {
                center: SUN_CENTER,
                radius: SUN_RADIUS,
                color_boost: SUN_COLOR_BOOST,
            },
            glow: GlowShell {
                center: SUN_CENTER,
                radius: GLOW_RADIUS,
                // #FFE400
                color: Vec3::new(1.0, 228.0 / 255.0, 0.0),
                opacity: GLOW_OPACITY,
            },
            earth: OrbitAssembly::new(ORBIT_PIVOT, earth_offset, EARTH_RADIUS),
            orbit_path: orbit_path_points(),
        }
    }
}

/// Samples the orbit-path ellipse and places it in the world.
///
/// The curve is authored in an XY plane, folded into XZ (y maps to -z), then
/// lifted by [`PATH_LIFT`] and pushed back by [`PATH_DEPTH`].
fn orbit_path_points() -> Vec<Vec3> {
    let curve = Ellipse {
        center: PATH_CENTER,
        x_radius: PATH_X_RADIUS,
        y_radius: PATH_Y_RADIUS,
        rotation: PATH_ROTATION,
    };
    curve
        .sample(PATH_SEGMENTS)
        .into_iter()
        .map(|p| Vec3::new(p.x, PATH_LIFT, -p.y + PATH_DEPTH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let a = SolarScene::build();
        let b = SolarScene::build();
        assert_eq!(a.earth.body_offset, b.earth.body_offset);
        assert_eq!(a.orbit_path.len(), b.orbit_path.len());
        assert_eq!(a.orbit_path[37], b.orbit_path[37]);
    }

    #[test]
    fn test_earth_rests_at_derived_offset() {
        let scene = SolarScene::build();
        // a*2.5 = 22.5, b*cos(60 deg)*2.5 = 7.5, b*sin(180 deg)*2.5 = 0.
        let offset = scene.earth.body_offset;
        assert!((offset - Vec3::new(22.5, 7.5, 0.0)).length() < 1e-4, "got {offset}");
        let center = scene.earth.body_world_center();
        assert!((center - Vec3::new(22.5, 57.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_angles_start_at_rest() {
        let scene = SolarScene::build();
        assert_eq!(scene.earth.orbit_angle, 0.0);
        assert_eq!(scene.earth.spin_angle, 0.0);
    }

    #[test]
    fn test_orbit_path_is_closed_and_planar() {
        let scene = SolarScene::build();
        assert_eq!(scene.orbit_path.len(), PATH_SEGMENTS as usize + 1);
        let first = scene.orbit_path[0];
        let last = *scene.orbit_path.last().unwrap();
        assert!((first - last).length() < 1e-3, "path should close");
        for p in &scene.orbit_path {
            assert!((p.y - PATH_LIFT).abs() < 1e-4, "path lies in the lifted plane");
        }
    }

    #[test]
    fn test_glow_wraps_the_sun() {
        let scene = SolarScene::build();
        assert_eq!(scene.glow.center, scene.sun.center);
        assert!(scene.glow.radius > scene.sun.radius);
    }

    #[test]
    fn test_sun_light_sits_inside_the_sun() {
        let scene = SolarScene::build();
        assert_eq!(scene.sun_light.position, scene.sun.center);
    }
}
