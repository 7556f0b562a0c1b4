//! Light value types consumed by the renderer's shading uniforms.

use glam::Vec3;

/// Uniform fill light applied to every surface.
#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar intensity multiplier.
    pub intensity: f32,
}

/// Parallel light from a fixed direction.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Unit vector from a surface toward the light.
    pub direction: Vec3,
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar intensity multiplier.
    pub intensity: f32,
}

/// Omnidirectional light with a linear falloff to `range`.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    /// Position in world space.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar intensity multiplier.
    pub intensity: f32,
    /// Distance at which the contribution reaches zero.
    pub range: f32,
}
