//! Latitude/longitude sphere mesh generation.
//!
//! Bodies are rendered from a unit UV sphere scaled by the model matrix.
//! A lat/long grid (rather than an icosphere) keeps the texture seam and
//! poles where equirectangular surface maps expect them.

use glam::Vec3;

/// A unit-sphere mesh with equirectangular UVs.
pub struct SphereMesh {
    /// Vertex positions on the unit sphere.
    pub positions: Vec<Vec3>,
    /// Normal vectors (equal to positions on a unit sphere).
    pub normals: Vec<Vec3>,
    /// Equirectangular UV coordinates per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

/// Generate a unit sphere as a grid of `longitude_segments` ×
/// `latitude_segments` quads, each split into two triangles. The seam column
/// and pole rows are duplicated so UVs stay continuous.
#[must_use]
pub fn generate_uv_sphere(longitude_segments: u32, latitude_segments: u32) -> SphereMesh {
    let cols = longitude_segments + 1;
    let rows = latitude_segments + 1;

    let mut positions = Vec::with_capacity((cols * rows) as usize);
    let mut uvs = Vec::with_capacity((cols * rows) as usize);

    for ring in 0..rows {
        let v = ring as f32 / latitude_segments as f32;
        let phi = v * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for seg in 0..cols {
            let u = seg as f32 / longitude_segments as f32;
            let theta = u * std::f32::consts::TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            positions.push(Vec3::new(
                sin_phi * cos_theta,
                cos_phi,
                sin_phi * sin_theta,
            ));
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity((longitude_segments * latitude_segments * 6) as usize);
    for ring in 0..latitude_segments {
        for seg in 0..longitude_segments {
            let a = ring * cols + seg;
            let b = a + cols;
            indices.extend_from_slice(&[a, a + 1, b]);
            indices.extend_from_slice(&[a + 1, b + 1, b]);
        }
    }

    let normals = positions.clone();
    SphereMesh {
        positions,
        normals,
        uvs,
        indices,
    }
}
