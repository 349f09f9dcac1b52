//! Surface-of-revolution geometry.
//!
//! Vertex data is stored as flattened `xyz` triples so the buffers can be
//! uploaded to the GPU without repacking.

use crate::constants::{FLOOR_RADIUS, FLOOR_SEGMENTS, PROFILE_POINTS};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct LatheGeometry {
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
}

impl LatheGeometry {
    /// Revolve `profile` (x = radius, y = height) a full turn about the Y
    /// axis in `segments` steps. The seam column is duplicated so every
    /// segment owns its own quad strip.
    pub fn revolve(profile: &[Vec2], segments: u32) -> Self {
        let segments = segments.max(1);
        let rings = profile.len();
        let columns = segments as usize + 1;
        let mut positions = Vec::with_capacity(columns * rings * 3);
        for i in 0..columns {
            let phi = i as f32 / segments as f32 * TAU;
            let (sin, cos) = phi.sin_cos();
            for p in profile {
                positions.extend_from_slice(&[p.x * sin, p.y, p.x * cos]);
            }
        }

        let mut indices = Vec::with_capacity(segments as usize * rings.saturating_sub(1) * 6);
        let stride = rings as u32;
        for i in 0..segments {
            for j in 0..stride.saturating_sub(1) {
                let base = j + i * stride;
                let a = base;
                let b = base + stride;
                let c = base + stride + 1;
                let d = base + 1;
                indices.extend_from_slice(&[a, b, d, c, d, b]);
            }
        }

        let mut geometry = Self {
            normals: vec![0.0; positions.len()],
            positions,
            indices,
        };
        geometry.compute_vertex_normals();
        geometry
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    /// Area-weighted smooth normals from the current positions.
    ///
    /// Vertices that only touch degenerate triangles get a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), 0.0);
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (pa, pb, pc) = (self.vertex(ia), self.vertex(ib), self.vertex(ic));
            let face = (pc - pb).cross(pa - pb);
            for idx in [ia, ib, ic] {
                let n = &mut self.normals[idx * 3..idx * 3 + 3];
                n[0] += face.x;
                n[1] += face.y;
                n[2] += face.z;
            }
        }
        for n in self.normals.chunks_exact_mut(3) {
            let unit = Vec3::new(n[0], n[1], n[2]).normalize_or_zero();
            n.copy_from_slice(&unit.to_array());
        }
    }
}

/// The vessel silhouette: a swelling belly over a narrow foot and a slightly
/// wider lip.
pub fn vessel_profile() -> Vec<Vec2> {
    let last = (PROFILE_POINTS - 1) as f32;
    (0..PROFILE_POINTS)
        .map(|i| {
            let t = i as f32 / last;
            let y = -1.28 + t * 2.56;
            let radius = 0.45 + (t * PI).sin() * 1.42 + t.powf(1.6) * 0.25;
            Vec2::new(radius * 0.38, y * 0.55)
        })
        .collect()
}

/// Flat disc in the XZ plane, used as the floor under the vessel.
pub fn floor_disc() -> LatheGeometry {
    LatheGeometry::revolve(&[Vec2::ZERO, Vec2::new(FLOOR_RADIUS, 0.0)], FLOOR_SEGMENTS)
}
