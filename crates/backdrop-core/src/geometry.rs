//! Procedural mesh builders.
//!
//! Unit primitives follow the parametrisations of the common WebGL scene
//! libraries so authored scales and segment counts read the same. Polyhedra
//! are emitted unindexed (one vertex per face corner); [`Geometry::welded`]
//! merges coincident corners when topology matters.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use lyon::tessellation::TessellationError;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

#[derive(Clone, Debug)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

// Positions closer than this are treated as the same vertex when welding.
const WELD_QUANTUM: f32 = 1.0e-4;

impl Geometry {
    pub fn triangles(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            topology: Topology::Triangles,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => self.indices.len() / 2,
        }
    }

    /// Merge vertices sharing a (quantised) position and drop triangles that
    /// collapse to a line or point.
    pub fn welded(&self) -> Self {
        let mut lookup: FnvHashMap<[i32; 3], u32> = FnvHashMap::default();
        let mut positions = Vec::new();
        let remap: Vec<u32> = self
            .positions
            .iter()
            .map(|p| {
                let key = p.map(|c| (c / WELD_QUANTUM).round() as i32);
                *lookup.entry(key).or_insert_with(|| {
                    positions.push(*p);
                    (positions.len() - 1) as u32
                })
            })
            .collect();

        let stride = match self.topology {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        };
        let mut indices = Vec::with_capacity(self.indices.len());
        for prim in self.indices.chunks_exact(stride) {
            let mapped: Vec<u32> = prim.iter().map(|&i| remap[i as usize]).collect();
            let degenerate = mapped
                .iter()
                .enumerate()
                .any(|(k, a)| mapped[k + 1..].contains(a));
            if !degenerate {
                indices.extend_from_slice(&mapped);
            }
        }
        Self {
            positions,
            indices,
            topology: self.topology,
        }
    }

    /// Line list containing each distinct triangle edge once.
    pub fn to_wireframe(&self) -> Self {
        if self.topology == Topology::Lines {
            return self.clone();
        }
        let welded = self.welded();
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut indices = Vec::new();
        for tri in welded.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    indices.extend_from_slice(&[key.0, key.1]);
                }
            }
        }
        Self {
            positions: welded.positions,
            indices,
            topology: Topology::Lines,
        }
    }
}

// ---------------- Polyhedra ----------------

fn polyhedron(base_vertices: &[[f32; 3]], faces: &[[usize; 3]], radius: f32, detail: u32) -> Geometry {
    let cols = detail as usize + 1;
    let mut positions = Vec::with_capacity(faces.len() * cols * cols * 3);

    for face in faces {
        let a = Vec3::from(base_vertices[face[0]]);
        let b = Vec3::from(base_vertices[face[1]]);
        let c = Vec3::from(base_vertices[face[2]]);

        // Triangular grid of points over the face, row i running from a..c.
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let aj = a.lerp(c, i as f32 / cols as f32);
            let bj = b.lerp(c, i as f32 / cols as f32);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                for v in tri {
                    positions.push((v.normalize() * radius).to_array());
                }
            }
        }
    }

    let indices = (0..positions.len() as u32).collect();
    Geometry::triangles(positions, indices)
}

pub fn tetrahedron(radius: f32, detail: u32) -> Geometry {
    const V: [[f32; 3]; 4] = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    const F: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    polyhedron(&V, &F, radius, detail)
}

pub fn octahedron(radius: f32, detail: u32) -> Geometry {
    const V: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    const F: [[usize; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(&V, &F, radius, detail)
}

const PHI: f32 = 1.618_034;

pub fn icosahedron(radius: f32, detail: u32) -> Geometry {
    let t = PHI;
    let v = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    const F: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    polyhedron(&v, &F, radius, detail)
}

pub fn dodecahedron(radius: f32, detail: u32) -> Geometry {
    let t = PHI;
    let r = 1.0 / t;
    let v = [
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];
    // Each pentagon is fanned into three triangles.
    const F: [[usize; 3]; 36] = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    polyhedron(&v, &F, radius, detail)
}

// ---------------- Tori ----------------

/// Ring of `radius` around the z axis with a circular tube of `tube`.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let mut positions = Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let v = j as f32 / radial_segments as f32 * TAU;
            positions.push([
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ]);
        }
    }

    let row = tubular_segments + 1;
    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Geometry::triangles(positions, indices)
}

/// (p, q) torus knot; the backdrop only uses the trefoil-like (2, 3).
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Geometry {
    let (pf, qf) = (p as f32, q as f32);
    let curve = |u: f32| {
        let qu_over_p = qf / pf * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        )
    };

    let mut positions = Vec::with_capacity(((tubular_segments + 1) * (radial_segments + 1)) as usize);
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        // Frenet-like frame from the finite difference along the curve
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize();
        normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            positions.push((p1 + normal * cx + binormal * cy).to_array());
        }
    }

    let row = radial_segments + 1;
    let mut indices = Vec::with_capacity((tubular_segments * radial_segments * 6) as usize);
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Geometry::triangles(positions, indices)
}

/// Flat (z = 0) filled polygon from an outline in the xy plane.
pub fn planar(outline: &[[f32; 2]]) -> Result<Geometry, TessellationError> {
    let fill = crate::path::fill_polygon(outline)?;
    let positions = fill.positions.iter().map(|p| [p[0], p[1], 0.0]).collect();
    Ok(Geometry::triangles(positions, fill.indices))
}

/// Sample every bezier segment of `outline` into `curve_segments` pieces and
/// fill the resulting polygon.
pub fn shape_from_path(
    outline: &crate::path::Outline,
    curve_segments: usize,
) -> Result<Geometry, TessellationError> {
    planar(&outline.sample(curve_segments))
}
