// Host-side tests for procedural geometry and outline triangulation.

use backdrop_core::geometry::*;
use backdrop_core::path::{fill_polygon, Fill};
use backdrop_core::shapes::heart_outline;
use glam::Vec3;

fn assert_on_unit_sphere(g: &Geometry) {
    for p in &g.positions {
        let r = Vec3::from(*p).length();
        assert!((r - 1.0).abs() < 1e-5, "vertex {:?} off unit sphere", p);
    }
}

fn distinct_vertices(g: &Geometry) -> usize {
    g.welded().vertex_count()
}

fn wire_edges(g: &Geometry) -> usize {
    g.to_wireframe().primitive_count()
}

#[test]
fn platonic_solids_have_expected_topology() {
    // (geometry, faces, vertices, edges)
    let cases = [
        (tetrahedron(1.0, 0), 4, 4, 6),
        (octahedron(1.0, 0), 8, 6, 12),
        (icosahedron(1.0, 0), 20, 12, 30),
        (dodecahedron(1.0, 0), 36, 20, 54),
    ];
    for (g, faces, verts, edges) in cases {
        assert_on_unit_sphere(&g);
        assert_eq!(g.primitive_count(), faces);
        assert_eq!(distinct_vertices(&g), verts);
        assert_eq!(wire_edges(&g), edges);
    }
}

#[test]
fn subdivided_icosahedron_splits_each_face_in_four() {
    let g = icosahedron(1.0, 1);
    assert_on_unit_sphere(&g);
    assert_eq!(g.primitive_count(), 80);
    assert_eq!(distinct_vertices(&g), 42);
    assert_eq!(wire_edges(&g), 120);
}

#[test]
fn radius_scales_vertices() {
    let g = octahedron(3.0, 0);
    for p in &g.positions {
        assert!((Vec3::from(*p).length() - 3.0).abs() < 1e-5);
    }
}

#[test]
fn torus_grid_counts() {
    let g = torus(1.0, 0.3, 8, 16);
    assert_eq!(g.vertex_count(), 9 * 17);
    assert_eq!(g.primitive_count(), 8 * 16 * 2);
    // Seam columns weld away; a closed torus obeys V - E + F = 0.
    let v = distinct_vertices(&g) as i64;
    let e = wire_edges(&g) as i64;
    let f = g.primitive_count() as i64;
    assert_eq!(v, 8 * 16);
    assert_eq!(v - e + f, 0);
}

#[test]
fn torus_vertices_stay_within_tube() {
    let g = torus(20.0, 0.05, 8, 100);
    for p in &g.positions {
        let ring = (p[0] * p[0] + p[1] * p[1]).sqrt();
        let d = ((ring - 20.0).powi(2) + p[2] * p[2]).sqrt();
        assert!((d - 0.05).abs() < 1e-4);
    }
}

#[test]
fn torus_knot_counts_and_extent() {
    let g = torus_knot(1.0, 0.3, 64, 8, 2, 3);
    assert_eq!(g.vertex_count(), 65 * 9);
    assert_eq!(g.primitive_count(), 64 * 8 * 2);
    for p in &g.positions {
        // Core curve radius is at most 1.5, plus the tube.
        assert!(Vec3::from(*p).length() <= 1.5 + 0.3 + 1e-3);
    }
}

#[test]
fn wireframe_of_lines_is_identity() {
    let w = tetrahedron(1.0, 0).to_wireframe();
    let again = w.to_wireframe();
    assert_eq!(w.indices, again.indices);
    assert_eq!(again.topology, Topology::Lines);
}

/// Twice the signed area; positive for counter-clockwise winding.
fn signed_area(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let [x0, y0] = points[i];
            let [x1, y1] = points[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum()
}

fn fill_area(fill: &Fill) -> f32 {
    fill.indices
        .chunks_exact(3)
        .map(|t| {
            let tri: Vec<[f32; 2]> = t.iter().map(|&i| fill.positions[i as usize]).collect();
            signed_area(&tri).abs() * 0.5
        })
        .sum()
}

#[test]
fn fill_square() {
    let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let fill = fill_polygon(&square).unwrap();
    assert_eq!(fill.positions.len(), 4);
    assert_eq!(fill.indices.len(), 6);
    assert!((fill_area(&fill) - 1.0).abs() < 1e-5);
}

#[test]
fn fill_ignores_winding() {
    let square_cw = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
    let fill = fill_polygon(&square_cw).unwrap();
    assert!((fill_area(&fill) - 1.0).abs() < 1e-5);
}

#[test]
fn fill_of_degenerate_outline_is_empty() {
    let fill = fill_polygon(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    assert!(fill.positions.is_empty());
    assert!(fill.indices.is_empty());
}

#[test]
fn concave_fill_stays_inside_outline() {
    // L-shape: area 3, with a reflex corner at (1, 1).
    let l_shape = [
        [0.0, 0.0],
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ];
    let fill = fill_polygon(&l_shape).unwrap();
    assert!((fill_area(&fill) - 3.0).abs() < 1e-4);
}

#[test]
fn heart_fill_covers_outline_area() {
    let outline = heart_outline().sample(12);
    assert_eq!(heart_outline().segments().len(), 6);
    // 6 segments x 12 divisions, shared joints and the closing point dropped
    assert_eq!(outline.len(), 72);

    let fill = fill_polygon(&outline).unwrap();
    assert!(fill.positions.len() <= outline.len());
    for p in &fill.positions {
        let on_outline = outline
            .iter()
            .any(|q| (q[0] - p[0]).abs() < 1e-5 && (q[1] - p[1]).abs() < 1e-5);
        assert!(on_outline, "fill added vertex {:?}", p);
    }

    let outline_area = signed_area(&outline).abs() * 0.5;
    assert!(outline_area > 1.0);
    assert!((fill_area(&fill) - outline_area).abs() < outline_area * 0.01);
}

#[test]
fn heart_geometry_is_flat() {
    let g = shape_from_path(&heart_outline(), 12).unwrap();
    assert_eq!(g.topology, Topology::Triangles);
    assert!(g.primitive_count() > 0);
    assert!(g.positions.iter().all(|p| p[2] == 0.0));
}
