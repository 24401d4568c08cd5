// Host-side tests for the particle field builder and the CPU mirrors of the
// particle shader.

use backdrop_core::palette::TINTS;
use backdrop_core::particles::*;
use backdrop_core::PARTICLE_COUNT;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::build(&mut rng, PARTICLE_COUNT, &TINTS)
}

#[test]
fn buffers_have_expected_lengths() {
    let f = field(1);
    assert_eq!(f.len(), 2000);
    assert_eq!(f.positions.len(), 6000);
    assert_eq!(f.colors.len(), 6000);
    assert_eq!(f.sizes.len(), 2000);
}

#[test]
fn positions_lie_within_spherical_shell() {
    let f = field(2);
    for i in 0..f.len() {
        let r = f.position(i).length();
        assert!(
            (50.0 - 1e-3..=150.0 + 1e-3).contains(&r),
            "particle {} radius {} outside shell",
            i,
            r
        );
    }
}

#[test]
fn colors_are_exact_tint_entries() {
    let f = field(3);
    let tints: Vec<[f32; 3]> = TINTS.iter().map(|s| s.linear_rgb()).collect();
    for i in 0..f.len() {
        let c = f.color(i);
        assert!(tints.contains(&c), "particle {} has off-palette color {:?}", i, c);
    }
}

#[test]
fn every_tint_gets_used() {
    // 2000 uniform draws over 5 tints: all should appear.
    let f = field(4);
    for tint in TINTS.iter().map(|s| s.linear_rgb()) {
        assert!((0..f.len()).any(|i| f.color(i) == tint));
    }
}

#[test]
fn empty_tint_list_keeps_colors_parallel() {
    let mut rng = StdRng::seed_from_u64(6);
    let f = ParticleField::build(&mut rng, 16, &[]);
    assert_eq!(f.colors.len(), f.positions.len());
    for i in 0..f.len() {
        assert_eq!(f.color(i), [1.0; 3]);
    }
}

#[test]
fn sizes_are_in_half_open_range() {
    let f = field(5);
    for &s in &f.sizes {
        assert!(s >= 0.5 && s < 2.5, "size {} out of range", s);
    }
}

#[test]
fn same_seed_same_field() {
    let a = field(99);
    let b = field(99);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.colors, b.colors);
    assert_eq!(a.sizes, b.sizes);
}

#[test]
fn displacement_at_time_zero() {
    let p = Vec3::new(0.0, 10.0, 0.0);
    let d = displace(p, 0.0);
    // sin(0) = 0 on y, cos(0) = 1 on x
    assert!((d.y - 10.0).abs() < 1e-6);
    assert!((d.x - 1.5).abs() < 1e-6);
    assert_eq!(d.z, 0.0);
}

#[test]
fn displacement_is_bounded_and_pure() {
    let p = Vec3::new(12.0, -4.0, 33.0);
    for k in 0..200 {
        let t = k as f32 * 0.37;
        let d = displace(p, t);
        assert!((d.x - p.x).abs() <= 1.5 + 1e-5);
        assert!((d.y - p.y).abs() <= 2.0 + 1e-5);
        assert_eq!(d.z, p.z);
        assert_eq!(d, displace(p, t));
    }
}

#[test]
fn point_size_attenuates_with_depth() {
    // size 1 at 300 units in front with pixel ratio 1 is exactly 1px
    assert!((point_size(1.0, 1.0, -300.0) - 1.0).abs() < 1e-6);
    assert!((point_size(2.0, 2.0, -30.0) - 40.0).abs() < 1e-4);
    assert!(point_size(1.0, 1.0, -50.0) > point_size(1.0, 1.0, -100.0));
}

#[test]
fn glow_alpha_profile() {
    assert_eq!(glow_alpha(0.0), Some(0.8));
    assert_eq!(glow_alpha(0.5), Some(0.0));
    assert_eq!(glow_alpha(0.5001), None);
    let mid = glow_alpha(0.25).unwrap();
    assert!((mid - 0.4).abs() < 1e-6);
}
