// Host-side tests for scene construction and the per-frame tick.

use backdrop_core::shapes::SHAPE_LAYOUT;
use backdrop_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::Infallible;
use std::f32::consts::PI;

fn seeded_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    Scene::build(&mut rng, &SceneConfig::default(), Viewport::default()).unwrap()
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(f32, Vec3)>,
}

impl FrameSink for Recorder {
    type Error = Infallible;

    fn render(&mut self, scene: &Scene) -> Result<(), Infallible> {
        self.frames.push((scene.time, scene.camera.position));
        Ok(())
    }
}

#[test]
fn scene_has_fixed_population() {
    let scene = seeded_scene(1);
    assert_eq!(scene.particles.len(), 2000);
    // seven authored shapes plus the heart
    assert_eq!(scene.shapes.len(), 8);
    assert_eq!(scene.rings.len(), 3);
    assert_eq!(scene.meshes.len(), 11);
}

#[test]
fn shapes_use_authored_placements() {
    let scene = seeded_scene(2);
    for (shape, placement) in scene.shapes.iter().zip(SHAPE_LAYOUT.iter()) {
        let mesh = scene.mesh(shape.mesh);
        assert_eq!(mesh.transform.position, Vec3::from(placement.position));
        assert_eq!(mesh.transform.scale, placement.scale);
        assert_eq!(mesh.material.style, MaterialStyle::Wireframe);
        assert_eq!(mesh.material.opacity, 0.3);
        assert_eq!(shape.params.original_y, placement.position[1]);
    }
}

#[test]
fn random_shape_parameters_stay_in_range() {
    for seed in 0..20 {
        let scene = seeded_scene(seed);
        for shape in &scene.shapes[..7] {
            let p = shape.params;
            for s in p.rotation_speed.to_array() {
                assert!((-0.005..=0.005).contains(&s));
            }
            assert!(p.float_speed >= 0.5 && p.float_speed < 1.0);
            assert!(p.float_offset >= 0.0 && p.float_offset < 2.0 * PI);
        }
    }
}

#[test]
fn heart_has_fixed_parameters() {
    let scene = seeded_scene(3);
    let heart = scene.shapes[7];
    let mesh = scene.mesh(heart.mesh);
    assert_eq!(heart.params.rotation_speed, Vec3::new(0.0, 0.005, 0.0));
    assert_eq!(heart.params.float_speed, 0.8);
    assert_eq!(heart.params.float_offset, 0.0);
    assert_eq!(mesh.transform.position, Vec3::new(0.0, 0.0, -15.0));
    assert_eq!(mesh.transform.scale, 2.0);
    assert!((mesh.transform.rotation.z - PI).abs() < 1e-6);
    assert_eq!(mesh.material.style, MaterialStyle::Solid);
    assert_eq!(mesh.material.opacity, 0.4);
}

#[test]
fn rings_lie_flat_at_authored_heights() {
    let scene = seeded_scene(4);
    let heights: Vec<f32> = scene
        .rings
        .iter()
        .map(|r| scene.mesh(r.mesh).transform.position.y)
        .collect();
    assert_eq!(heights, vec![-5.0, 5.0, 0.0]);
    for ring in &scene.rings {
        let m = scene.mesh(ring.mesh);
        assert!((m.transform.rotation.x - PI / 2.0).abs() < 1e-6);
        assert_eq!(m.material.opacity, 0.2);
    }
}

#[test]
fn tick_spins_rings_by_index() {
    let mut scene = seeded_scene(5);
    let input = InputState::default();
    for k in 1..=10 {
        scene.tick(k as f32 / 60.0, &input);
    }
    for (i, ring) in scene.rings.iter().enumerate() {
        let z = scene.mesh(ring.mesh).transform.rotation.z;
        let expected = 10.0 * 0.002 * (i + 1) as f32;
        assert!((z - expected).abs() < 1e-6, "ring {} z={}", i, z);
    }
}

#[test]
fn tick_floats_shapes_around_original_height() {
    let mut scene = seeded_scene(6);
    let input = InputState::default();
    let t = 3.7;
    scene.tick(t, &input);
    for shape in &scene.shapes {
        let y = scene.mesh(shape.mesh).transform.position.y;
        let p = shape.params;
        let expected = p.original_y + (t * p.float_speed + p.float_offset).sin() * 2.0;
        assert!((y - expected).abs() < 1e-5);
    }
}

#[test]
fn tick_rotates_particle_field() {
    let mut scene = seeded_scene(7);
    scene.tick(10.0, &InputState::default());
    assert!((scene.particle_rotation.y - 0.5).abs() < 1e-6);
    assert!((scene.particle_rotation.x - (1.0_f32).sin() * 0.1).abs() < 1e-6);
    assert_eq!(scene.time, 10.0);
}

#[test]
fn scroll_sets_depth_and_adds_drift() {
    let mut scene = seeded_scene(8);
    let mut input = InputState::default();
    input.set_scroll(1000.0, 3000.0, 1000.0); // progress 0.5
    scene.tick(2.0, &input);
    assert!((scene.camera.position.z - 40.0).abs() < 1e-5);
    assert!((scene.particle_rotation.y - (2.0 * 0.05 + 0.5 * 0.001)).abs() < 1e-6);
}

#[test]
fn depth_follows_fresh_page_metrics_without_scrolling() {
    let mut scene = seeded_scene(9);
    let mut input = InputState::default();
    input.set_scroll(2000.0, 3000.0, 1000.0); // bottom of the page
    scene.tick(1.0, &input);
    assert!((scene.camera.position.z - 50.0).abs() < 1e-5);

    // Viewport shrinks, scroll offset unchanged: range is now 2500.
    input.set_scroll(2000.0, 3000.0, 500.0);
    scene.tick(1.0, &input);
    assert!((scene.camera.position.z - 46.0).abs() < 1e-4);
}

#[test]
fn identical_inputs_replay_identically() {
    let mut a = seeded_scene(42);
    let mut b = seeded_scene(42);
    let mut input = InputState::default();
    for k in 0..120 {
        let t = k as f32 / 60.0;
        input.pointer = Vec2::new((t * 0.7).sin(), (t * 1.3).cos());
        input.set_scroll(k as f32 * 10.0, 5000.0, 900.0);
        a.tick(t, &input);
        b.tick(t, &input);
    }
    assert_eq!(a.camera.position, b.camera.position);
    for (ma, mb) in a.meshes.iter().zip(b.meshes.iter()) {
        assert_eq!(ma.transform, mb.transform);
    }
    assert_eq!(a.particle_rotation, b.particle_rotation);
}

#[test]
fn run_frame_renders_exactly_once_per_tick() {
    let mut scene = seeded_scene(9);
    let mut sink = Recorder::default();
    let input = InputState::default();
    for k in 0..5 {
        run_frame(&mut scene, k as f32 * 0.5, &input, &mut sink).unwrap();
    }
    assert_eq!(sink.frames.len(), 5);
    let times: Vec<f32> = sink.frames.iter().map(|f| f.0).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn resize_updates_aspect_and_caps_pixel_ratio() {
    let mut scene = seeded_scene(10);
    scene.resize(Viewport::new(1920.0, 1080.0, 3.0));
    assert_eq!(scene.pixel_ratio, 2.0);
    assert!((scene.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);

    scene.resize(Viewport::new(800.0, 800.0, 1.5));
    assert_eq!(scene.pixel_ratio, 1.5);
    assert_eq!(scene.camera.aspect, 1.0);
}

#[test]
fn back_to_front_orders_by_camera_distance() {
    let scene = seeded_scene(11);
    let order = scene.back_to_front();
    assert_eq!(order.len(), scene.meshes.len());
    let eye = scene.camera.position;
    let dists: Vec<f32> = order
        .iter()
        .map(|id| scene.mesh(*id).transform.position.distance(eye))
        .collect();
    assert!(dists.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn new_rejects_invalid_config() {
    let config = SceneConfig {
        particle_count: 0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        Scene::new(&config, Viewport::default()),
        Err(SceneError::Config(ConfigError::NoParticles))
    ));
}

#[test]
fn build_validates_before_sampling() {
    let config = SceneConfig {
        tints: Vec::new(),
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        Scene::build(&mut rng, &config, Viewport::default()),
        Err(SceneError::Config(ConfigError::NoTints))
    ));
}
