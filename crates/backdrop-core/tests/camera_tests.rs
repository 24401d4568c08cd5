// Host-side tests for the parallax camera and input normalisation.

use backdrop_core::camera::{depth_for_progress, pointer_target};
use backdrop_core::input::{normalize_pointer, scroll_progress};
use backdrop_core::{CameraRig, InputState};
use glam::Vec2;

#[test]
fn camera_starts_at_base_depth_looking_at_origin() {
    let cam = CameraRig::default();
    assert_eq!(cam.position.z, 30.0);
    assert_eq!(cam.target, glam::Vec3::ZERO);
    assert!((cam.fovy_radians - 75.0_f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, 0.1);
    assert_eq!(cam.zfar, 1000.0);
}

#[test]
fn pointer_normalisation_maps_window_to_unit_square() {
    assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_pointer(400.0, 300.0, 800.0, 600.0), Vec2::new(0.0, 0.0));
    assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, 1.0));
}

#[test]
fn pointer_target_flips_y() {
    let t = pointer_target(Vec2::new(1.0, 1.0));
    assert_eq!(t, Vec2::new(5.0, -3.0));
}

#[test]
fn smoothing_converges_within_230_frames() {
    let mut cam = CameraRig::default();
    let pointer = Vec2::new(1.0, -1.0); // target (5, 3)
    for _ in 0..230 {
        cam.follow_pointer(pointer);
    }
    assert!((cam.position.x - 5.0).abs() < 0.05);
    assert!((cam.position.y - 3.0).abs() < 0.03);
}

#[test]
fn smoothing_has_not_converged_after_200_frames() {
    let mut cam = CameraRig::default();
    for _ in 0..200 {
        cam.follow_pointer(Vec2::new(1.0, 0.0));
    }
    // 5 * 0.98^200 ~= 0.088 still left
    assert!((cam.position.x - 5.0).abs() > 0.05);
}

#[test]
fn single_step_moves_two_percent() {
    let mut cam = CameraRig::default();
    cam.follow_pointer(Vec2::new(1.0, 0.0));
    assert!((cam.position.x - 0.1).abs() < 1e-6);
}

#[test]
fn scroll_endpoints_map_to_depth_range() {
    let page = 4000.0;
    let view = 1000.0;
    assert_eq!(depth_for_progress(scroll_progress(0.0, page, view)), 30.0);
    assert_eq!(depth_for_progress(scroll_progress(3000.0, page, view)), 50.0);
    assert_eq!(depth_for_progress(scroll_progress(1500.0, page, view)), 40.0);
}

#[test]
fn scroll_progress_is_not_clamped() {
    // Page shrank after the offset was read.
    let p = scroll_progress(3000.0, 2000.0, 1000.0);
    assert_eq!(p, 3.0);
}

#[test]
fn non_scrollable_page_has_zero_progress() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
}

#[test]
fn input_state_last_write_wins() {
    let mut input = InputState::default();
    input.set_pointer(0.0, 0.0, 100.0, 100.0);
    input.set_pointer(100.0, 50.0, 100.0, 100.0);
    assert_eq!(input.pointer, Vec2::new(1.0, 0.0));
    input.set_scroll(250.0, 2000.0, 1000.0);
    assert_eq!(input.scroll_progress(), 0.25);
}
