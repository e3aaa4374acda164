// Host-side tests for the start/stop lifecycle and frame error policy.

mod common;

use card_particles::core::*;
use common::{Op, RecordingSurface};
use instant::Instant;
use std::time::Duration;

fn balloon_stage() -> Stage<RecordingSurface> {
    let field = ParticleField::new(Variant::Balloons.config(), SurfaceSize::new(800, 600), 42);
    Stage::new(field, RecordingSurface::default()).unwrap()
}

#[test]
fn construction_sizes_the_surface_and_uploads_the_palette() {
    let stage = balloon_stage();
    assert_eq!(
        stage.surface().ops,
        vec![
            Op::Resize(SurfaceSize::new(800, 600)),
            Op::Palette(3, ColorMode::Neutral)
        ]
    );
    assert_eq!(stage.state(), RunState::Idle);
}

#[test]
fn nothing_happens_before_start() {
    let mut stage = balloon_stage();
    assert!(!stage.frame(Instant::now()));
    assert!(!stage.pointer_down(1.0, 1.0));
    assert!(!stage.stop());
    assert_eq!(stage.surface().ops.len(), 2);
}

#[test]
fn running_stage_renders_frames_and_routes_input() {
    let mut stage = balloon_stage();
    assert!(stage.start());
    assert!(!stage.start(), "second start is a no-op");
    assert!(stage.frame(Instant::now()));
    assert!(stage.surface().ops.contains(&Op::Clear(SurfaceSize::new(800, 600))));
    assert!(stage.pointer_down(0.0, 0.0));
    assert!(stage.is_dragging());
    assert!(stage.pointer_move(10.0, 0.0));
    assert!(stage.pointer_up());
    assert!(!stage.is_dragging());
    assert!((stage.field().orbit().rotation_y - 2.0).abs() < 1e-6);
    assert_eq!(stage.frame_counts(), (1, 0));
}

#[test]
fn after_stop_no_callback_reaches_the_surface_or_state() {
    let mut stage = balloon_stage();
    stage.start();
    let t0 = Instant::now();
    stage.frame(t0);
    assert!(stage.pointer_down(5.0, 5.0));

    assert!(stage.stop());
    assert!(!stage.stop(), "stop is idempotent");
    assert!(!stage.is_dragging(), "teardown ends any drag");

    let ops_before = stage.surface().ops.clone();
    let orbit_before = *stage.field().orbit();
    let positions: Vec<_> = stage.field().particles().iter().map(|p| p.position).collect();

    assert!(!stage.frame(t0 + Duration::from_millis(16)));
    assert!(!stage.pointer_down(0.0, 0.0));
    assert!(!stage.pointer_move(100.0, 100.0));
    assert!(!stage.pointer_up());
    assert!(!stage.pointer_leave());
    assert!(!stage.wheel(500.0));
    assert_eq!(stage.click(400.0, 300.0, t0), None);
    stage.set_color_mode(ColorMode::Tinted);
    stage.resize(1024, 768);

    assert_eq!(stage.surface().ops, ops_before);
    assert_eq!(*stage.field().orbit(), orbit_before);
    let after: Vec<_> = stage.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(positions, after);
    assert!(stage.field().particles().iter().all(|p| !p.popped));
}

#[test]
fn restart_resyncs_size_and_palette_changed_while_stopped() {
    let mut stage = balloon_stage();
    stage.start();
    stage.stop();
    stage.resize(0, -5);
    stage.set_color_mode(ColorMode::Tinted);
    let n = stage.surface().ops.len();

    assert!(stage.start());
    assert_eq!(
        stage.surface().ops[n..],
        [
            Op::Resize(SurfaceSize::new(1, 1)),
            Op::Palette(3, ColorMode::Tinted)
        ]
    );
    assert_eq!(stage.field().size(), SurfaceSize::new(1, 1));
}

#[test]
fn failed_frames_are_skipped_and_the_loop_keeps_going() {
    let field = ParticleField::new(Variant::Hearts.config(), SurfaceSize::new(800, 600), 1);
    let mut stage = Stage::new(field, RecordingSurface::failing()).unwrap();
    stage.start();
    let t0 = Instant::now();
    assert!(stage.frame(t0));
    assert!(stage.frame(t0 + Duration::from_millis(16)));
    assert!(stage.is_running());
    assert_eq!(stage.frame_counts(), (0, 2));
}

#[test]
fn resize_while_running_reaches_surface_and_field() {
    let mut stage = balloon_stage();
    stage.start();
    stage.resize(1280, 720);
    assert_eq!(
        stage.surface().ops.last(),
        Some(&Op::Resize(SurfaceSize::new(1280, 720)))
    );
    assert_eq!(stage.field().size(), SurfaceSize::new(1280, 720));
}

#[test]
fn color_mode_change_uploads_a_new_palette_once() {
    let mut stage = balloon_stage();
    stage.start();
    stage.set_color_mode(ColorMode::Tinted);
    stage.set_color_mode(ColorMode::Tinted);
    let uploads = stage
        .surface()
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Palette(_, ColorMode::Tinted)))
        .count();
    assert_eq!(uploads, 1);
}
