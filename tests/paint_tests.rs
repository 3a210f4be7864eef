//! Integration tests for LoaderPainter and DrawPlan

mod common;
use common::*;

use loop_loader::colors::{DARK_GRAY, LIGHT_GRAY, WHITE};
use loop_loader::{
    DrawPlan, LoaderFrame, LoaderPainter, LoopLoader, Paint, PaintError, Point, Viewport,
    draw_op_count,
};

fn first_frame(config: loop_loader::LoaderConfig<TestDuration>) -> LoaderFrame {
    let timer = MockTimeSource::new();
    let mut loader = LoopLoader::<TestInstant, RecordingRenderer, MockTimeSource>::new(
        config,
        RecordingRenderer::new(),
        &timer,
    );
    loader.start();
    *loader.renderer().last().unwrap()
}

#[test]
fn viewport_squares_to_shorter_side() {
    let viewport = Viewport::new(300.0, 200.0);
    assert_eq!(viewport.size(), 200.0);
    assert_eq!(viewport.center(), Point::new(150.0, 100.0));
}

#[test]
fn radii_leave_room_for_peak_scale() {
    let painter = LoaderPainter::new(&scenario_config(), Viewport::new(400.0, 400.0));

    assert!(approx(painter.ring_radius(), 147.5));
    assert!(approx(painter.outer_clip_radius(), 195.0));
    assert!(approx(painter.inner_circle_radius(), 100.0));
}

#[test]
fn paint_issues_calls_back_to_front() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));
    let mut canvas = MockCanvas::new();

    painter.paint(&frame, &mut canvas);
    let calls = canvas.calls();

    assert_eq!(calls.len(), draw_op_count(6));
    assert!(matches!(calls[0], CanvasCall::Clip { radius, .. } if approx(radius, 195.0)));
    match calls[calls.len() - 1] {
        CanvasCall::Circle { radius, color, .. } => {
            assert!(approx(radius, 100.0));
            assert!(colors_equal(color, DARK_GRAY));
        }
        other => panic!("expected inner circle last, got {:?}", other),
    }
}

#[test]
fn passive_segments_use_gradient_at_passive_scale() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));
    let mut canvas = MockCanvas::new();
    painter.paint(&frame, &mut canvas);

    // Odd family is passive on the first frame and is painted first
    let passive: Vec<_> = canvas.arcs().take(3).collect();
    let starts: Vec<f32> = passive.iter().map(|(arc, _)| arc.start_angle).collect();
    assert!(approx(starts[0], 330.0));
    assert!(approx(starts[1], 90.0));
    assert!(approx(starts[2], 210.0));

    for (arc, stroke) in passive {
        assert!(approx(arc.sweep_angle, 57.5));
        assert!(approx(stroke.width, 105.0));
        assert!(stroke.blur.is_none());
        match stroke.paint {
            Paint::RadialGradient(gradient) => {
                assert!(colors_equal(gradient.colors[0], WHITE));
                assert!(colors_equal(gradient.colors[1], DARK_GRAY));
                assert_eq!(gradient.stops, [0.6, 0.8]);
                assert!(approx(gradient.radius, 295.0));
            }
            Paint::Solid(_) => panic!("passive segments should be shaded"),
        }
    }
}

#[test]
fn active_segments_sit_on_blurred_shadows() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));
    let mut canvas = MockCanvas::new();
    painter.paint(&frame, &mut canvas);

    let active: Vec<_> = canvas.arcs().skip(3).collect();
    assert_eq!(active.len(), 6);

    for pair in active.chunks(2) {
        let (shadow_arc, shadow) = pair[0];
        let (arc, stroke) = pair[1];

        assert!(approx(shadow_arc.start_angle, arc.start_angle - 2.0));
        assert!(approx(shadow_arc.sweep_angle, arc.sweep_angle + 6.0));
        assert!(approx(shadow.width, 92.0));
        assert_eq!(shadow.blur, Some(4.0));
        assert_eq!(shadow.paint, Paint::Solid(DARK_GRAY));

        assert!(approx(stroke.width, 100.0));
        assert!(stroke.blur.is_none());
        assert!(matches!(stroke.paint, Paint::Solid(color) if colors_equal(color, LIGHT_GRAY)));
    }

    let (first_arc, _) = active[1];
    assert!(approx(first_arc.start_angle, 270.0));
    assert!(approx(first_arc.bounds().width(), 295.0));
    assert_eq!(first_arc.bounds().center(), Point::new(200.0, 200.0));
}

#[test]
fn gradient_can_be_disabled() {
    let mut config = scenario_config();
    config.set_gradient_enabled(false);
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));
    let mut canvas = MockCanvas::new();
    painter.paint(&frame, &mut canvas);

    let (_, stroke) = canvas.arcs().next().unwrap();
    assert!(matches!(stroke.paint, Paint::Solid(color) if colors_equal(color, WHITE)));
}

#[test]
fn plan_rejects_small_capacity() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));

    let result = painter.plan::<8>(&frame);
    assert_eq!(
        result.err(),
        Some(PaintError::CapacityExceeded {
            required: 11,
            capacity: 8,
        })
    );
}

#[test]
fn plan_replays_identically() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));

    let plan = painter.plan::<16>(&frame).unwrap();
    assert_eq!(plan.len(), 11);
    assert!(!plan.is_truncated());

    let mut direct = MockCanvas::new();
    painter.paint(&frame, &mut direct);
    let mut replayed = MockCanvas::new();
    plan.replay(&mut replayed);

    assert_eq!(direct.calls(), replayed.calls());
}

#[test]
fn recording_past_capacity_marks_plan_truncated() {
    let config = scenario_config();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));

    let mut plan = DrawPlan::<4>::new();
    painter.paint(&frame, &mut plan);
    assert_eq!(plan.len(), 4);
    assert!(plan.is_truncated());

    plan.clear();
    assert!(plan.is_empty());
    assert!(!plan.is_truncated());
}

#[test]
fn two_segment_ring_draws_one_arc_per_family() {
    let config = loop_loader::LoaderConfig::builder()
        .segment_count(2)
        .build()
        .unwrap();
    let frame = first_frame(config);
    let painter = LoaderPainter::new(&config, Viewport::new(400.0, 400.0));
    let mut canvas = MockCanvas::new();
    painter.paint(&frame, &mut canvas);

    // one passive arc, one shadow + arc for the active family
    assert_eq!(canvas.arcs().count(), 3);
    let (arc, _) = canvas.arcs().last().unwrap();
    assert!(approx(arc.sweep_angle, 177.5));
}
