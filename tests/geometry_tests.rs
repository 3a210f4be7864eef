//! Integration tests for SegmentGeometry

mod common;
use common::approx;

use loop_loader::geometry::{CIRCLE_TOP, GAP_BETWEEN_SEGMENTS, normalize_degrees};
use loop_loader::{Family, RotationDirection, SegmentGeometry};

#[test]
fn width_and_odd_offset_follow_segment_count() {
    for n in (2..=24).step_by(2) {
        let geometry = SegmentGeometry::new(n).unwrap();
        assert!(approx(geometry.segment_width(), 360.0 / n as f32));
        assert!(approx(geometry.base_offset(Family::Even), 270.0));
        assert!(approx(
            geometry.base_offset(Family::Odd),
            270.0 + 360.0 / n as f32
        ));
    }
}

#[test]
fn odd_counts_leave_previous_count_unchanged() {
    let mut geometry = SegmentGeometry::new(8).unwrap();

    for n in [1, 3, 5, 7, 13] {
        geometry.set_segment_count(n);
        assert_eq!(geometry.segment_count(), 8);
        assert!(approx(geometry.segment_width(), 45.0));
    }

    geometry.set_segment_count(0);
    assert_eq!(geometry.segment_count(), 8);
}

#[test]
fn valid_count_recomputes_layout() {
    let mut geometry = SegmentGeometry::new(8).unwrap();
    geometry.set_segment_count(4);

    assert_eq!(geometry.segment_count(), 4);
    assert!(approx(geometry.segment_width(), 90.0));
    assert!(approx(geometry.base_offset(Family::Odd), 360.0));
}

#[test]
fn clockwise_active_offset_never_decreases() {
    let geometry = SegmentGeometry::new(6).unwrap();
    let mut previous = f32::MIN;

    for step in 0..=120 {
        let offset = geometry.active_offset(Family::Even, step as f32, RotationDirection::Clockwise);
        assert!(offset >= previous);
        previous = offset;
    }
    assert!(approx(previous, 390.0));
}

#[test]
fn counterclockwise_active_offset_never_increases() {
    let geometry = SegmentGeometry::new(6).unwrap();
    let mut previous = f32::MAX;

    for step in 0..=120 {
        let offset = geometry.active_offset(
            Family::Odd,
            step as f32,
            RotationDirection::Counterclockwise,
        );
        assert!(offset <= previous);
        previous = offset;
    }
    assert!(approx(previous, 330.0 - 120.0));
}

#[test]
fn start_offsets_are_spaced_two_widths_apart() {
    let geometry = SegmentGeometry::new(6).unwrap();
    let offsets: Vec<f32> = geometry.segment_start_offsets(Family::Even).collect();

    assert_eq!(offsets.len(), 3);
    assert!(approx(offsets[0], 270.0));
    assert!(approx(offsets[1], 390.0));
    assert!(approx(offsets[2], 510.0));

    let odd: Vec<f32> = geometry
        .segment_start_offsets(Family::Odd)
        .map(normalize_degrees)
        .collect();
    assert!(approx(odd[0], 330.0));
    assert!(approx(odd[1], 90.0));
    assert!(approx(odd[2], 210.0));
}

#[test]
fn start_offsets_restart_when_cloned() {
    let geometry = SegmentGeometry::new(10).unwrap();
    let offsets = geometry.segment_start_offsets(Family::Odd);

    let first: Vec<f32> = offsets.clone().collect();
    let second: Vec<f32> = offsets.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn two_segments_give_one_per_family_spanning_half_the_ring() {
    let geometry = SegmentGeometry::new(2).unwrap();

    assert_eq!(geometry.segment_start_offsets(Family::Even).count(), 1);
    assert_eq!(geometry.segment_start_offsets(Family::Odd).count(), 1);
    assert!(approx(geometry.segment_width(), 180.0));
    assert!(approx(geometry.sweep(), 180.0 - GAP_BETWEEN_SEGMENTS));
    assert!(approx(geometry.base_offset(Family::Even), CIRCLE_TOP));
    assert!(approx(normalize_degrees(geometry.base_offset(Family::Odd)), 90.0));
}

#[test]
fn families_tile_the_ring() {
    let geometry = SegmentGeometry::new(12).unwrap();
    let mut starts: Vec<f32> = geometry
        .segment_start_offsets(Family::Even)
        .chain(geometry.segment_start_offsets(Family::Odd))
        .map(normalize_degrees)
        .collect();
    starts.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(starts.len(), 12);
    for pair in starts.windows(2) {
        assert!(approx(pair[1] - pair[0], geometry.segment_width()));
    }
}
