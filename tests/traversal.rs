//! Worked traversal scenarios: bounces, laps, duplicates, sink variants

use glam::Vec2;

use waypoint_patrol::PatrolConfig;
use waypoint_patrol::sim::{Direction, KinematicBody, LoopMode, Motion, Patrol, TransformSink};

fn line_yoyo(speed: f32) -> PatrolConfig {
    PatrolConfig::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], LoopMode::PingPong).with_speed(speed)
}

fn triangle() -> Vec<Vec2> {
    // Sides 5, 6, 5 -> lap of 16; half a lap lands mid-way along B->C
    vec![Vec2::ZERO, Vec2::new(4.0, 3.0), Vec2::new(4.0, -3.0)]
}

#[test]
fn test_ping_pong_one_step_per_tick() {
    let mut patrol = Patrol::new(&line_yoyo(5.0), KinematicBody::default()).unwrap();
    let expected = [
        (Vec2::new(5.0, 0.0), Direction::Forward),
        (Vec2::new(10.0, 0.0), Direction::Backward),
        (Vec2::new(5.0, 0.0), Direction::Backward),
        (Vec2::ZERO, Direction::Forward),
    ];

    for (pos, dir) in expected {
        assert_eq!(patrol.tick(1.0).position, pos);
        assert_eq!(patrol.state().direction(), dir);
    }
}

#[test]
fn test_many_bounces_in_one_tick() {
    let mut patrol = Patrol::new(&line_yoyo(100.0), KinematicBody::default()).unwrap();

    // Budget covers the 10-unit line ten times: out and back five times
    let report = patrol.tick(1.0);
    assert_eq!(report.integration.flips, 10);
    assert_eq!(report.integration.waypoints_reached, 10);
    assert_eq!(report.integration.distance, 100.0);
    assert_eq!(report.position, Vec2::ZERO);
    assert_eq!(patrol.state().direction(), Direction::Forward);
    assert_eq!(patrol.state().segment_start_index(), 0);
}

#[test]
fn test_many_bounces_ending_mid_segment() {
    let mut patrol = Patrol::new(&line_yoyo(95.0), KinematicBody::default()).unwrap();

    // Nine passes end at the far side heading back, then 5 more units
    let report = patrol.tick(1.0);
    assert_eq!(report.integration.flips, 9);
    assert_eq!(report.position, Vec2::new(5.0, 0.0));
    assert_eq!(patrol.state().direction(), Direction::Backward);
    assert_eq!(patrol.state().segment_start_index(), 1);
}

#[test]
fn test_two_and_a_half_laps_single_tick() {
    let config = PatrolConfig::new(triangle(), LoopMode::Closed).with_speed(40.0);
    let mut patrol = Patrol::new(&config, TransformSink::default()).unwrap();

    let report = patrol.tick(1.0);
    assert_eq!(report.position, Vec2::new(4.0, 0.0));
    assert_eq!(patrol.state().segment_start_index(), 1);
    assert_eq!(report.integration.flips, 0);
}

#[test]
fn test_two_and_a_half_laps_fixed_ticks() {
    let config = PatrolConfig::new(triangle(), LoopMode::Closed).with_speed(4.0);
    let mut patrol = Patrol::new(&config, TransformSink::default()).unwrap();

    for _ in 0..500 {
        patrol.tick(0.02);
    }

    assert!(patrol.position().distance(Vec2::new(4.0, 0.0)) < 1e-3);
    assert_eq!(patrol.state().segment_start_index(), 1);
    assert_eq!(patrol.state().direction(), Direction::Forward);
}

#[test]
fn test_duplicate_waypoint_is_skipped() {
    let config = PatrolConfig::new(
        vec![
            Vec2::ZERO,
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 0.0),
        ],
        LoopMode::PingPong,
    )
    .with_speed(7.0);
    let mut patrol = Patrol::new(&config, KinematicBody::default()).unwrap();

    let report = patrol.tick(1.0);
    assert_eq!(report.position, Vec2::new(7.0, 0.0));
    // One real arrival plus one snap through the duplicate
    assert_eq!(report.integration.waypoints_reached, 2);
    assert_eq!(report.integration.distance, 7.0);
    assert_eq!(patrol.state().segment_start_index(), 2);

    // Keep going through many reversals; each crossing of the duplicate is a single snap
    for _ in 0..1_000 {
        let report = patrol.tick(1.0);
        assert!(report.integration.waypoints_reached <= 3);
        assert!(!report.integration.stalled);
    }
}

#[test]
fn test_sink_variants_agree() {
    let config = PatrolConfig::new(triangle(), LoopMode::Closed).with_speed(3.3);
    let mut body = Patrol::new(&config, KinematicBody::default()).unwrap();
    let mut plain = Patrol::new(&config, TransformSink::default()).unwrap();

    for _ in 0..200 {
        let a = body.tick(0.05);
        let b = plain.tick(0.05);
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn test_kinematic_body_sees_sweeps_and_teleports() {
    let mut patrol = Patrol::new(&line_yoyo(4.0), KinematicBody::default()).unwrap();
    patrol.sink_mut().take_sweeps();

    patrol.tick(1.0);
    assert_eq!(
        patrol.sink().last_motion(),
        Motion::Swept {
            from: Vec2::ZERO,
            to: Vec2::new(4.0, 0.0)
        }
    );

    patrol.tick(1.0);
    assert_eq!(patrol.position(), Vec2::new(8.0, 0.0));
    // 8 -> 10 lands exactly on the end: teleport, not a sweep
    patrol.tick(0.5);
    assert_eq!(
        patrol.sink().last_motion(),
        Motion::Teleported {
            to: Vec2::new(10.0, 0.0)
        }
    );
    assert_eq!(patrol.sink_mut().take_sweeps().len(), 2);
}

fn huge_speed(length: f32, mode: LoopMode) -> PatrolConfig {
    PatrolConfig::new(vec![Vec2::ZERO, Vec2::new(length, 0.0)], mode).with_speed(1e8)
}

#[test]
fn test_huge_budget_on_unit_line_returns() {
    for mode in [LoopMode::Closed, LoopMode::PingPong] {
        let mut patrol = Patrol::new(&huge_speed(1.0, mode), KinematicBody::default()).unwrap();

        // 1e8 is a whole number of 2-unit cycles
        let report = patrol.tick(1.0);
        assert_eq!(report.position, Vec2::ZERO);
        assert_eq!(patrol.state().segment_start_index(), 0);
        assert_eq!(patrol.state().direction(), Direction::Forward);
        assert!(report.integration.cycles_skipped > 0);
        assert!(!report.integration.stalled);
    }
}

#[test]
fn test_huge_budget_keeps_remainder() {
    // 1e8 mod 6 leaves 4: out 3, then 1 back (or around)
    let mut closed = Patrol::new(&huge_speed(3.0, LoopMode::Closed), TransformSink::default()).unwrap();
    assert_eq!(closed.tick(1.0).position, Vec2::new(2.0, 0.0));
    assert_eq!(closed.state().segment_start_index(), 1);

    let mut yoyo = Patrol::new(&huge_speed(3.0, LoopMode::PingPong), TransformSink::default()).unwrap();
    assert_eq!(yoyo.tick(1.0).position, Vec2::new(2.0, 0.0));
    assert_eq!(yoyo.state().direction(), Direction::Backward);
}

#[test]
fn test_huge_budget_with_dwell_stops_at_end() {
    let config = huge_speed(1.0, LoopMode::PingPong).with_pause_at_ends(0.5);
    let mut patrol = Patrol::new(&config, KinematicBody::default()).unwrap();

    let report = patrol.tick(1.0);
    assert!(report.integration.pause_armed);
    assert_eq!(report.integration.cycles_skipped, 0);
    assert_eq!(report.position, Vec2::new(1.0, 0.0));
}
