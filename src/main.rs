//! Waypoint Patrol entry point
//!
//! Headless host loop: feeds jittered frame times through a fixed-step
//! accumulator and prints every tick's committed position as JSON lines.
//!
//! Usage: `waypoint-patrol [config.json] [seconds] [seed]`

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use waypoint_patrol::sim::{FixedTimestep, KinematicBody, LoopMode, Patrol};
use waypoint_patrol::{PatrolConfig, markers};

/// One output line
#[derive(Serialize)]
struct Sample {
    tick: u64,
    time: f32,
    pos: Vec2,
    segment: usize,
    direction: i8,
    paused: bool,
    sweeps: usize,
}

fn demo_config() -> PatrolConfig {
    PatrolConfig::new(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 3.0),
        ],
        LoopMode::PingPong,
    )
    .with_speed(3.0)
    .with_pause_at_ends(0.5)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => PatrolConfig::load(path)?,
        None => {
            log::info!("No config given, running built-in demo path");
            demo_config()
        }
    };
    let seconds = args.next().map(|s| s.parse::<f32>()).transpose()?.unwrap_or(5.0);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(42);

    let mut patrol = Patrol::new(&config, KinematicBody::default())?;
    log::info!(
        "{} trajectory markers at default spacing",
        markers::sample_markers(patrol.path(), waypoint_patrol::consts::DEFAULT_MARKER_SPACING).len()
    );

    // Frame times wobble around 60 Hz; the patrol only ever sees fixed ticks
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut clock = FixedTimestep::default();
    let mut elapsed = 0.0_f32;
    let mut ticks = 0_u64;

    while elapsed < seconds {
        let frame_dt = rng.random_range(0.010_f32..0.024);
        elapsed += frame_dt;

        for _ in 0..clock.advance(frame_dt) {
            let report = patrol.tick(clock.step());
            ticks += 1;

            let state = patrol.state();
            let sample = Sample {
                tick: ticks,
                time: ticks as f32 * clock.step(),
                pos: report.position,
                segment: state.segment_start_index(),
                direction: state.direction().sign() as i8,
                paused: report.paused,
                sweeps: patrol.sink_mut().take_sweeps().len(),
            };
            println!("{}", serde_json::to_string(&sample)?);
        }
    }

    log::info!("Ran {} ticks over {:.2}s of frames", ticks, elapsed);
    Ok(())
}
