//! replay: walks a trail three ways through the trailtrack session drivers.
//!
//! 1. Trail replay: the trail's own coordinates, one every 1.5 s.
//! 2. Simulated GPS: the same route resampled every 15 m with a few metres of
//!    seeded noise, through the live-source path (permissions, watch stream).
//! 3. Recording: the fixed demo path, with a waypoint marked after the
//!    second point, finished into a draft printed as JSON.
//!
//! Usage: `replay [trail.json] [tracking.json]`.  Without arguments the
//! bundled sample trail and default thresholds are used.  `RUST_LOG`
//! controls engine logging (default `info`).

mod gps;

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::sleep;

use tt_core::time::format_hms;
use tt_core::{LocationSample, TrackingConfig, Trail};
use tt_location::{Activation, AnySource, ReplaySource, SourceConfig};
use tt_recorder::RecordingEvent;
use tt_session::{
    FollowSession, RecordCommand, RecordSession, SessionError, SessionObserver,
};
use tt_tracker::{TrackingEvent, TrackingSummary};

use gps::SimulatedGps;

// ── Constants ─────────────────────────────────────────────────────────────────

const SAMPLE_TRAIL: &str = include_str!("sample_trail.json");
const SEED:         u64  = 42;
const GPS_JITTER_M: f64  = 3.0;
const TICK_REPORT:  u64  = 5; // print the clock every N seconds

// ── Console observer ──────────────────────────────────────────────────────────

#[derive(Default)]
struct Console {
    samples: usize,
}

impl SessionObserver for Console {
    fn on_source_enabled(&mut self, activation: Activation) {
        println!("  source up: {activation:?}");
    }

    fn on_sample(&mut self, _sample: &LocationSample) {
        self.samples += 1;
    }

    fn on_tracking_event(&mut self, event: &TrackingEvent) {
        match event {
            TrackingEvent::OffTrack { distance_m } => {
                println!("  ! off track ({distance_m:.0} m from the path)")
            }
            TrackingEvent::BackOnTrack { .. } => println!("  back on track"),
            TrackingEvent::WaypointReached { name, .. } => println!("  reached {name}"),
            TrackingEvent::TrailCompleted { elapsed_secs } => {
                println!("  trail completed in {}", format_hms(*elapsed_secs))
            }
        }
    }

    fn on_recording_event(&mut self, event: &RecordingEvent) {
        match event {
            RecordingEvent::WaypointMarked { number, .. } => println!("  waypoint {number} marked"),
            RecordingEvent::PointRecorded { points, .. } => println!("  {points} points"),
            other => println!("  {other:?}"),
        }
    }

    fn on_tick(&mut self, elapsed_secs: u64) {
        if elapsed_secs % TICK_REPORT == 0 {
            println!("  {}", format_hms(elapsed_secs));
        }
    }

    fn on_error(&mut self, error: &SessionError) {
        println!("  error: {error}");
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn load_trail(path: Option<String>) -> Result<Trail> {
    let json = match path {
        Some(p) => {
            log::info!("loading trail from {p}");
            fs::read_to_string(&p).with_context(|| format!("reading trail {p}"))?
        }
        None => {
            log::info!("using the bundled sample trail");
            SAMPLE_TRAIL.to_owned()
        }
    };
    let trail: Trail = serde_json::from_str(&json).context("parsing trail JSON")?;
    trail.validate()?;
    Ok(trail)
}

fn load_config(path: Option<String>) -> Result<TrackingConfig> {
    let Some(p) = path else {
        return Ok(TrackingConfig::default());
    };
    let json = fs::read_to_string(&p).with_context(|| format!("reading config {p}"))?;
    let config: TrackingConfig = serde_json::from_str(&json).context("parsing tracking config")?;
    config.validate()?;
    log::info!("tracking thresholds from {p}: {config:?}");
    Ok(config)
}

fn print_summary(summary: &TrackingSummary, console: &Console) -> Result<()> {
    println!("  {} samples", console.samples);
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let trail = load_trail(args.next())?;
    let config = load_config(args.next())?;
    println!(
        "trail {}: {} points, {} waypoints, {:.0} m",
        trail.id,
        trail.coordinates.len(),
        trail.waypoints.len(),
        trail.length_m()
    );

    // ── 1. Trail replay ──────────────────────────────────────────────────────
    println!("\n[1] trail replay");
    let replay = SourceConfig::trail_replay(trail.coordinates.clone());
    let source = AnySource::<SimulatedGps>::from_config(&replay, None)?;
    let (session, _handle) = FollowSession::with_config(trail.clone(), config.clone(), source)?;
    let mut console = Console::default();
    let summary = session.run(&mut console).await?;
    log::info!("trail replay done after {} samples", console.samples);
    print_summary(&summary, &console)?;

    // ── 2. Simulated GPS ─────────────────────────────────────────────────────
    println!("\n[2] simulated gps (±{GPS_JITTER_M} m)");
    let gps = SimulatedGps::new(trail.coordinates.clone(), SEED)
        .with_jitter_m(GPS_JITTER_M)
        .deny_background();
    let source = AnySource::from_config(&SourceConfig::Live { request_background: true }, Some(gps))?;
    let (session, _handle) = FollowSession::with_config(trail.clone(), config, source)?;
    let mut console = Console::default();
    let summary = session.run(&mut console).await?;
    log::info!("simulated gps done after {} samples", console.samples);
    print_summary(&summary, &console)?;

    // ── 3. Recording ─────────────────────────────────────────────────────────
    println!("\n[3] recording the fixed demo path");
    let (session, handle) = RecordSession::new(ReplaySource::fixed_demo());
    let script = async {
        sleep(Duration::from_millis(3_200)).await;
        handle.send(RecordCommand::MarkWaypoint).await?;
        sleep(Duration::from_millis(4_500)).await;
        handle.send(RecordCommand::Finish).await?;
        Ok::<_, SessionError>(())
    };
    let mut console = Console::default();
    let (draft, scripted) = tokio::join!(session.run(&mut console), script);
    scripted?;

    match draft? {
        Some(draft) => {
            println!("  recorded {:.0} m", draft.distance_m());
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        None => log::warn!("recording ended without a draft"),
    }
    Ok(())
}
