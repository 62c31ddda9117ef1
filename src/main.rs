//! Hand Pong entry point
//!
//! Runs the match headless: hands come from a replay script or the synthetic
//! sweep, and the match is reported through the log.
//!
//! Usage: `hand-pong [settings.json]`

use std::process::ExitCode;

use hand_pong::Settings;
use hand_pong::host::{
    FrameLoop, HostError, JsonLinesSink, LogSink, PerceptionSource, ScriptedPerception,
    SweepPerception,
};
use hand_pong::sim::MatchState;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hand Pong starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), HostError> {
    let perception: Box<dyn PerceptionSource> = match &settings.script {
        Some(path) => Box::new(ScriptedPerception::open(path)?),
        None => {
            log::info!("No script configured, using synthetic hands");
            Box::new(SweepPerception::new())
        }
    };

    let recorder = match &settings.record {
        Some(path) => Some(JsonLinesSink::create(path).map_err(HostError::Presentation)?),
        None => None,
    };

    let seed = settings.resolve_seed();
    log::info!("Serve seed {seed}");

    let mut frame_loop = FrameLoop::new(
        MatchState::with_seed(seed),
        perception,
        (LogSink::new(), recorder),
    )
    .with_tick_rate(settings.tick_rate)
    .with_swap_sides(settings.swap_sides)
    .with_max_ticks(settings.max_ticks);

    let summary = frame_loop.run()?;
    println!(
        "{} frames, final score {} - {}",
        summary.frames, summary.score.left, summary.score.right
    );
    Ok(())
}
