//! pursuit-sim: headless pure pursuit runs.
//!
//! Replays a scripted session without a display: one frame per recorded
//! point, one frame pressing begin-follow, then frames holding advance until
//! the follower arrives or the tick limit is reached.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin pursuit-sim -- --point 0,0 --point 200,0 --point 200,150 [OPTIONS]
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, error, info};
use pursuit_sim::{
    config::SimConfig,
    fs::logger,
    motion::pursuit::geo::Point,
    opcontrol::controller::{Controls, InputState},
    sim::{Simulation, TickOutcome},
};

/// Run a pure pursuit follower along a path without a display.
#[derive(Parser)]
#[command(name = "pursuit-sim", version)]
struct Cli {
    /// Path point as `x,y`. Repeat in path order.
    #[arg(long = "point", value_name = "X,Y", required = true, allow_hyphen_values = true)]
    points: Vec<Point>,

    /// Distance moved per tick.
    #[arg(long, default_value_t = SimConfig::DEFAULT_FOLLOWER_SPEED)]
    speed: f64,

    /// Arrival threshold.
    #[arg(long, default_value_t = SimConfig::DEFAULT_STOP_DISTANCE)]
    stop_distance: f64,

    /// Lookahead increment and floor.
    #[arg(long, default_value_t = SimConfig::DEFAULT_LOOKAHEAD_DELTA)]
    lookahead_delta: f64,

    /// Lookahead distance at startup.
    #[arg(long, default_value_t = SimConfig::DEFAULT_INITIAL_LOOKAHEAD)]
    lookahead: f64,

    /// Maximum number of advance ticks.
    #[arg(long, default_value_t = 10_000)]
    ticks: u32,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Also write the log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print every frame as a JSON line on stdout.
    #[arg(long)]
    json: bool,
}

impl Cli {
    const fn config(&self) -> SimConfig {
        SimConfig {
            follower_speed:    self.speed,
            stop_distance:     self.stop_distance,
            lookahead_delta:   self.lookahead_delta,
            initial_lookahead: self.lookahead,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("failed to initialize logger: {e}");
    }

    let mut sim = match Simulation::new(cli.config()) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let (ticks, arrived) = replay(&mut sim, &cli.points, cli.ticks, cli.json);

    match (arrived, sim.follower()) {
        (true, _) => info!("Arrived after {} ticks", ticks),
        (false, Some(follower)) => {
            info!("Stopped after {} ticks at {}", ticks, follower.position())
        }
        (false, None) => info!("No follower after {} ticks", ticks),
    }
    log::logger().flush();
    ExitCode::SUCCESS
}

/// Feeds the scripted session through [`Controls`] and returns the number of
/// advance ticks run and whether the follower arrived.
///
/// # Arguments
///
/// * `points` - Path points, recorded one per input frame.
/// * `max_ticks` - Upper bound on advance ticks.
/// * `json` - Print each frame as a JSON line.
fn replay(sim: &mut Simulation, points: &[Point], max_ticks: u32, json: bool) -> (u32, bool) {
    let controls = Controls::default();
    let keys = *controls.bindings();

    let mut script: Vec<InputState> = points
        .iter()
        .map(|&p| InputState {
            record: Some(p),
            ..InputState::default()
        })
        .collect();
    script.push(InputState::default().press(keys.begin));

    for input in &script {
        sim.step(&controls, input);
        emit(sim, json);
    }

    let advance = InputState::default().hold(keys.advance);
    let mut ticks = 0;
    while ticks < max_ticks {
        ticks += 1;
        let outcome = sim.step(&controls, &advance);
        emit(sim, json);
        match outcome {
            TickOutcome::Arrived { .. } => return (ticks, true),
            TickOutcome::Idle => break,
            _ => {}
        }
    }
    (ticks, false)
}

fn emit(sim: &Simulation, json: bool) {
    if !json {
        return;
    }
    match serde_json::to_string(&sim.frame()) {
        Ok(line) => println!("{line}"),
        Err(e) => error!("Could not serialize frame: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn cli_test_basic() {
        let cli =
            Cli::try_parse_from(["pursuit-sim", "--point", "0,0", "--point", "100,0"]).unwrap();
        assert_eq!(cli.points, points(&[(0.0, 0.0), (100.0, 0.0)]));
        assert_eq!(cli.config(), SimConfig::default());
        assert_eq!(cli.ticks, 10_000);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(cli.log_file.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn cli_test_adv() {
        let cli = Cli::try_parse_from([
            "pursuit-sim",
            "--point",
            "-1.5,2",
            "--point",
            "3,-4",
            "--point",
            "-10,-20",
            "--speed",
            "4",
            "--stop-distance",
            "1",
            "--lookahead-delta",
            "5",
            "--lookahead",
            "30",
            "--ticks",
            "7",
            "--log-level",
            "trace",
            "--log-file",
            "run.log",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.points, points(&[(-1.5, 2.0), (3.0, -4.0), (-10.0, -20.0)]));
        assert_eq!(cli.config(), SimConfig {
            follower_speed:    4.0,
            stop_distance:     1.0,
            lookahead_delta:   5.0,
            initial_lookahead: 30.0,
        });
        assert_eq!(cli.ticks, 7);
        assert_eq!(cli.log_level, LevelFilter::Trace);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(cli.json);
    }

    #[test]
    fn cli_test_errors() {
        assert!(Cli::try_parse_from(["pursuit-sim"]).is_err());
        assert!(Cli::try_parse_from(["pursuit-sim", "--point", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["pursuit-sim", "--point", "0,0", "--log-level", "loud"]).is_err()
        );
    }

    #[test]
    fn replay_test_arrived() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let path = points(&[(0.0, 0.0), (100.0, 0.0)]);
        let (ticks, arrived) = replay(&mut sim, &path, 10_000, false);
        assert_eq!((ticks, arrived), (41, true));
        assert!(sim.follower().is_none());
        assert_eq!(sim.trail().len(), 40);
    }

    #[test]
    fn replay_test_tick_limit() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let (ticks, arrived) = replay(&mut sim, &points(&[(0.0, 0.0), (100.0, 0.0)]), 5, false);
        assert_eq!((ticks, arrived), (5, false));
        let follower = sim.follower().unwrap();
        assert!((follower.position().x - 12.5).abs() < 1e-9);
        assert_eq!(sim.trail().len(), 5);
    }

    #[test]
    fn replay_test_idle() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(replay(&mut sim, &[], 10, false), (1, false));
        assert!(sim.follower().is_none());
    }
}
