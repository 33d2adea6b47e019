//! Teraform headless runner
//!
//! Plays a scripted game without a window and reports the outcome.
//!
//! Usage: `teraform [seed] [tuning.json]`

use teraform::consts::FRAME_DT;
use teraform::sim::{GameState, OrbitDir, SimEvent, Steer, TickInput, tick};
use teraform::{HighScores, Tuning};

/// Ten minutes at 60 frames per second
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> teraform::Result<()> {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let tuning = match args.next() {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };

    log::info!("Teraform (headless) starting with seed {seed}");
    let mut state = GameState::with_tuning(seed, tuning)?;

    let mut collapses = 0u32;
    while !state.is_over() && state.frames < MAX_FRAMES {
        let input = scripted_input(state.frames);
        tick(&mut state, &input, FRAME_DT);

        for event in state.drain_events() {
            if let SimEvent::Collapsed { kind, .. } = event {
                collapses += 1;
                log::debug!("Collapse into {kind:?}");
            }
        }
    }

    let score = state.score();
    let mut board = HighScores::new();
    board.add_score("headless", score);

    println!(
        "frames: {}  particles: {}  collapses: {}  score: {}  over: {}",
        state.frames,
        state.world.len(),
        collapses,
        score,
        state.is_over()
    );
    Ok(())
}

/// Sweep the steering through each direction, a second at a time, with
/// pauses in between so charges fall back toward the center. The orbit
/// switches direction every ninety seconds.
fn scripted_input(frame: u64) -> TickInput {
    let steer = match (frame / 60) % 8 {
        1 => Some(Steer::Up),
        3 => Some(Steer::Right),
        5 => Some(Steer::Down),
        7 => Some(Steer::Left),
        _ => None,
    };
    TickInput {
        steer,
        orbit: Some(if (frame / (60 * 90)) % 2 == 0 {
            OrbitDir::Counterclockwise
        } else {
            OrbitDir::Clockwise
        }),
        ..Default::default()
    }
}
