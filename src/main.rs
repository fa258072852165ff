//! Vector Rocks entry point
//!
//! Runs a scripted headless session into a text canvas and prints the last
//! frame. The library does the work; this is only a frame driver.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use vector_rocks::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use vector_rocks::platform::{Key, Keyboard};
use vector_rocks::renderer::{Canvas, TextCanvas, WrapCanvas, draw_frame};
use vector_rocks::sim::{FrameInput, GameState, tick};
use vector_rocks::{Tuning, TuningError};

/// Frame time of the scripted session
const FRAME_DT: f32 = 1.0 / 30.0;
const DEFAULT_FRAMES: u64 = 300;
const TUNING_ENV: &str = "VECTOR_ROCKS_TUNING";

struct Options {
    seed: u64,
    frames: u64,
    dump: bool,
}

fn parse_args() -> Options {
    let mut positional = Vec::new();
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            dump = true;
        } else {
            positional.push(arg);
        }
    }

    let seed = positional
        .first()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let frames = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    Options { seed, frames, dump }
}

fn load_tuning() -> Result<Tuning, TuningError> {
    match std::env::var_os(TUNING_ENV) {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

/// Scripted pilot: sweep left, burn now and then, tap fire on a cadence
fn script_keys(keyboard: &mut Keyboard, frame: u64) {
    keyboard.set(Key::Left, (frame / 45) % 2 == 0);
    keyboard.set(Key::D, (frame / 45) % 4 == 3);
    keyboard.set(Key::W, frame % 60 < 10);
    keyboard.set(Key::Space, frame % 12 == 0);
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = parse_args();
    let tuning = match load_tuning() {
        Ok(t) => t,
        Err(e) => {
            log::error!("Bad tuning: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Vector Rocks starting (seed {}, {} frames)", opts.seed, opts.frames);

    let mut canvas = WrapCanvas::new(TextCanvas::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT));
    let mut state = GameState::new(opts.seed, tuning, canvas.playfield());
    let mut keyboard = Keyboard::new();
    let mut deaths = 0;

    for frame in 0..opts.frames {
        script_keys(&mut keyboard, frame);
        let input = FrameInput::from_controls(&keyboard);
        keyboard.end_frame();

        let report = tick(&mut state, &input, canvas.playfield(), FRAME_DT);
        if report.ship_died {
            deaths += 1;
        }
        if report.split + report.destroyed > 0 {
            log::debug!(
                "frame {}: {} split, {} destroyed, score {}",
                frame,
                report.split,
                report.destroyed,
                state.score
            );
        }

        draw_frame(&state, &mut canvas);
    }

    print!("{}", canvas.inner().to_text());
    println!(
        "score {}  asteroids {}  bullets {}  deaths {}",
        state.score,
        state.asteroids.len(),
        state.bullets.len(),
        deaths
    );

    if opts.dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Could not serialize state: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
