// CLI entry point for the Clavier headless runner.
//
// Drives a full play session from a session script: prompts, criteria, and
// tick-stamped key presses all come from the script, the evaluation core
// runs tick by tick, and the finalized records are exported as CSV.
//
// Usage:
//   clavier [SCRIPT.json] [OPTIONS]
//     --out <DIR>        Output directory for results (default: results)
//     --config <FILE>    Game config JSON (cadence parameters)
//     --realtime         Pace the loop at the configured tick rate
//     --max-ticks <N>    Safety cap on total ticks (default: 100000)
//
// With no script argument the embedded demo session is played.

use clavier_core::{GameConfig, GameEvent, GamePhase, GameState, InputProvider};
use clavier_data::KeyMap;
use clavier_session::{Session, ScriptedInput, ScriptedSource, SessionScript, default_script};
use std::path::PathBuf;
use std::time::Duration;

struct Args {
    script_path: Option<PathBuf>,
    out_dir: PathBuf,
    config_path: Option<PathBuf>,
    realtime: bool,
    max_ticks: u64,
}

fn main() {
    let args = parse_args();

    let script = match &args.script_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            });
            SessionScript::from_json(&json).unwrap_or_else(|e| {
                eprintln!("Failed to parse {}: {e}", path.display());
                std::process::exit(1);
            })
        }
        None => default_script(),
    };

    let config = match &args.config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            });
            serde_json::from_str(&json).unwrap_or_else(|e| {
                eprintln!("Failed to parse {}: {e}", path.display());
                std::process::exit(1);
            })
        }
        None => GameConfig::default(),
    };

    let source = ScriptedSource::new(&script).unwrap_or_else(|e| {
        eprintln!("Invalid session script: {e}");
        std::process::exit(1);
    });
    let mut input = ScriptedInput::new(&script, &KeyMap::default_layout());
    let mut game = GameState::new(source, config);
    let mut session = Session::new(&args.out_dir);

    println!("=== Clavier ===");
    for screen in game.info_screens() {
        println!("{screen}");
    }
    println!(
        "Criteria: {} | prompts: {} | cadence: {} tick(s)/column",
        game.criteria(),
        script.prompts.len(),
        game.config().ticks_per_column
    );
    println!();

    let tick_interval = Duration::from_secs(1)
        .checked_div(game.config().tick_rate_hz)
        .unwrap_or(Duration::ZERO);

    let mut attempts = 0u32;
    let mut confirmed = 0u32;
    let mut tick = 0u64;
    loop {
        tick += 1;
        if tick > args.max_ticks {
            eprintln!("Tick cap reached ({}); stopping.", args.max_ticks);
            break;
        }
        if args.realtime {
            std::thread::sleep(tick_interval);
        }

        let events = input.poll_events();
        let out = game.tick(&events, session.results_mut());
        for event in &out.events {
            match event {
                GameEvent::AttemptJudged {
                    column,
                    result,
                    satisfied,
                } => {
                    attempts += 1;
                    if *satisfied {
                        confirmed += 1;
                    }
                    let verdict = if *satisfied { "ok" } else { "miss" };
                    println!("[tick {tick:>4}] column {column}: {result} ({verdict})");
                }
                GameEvent::WindowCompleted { record_index } => {
                    println!("[tick {tick:>4}] window {} complete", record_index + 1);
                }
                GameEvent::Finished => println!("[tick {tick:>4}] all prompts played"),
                GameEvent::Cancelled => println!("[tick {tick:>4}] cancelled"),
            }
        }
        if out.done {
            break;
        }
    }

    let windows = session.results().len();
    let cancelled = game.phase() == GamePhase::Cancelled;
    match session.finish() {
        Ok(path) => {
            println!();
            println!(
                "{} window(s), {} attempt(s), {} confirmed{}",
                windows,
                attempts,
                confirmed,
                if cancelled { " (cancelled)" } else { "" }
            );
            println!("Results written to {}", path.display());
        }
        Err(e) => {
            eprintln!("Failed to write results: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching —
/// no clap dependency.
fn parse_args() -> Args {
    let mut args = Args {
        script_path: None,
        out_dir: PathBuf::from("results"),
        config_path: None,
        realtime: false,
        max_ticks: 100_000,
    };
    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "--out" => {
                i += 1;
                args.out_dir = argv.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--out requires a directory");
                    std::process::exit(1);
                });
            }
            "--config" => {
                i += 1;
                args.config_path = Some(argv.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--config requires a file");
                    std::process::exit(1);
                }));
            }
            "--realtime" => args.realtime = true,
            "--max-ticks" => {
                i += 1;
                args.max_ticks = argv.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--max-ticks requires a number");
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                println!(
                    "Usage: clavier [SCRIPT.json] [--out DIR] [--config FILE] [--realtime] [--max-ticks N]"
                );
                std::process::exit(0);
            }
            other if !other.starts_with("--") && args.script_path.is_none() => {
                args.script_path = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    args
}
