//! nova-defense: headless Nova Defense session flown by the autopilot.
//!
//! Usage:
//!   nova-defense --seed 7 --seconds 120
//!   nova-defense --rules hard.json --json

use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use nova_app::autopilot;
use nova_app::config::load_rules;
use nova_app::game_loop::spawn_game_loop;
use nova_app::state;
use nova_core::commands::PlayerCommand;
use nova_core::config::Rules;
use nova_core::state::GameStateSnapshot;

/// Frames the autopilot waits between launches.
const LAUNCH_COOLDOWN_FRAMES: u64 = 30;

struct Options {
    rules: Option<PathBuf>,
    seed: u64,
    seconds: u64,
    json: bool,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "help" | "--help" | "-h"))
    {
        print_usage();
        return;
    }

    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        log::error!("nova-defense failed: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "nova-defense: headless Nova Defense session\n\
         \n\
           --rules <path>   JSON rules overrides (optional)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --seconds <N>    Wall-clock limit for the session (default: 60)\n\
           --json           Print the final snapshot as JSON\n\
         \n\
         Set RUST_LOG=info to follow waves and launches.\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        rules: None,
        seed: 42,
        seconds: 60,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--json" {
            options.json = true;
            i += 1;
            continue;
        }
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--rules", Some(path)) => options.rules = Some(PathBuf::from(path)),
            ("--seed", Some(seed)) => {
                options.seed = seed
                    .parse()
                    .map_err(|_| format!("Invalid --seed value: {seed}"))?;
            }
            ("--seconds", Some(seconds)) => {
                options.seconds = seconds
                    .parse()
                    .map_err(|_| format!("Invalid --seconds value: {seconds}"))?;
            }
            (flag @ ("--rules" | "--seed" | "--seconds"), None) => {
                return Err(format!("Missing value for {flag}"));
            }
            (other, _) => return Err(format!("Unknown argument: {other}")),
        }
        i += 2;
    }

    Ok(options)
}

fn run(options: &Options) -> io::Result<()> {
    let rules = match &options.rules {
        Some(path) => {
            log::info!("loading rules from {}", path.display());
            load_rules(path)?
        }
        None => Rules::default(),
    };

    let (snapshot_tx, snapshot_rx) = mpsc::channel::<GameStateSnapshot>();
    let latest = state::shared_snapshot();
    let handle = spawn_game_loop(rules.clone(), options.seed, snapshot_tx, latest.clone())?;
    log::info!("game loop started with seed {}", options.seed);
    handle.send(PlayerCommand::StartGame);

    let deadline = Instant::now() + Duration::from_secs(options.seconds);
    let mut last_launch: Option<u64> = None;
    while Instant::now() < deadline {
        let snapshot = match snapshot_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(snapshot) => snapshot,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        if snapshot.status.is_terminal() {
            break;
        }

        let ready = last_launch.map_or(true, |frame| {
            snapshot.time.frame >= frame + LAUNCH_COOLDOWN_FRAMES
        });
        if !ready {
            continue;
        }
        if let Some(aim) = autopilot::pick_target(&snapshot, &rules) {
            handle.send(PlayerCommand::Launch { x: aim.x, y: aim.y });
            last_launch = Some(snapshot.time.frame);
        }
    }

    handle.shutdown();
    log::info!("game loop stopped");

    match state::latest(&latest) {
        Some(snapshot) if options.json => {
            let json = serde_json::to_string_pretty(&snapshot)
                .map_err(io::Error::other)?;
            println!("{json}");
        }
        Some(snapshot) => println!(
            "{:?}: wave {}, score {}, cities standing {}/{}",
            snapshot.status,
            snapshot.wave,
            snapshot.score,
            snapshot.cities.iter().filter(|c| !c.destroyed).count(),
            snapshot.cities.len()
        ),
        None => println!("No game was played"),
    }
    Ok(())
}
