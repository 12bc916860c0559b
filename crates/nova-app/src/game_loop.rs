//! Game loop thread: runs a session at 60 Hz and publishes snapshots.
//!
//! The session is created inside this thread and owned by it. Commands arrive
//! via an `mpsc` channel and are applied between frames, so they never
//! interleave with a tick. Snapshots go to a `SnapshotSink` and are also
//! stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use nova_core::commands::PlayerCommand;
use nova_core::config::Rules;
use nova_core::enums::GameStatus;
use nova_core::state::GameStateSnapshot;
use nova_sim::{SimConfig, Session};

use crate::frame_clock::FrameClock;
use crate::state::{GameLoopCommand, SharedSnapshot, SnapshotSink};
use crate::viewport::Viewport;

/// Presentation refresh rate.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward a player command. Returns `false` if the loop has stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.commands.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Fire at a pointer position on `viewport`. Returns `false` if the
    /// surface is empty or the loop has stopped.
    pub fn pointer(&self, viewport: &Viewport, client_x: f64, client_y: f64) -> bool {
        match viewport.to_world(client_x, client_y) {
            Some(target) => self.send(PlayerCommand::Launch {
                x: target.x,
                y: target.y,
            }),
            None => false,
        }
    }

    /// Stop the loop and wait for the thread to finish.
    pub fn shutdown(self) {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        if self.thread.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<S: SnapshotSink>(
    rules: Rules,
    seed: u64,
    sink: S,
    latest: SharedSnapshot,
) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("nova-game-loop".into())
        .spawn(move || {
            let session = Session::new(SimConfig { seed, rules });
            run_game_loop(session, cmd_rx, sink, &latest);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: SnapshotSink>(
    mut session: Session,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut sink: S,
    latest: &SharedSnapshot,
) {
    let epoch = Instant::now();
    let mut clock = FrameClock::new();
    let mut next_frame_time = Instant::now();
    publish(&mut sink, latest, session.snapshot());

    loop {
        // Outside of play nothing moves: wait for the next command.
        if session.status() != GameStatus::Playing {
            match cmd_rx.recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    session.handle_command(cmd);
                    if session.status() == GameStatus::Playing {
                        clock.reset();
                        next_frame_time = Instant::now();
                        publish(&mut sink, latest, session.snapshot());
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(_) => return,
            }
            continue;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => session.handle_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the wall-clock time since the previous frame
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        if let Some(delta_ms) = clock.frame(now_ms) {
            let snapshot = session.tick(delta_ms);
            if snapshot.status.is_terminal() {
                log::info!(
                    "game over: {:?} on wave {} with score {}",
                    snapshot.status,
                    snapshot.wave,
                    snapshot.score
                );
            }
            publish(&mut sink, latest, snapshot);
        }

        // 3. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

fn publish<S: SnapshotSink>(sink: &mut S, latest: &SharedSnapshot, snapshot: GameStateSnapshot) {
    sink.publish(&snapshot);
    if let Ok(mut lock) = latest.lock() {
        *lock = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{self, NullSink};

    fn recv(rx: &mpsc::Receiver<GameStateSnapshot>) -> GameStateSnapshot {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("game loop should publish")
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        assert_eq!(FRAME_DURATION.as_nanos(), (1_000_000_000u64 / 60) as u128);
    }

    #[test]
    fn test_idle_loop_publishes_start_state_only() {
        let (tx, rx) = mpsc::channel();
        let latest = state::shared_snapshot();
        let handle = spawn_game_loop(Rules::default(), 1, tx, latest.clone()).unwrap();

        let first = recv(&rx);
        assert_eq!(first.status, GameStatus::Start);
        assert!(
            rx.recv_timeout(Duration::from_millis(100)).is_err(),
            "no frames before the game starts"
        );
        assert_eq!(state::latest(&latest).unwrap().status, GameStatus::Start);

        handle.shutdown();
    }

    #[test]
    fn test_start_and_launch_through_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_game_loop(Rules::default(), 1, tx, state::shared_snapshot()).unwrap();
        recv(&rx);

        assert!(handle.send(PlayerCommand::StartGame));
        let started = recv(&rx);
        assert_eq!(started.status, GameStatus::Playing);
        assert_eq!(started.time.frame, 0);

        assert!(handle.send(PlayerCommand::Launch { x: 400.0, y: 300.0 }));
        let launched = (0..120)
            .map(|_| recv(&rx))
            .find(|snap| !snap.interceptors.is_empty())
            .expect("interceptor should appear");
        assert_eq!(launched.turrets[0].ammo, 29);
        assert!(launched.time.frame > 0);

        handle.shutdown();
    }

    #[test]
    fn test_pointer_launch_maps_through_viewport() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_game_loop(Rules::default(), 1, tx, state::shared_snapshot()).unwrap();
        recv(&rx);
        handle.send(PlayerCommand::StartGame);
        recv(&rx);

        // Half-size surface offset by (10, 20): (210, 170) is playfield (400, 300).
        let viewport = Viewport::new(10.0, 20.0, 400.0, 300.0);
        assert!(!handle.pointer(&Viewport::new(0.0, 0.0, 0.0, 0.0), 1.0, 1.0));
        assert!(handle.pointer(&viewport, 210.0, 170.0));

        let launched = (0..120)
            .map(|_| recv(&rx))
            .find(|snap| !snap.interceptors.is_empty())
            .expect("interceptor should appear");
        assert_eq!(launched.interceptors[0].target, nova_core::geometry::Point::new(400.0, 300.0));

        handle.shutdown();
    }

    #[test]
    fn test_dropped_handle_ends_loop() {
        let handle = spawn_game_loop(Rules::default(), 1, NullSink, state::shared_snapshot()).unwrap();
        let GameLoopHandle { commands, thread } = handle;
        drop(commands);
        assert!(thread.join().is_ok());
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut session = Session::new(SimConfig::default());
        session.start();
        for _ in 0..600 {
            session.tick(16.0);
        }

        let snapshot = session.snapshot();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
