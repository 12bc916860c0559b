//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use nova_core::commands::PlayerCommand;
use nova_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the session.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Updated by the game loop thread
/// after each frame it publishes.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Read the latest published snapshot, if any.
pub fn latest(shared: &SharedSnapshot) -> Option<GameStateSnapshot> {
    shared.lock().ok().and_then(|lock| lock.clone())
}

/// Where the game loop delivers each frame's snapshot (the presentation layer).
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &GameStateSnapshot);
}

/// Forwards snapshots over a channel. A disconnected receiver is ignored.
impl SnapshotSink for mpsc::Sender<GameStateSnapshot> {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        let _ = self.send(snapshot.clone());
    }
}

/// Discards snapshots; polling `SharedSnapshot` is the only output.
#[derive(Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn publish(&mut self, _snapshot: &GameStateSnapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(latest(&shared).is_none());

        *shared.lock().unwrap() = Some(GameStateSnapshot::default());
        assert!(latest(&shared).is_some());
    }

    #[test]
    fn test_channel_sink_forwards_snapshots() {
        let (tx, rx) = mpsc::channel();
        let mut sink = tx;
        sink.publish(&GameStateSnapshot {
            score: 40,
            ..Default::default()
        });
        assert_eq!(rx.try_recv().unwrap().score, 40);

        drop(rx);
        sink.publish(&GameStateSnapshot::default());
    }
}
