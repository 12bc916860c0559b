//! Converts presentation timestamps into simulation deltas.

/// Tracks the previous frame timestamp (ms).
///
/// The first timestamp only establishes the origin. Later timestamps yield the
/// positive delta since the previous one; a timestamp that does not move
/// forward yields no frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a timestamp; returns the delta to simulate, if any.
    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        if !now_ms.is_finite() {
            return None;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return None;
        };
        if now_ms <= last {
            return None;
        }
        self.last_ms = Some(now_ms);
        Some(now_ms - last)
    }

    /// Forget the origin, e.g. after the loop was idle.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
