use chrono::{DateTime, Duration, Utc};

/// Transient "Copied!" acknowledgment raised after a successful clipboard
/// write. Visibility is a pure function of the raise time and the
/// configured window, so expiry is testable with an injected clock.
#[derive(Debug, Clone, Copy)]
pub struct CopyFeedback {
    copied_at: DateTime<Utc>,
    window_ms: u64,
}

impl CopyFeedback {
    pub fn raised(window_ms: u64) -> Self {
        Self::raised_at(Utc::now(), window_ms)
    }

    pub fn raised_at(copied_at: DateTime<Utc>, window_ms: u64) -> Self {
        Self {
            copied_at,
            window_ms,
        }
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now >= self.copied_at && now < self.copied_at + self.window()
    }

    /// Time left before the acknowledgment disappears; zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.copied_at + self.window() - now)
            .to_std()
            .unwrap_or_default()
    }

    fn window(&self) -> Duration {
        Duration::milliseconds(self.window_ms as i64)
    }
}
