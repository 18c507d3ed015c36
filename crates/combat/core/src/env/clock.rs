/// Wall-clock source for log timestamps. Never consulted for game rules.
pub trait ClockOracle: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Clock frozen at a fixed instant, for tests and replays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl ClockOracle for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
