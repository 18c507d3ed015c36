use chrono::Utc;
use combat_core::ClockOracle;

/// Wall clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now_millis(&self) -> u64 {
        // Clamp pre-epoch clocks to zero.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
