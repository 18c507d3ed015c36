//! Tick results.

/// Outcome of ticking one node.
///
/// Conditions and actions resolve within the tick they are evaluated in, so
/// the built-in game nodes only ever produce `Success` or `Failure`.
/// `Running` exists for nodes that span several turns; composites treat it
/// as "stop here" exactly like their short-circuit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Condition held, or the action produced its effect.
    Success,

    /// Condition did not hold, or the action had nothing to act on.
    Failure,

    /// Still in progress; tick again later.
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`. `Running` is left untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    /// Maps a condition result onto a tick result.
    fn from(holds: bool) -> Self {
        if holds { Status::Success } else { Status::Failure }
    }
}
