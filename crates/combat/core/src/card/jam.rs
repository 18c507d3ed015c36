//! Failure probability ("jam chance") of synthesized cards.
//!
//! ```text
//! jam = clamp(0, 95, (100 - condition) * 0.2 + heat * 0.1 - tech * 0.5 + sabotage)
//! sabotage = 25 if the equipment is sabotaged, else 0
//! ```
//!
//! Every coefficient is a multiple of 0.1, so the value is computed exactly in
//! integer tenths of a percent. Identical inputs always give identical
//! outputs.

/// Jam chance in tenths of a percent, always within `[0, 950]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct JamChance(u16);

impl JamChance {
    pub const ZERO: JamChance = JamChance(0);
    /// Upper clamp: 95%.
    pub const MAX: JamChance = JamChance(950);
    /// Flat penalty for sabotaged equipment, in percent.
    pub const SABOTAGE_PENALTY: u32 = 25;

    /// Evaluates the entropy formula. `condition` above 100 counts as 100.
    pub fn compute(condition: u32, heat: u32, tech_level: u32, sabotaged: bool) -> Self {
        let wear = i64::from(100 - condition.min(100)) * 2;
        let heat = i64::from(heat);
        let skill = i64::from(tech_level) * 5;
        let sabotage = if sabotaged {
            i64::from(Self::SABOTAGE_PENALTY) * 10
        } else {
            0
        };
        let tenths = (wear + heat - skill + sabotage).clamp(0, i64::from(Self::MAX.0));
        Self(tenths as u16)
    }

    pub const fn tenths(self) -> u16 {
        self.0
    }

    pub fn percent(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl core::fmt::Display for JamChance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}%", self.0 / 10, self.0 % 10)
    }
}
