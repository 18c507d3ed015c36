/// Combat tuning constants and layout limits.
///
/// Numeric balance values are design data owned by the caller; the engine
/// only reads them. Loaded from TOML by the content crate, with every field
/// optional so partial files fall back to [`CombatConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatConfig {
    /// Damage/healing multiplier for cards played from a rank outside their
    /// valid set.
    pub off_rank_multiplier: f64,
    /// Extra damage dealt when a knockback slams a target into the back wall.
    pub wall_slam_damage: u32,
    /// Action-point cost of the synthesized Advance/Retreat cards.
    pub move_card_ap_cost: u32,
    /// Stamina cost of the synthesized Advance/Retreat cards.
    pub move_card_stamina_cost: u32,
    /// Cards a participant holds after drawing at the start of their turn.
    pub hand_size: usize,
    /// Number of log entries included in the read-only projection.
    pub log_tail: usize,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Front of the line (melee range).
    pub const FRONT_RANK: u8 = 1;
    /// Back of the line.
    pub const BACK_RANK: u8 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_OFF_RANK_MULTIPLIER: f64 = 0.6;
    pub const DEFAULT_WALL_SLAM_DAMAGE: u32 = 5;
    pub const DEFAULT_MOVE_CARD_AP_COST: u32 = 1;
    pub const DEFAULT_MOVE_CARD_STAMINA_COST: u32 = 1;
    pub const DEFAULT_HAND_SIZE: usize = 5;
    pub const DEFAULT_LOG_TAIL: usize = 10;

    pub fn new() -> Self {
        Self {
            off_rank_multiplier: Self::DEFAULT_OFF_RANK_MULTIPLIER,
            wall_slam_damage: Self::DEFAULT_WALL_SLAM_DAMAGE,
            move_card_ap_cost: Self::DEFAULT_MOVE_CARD_AP_COST,
            move_card_stamina_cost: Self::DEFAULT_MOVE_CARD_STAMINA_COST,
            hand_size: Self::DEFAULT_HAND_SIZE,
            log_tail: Self::DEFAULT_LOG_TAIL,
        }
    }

    /// Applies the positional efficacy multiplier to an amount, rounding down.
    pub fn scale_by_efficacy(&self, amount: u32, in_rank: bool) -> u32 {
        if in_rank {
            amount
        } else {
            (f64::from(amount) * self.off_rank_multiplier).floor() as u32
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_rank_penalty_rounds_down() {
        let config = CombatConfig::default();
        assert_eq!(config.scale_by_efficacy(8, false), 4);
        assert_eq!(config.scale_by_efficacy(10, false), 6);
        assert_eq!(config.scale_by_efficacy(8, true), 8);
    }
}
