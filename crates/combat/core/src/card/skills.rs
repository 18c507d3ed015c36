use std::collections::BTreeMap;

use crate::card::{DamageCategory, Effect};

/// Named skill levels, e.g. `might` and `tech`. Missing skills read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SkillVector(BTreeMap<String, u32>);

impl SkillVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.set(skill, level);
        self
    }

    pub fn set(&mut self, skill: impl Into<String>, level: u32) {
        self.0.insert(skill.into(), level);
    }

    pub fn level(&self, skill: &str) -> u32 {
        self.0.get(skill).copied().unwrap_or(0)
    }
}

/// How one damage category scales with one skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingRule {
    pub category: DamageCategory,
    /// Primary skill for this category.
    pub skill: String,
    /// Damage bonus per skill level, in percent (5 => x1.05 per level).
    pub percent_per_level: u32,
    /// Skill level at which the bonus effect and tag are granted.
    pub threshold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus_effect: Option<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus_tag: Option<String>,
}

impl ScalingRule {
    /// `floor(damage * (1 + percent_per_level/100 * level))`, computed exactly.
    pub fn scale(&self, damage: u32, level: u32) -> u32 {
        let factor = 100 + u64::from(self.percent_per_level) * u64::from(level);
        let scaled = u64::from(damage) * factor / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    pub fn unlocks_bonus(&self, level: u32) -> bool {
        level >= self.threshold
    }
}

/// Per-category scaling table plus the skill that lowers jam chance.
///
/// Read-only design data handed to the [`CardFactory`](super::CardFactory).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingRules {
    pub rules: Vec<ScalingRule>,
    /// Skill subtracted in the jam formula.
    pub tech_skill: String,
}

impl ScalingRules {
    pub const MIGHT: &'static str = "might";
    pub const TECH: &'static str = "tech";

    pub fn rule_for(&self, category: DamageCategory) -> Option<&ScalingRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }
}

impl Default for ScalingRules {
    /// Blunt weapons scale with might and learn to knock foes back at might 5.
    fn default() -> Self {
        Self {
            rules: vec![ScalingRule {
                category: DamageCategory::Blunt,
                skill: Self::MIGHT.to_string(),
                percent_per_level: 5,
                threshold: 5,
                bonus_effect: Some(Effect::Push(1)),
                bonus_tag: Some("knockback".to_string()),
            }],
            tech_skill: Self::TECH.to_string(),
        }
    }
}
