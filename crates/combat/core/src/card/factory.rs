//! Card synthesis.

use std::collections::BTreeSet;

use crate::card::{
    Card, CardId, Effect, EquipmentDefinition, JamChance, Modifier, ScalingRules, SkillVector,
};
use crate::config::CombatConfig;
use crate::rank::{MoveDirection, RankSet};

/// Turns equipment into cards.
///
/// Pure: the same equipment, modifier and skills always produce an equal
/// card. The factory only holds read-only design data.
#[derive(Clone, Debug)]
pub struct CardFactory {
    scaling: ScalingRules,
    move_ap_cost: u32,
    move_stamina_cost: u32,
}

impl CardFactory {
    pub fn new(scaling: ScalingRules, config: &CombatConfig) -> Self {
        Self {
            scaling,
            move_ap_cost: config.move_card_ap_cost,
            move_stamina_cost: config.move_card_stamina_cost,
        }
    }

    pub fn scaling(&self) -> &ScalingRules {
        &self.scaling
    }

    /// Synthesizes a card from equipment, an optional modifier and skills.
    ///
    /// 1. Seed from the equipment's base stats.
    /// 2. Fold in the modifier if it fits the equipment's category.
    /// 3. Scale damage by the category's primary skill; at the threshold add
    ///    the rule's bonus effect and tag.
    /// 4. Compute the jam chance from wear, heat, tech skill and sabotage.
    pub fn synthesize(
        &self,
        equipment: &EquipmentDefinition,
        modifier: Option<&Modifier>,
        skills: &SkillVector,
    ) -> Card {
        let mut card = Card {
            id: CardId::new(equipment.id.clone()),
            name: equipment.name.clone(),
            damage: equipment.base_damage,
            category: Some(equipment.category),
            valid_ranks: equipment.valid_ranks,
            ap_cost: equipment.ap_cost,
            stamina_cost: equipment.stamina_cost,
            effects: equipment.effects.clone(),
            jam_chance: JamChance::ZERO,
            tags: BTreeSet::from([equipment.category.to_string()]),
        };

        if let Some(modifier) = modifier.filter(|m| m.fits(equipment.category)) {
            card.id = CardId::new(format!("{}:{}", modifier.id, equipment.id));
            card.name = format!("{} {}", modifier.prefix, card.name);
            card.damage = card.damage.saturating_add(modifier.damage_bonus);
            card.effects.extend(modifier.effect);
            card.tags.insert("modified".to_string());
        }

        if let Some(rule) = self.scaling.rule_for(equipment.category) {
            let level = skills.level(&rule.skill);
            card.damage = rule.scale(card.damage, level);
            if rule.unlocks_bonus(level) {
                card.effects.extend(rule.bonus_effect);
                card.tags.extend(rule.bonus_tag.clone());
            }
        }

        card.jam_chance = JamChance::compute(
            equipment.condition,
            equipment.heat,
            skills.level(&self.scaling.tech_skill),
            equipment.sabotaged,
        );
        card
    }

    /// Synthesizes the zero-damage Advance/Retreat card.
    pub fn synthesize_move(&self, direction: MoveDirection) -> Card {
        let (id, name) = match direction {
            MoveDirection::Advance => ("move:advance", "Advance"),
            MoveDirection::Retreat => ("move:retreat", "Retreat"),
        };
        Card {
            id: CardId::new(id),
            name: name.to_string(),
            damage: 0,
            category: None,
            valid_ranks: RankSet::all(),
            ap_cost: self.move_ap_cost,
            stamina_cost: self.move_stamina_cost,
            effects: vec![Effect::Move(direction)],
            jam_chance: JamChance::ZERO,
            tags: BTreeSet::from(["movement".to_string()]),
        }
    }
}
