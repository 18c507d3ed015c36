//! In-memory [`TemplateOracle`] backed by hash maps.

use std::collections::HashMap;

use combat_core::{
    BehaviorNode, EquipmentDefinition, Modifier, NpcTemplate, ScalingRules, TemplateOracle,
};

/// Problems found while assembling a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate equipment id '{0}'")]
    DuplicateEquipment(String),

    #[error("duplicate modifier id '{0}'")]
    DuplicateModifier(String),

    #[error("duplicate npc id '{0}'")]
    DuplicateNpc(String),

    #[error("duplicate behavior tree id '{0}'")]
    DuplicateBehavior(String),

    #[error("npc '{npc}' uses unknown behavior tree '{behavior}'")]
    MissingBehavior { npc: String, behavior: String },
}

/// Read-only combat templates keyed by id.
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    equipment: HashMap<String, EquipmentDefinition>,
    modifiers: HashMap<String, Modifier>,
    npcs: HashMap<String, NpcTemplate>,
    behaviors: HashMap<String, BehaviorNode>,
    scaling: ScalingRules,
}

impl TemplateCatalog {
    pub fn new(scaling: ScalingRules) -> Self {
        Self {
            scaling,
            ..Self::default()
        }
    }

    pub fn add_equipment(&mut self, def: EquipmentDefinition) -> Result<(), CatalogError> {
        if self.equipment.contains_key(&def.id) {
            return Err(CatalogError::DuplicateEquipment(def.id));
        }
        self.equipment.insert(def.id.clone(), def);
        Ok(())
    }

    pub fn add_modifier(&mut self, modifier: Modifier) -> Result<(), CatalogError> {
        if self.modifiers.contains_key(&modifier.id) {
            return Err(CatalogError::DuplicateModifier(modifier.id));
        }
        self.modifiers.insert(modifier.id.clone(), modifier);
        Ok(())
    }

    pub fn add_npc(&mut self, template: NpcTemplate) -> Result<(), CatalogError> {
        if self.npcs.contains_key(&template.id) {
            return Err(CatalogError::DuplicateNpc(template.id));
        }
        self.npcs.insert(template.id.clone(), template);
        Ok(())
    }

    pub fn add_behavior(
        &mut self,
        id: impl Into<String>,
        tree: BehaviorNode,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if self.behaviors.contains_key(&id) {
            return Err(CatalogError::DuplicateBehavior(id));
        }
        self.behaviors.insert(id, tree);
        Ok(())
    }

    /// Checks that every NPC template references a known behavior tree.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut npcs: Vec<_> = self.npcs.values().collect();
        npcs.sort_by(|a, b| a.id.cmp(&b.id));
        for npc in npcs {
            if !self.behaviors.contains_key(&npc.behavior) {
                return Err(CatalogError::MissingBehavior {
                    npc: npc.id.clone(),
                    behavior: npc.behavior.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn equipment_ids(&self) -> impl Iterator<Item = &str> {
        self.equipment.keys().map(String::as_str)
    }

    pub fn npc_ids(&self) -> impl Iterator<Item = &str> {
        self.npcs.keys().map(String::as_str)
    }
}

impl TemplateOracle for TemplateCatalog {
    fn equipment(&self, id: &str) -> Option<&EquipmentDefinition> {
        self.equipment.get(id)
    }

    fn modifier(&self, id: &str) -> Option<&Modifier> {
        self.modifiers.get(id)
    }

    fn npc(&self, id: &str) -> Option<&NpcTemplate> {
        self.npcs.get(id)
    }

    fn behavior(&self, id: &str) -> Option<&BehaviorNode> {
        self.behaviors.get(id)
    }

    fn scaling(&self) -> &ScalingRules {
        &self.scaling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::NpcAction;

    fn raider(behavior: &str) -> NpcTemplate {
        NpcTemplate {
            id: "raider".into(),
            name: "Raider".into(),
            max_hp: 20,
            stamina: 5,
            morale: 5,
            ammo: 0,
            behavior: behavior.into(),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = TemplateCatalog::default();
        catalog.add_npc(raider("brute")).unwrap();
        assert_eq!(
            catalog.add_npc(raider("brute")),
            Err(CatalogError::DuplicateNpc("raider".into()))
        );
    }

    #[test]
    fn validate_requires_known_trees() {
        let mut catalog = TemplateCatalog::default();
        catalog.add_npc(raider("brute")).unwrap();
        assert!(catalog.validate().is_err());

        catalog
            .add_behavior(
                "brute",
                BehaviorNode::Action(NpcAction::MeleeAttack { damage: 3 }),
            )
            .unwrap();
        assert!(catalog.validate().is_ok());
        assert!(catalog.behavior("brute").is_some());
        assert!(catalog.npc("raider").is_some());
    }
}
