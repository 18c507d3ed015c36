//! Data-driven combat content.
//!
//! This crate houses the static templates a battle is built from and the
//! loaders that read them from RON/TOML files:
//! - Equipment and modifier catalogs
//! - NPC templates and their behavior trees
//! - Skill scaling rules
//! - Combat tuning (`combat.toml`)
//!
//! Content is exposed to the engine through [`TemplateCatalog`], which
//! implements [`combat_core::TemplateOracle`]. It never appears in battle
//! state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, TemplateCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    BehaviorLoader, ConfigLoader, Content, ContentFactory, EquipmentLoader, ModifierLoader,
    NamedTree, NpcLoader, ScalingLoader,
};
