//! # herostat - Layered Combat-Stat Resolution & Itemization Engine
//!
//! A stat calculation and itemization core for hero units that provides:
//! - **Deterministic** stat resolution (same inputs → same snapshot)
//! - **Layered** aggregation (race/class attributes → derived stats →
//!   equipment and weapon contributions → set bonuses)
//! - **Dirty-flag** caching (recompute is an explicit, controlled step)
//! - **Priority** loot rolling, tier mapping, crafting, and an XP ladder
//!
//! ## Resolution Pipeline
//!
//! Final stats flow through a fixed sequence:
//!
//! ```text
//! [BaseStats] + [DerivedStats] + [Equipment] + [Weapons] → [SetBonuses] → [FinalStats]
//! ```
//!
//! 1. Pre-equipment base stats seed the totals
//! 2. Attribute-derived stats add on top (fixed linear formulas)
//! 3. Equipment and weapon curves contribute at the current tier
//! 4. Active set bonus modifiers apply sequentially, percentages against
//!    the running total (order-dependent by design)
//! 5. Current HP/MP are clamped down to the new maxima
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use herostat::*;
//!
//! let race = Arc::new(RaceDef {
//!     race: RaceType::Human,
//!     name: "Human".into(),
//!     faction: Faction::Crusade,
//!     base_attributes: AttributeBlock::new(3, 2, 3, 2, 2, 2, 2, 2),
//! });
//! let class = Arc::new(ClassDef {
//!     class: ClassType::Warrior,
//!     name: "Warrior".into(),
//!     role: "Frontline".into(),
//!     base_attributes: AttributeBlock::new(5, 0, 4, 2, 4, 0, 1, 2),
//!     base_hp: 100.0,
//!     base_mana: 100.0,
//!     hp_per_level: 10.0,
//!     mana_per_level: 5.0,
//! });
//!
//! let mut hero = Character::new("Grimfang", race, class, 1, 1);
//!
//! // Allocation mutates, marks dirty, and re-resolves before returning.
//! let damage_before = hero.stats().damage;
//! hero.allocate_attribute(Attribute::Strength, 4).unwrap();
//! assert!(hero.stats().damage > damage_before);
//! ```
//!
//! ## Ownership Model
//!
//! Definitions (equipment, weapons, races, classes, set bonus rules) are
//! loaded once into catalogs and referenced behind `Arc`: shared,
//! read-only, outliving any character. Characters own their mutable
//! state; every mutating operation resolves the cached snapshot before
//! returning, so callers always observe stats fresh relative to their
//! own last mutation.
//!
//! The crate is single-threaded and synchronous. If characters or
//! ledgers are shared across threads, external serialization is the
//! integrator's responsibility.
//!
//! ## Modules
//!
//! - [`id`] - Interned identifier types
//! - [`attributes`] - Attribute blocks and derived-stat formulas
//! - [`equipment`] - Armor definitions and per-tier scaling curves
//! - [`weapon`] - Weapon definitions
//! - [`roster`] - Race and class definitions
//! - [`catalog`] - Read-only definition catalogs
//! - [`set_bonus`] - Set piece counting and threshold-gated rules
//! - [`character`] - Character state and mutating operations
//! - [`resolver`] - Final-stat recompute pipeline
//! - [`loot`] - Loot rolling, tier mapping, materials, and crafting
//! - [`experience`] - XP curve and cascading level-up
//! - [`error`] - Error types

pub mod attributes;
pub mod catalog;
pub mod character;
pub mod equipment;
pub mod error;
pub mod experience;
pub mod id;
pub mod loot;
pub mod resolver;
pub mod roster;
pub mod set_bonus;
pub mod weapon;

// Re-export main types for convenience
pub use attributes::{Attribute, AttributeBlock, DerivedStats};
pub use catalog::{EquipmentCatalog, RosterCatalog, WeaponCatalog};
pub use character::{Character, Equipped, BaseStats, MAX_TIER, MIN_TIER, POINTS_PER_LEVEL};
pub use equipment::{
    ArmorMaterial, EquipmentDef, EquipmentScaling, EquipmentSet, EquipmentSlot, ScalingCurve,
};
pub use error::HeroError;
pub use experience::ExperienceLadder;
pub use id::{ItemId, MaterialId};
pub use loot::{
    calculate_tier, CraftingRecipe, LootDrop, LootEntry, LootItem, LootTable, MaterialCost,
    MaterialLedger,
};
pub use resolver::FinalStats;
pub use roster::{ClassDef, ClassType, Faction, RaceDef, RaceType};
pub use set_bonus::{BonusStat, SetBonusRule, StatModifier};
pub use weapon::{CraftingProfession, WeaponCategory, WeaponDef, WeaponScaling, WeaponType};
