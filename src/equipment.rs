//! Equipment definition module.
//!
//! Immutable armor-piece definitions: slot, material, set membership, and
//! the per-tier stat curves an equipped piece contributes. Definitions are
//! loaded once into a catalog and shared read-only.

use crate::id::{ItemId, MaterialId};
use serde::{Deserialize, Serialize};

/// The eight mutually exclusive equipment slots.
///
/// The discriminants are stable and double as indices into a character's
/// equipped-piece array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Helm = 0,
    Shoulder = 1,
    Chest = 2,
    Hands = 3,
    Feet = 4,
    Ring = 5,
    Necklace = 6,
    Relic = 7,
}

impl EquipmentSlot {
    /// Number of slots on a character.
    pub const COUNT: usize = 8;

    /// All slots, in index order.
    pub const ALL: [EquipmentSlot; 8] = [
        EquipmentSlot::Helm,
        EquipmentSlot::Shoulder,
        EquipmentSlot::Chest,
        EquipmentSlot::Hands,
        EquipmentSlot::Feet,
        EquipmentSlot::Ring,
        EquipmentSlot::Necklace,
        EquipmentSlot::Relic,
    ];

    /// Stable array index for this slot.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Armor material category; gates which classes may equip a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorMaterial {
    Cloth,
    Leather,
    Metal,
    Gem,
}

/// The named equipment sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSet {
    Bloodfeud,
    Wraithfang,
    Oathbreaker,
    Kinrend,
    Dusksinger,
    Emberclad,
}

/// A linear per-tier stat curve: `base + per_tier * tier`.
///
/// # Examples
///
/// ```rust
/// use herostat::ScalingCurve;
///
/// let curve = ScalingCurve::new(10.0, 2.5);
/// assert_eq!(curve.at(4), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalingCurve {
    pub base: f32,
    pub per_tier: f32,
}

impl ScalingCurve {
    pub fn new(base: f32, per_tier: f32) -> Self {
        Self { base, per_tier }
    }

    /// Evaluate the curve at an equipment tier.
    pub fn at(&self, tier: u8) -> f32 {
        self.base + self.per_tier * tier as f32
    }
}

/// The five stat curves an armor piece contributes at a given tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentScaling {
    pub hp: ScalingCurve,
    pub mana: ScalingCurve,
    pub crit: ScalingCurve,
    pub block: ScalingCurve,
    pub defense: ScalingCurve,
}

/// An immutable armor-piece definition.
///
/// Definitions live in the equipment catalog and are referenced, never
/// copied, by characters and loot tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDef {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipmentSlot,
    pub material: ArmorMaterial,
    pub set: EquipmentSet,
    pub scaling: EquipmentScaling,
    /// Valuation input for the point-cost formula.
    #[serde(default = "default_equipment_cost")]
    pub crafting_cost: u32,
    #[serde(default)]
    pub required_materials: Vec<MaterialId>,
}

fn default_equipment_cost() -> u32 {
    100
}
