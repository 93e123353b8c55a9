//! Weapon definition module.
//!
//! Immutable weapon definitions: type, handedness category, crafting
//! profession, and per-tier stat curves.

use crate::equipment::ScalingCurve;
use crate::id::{ItemId, MaterialId};
use serde::{Deserialize, Serialize};

/// Every weapon archetype in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    // One-handed melee
    Sword,
    Axe,
    Dagger,
    Hammer1h,
    // Two-handed melee
    Greatsword,
    Greataxe,
    Hammer2h,
    // Ranged two-handed
    Bow,
    Crossbow,
    Gun,
    // Staves
    FireStaff,
    FrostStaff,
    NatureStaff,
    HolyStaff,
    ArcaneStaff,
    LightningStaff,
    // Tomes (one-handed magic)
    FireTome,
    FrostTome,
    NatureTome,
    HolyTome,
    ArcaneTome,
    LightningTome,
}

/// Handedness category; drives offhand eligibility and contribution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    OneHand,
    TwoHand,
    RangedTwoHand,
}

/// Profession able to craft a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraftingProfession {
    Miner,
    Forester,
    Engineer,
    Mystic,
}

/// The six stat curves a weapon contributes at a given tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponScaling {
    pub damage: ScalingCurve,
    pub speed: ScalingCurve,
    pub combo: ScalingCurve,
    pub crit: ScalingCurve,
    pub block: ScalingCurve,
    pub defense: ScalingCurve,
}

/// An immutable weapon definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDef {
    pub id: ItemId,
    pub name: String,
    pub weapon_type: WeaponType,
    pub category: WeaponCategory,
    pub scaling: WeaponScaling,
    pub crafted_by: CraftingProfession,
    /// Valuation input for the point-cost formula.
    #[serde(default = "default_weapon_cost")]
    pub crafting_cost: u32,
    #[serde(default)]
    pub required_materials: Vec<MaterialId>,
}

fn default_weapon_cost() -> u32 {
    200
}

impl WeaponDef {
    /// Whether this weapon occupies both hands.
    pub fn is_two_handed(&self) -> bool {
        self.category == WeaponCategory::TwoHand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_handed_category_only() {
        let mut def = WeaponDef {
            id: ItemId::new("ash_bow"),
            name: "Ash Bow".into(),
            weapon_type: WeaponType::Bow,
            category: WeaponCategory::RangedTwoHand,
            scaling: WeaponScaling::default(),
            crafted_by: CraftingProfession::Forester,
            crafting_cost: 200,
            required_materials: Vec::new(),
        };
        assert!(!def.is_two_handed());

        def.category = WeaponCategory::TwoHand;
        assert!(def.is_two_handed());
    }

    #[test]
    fn test_weapon_scaling_curves() {
        let scaling = WeaponScaling {
            damage: ScalingCurve::new(12.0, 3.0),
            speed: ScalingCurve::new(0.1, 0.02),
            ..Default::default()
        };
        assert_eq!(scaling.damage.at(5), 27.0);
        assert_eq!(scaling.combo.at(5), 0.0);
    }
}
