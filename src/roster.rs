//! Race and class definition module.
//!
//! Race and class definitions contribute base attributes at character
//! creation; the class additionally fixes base HP/mana, per-level
//! progression, and the armor materials its members may wear.

use crate::attributes::AttributeBlock;
use crate::equipment::ArmorMaterial;
use serde::{Deserialize, Serialize};

/// Player faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Crusade,
    Legion,
    Fabled,
}

/// Playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceType {
    Human,
    Barbarian,
    Undead,
    Orc,
    Elf,
    Dwarf,
}

/// Playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    WorgShapeshifter,
    Warrior,
    MagePriest,
    RangerScout,
}

impl ClassType {
    /// The fixed armor-material compatibility table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herostat::{ArmorMaterial, ClassType};
    ///
    /// assert!(ClassType::Warrior.permits(ArmorMaterial::Metal));
    /// assert!(!ClassType::Warrior.permits(ArmorMaterial::Cloth));
    /// ```
    pub fn permitted_materials(self) -> &'static [ArmorMaterial] {
        match self {
            ClassType::MagePriest => &[ArmorMaterial::Cloth, ArmorMaterial::Gem],
            ClassType::RangerScout => &[ArmorMaterial::Leather, ArmorMaterial::Cloth],
            ClassType::Warrior => &[ArmorMaterial::Metal, ArmorMaterial::Leather],
            ClassType::WorgShapeshifter => &[ArmorMaterial::Leather],
        }
    }

    /// Whether members of this class may wear the given material.
    pub fn permits(self, material: ArmorMaterial) -> bool {
        self.permitted_materials().contains(&material)
    }
}

/// An immutable race definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDef {
    pub race: RaceType,
    pub name: String,
    pub faction: Faction,
    pub base_attributes: AttributeBlock,
}

/// An immutable class definition.
///
/// `base_hp`/`base_mana` seed a character's pre-equipment stats;
/// `hp_per_level`/`mana_per_level` are the flat maxima bonus granted on
/// each level gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    pub class: ClassType,
    pub name: String,
    pub role: String,
    pub base_attributes: AttributeBlock,
    #[serde(default = "default_base_hp")]
    pub base_hp: f32,
    #[serde(default = "default_base_mana")]
    pub base_mana: f32,
    #[serde(default = "default_hp_per_level")]
    pub hp_per_level: f32,
    #[serde(default = "default_mana_per_level")]
    pub mana_per_level: f32,
}

fn default_base_hp() -> f32 {
    100.0
}

fn default_base_mana() -> f32 {
    100.0
}

fn default_hp_per_level() -> f32 {
    10.0
}

fn default_mana_per_level() -> f32 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_table() {
        assert!(ClassType::MagePriest.permits(ArmorMaterial::Cloth));
        assert!(ClassType::MagePriest.permits(ArmorMaterial::Gem));
        assert!(!ClassType::MagePriest.permits(ArmorMaterial::Metal));

        assert!(ClassType::RangerScout.permits(ArmorMaterial::Leather));
        assert!(ClassType::RangerScout.permits(ArmorMaterial::Cloth));
        assert!(!ClassType::RangerScout.permits(ArmorMaterial::Gem));

        assert!(ClassType::Warrior.permits(ArmorMaterial::Metal));
        assert!(!ClassType::Warrior.permits(ArmorMaterial::Gem));

        assert_eq!(
            ClassType::WorgShapeshifter.permitted_materials(),
            &[ArmorMaterial::Leather]
        );
    }

    #[test]
    fn test_class_def_progression_defaults() {
        let json = r#"{
            "class": "Warrior",
            "name": "Warrior",
            "role": "Frontline",
            "base_attributes": {
                "strength": 8, "intellect": 1, "vitality": 6, "dexterity": 3,
                "endurance": 7, "wisdom": 1, "agility": 2, "tactics": 4
            }
        }"#;
        let def: ClassDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.base_hp, 100.0);
        assert_eq!(def.base_mana, 100.0);
        assert_eq!(def.hp_per_level, 10.0);
        assert_eq!(def.mana_per_level, 5.0);
    }
}
