//! Loot module.
//!
//! Weighted, ordered loot rolling, level-to-tier mapping, the crafting
//! material ledger, and crafting recipes. Rolling is a priority scheme,
//! not a normalized distribution: within a pass, entries are tried in
//! declaration order and the first winning entry ends the pass.

use crate::equipment::EquipmentDef;
use crate::error::HeroError;
use crate::id::{ItemId, MaterialId};
use crate::weapon::{CraftingProfession, WeaponDef};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// An armor or weapon reference resolved by a loot roll or recipe.
#[derive(Debug, Clone)]
pub enum LootItem {
    Equipment(Arc<EquipmentDef>),
    Weapon(Arc<WeaponDef>),
}

impl LootItem {
    pub fn is_equipment(&self) -> bool {
        matches!(self, LootItem::Equipment(_))
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, LootItem::Weapon(_))
    }

    /// The identity of the referenced definition.
    pub fn id(&self) -> &ItemId {
        match self {
            LootItem::Equipment(item) => &item.id,
            LootItem::Weapon(weapon) => &weapon.id,
        }
    }
}

/// A resolved drop: a definition reference at a concrete tier.
#[derive(Debug, Clone)]
pub struct LootDrop {
    pub item: LootItem,
    pub tier: u8,
    pub quantity: u32,
}

/// One row of a loot table.
#[derive(Debug, Clone)]
pub struct LootEntry {
    pub reward: LootItem,
    pub min_tier: u8,
    pub max_tier: u8,
    /// Drop chance in percent, 0–100.
    pub drop_chance: f32,
    pub min_player_level: u32,
}

/// An ordered loot table.
///
/// Earlier entries have strict priority within a pass. A table with zero
/// entries is valid and yields zero drops per pass.
#[derive(Debug, Clone)]
pub struct LootTable {
    pub name: String,
    pub entries: Vec<LootEntry>,
    pub min_drops: u32,
    pub max_drops: u32,
    pub luck_multiplier: f32,
}

impl LootTable {
    /// An empty table with the default drop settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            min_drops: 1,
            max_drops: 3,
            luck_multiplier: 1.0,
        }
    }

    /// Roll drops for a player.
    ///
    /// Draws a drop count uniformly from `[min_drops, max_drops]`, then
    /// runs that many independent passes. Each pass walks the entries in
    /// declaration order, skipping rows above the player's level; an
    /// eligible row wins when a uniform draw in `[0, 100)` falls below
    /// `drop_chance * (1 + luck_bonus) * luck_multiplier`. The adjusted
    /// chance is not clamped, so values at or above 100 are a guaranteed
    /// win and a zero chance never wins. The first win ends the pass;
    /// a pass may yield nothing.
    pub fn roll(&self, player_level: u32, luck_bonus: f32, rng: &mut impl Rng) -> Vec<LootDrop> {
        let mut drops = Vec::new();
        let drop_count = rng.gen_range(self.min_drops..=self.max_drops);

        for _ in 0..drop_count {
            for entry in &self.entries {
                if player_level < entry.min_player_level {
                    continue;
                }

                let roll: f32 = rng.gen_range(0.0..100.0);
                let adjusted_chance =
                    entry.drop_chance * (1.0 + luck_bonus) * self.luck_multiplier;

                if roll < adjusted_chance {
                    let tier = calculate_tier(player_level, entry.min_tier, entry.max_tier);
                    drops.push(LootDrop {
                        item: entry.reward.clone(),
                        tier,
                        quantity: 1,
                    });
                    break;
                }
            }
        }

        drops
    }
}

/// Map a player level onto an item tier within an entry's range.
///
/// Every 10 levels raise the tier by one, bounded by the entry's range.
/// Independent of any random draw.
///
/// # Examples
///
/// ```rust
/// use herostat::loot::calculate_tier;
///
/// assert_eq!(calculate_tier(25, 1, 5), 3);
/// assert_eq!(calculate_tier(5, 2, 5), 2);
/// assert_eq!(calculate_tier(99, 1, 5), 5);
/// ```
pub fn calculate_tier(player_level: u32, min_tier: u8, max_tier: u8) -> u8 {
    let tier_from_level = player_level / 10 + 1;
    tier_from_level
        .max(min_tier as u32)
        .min(max_tier as u32) as u8
}

/// A character's stock of fungible crafting materials.
///
/// Plain read-modify-write with no intrinsic atomicity; a missing
/// material reads as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialLedger {
    counts: HashMap<MaterialId, u32>,
}

impl MaterialLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add materials to the ledger.
    pub fn add(&mut self, material: MaterialId, amount: u32) {
        *self.counts.entry(material).or_insert(0) += amount;
    }

    /// Current count of a material; missing keys read as zero.
    pub fn count(&self, material: &MaterialId) -> u32 {
        self.counts.get(material).copied().unwrap_or(0)
    }

    /// Whether at least `amount` of a material is held.
    pub fn has(&self, material: &MaterialId, amount: u32) -> bool {
        self.count(material) >= amount
    }

    /// Remove up to `amount` of a material.
    pub fn consume(&mut self, material: &MaterialId, amount: u32) {
        if let Some(count) = self.counts.get_mut(material) {
            *count = count.saturating_sub(amount);
        }
    }
}

/// One material requirement line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub material: MaterialId,
    pub amount: u32,
}

/// A crafting recipe: fixed requirements, fixed result.
#[derive(Debug, Clone)]
pub struct CraftingRecipe {
    pub result: LootItem,
    pub result_tier: u8,
    pub required_level: u32,
    pub profession: CraftingProfession,
    pub profession_level: u32,
    pub costs: Vec<MaterialCost>,
}

impl CraftingRecipe {
    /// Whether the character level and ledger satisfy this recipe.
    ///
    /// Fails closed: a material absent from the ledger counts as zero.
    /// A recipe with no cost lines is trivially satisfiable.
    pub fn can_craft(&self, character_level: u32, ledger: &MaterialLedger) -> bool {
        if character_level < self.required_level {
            return false;
        }
        self.costs
            .iter()
            .all(|cost| ledger.has(&cost.material, cost.amount))
    }

    /// Consume the recipe's materials and return the result.
    ///
    /// Only valid after `can_craft` has succeeded; this operation does
    /// not re-validate and decrements each cost line unconditionally.
    pub fn craft(&self, ledger: &mut MaterialLedger) -> LootDrop {
        for cost in &self.costs {
            ledger.consume(&cost.material, cost.amount);
        }
        LootDrop {
            item: self.result.clone(),
            tier: self.result_tier,
            quantity: 1,
        }
    }

    /// Guarded craft: validates, then consumes and returns the result.
    ///
    /// On failure nothing is consumed and the specific shortfall is
    /// reported.
    pub fn try_craft(
        &self,
        character_level: u32,
        ledger: &mut MaterialLedger,
    ) -> Result<LootDrop, HeroError> {
        if character_level < self.required_level {
            warn!(
                required = self.required_level,
                current = character_level,
                "craft rejected: level too low"
            );
            return Err(HeroError::LevelTooLow {
                required: self.required_level,
                current: character_level,
            });
        }
        for cost in &self.costs {
            let have = ledger.count(&cost.material);
            if have < cost.amount {
                warn!(
                    material = %cost.material,
                    needed = cost.amount,
                    have,
                    "craft rejected: missing material"
                );
                return Err(HeroError::MissingMaterial {
                    material: cost.material.clone(),
                    needed: cost.amount,
                    have,
                });
            }
        }
        Ok(self.craft(ledger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_mapping() {
        assert_eq!(calculate_tier(1, 1, 10), 1);
        assert_eq!(calculate_tier(9, 1, 10), 1);
        assert_eq!(calculate_tier(10, 1, 10), 2);
        assert_eq!(calculate_tier(25, 1, 5), 3);
        assert_eq!(calculate_tier(95, 1, 10), 10);
        // Bounded by the entry's range.
        assert_eq!(calculate_tier(95, 1, 4), 4);
        assert_eq!(calculate_tier(1, 3, 6), 3);
    }

    #[test]
    fn test_ledger_missing_key_reads_zero() {
        let ledger = MaterialLedger::new();
        let ore = MaterialId::new("iron_ore");
        assert_eq!(ledger.count(&ore), 0);
        assert!(!ledger.has(&ore, 1));
        assert!(ledger.has(&ore, 0));
    }

    #[test]
    fn test_ledger_add_and_consume() {
        let mut ledger = MaterialLedger::new();
        let wood = MaterialId::new("ashwood");
        ledger.add(wood.clone(), 5);
        ledger.add(wood.clone(), 3);
        assert_eq!(ledger.count(&wood), 8);

        ledger.consume(&wood, 6);
        assert_eq!(ledger.count(&wood), 2);
    }

    #[test]
    fn test_empty_cost_list_is_satisfiable() {
        let ledger = MaterialLedger::new();
        let recipe = CraftingRecipe {
            result: LootItem::Equipment(Arc::new(crate::equipment::EquipmentDef {
                id: ItemId::new("plain_band"),
                name: "Plain Band".into(),
                slot: crate::equipment::EquipmentSlot::Ring,
                material: crate::equipment::ArmorMaterial::Gem,
                set: crate::equipment::EquipmentSet::Dusksinger,
                scaling: crate::equipment::EquipmentScaling::default(),
                crafting_cost: 100,
                required_materials: Vec::new(),
            })),
            result_tier: 1,
            required_level: 1,
            profession: CraftingProfession::Mystic,
            profession_level: 1,
            costs: Vec::new(),
        };
        assert!(recipe.can_craft(1, &ledger));
        assert!(!recipe.can_craft(0, &ledger));
    }
}
