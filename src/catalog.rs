//! Catalog module.
//!
//! Read-only definition catalogs for equipment, weapons, and the
//! race/class roster. Catalogs are populated once by the integrator and
//! then shared; entries are held behind `Arc` so characters and loot
//! tables reference definitions without copying them.
//!
//! Insertion is idempotent: a duplicate identity keeps the first-seen
//! definition.

use crate::equipment::{EquipmentDef, EquipmentSet, EquipmentSlot};
use crate::id::ItemId;
use crate::roster::{ClassDef, ClassType, Faction, RaceDef, RaceType};
use crate::set_bonus::SetBonusRule;
use crate::weapon::{CraftingProfession, WeaponCategory, WeaponDef, WeaponType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Catalog of armor definitions and set bonus rules.
///
/// # Examples
///
/// ```rust
/// use herostat::{
///     ArmorMaterial, EquipmentCatalog, EquipmentDef, EquipmentScaling,
///     EquipmentSet, EquipmentSlot, ItemId,
/// };
///
/// let mut catalog = EquipmentCatalog::new();
/// catalog.add_item(EquipmentDef {
///     id: ItemId::new("emberclad_hood"),
///     name: "Emberclad Hood".into(),
///     slot: EquipmentSlot::Helm,
///     material: ArmorMaterial::Cloth,
///     set: EquipmentSet::Emberclad,
///     scaling: EquipmentScaling::default(),
///     crafting_cost: 100,
///     required_materials: Vec::new(),
/// });
///
/// assert!(catalog.item_by_id(&ItemId::new("emberclad_hood")).is_some());
/// assert!(catalog.item_by_id(&ItemId::new("missing")).is_none());
/// ```
#[derive(Debug, Default)]
pub struct EquipmentCatalog {
    items: Vec<Arc<EquipmentDef>>,
    by_id: HashMap<ItemId, Arc<EquipmentDef>>,
    rules: Vec<Arc<SetBonusRule>>,
}

impl EquipmentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an armor definition. A duplicate id keeps the first-seen entry.
    pub fn add_item(&mut self, def: EquipmentDef) {
        if self.by_id.contains_key(&def.id) {
            debug!(id = %def.id, "duplicate equipment definition ignored");
            return;
        }
        let def = Arc::new(def);
        self.by_id.insert(def.id.clone(), Arc::clone(&def));
        self.items.push(def);
    }

    /// Add a set bonus rule. Rules keep their declaration order.
    pub fn add_rule(&mut self, rule: SetBonusRule) {
        self.rules.push(Arc::new(rule));
    }

    /// Look up an armor piece by identity.
    pub fn item_by_id(&self, id: &ItemId) -> Option<Arc<EquipmentDef>> {
        self.by_id.get(id).cloned()
    }

    /// All pieces belonging to a set, in declaration order.
    pub fn items_by_set(&self, set: EquipmentSet) -> Vec<Arc<EquipmentDef>> {
        self.items
            .iter()
            .filter(|item| item.set == set)
            .cloned()
            .collect()
    }

    /// All pieces occupying a slot, in declaration order.
    pub fn items_by_slot(&self, slot: EquipmentSlot) -> Vec<Arc<EquipmentDef>> {
        self.items
            .iter()
            .filter(|item| item.slot == slot)
            .cloned()
            .collect()
    }

    /// All bonus rules for a set, in declaration order.
    pub fn rules_for_set(&self, set: EquipmentSet) -> Vec<Arc<SetBonusRule>> {
        self.rules
            .iter()
            .filter(|rule| rule.set == set)
            .cloned()
            .collect()
    }
}

/// Catalog of weapon definitions.
#[derive(Debug, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Arc<WeaponDef>>,
    by_id: HashMap<ItemId, Arc<WeaponDef>>,
}

impl WeaponCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon definition. A duplicate id keeps the first-seen entry.
    pub fn add_weapon(&mut self, def: WeaponDef) {
        if self.by_id.contains_key(&def.id) {
            debug!(id = %def.id, "duplicate weapon definition ignored");
            return;
        }
        let def = Arc::new(def);
        self.by_id.insert(def.id.clone(), Arc::clone(&def));
        self.weapons.push(def);
    }

    /// Look up a weapon by identity.
    pub fn weapon_by_id(&self, id: &ItemId) -> Option<Arc<WeaponDef>> {
        self.by_id.get(id).cloned()
    }

    /// All weapons of an archetype, in declaration order.
    pub fn weapons_by_type(&self, weapon_type: WeaponType) -> Vec<Arc<WeaponDef>> {
        self.weapons
            .iter()
            .filter(|weapon| weapon.weapon_type == weapon_type)
            .cloned()
            .collect()
    }

    /// All weapons of a handedness category, in declaration order.
    pub fn weapons_by_category(&self, category: WeaponCategory) -> Vec<Arc<WeaponDef>> {
        self.weapons
            .iter()
            .filter(|weapon| weapon.category == category)
            .cloned()
            .collect()
    }

    /// All weapons craftable by a profession, in declaration order.
    pub fn weapons_by_profession(&self, profession: CraftingProfession) -> Vec<Arc<WeaponDef>> {
        self.weapons
            .iter()
            .filter(|weapon| weapon.crafted_by == profession)
            .cloned()
            .collect()
    }
}

/// Catalog of race and class definitions.
#[derive(Debug, Default)]
pub struct RosterCatalog {
    races: Vec<Arc<RaceDef>>,
    classes: Vec<Arc<ClassDef>>,
    race_lookup: HashMap<RaceType, Arc<RaceDef>>,
    class_lookup: HashMap<ClassType, Arc<ClassDef>>,
}

impl RosterCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a race definition. A duplicate race type keeps the first-seen entry.
    pub fn add_race(&mut self, def: RaceDef) {
        if self.race_lookup.contains_key(&def.race) {
            debug!(race = ?def.race, "duplicate race definition ignored");
            return;
        }
        let def = Arc::new(def);
        self.race_lookup.insert(def.race, Arc::clone(&def));
        self.races.push(def);
    }

    /// Add a class definition. A duplicate class type keeps the first-seen entry.
    pub fn add_class(&mut self, def: ClassDef) {
        if self.class_lookup.contains_key(&def.class) {
            debug!(class = ?def.class, "duplicate class definition ignored");
            return;
        }
        let def = Arc::new(def);
        self.class_lookup.insert(def.class, Arc::clone(&def));
        self.classes.push(def);
    }

    /// Look up a race definition.
    pub fn race(&self, race: RaceType) -> Option<Arc<RaceDef>> {
        self.race_lookup.get(&race).cloned()
    }

    /// Look up a class definition.
    pub fn class(&self, class: ClassType) -> Option<Arc<ClassDef>> {
        self.class_lookup.get(&class).cloned()
    }

    /// All races belonging to a faction, in declaration order.
    pub fn races_by_faction(&self, faction: Faction) -> Vec<Arc<RaceDef>> {
        self.races
            .iter()
            .filter(|race| race.faction == faction)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeBlock;
    use crate::equipment::{ArmorMaterial, EquipmentScaling};

    fn armor(id: &str, slot: EquipmentSlot, set: EquipmentSet) -> EquipmentDef {
        EquipmentDef {
            id: ItemId::new(id),
            name: id.to_string(),
            slot,
            material: ArmorMaterial::Leather,
            set,
            scaling: EquipmentScaling::default(),
            crafting_cost: 100,
            required_materials: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut catalog = EquipmentCatalog::new();
        let mut first = armor("kinrend_helm", EquipmentSlot::Helm, EquipmentSet::Kinrend);
        first.crafting_cost = 150;
        let mut second = armor("kinrend_helm", EquipmentSlot::Helm, EquipmentSet::Kinrend);
        second.crafting_cost = 999;

        catalog.add_item(first);
        catalog.add_item(second);

        let found = catalog.item_by_id(&ItemId::new("kinrend_helm")).unwrap();
        assert_eq!(found.crafting_cost, 150);
        assert_eq!(catalog.items_by_slot(EquipmentSlot::Helm).len(), 1);
    }

    #[test]
    fn test_lookup_by_set_and_slot() {
        let mut catalog = EquipmentCatalog::new();
        catalog.add_item(armor("a", EquipmentSlot::Helm, EquipmentSet::Kinrend));
        catalog.add_item(armor("b", EquipmentSlot::Chest, EquipmentSet::Kinrend));
        catalog.add_item(armor("c", EquipmentSlot::Helm, EquipmentSet::Emberclad));

        assert_eq!(catalog.items_by_set(EquipmentSet::Kinrend).len(), 2);
        assert_eq!(catalog.items_by_slot(EquipmentSlot::Helm).len(), 2);
        assert!(catalog.items_by_set(EquipmentSet::Bloodfeud).is_empty());
    }

    #[test]
    fn test_missing_lookup_is_none() {
        let catalog = WeaponCatalog::new();
        assert!(catalog.weapon_by_id(&ItemId::new("nope")).is_none());
    }

    #[test]
    fn test_races_by_faction() {
        let mut catalog = RosterCatalog::new();
        catalog.add_race(RaceDef {
            race: RaceType::Human,
            name: "Human".into(),
            faction: Faction::Crusade,
            base_attributes: AttributeBlock::default(),
        });
        catalog.add_race(RaceDef {
            race: RaceType::Undead,
            name: "Undead".into(),
            faction: Faction::Legion,
            base_attributes: AttributeBlock::default(),
        });
        catalog.add_race(RaceDef {
            race: RaceType::Dwarf,
            name: "Dwarf".into(),
            faction: Faction::Crusade,
            base_attributes: AttributeBlock::default(),
        });

        let crusade = catalog.races_by_faction(Faction::Crusade);
        assert_eq!(crusade.len(), 2);
        assert_eq!(crusade[0].race, RaceType::Human);
        assert!(catalog.race(RaceType::Orc).is_none());
    }
}
