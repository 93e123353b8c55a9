//! Character module.
//!
//! A character composes a combat-stat base with the hero-specific layers
//! on top: attributes, equipped armor, weapons, level, and equipment
//! tier. Every mutation here marks the cached final stats dirty and then
//! resolves, so a caller always observes stats that are fresh relative to
//! the mutation it just performed.

use crate::attributes::{Attribute, AttributeBlock};
use crate::catalog::EquipmentCatalog;
use crate::equipment::{EquipmentDef, EquipmentSlot};
use crate::error::HeroError;
use crate::loot::{LootDrop, LootItem};
use crate::resolver::FinalStats;
use crate::roster::{ClassDef, RaceDef};
use crate::set_bonus::{self, SetBonusRule};
use crate::weapon::WeaponDef;
use std::sync::Arc;
use tracing::{debug, warn};

/// Attribute points granted per level.
pub const POINTS_PER_LEVEL: u32 = 7;

/// Lowest and highest equipment tier.
pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 10;

/// Pre-equipment combat stats.
///
/// Captured once at creation from the class definition and re-read on
/// every recompute, so resolving twice without an intervening mutation
/// yields identical results. The only mutation is the flat per-level
/// HP/MP bonus applied on level gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub max_hp: f32,
    pub max_mp: f32,
    pub damage: f32,
    pub defense: f32,
    pub attack_speed: f32,
    pub move_speed: f32,
    pub hp_regen: f32,
    pub mp_regen: f32,
}

impl BaseStats {
    /// Seed base stats from a class definition.
    fn for_class(class: &ClassDef) -> Self {
        Self {
            max_hp: class.base_hp,
            max_mp: class.base_mana,
            damage: 10.0,
            defense: 5.0,
            attack_speed: 1.0,
            move_speed: 5.0,
            hp_regen: 0.0,
            mp_regen: 0.0,
        }
    }
}

/// The eight armor slots of a character: at most one piece per slot.
#[derive(Debug, Clone, Default)]
pub struct Equipped {
    slots: [Option<Arc<EquipmentDef>>; EquipmentSlot::COUNT],
}

impl Equipped {
    /// The piece in a slot, if any.
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Arc<EquipmentDef>> {
        self.slots[slot.index()].as_ref()
    }

    /// Install a piece, returning the displaced occupant.
    pub(crate) fn set(
        &mut self,
        slot: EquipmentSlot,
        item: Arc<EquipmentDef>,
    ) -> Option<Arc<EquipmentDef>> {
        self.slots[slot.index()].replace(item)
    }

    /// Clear a slot, returning the removed piece.
    pub(crate) fn clear(&mut self, slot: EquipmentSlot) -> Option<Arc<EquipmentDef>> {
        self.slots[slot.index()].take()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<EquipmentDef>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Number of occupied slots.
    pub fn piece_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// A hero character: attributes, equipment, weapons, progression, and a
/// cached final-stat snapshot.
///
/// Definitions are referenced from the catalogs, never copied. The cached
/// snapshot is a pure function of the character's state at the moment of
/// the last recompute; every mutating operation re-resolves before
/// returning.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use herostat::{
///     AttributeBlock, Character, ClassDef, ClassType, Faction, RaceDef, RaceType,
/// };
///
/// let race = Arc::new(RaceDef {
///     race: RaceType::Human,
///     name: "Human".into(),
///     faction: Faction::Crusade,
///     base_attributes: AttributeBlock::new(3, 2, 3, 2, 2, 2, 2, 2),
/// });
/// let class = Arc::new(ClassDef {
///     class: ClassType::Warrior,
///     name: "Warrior".into(),
///     role: "Frontline".into(),
///     base_attributes: AttributeBlock::new(5, 0, 4, 2, 4, 0, 1, 2),
///     base_hp: 100.0,
///     base_mana: 100.0,
///     hp_per_level: 10.0,
///     mana_per_level: 5.0,
/// });
///
/// let hero = Character::new("Grimfang", race, class, 1, 1);
/// assert_eq!(hero.attributes().strength, 8);
/// assert!(hero.stats().max_hp > 100.0);
/// assert_eq!(hero.current_hp(), hero.stats().max_hp);
/// ```
#[derive(Debug, Clone)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) race: Arc<RaceDef>,
    pub(crate) class: Arc<ClassDef>,
    pub(crate) level: u32,
    pub(crate) tier: u8,
    pub(crate) attributes: AttributeBlock,
    pub(crate) unspent_points: u32,
    pub(crate) points_per_level: u32,
    pub(crate) equipped: Equipped,
    pub(crate) primary_weapon: Option<Arc<WeaponDef>>,
    pub(crate) secondary_weapon: Option<Arc<WeaponDef>>,
    pub(crate) base: BaseStats,
    pub(crate) current_hp: f32,
    pub(crate) current_mp: f32,
    pub(crate) stats: FinalStats,
    pub(crate) dirty: bool,
    pub(crate) active_rules: Vec<Arc<SetBonusRule>>,
}

impl Character {
    /// Create a character from race and class definitions.
    ///
    /// Attributes start as the field-wise sum of the race and class base
    /// blocks; unspent attribute points accrue for each level. Stats are
    /// resolved eagerly and current HP/MP start at the maxima.
    pub fn new(
        name: impl Into<String>,
        race: Arc<RaceDef>,
        class: Arc<ClassDef>,
        level: u32,
        tier: u8,
    ) -> Self {
        let level = level.max(1);
        let attributes = AttributeBlock::combine(&race.base_attributes, &class.base_attributes);
        let base = BaseStats::for_class(&class);
        let mut character = Self {
            name: name.into(),
            race,
            class,
            level,
            tier: tier.clamp(MIN_TIER, MAX_TIER),
            attributes,
            unspent_points: level * POINTS_PER_LEVEL,
            points_per_level: POINTS_PER_LEVEL,
            equipped: Equipped::default(),
            primary_weapon: None,
            secondary_weapon: None,
            base,
            current_hp: 0.0,
            current_mp: 0.0,
            stats: FinalStats::default(),
            dirty: true,
            active_rules: Vec::new(),
        };
        character.resolve_stats();
        character.current_hp = character.stats.max_hp;
        character.current_mp = character.stats.max_mp;
        character
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> &Arc<RaceDef> {
        &self.race
    }

    pub fn class(&self) -> &Arc<ClassDef> {
        &self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn attributes(&self) -> &AttributeBlock {
        &self.attributes
    }

    pub fn unspent_points(&self) -> u32 {
        self.unspent_points
    }

    pub fn equipped(&self) -> &Equipped {
        &self.equipped
    }

    pub fn primary_weapon(&self) -> Option<&Arc<WeaponDef>> {
        self.primary_weapon.as_ref()
    }

    pub fn secondary_weapon(&self) -> Option<&Arc<WeaponDef>> {
        self.secondary_weapon.as_ref()
    }

    pub fn current_hp(&self) -> f32 {
        self.current_hp
    }

    pub fn current_mp(&self) -> f32 {
        self.current_mp
    }

    /// The cached final-stat snapshot.
    pub fn stats(&self) -> &FinalStats {
        &self.stats
    }

    /// The set bonus rules active for the current equipment.
    pub fn active_rules(&self) -> &[Arc<SetBonusRule>] {
        &self.active_rules
    }

    /// Whether the character's class may wear this piece.
    pub fn can_equip(&self, item: &EquipmentDef) -> bool {
        self.class.class.permits(item.material)
    }

    /// Equip an armor piece into its slot.
    ///
    /// Rejected without any state change if the material is restricted
    /// for the class. An existing occupant of the slot is displaced.
    pub fn equip_item(
        &mut self,
        item: Arc<EquipmentDef>,
        catalog: &EquipmentCatalog,
    ) -> Result<(), HeroError> {
        if !self.can_equip(&item) {
            warn!(
                item = %item.id,
                class = ?self.class.class,
                material = ?item.material,
                "equip rejected: material restriction"
            );
            return Err(HeroError::MaterialRestricted {
                item: item.id.clone(),
                class: self.class.class,
                material: item.material,
            });
        }

        let slot = item.slot;
        self.equipped.set(slot, item);
        self.refresh_set_bonuses(catalog);
        self.resolve_stats();
        Ok(())
    }

    /// Remove the piece in a slot, if any.
    ///
    /// Returns the removed piece; an empty slot is a no-op returning
    /// `None`.
    pub fn unequip_item(
        &mut self,
        slot: EquipmentSlot,
        catalog: &EquipmentCatalog,
    ) -> Option<Arc<EquipmentDef>> {
        let removed = self.equipped.clear(slot)?;
        self.refresh_set_bonuses(catalog);
        self.resolve_stats();
        Some(removed)
    }

    /// Equip a weapon into the primary or secondary slot.
    ///
    /// A two-handed weapon is rejected for the secondary slot without any
    /// state change. Any prior occupant of the chosen slot is replaced.
    pub fn equip_weapon(
        &mut self,
        weapon: Arc<WeaponDef>,
        is_primary: bool,
    ) -> Result<(), HeroError> {
        if !is_primary && weapon.is_two_handed() {
            warn!(weapon = %weapon.id, "equip rejected: two-handed weapon in offhand");
            return Err(HeroError::TwoHandedOffhand {
                weapon: weapon.id.clone(),
            });
        }

        if is_primary {
            self.primary_weapon = Some(weapon);
        } else {
            self.secondary_weapon = Some(weapon);
        }
        self.dirty = true;
        self.resolve_stats();
        Ok(())
    }

    /// Clear the primary or secondary weapon slot.
    pub fn unequip_weapon(&mut self, is_primary: bool) -> Option<Arc<WeaponDef>> {
        let removed = if is_primary {
            self.primary_weapon.take()
        } else {
            self.secondary_weapon.take()
        };
        if removed.is_some() {
            self.dirty = true;
            self.resolve_stats();
        }
        removed
    }

    /// Spend unspent attribute points on one attribute.
    ///
    /// Rejected without any state change if fewer than `points` are
    /// unspent.
    pub fn allocate_attribute(
        &mut self,
        attribute: Attribute,
        points: u32,
    ) -> Result<(), HeroError> {
        if self.unspent_points < points {
            warn!(
                ?attribute,
                requested = points,
                available = self.unspent_points,
                "allocation rejected: insufficient points"
            );
            return Err(HeroError::InsufficientPoints {
                requested: points,
                available: self.unspent_points,
            });
        }

        self.attributes.add(attribute, points);
        self.unspent_points -= points;
        self.dirty = true;
        self.resolve_stats();
        Ok(())
    }

    /// Set the equipment tier, clamped to `[1, 10]`.
    pub fn set_tier(&mut self, tier: u8) {
        self.tier = tier.clamp(MIN_TIER, MAX_TIER);
        self.dirty = true;
        self.resolve_stats();
    }

    /// Equip a rolled loot drop, adopting its tier.
    ///
    /// Armor goes to its slot; a weapon goes to the primary slot. On
    /// rejection the tier is left unchanged.
    pub fn equip_drop(
        &mut self,
        drop: &LootDrop,
        catalog: &EquipmentCatalog,
    ) -> Result<(), HeroError> {
        match &drop.item {
            LootItem::Equipment(item) => self.equip_item(Arc::clone(item), catalog)?,
            LootItem::Weapon(weapon) => self.equip_weapon(Arc::clone(weapon), true)?,
        }
        self.set_tier(drop.tier);
        Ok(())
    }

    /// Army-composition valuation of this character.
    pub fn point_cost(&self) -> u32 {
        let equipment_value: u32 = self
            .equipped
            .iter()
            .map(|item| item.crafting_cost / 10)
            .sum();
        100 + self.level * 10 + self.tier as u32 * 50 + equipment_value
    }

    /// Set current HP, clamped to `[0, max_hp]`. For external collaborators
    /// (combat, regeneration) that spend or restore health.
    pub fn set_current_hp(&mut self, hp: f32) {
        self.current_hp = hp.clamp(0.0, self.stats.max_hp);
    }

    /// Set current MP, clamped to `[0, max_mp]`.
    pub fn set_current_mp(&mut self, mp: f32) {
        self.current_mp = mp.clamp(0.0, self.stats.max_mp);
    }

    /// Recount set pieces and reselect active rules; marks stats dirty.
    fn refresh_set_bonuses(&mut self, catalog: &EquipmentCatalog) {
        let counts = set_bonus::count_pieces(&self.equipped);
        self.active_rules = set_bonus::active_rules(&counts, catalog);
        self.dirty = true;
    }

    /// Apply one level gain: flat HP/MP bonus, attribute points, refill.
    pub(crate) fn grant_level(&mut self) {
        self.level += 1;
        self.unspent_points += self.points_per_level;
        self.base.max_hp += self.class.hp_per_level;
        self.base.max_mp += self.class.mana_per_level;
        self.dirty = true;
        self.resolve_stats();
        self.current_hp = self.stats.max_hp;
        self.current_mp = self.stats.max_mp;
        debug!(name = %self.name, level = self.level, "level gained");
    }
}
