//! Attribute module.
//!
//! Provides the raw attribute block shared by races, classes, and
//! characters, plus the fixed linear formulas that turn attributes into
//! derived combat stats.

use serde::{Deserialize, Serialize};

/// The closed set of attribute identities.
///
/// Allocation and lookup go through this enum rather than string names,
/// so an unrecognized attribute is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Intellect,
    Vitality,
    Dexterity,
    Endurance,
    Wisdom,
    Agility,
    Tactics,
}

impl Attribute {
    /// All attributes, in canonical order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Strength,
        Attribute::Intellect,
        Attribute::Vitality,
        Attribute::Dexterity,
        Attribute::Endurance,
        Attribute::Wisdom,
        Attribute::Agility,
        Attribute::Tactics,
    ];
}

/// A block of the eight raw attributes.
///
/// Field-wise addition is commutative and associative, so base blocks
/// from race and class definitions can be combined in any order.
///
/// # Examples
///
/// ```rust
/// use herostat::{Attribute, AttributeBlock};
///
/// let race = AttributeBlock::new(5, 2, 4, 3, 3, 2, 3, 1);
/// let class = AttributeBlock::new(3, 1, 2, 2, 4, 1, 2, 2);
///
/// let mut combined = AttributeBlock::combine(&race, &class);
/// assert_eq!(combined.get(Attribute::Strength), 8);
///
/// combined.add(Attribute::Strength, 2);
/// assert_eq!(combined.get(Attribute::Strength), 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    pub strength: u32,
    pub intellect: u32,
    pub vitality: u32,
    pub dexterity: u32,
    pub endurance: u32,
    pub wisdom: u32,
    pub agility: u32,
    pub tactics: u32,
}

impl AttributeBlock {
    /// Create a block with every field set explicitly.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        strength: u32,
        intellect: u32,
        vitality: u32,
        dexterity: u32,
        endurance: u32,
        wisdom: u32,
        agility: u32,
        tactics: u32,
    ) -> Self {
        Self {
            strength,
            intellect,
            vitality,
            dexterity,
            endurance,
            wisdom,
            agility,
            tactics,
        }
    }

    /// Field-wise sum of two blocks.
    pub fn combine(a: &AttributeBlock, b: &AttributeBlock) -> AttributeBlock {
        AttributeBlock {
            strength: a.strength + b.strength,
            intellect: a.intellect + b.intellect,
            vitality: a.vitality + b.vitality,
            dexterity: a.dexterity + b.dexterity,
            endurance: a.endurance + b.endurance,
            wisdom: a.wisdom + b.wisdom,
            agility: a.agility + b.agility,
            tactics: a.tactics + b.tactics,
        }
    }

    /// Read a single attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
            Attribute::Vitality => self.vitality,
            Attribute::Dexterity => self.dexterity,
            Attribute::Endurance => self.endurance,
            Attribute::Wisdom => self.wisdom,
            Attribute::Agility => self.agility,
            Attribute::Tactics => self.tactics,
        }
    }

    /// Raise a single attribute by `points`.
    pub fn add(&mut self, attribute: Attribute, points: u32) {
        match attribute {
            Attribute::Strength => self.strength += points,
            Attribute::Intellect => self.intellect += points,
            Attribute::Vitality => self.vitality += points,
            Attribute::Dexterity => self.dexterity += points,
            Attribute::Endurance => self.endurance += points,
            Attribute::Wisdom => self.wisdom += points,
            Attribute::Agility => self.agility += points,
            Attribute::Tactics => self.tactics += points,
        }
    }

    /// Sum of all eight attributes.
    pub fn total(&self) -> u32 {
        self.strength
            + self.intellect
            + self.vitality
            + self.dexterity
            + self.endurance
            + self.wisdom
            + self.agility
            + self.tactics
    }
}

/// Combat stats derived purely from an attribute block.
///
/// Recomputed whenever the owning block changes; never stored
/// independently of a resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub health: f32,
    pub mana: f32,
    pub physical_damage: f32,
    pub magical_damage: f32,
    pub physical_defense: f32,
    pub magical_defense: f32,
    pub crit_chance: f32,
    pub attack_speed: f32,
    pub move_speed: f32,
    pub block_chance: f32,
    pub evasion: f32,
    pub accuracy: f32,
    pub hp_regen: f32,
    pub mana_regen: f32,
}

impl DerivedStats {
    /// Compute derived stats from raw attributes.
    ///
    /// Pure: no side effects and no error conditions. The formulas are
    /// fixed linear combinations of the attribute fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herostat::{AttributeBlock, DerivedStats};
    ///
    /// let attrs = AttributeBlock::new(10, 0, 4, 0, 0, 0, 0, 0);
    /// let derived = DerivedStats::from_attributes(&attrs);
    ///
    /// assert_eq!(derived.health, 10.0 * 5.0 + 4.0 * 25.0);
    /// assert_eq!(derived.physical_damage, 12.5);
    /// ```
    pub fn from_attributes(attrs: &AttributeBlock) -> DerivedStats {
        let strength = attrs.strength as f32;
        let intellect = attrs.intellect as f32;
        let vitality = attrs.vitality as f32;
        let dexterity = attrs.dexterity as f32;
        let endurance = attrs.endurance as f32;
        let wisdom = attrs.wisdom as f32;
        let agility = attrs.agility as f32;

        DerivedStats {
            health: strength * 5.0 + vitality * 25.0,
            mana: intellect * 9.0 + wisdom * 6.0,
            physical_damage: strength * 1.25,
            magical_damage: intellect * 1.5,
            physical_defense: strength * 4.0 + vitality * 1.5 + endurance * 5.0,
            magical_defense: intellect * 2.0 + wisdom * 5.5,
            crit_chance: dexterity * 0.3,
            attack_speed: dexterity * 0.2,
            move_speed: agility * 0.15,
            block_chance: endurance * 0.175,
            evasion: agility * 0.225,
            accuracy: dexterity * 0.25,
            hp_regen: vitality * 0.06,
            mana_regen: wisdom * 0.1,
        }
    }
}
