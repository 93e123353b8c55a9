//! Stat resolver module.
//!
//! Produces a character's final combat stats from its layered inputs:
//! pre-equipment base stats, attribute-derived stats, equipment and
//! weapon contributions at the current tier, and active set bonus
//! modifiers. Results are cached on the character behind a dirty flag;
//! `resolve_stats` is a no-op while the cache is valid.
//!
//! The pipeline order is fixed and deterministic. Equipment summation is
//! order-independent; set bonus modifiers are not: each percentage
//! modifier reads the running total accumulated so far, so activation
//! order changes the result by design.

use crate::attributes::DerivedStats;
use crate::character::Character;
use crate::set_bonus::{BonusStat, StatModifier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fully resolved final-stat snapshot.
///
/// A pure function of the character state at the moment of the last
/// recompute. The snapshot is stale, not automatically current: it is
/// refreshed by the mutation operations, which resolve before returning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub max_hp: f32,
    pub max_mp: f32,
    pub damage: f32,
    pub magic_damage: f32,
    pub defense: f32,
    pub magic_defense: f32,
    pub attack_speed: f32,
    pub move_speed: f32,
    pub crit_chance: f32,
    pub block_chance: f32,
    pub evasion: f32,
    pub accuracy: f32,
    pub hp_regen: f32,
    pub mp_regen: f32,
}

/// Apply one modifier against the running totals.
///
/// Flat modifiers add their value; percentage modifiers add `value`
/// percent of the target stat's current running total.
fn apply_modifier(stats: &mut FinalStats, modifier: &StatModifier) {
    let field = match modifier.stat {
        BonusStat::MaxHp => &mut stats.max_hp,
        BonusStat::MaxMp => &mut stats.max_mp,
        BonusStat::Damage => &mut stats.damage,
        BonusStat::Defense => &mut stats.defense,
        BonusStat::CritChance => &mut stats.crit_chance,
        BonusStat::AttackSpeed => &mut stats.attack_speed,
        BonusStat::MoveSpeed => &mut stats.move_speed,
        BonusStat::BlockChance => &mut stats.block_chance,
        BonusStat::HpRegen => &mut stats.hp_regen,
        BonusStat::MpRegen => &mut stats.mp_regen,
    };
    if modifier.percentage {
        *field += *field * modifier.value / 100.0;
    } else {
        *field += modifier.value;
    }
}

impl Character {
    /// Recompute the cached final stats if they are stale.
    ///
    /// No-op while the dirty flag is clear. The recompute itself is
    /// idempotent: the base stats are fixed inputs re-read on every pass,
    /// so resolving twice without an intervening mutation yields an
    /// identical snapshot.
    ///
    /// After the snapshot is written, current HP and MP are clamped down
    /// to the new maxima; they are never raised to meet a higher maximum.
    pub fn resolve_stats(&mut self) {
        if !self.dirty {
            return;
        }

        let tier = self.tier;
        let base = self.base;
        let derived = DerivedStats::from_attributes(&self.attributes);

        // Base plus attribute-derived stats.
        let mut stats = FinalStats {
            max_hp: base.max_hp + derived.health,
            max_mp: base.max_mp + derived.mana,
            damage: base.damage + derived.physical_damage,
            magic_damage: derived.magical_damage,
            defense: base.defense + derived.physical_defense,
            magic_defense: derived.magical_defense,
            attack_speed: base.attack_speed + derived.attack_speed,
            move_speed: base.move_speed + derived.move_speed,
            crit_chance: derived.crit_chance,
            block_chance: derived.block_chance,
            evasion: derived.evasion,
            accuracy: derived.accuracy,
            hp_regen: base.hp_regen + derived.hp_regen,
            mp_regen: base.mp_regen + derived.mana_regen,
        };

        // Equipment contributions: a pure sum over occupied slots.
        for item in self.equipped.iter() {
            stats.max_hp += item.scaling.hp.at(tier);
            stats.max_mp += item.scaling.mana.at(tier);
            stats.crit_chance += item.scaling.crit.at(tier);
            stats.block_chance += item.scaling.block.at(tier);
            stats.defense += item.scaling.defense.at(tier);
        }

        // Primary weapon contributes at full weight.
        if let Some(weapon) = &self.primary_weapon {
            stats.damage += weapon.scaling.damage.at(tier);
            stats.attack_speed += weapon.scaling.speed.at(tier);
            stats.crit_chance += weapon.scaling.crit.at(tier);
            stats.block_chance += weapon.scaling.block.at(tier);
            stats.defense += weapon.scaling.defense.at(tier);
        }

        // Offhand: half-weight damage, full crit and block, no speed or
        // defense.
        if let Some(weapon) = &self.secondary_weapon {
            stats.damage += weapon.scaling.damage.at(tier) * 0.5;
            stats.crit_chance += weapon.scaling.crit.at(tier);
            stats.block_chance += weapon.scaling.block.at(tier);
        }

        // Set bonuses: sequential, in activation order, percentages
        // against the running total.
        for rule in &self.active_rules {
            for modifier in &rule.modifiers {
                apply_modifier(&mut stats, modifier);
            }
        }

        self.stats = stats;

        // Clamp current resources down to the new maxima.
        if self.current_hp > stats.max_hp {
            self.current_hp = stats.max_hp;
        }
        if self.current_mp > stats.max_mp {
            self.current_mp = stats.max_mp;
        }

        self.dirty = false;
        debug!(name = %self.name, max_hp = stats.max_hp, damage = stats.damage, "stats resolved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_modifier_adds() {
        let mut stats = FinalStats {
            max_hp: 200.0,
            ..Default::default()
        };
        apply_modifier(&mut stats, &StatModifier::flat(BonusStat::MaxHp, 50.0));
        assert_eq!(stats.max_hp, 250.0);
    }

    #[test]
    fn test_percentage_modifier_reads_running_total() {
        let mut stats = FinalStats {
            damage: 100.0,
            ..Default::default()
        };
        apply_modifier(&mut stats, &StatModifier::flat(BonusStat::Damage, 100.0));
        apply_modifier(&mut stats, &StatModifier::percent(BonusStat::Damage, 10.0));
        // 10% of the running 200, not of the starting 100.
        assert_eq!(stats.damage, 220.0);
    }

    #[test]
    fn test_percentage_order_matters() {
        let mut first_flat = FinalStats {
            max_mp: 100.0,
            ..Default::default()
        };
        apply_modifier(&mut first_flat, &StatModifier::flat(BonusStat::MaxMp, 100.0));
        apply_modifier(
            &mut first_flat,
            &StatModifier::percent(BonusStat::MaxMp, 50.0),
        );

        let mut first_percent = FinalStats {
            max_mp: 100.0,
            ..Default::default()
        };
        apply_modifier(
            &mut first_percent,
            &StatModifier::percent(BonusStat::MaxMp, 50.0),
        );
        apply_modifier(
            &mut first_percent,
            &StatModifier::flat(BonusStat::MaxMp, 100.0),
        );

        assert_eq!(first_flat.max_mp, 300.0);
        assert_eq!(first_percent.max_mp, 250.0);
    }

    #[test]
    fn test_modifier_covers_every_bonus_stat() {
        let mut stats = FinalStats::default();
        let targets = [
            BonusStat::MaxHp,
            BonusStat::MaxMp,
            BonusStat::Damage,
            BonusStat::Defense,
            BonusStat::CritChance,
            BonusStat::AttackSpeed,
            BonusStat::MoveSpeed,
            BonusStat::BlockChance,
            BonusStat::HpRegen,
            BonusStat::MpRegen,
        ];
        for target in targets {
            apply_modifier(&mut stats, &StatModifier::flat(target, 1.0));
        }
        assert_eq!(stats.max_hp, 1.0);
        assert_eq!(stats.mp_regen, 1.0);
        // Fields without a bonus target stay untouched.
        assert_eq!(stats.evasion, 0.0);
        assert_eq!(stats.magic_damage, 0.0);
    }
}
