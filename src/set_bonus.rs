//! Set bonus module.
//!
//! Counts equipped pieces per equipment set and decides which
//! threshold-gated bonus rules are active. Thresholds are cumulative
//! gates: a set with four equipped pieces activates both its 2-piece and
//! 4-piece rules.
//!
//! Activation order is deterministic and load-bearing: rules are
//! collected per set in catalog declaration order, sets in the order they
//! were first seen while scanning slots. The resolver applies percentage
//! modifiers sequentially against its running totals, so this order is
//! part of the contract.

use crate::catalog::EquipmentCatalog;
use crate::character::Equipped;
use crate::equipment::EquipmentSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Final-stat fields a set bonus modifier may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusStat {
    MaxHp,
    MaxMp,
    Damage,
    Defense,
    CritChance,
    AttackSpeed,
    MoveSpeed,
    BlockChance,
    HpRegen,
    MpRegen,
}

/// A single stat modifier inside a set bonus rule.
///
/// A flat modifier adds `value` to the target stat. A percentage modifier
/// adds `value` percent of the running total at the moment it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: BonusStat,
    pub value: f32,
    pub percentage: bool,
}

impl StatModifier {
    /// A flat additive modifier.
    pub fn flat(stat: BonusStat, value: f32) -> Self {
        Self {
            stat,
            value,
            percentage: false,
        }
    }

    /// A percentage modifier (`value` is in percent, e.g. `10.0` for +10%).
    pub fn percent(stat: BonusStat, value: f32) -> Self {
        Self {
            stat,
            value,
            percentage: true,
        }
    }
}

/// A threshold-gated bonus rule for an equipment set.
///
/// `pieces` is the activation threshold (2, 4, 6, or 8). Multiple rules
/// may exist for the same set at different thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBonusRule {
    pub set: EquipmentSet,
    pub pieces: u8,
    pub description: String,
    pub modifiers: Vec<StatModifier>,
}

/// Tally equipped pieces by set.
///
/// Returns `(set, count)` pairs in the order each set is first seen while
/// scanning slots by index, which fixes the activation order downstream.
pub fn count_pieces(equipped: &Equipped) -> Vec<(EquipmentSet, u8)> {
    let mut counts: Vec<(EquipmentSet, u8)> = Vec::new();
    for item in equipped.iter() {
        match counts.iter_mut().find(|(set, _)| *set == item.set) {
            Some((_, count)) => *count += 1,
            None => counts.push((item.set, 1)),
        }
    }
    counts
}

/// Collect every rule whose threshold is met by the observed counts.
///
/// For each counted set, every catalog rule for that set with
/// `pieces <= count` activates, in catalog declaration order.
///
/// # Examples
///
/// ```rust
/// use herostat::{
///     BonusStat, EquipmentCatalog, EquipmentSet, SetBonusRule, StatModifier,
/// };
/// use herostat::set_bonus::active_rules;
///
/// let mut catalog = EquipmentCatalog::new();
/// catalog.add_rule(SetBonusRule {
///     set: EquipmentSet::Bloodfeud,
///     pieces: 2,
///     description: "2pc".into(),
///     modifiers: vec![StatModifier::flat(BonusStat::MaxHp, 50.0)],
/// });
/// catalog.add_rule(SetBonusRule {
///     set: EquipmentSet::Bloodfeud,
///     pieces: 4,
///     description: "4pc".into(),
///     modifiers: vec![StatModifier::percent(BonusStat::Damage, 10.0)],
/// });
///
/// let counts = vec![(EquipmentSet::Bloodfeud, 4)];
/// let active = active_rules(&counts, &catalog);
/// assert_eq!(active.len(), 2); // both thresholds met
/// ```
pub fn active_rules(
    counts: &[(EquipmentSet, u8)],
    catalog: &EquipmentCatalog,
) -> Vec<Arc<SetBonusRule>> {
    let mut active = Vec::new();
    for &(set, count) in counts {
        for rule in catalog.rules_for_set(set) {
            if rule.pieces <= count {
                active.push(rule);
            }
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(set: EquipmentSet, pieces: u8) -> SetBonusRule {
        SetBonusRule {
            set,
            pieces,
            description: format!("{pieces}pc"),
            modifiers: vec![StatModifier::flat(BonusStat::MaxHp, 10.0)],
        }
    }

    #[test]
    fn test_thresholds_are_cumulative() {
        let mut catalog = EquipmentCatalog::new();
        catalog.add_rule(rule(EquipmentSet::Wraithfang, 2));
        catalog.add_rule(rule(EquipmentSet::Wraithfang, 4));
        catalog.add_rule(rule(EquipmentSet::Wraithfang, 6));

        let counts = vec![(EquipmentSet::Wraithfang, 4)];
        let active = active_rules(&counts, &catalog);

        assert_eq!(active.len(), 2);
        assert_eq!(active[0].pieces, 2);
        assert_eq!(active[1].pieces, 4);
    }

    #[test]
    fn test_threshold_not_met() {
        let mut catalog = EquipmentCatalog::new();
        catalog.add_rule(rule(EquipmentSet::Emberclad, 2));

        let counts = vec![(EquipmentSet::Emberclad, 1)];
        assert!(active_rules(&counts, &catalog).is_empty());
    }

    #[test]
    fn test_rules_follow_counting_order_across_sets() {
        let mut catalog = EquipmentCatalog::new();
        catalog.add_rule(rule(EquipmentSet::Bloodfeud, 2));
        catalog.add_rule(rule(EquipmentSet::Dusksinger, 2));

        // Dusksinger counted first: its rules come first.
        let counts = vec![
            (EquipmentSet::Dusksinger, 2),
            (EquipmentSet::Bloodfeud, 2),
        ];
        let active = active_rules(&counts, &catalog);
        assert_eq!(active[0].set, EquipmentSet::Dusksinger);
        assert_eq!(active[1].set, EquipmentSet::Bloodfeud);
    }
}
