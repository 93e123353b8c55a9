//! Experience module.
//!
//! XP-to-level curve and cascading level-up. A single large grant can
//! cross several thresholds in one call; each level gained grants the
//! class's flat HP/MP bonus and fresh attribute points, and refills the
//! character's resources.

use crate::character::Character;
use tracing::debug;

/// The XP curve and level cap.
///
/// # Examples
///
/// ```rust
/// use herostat::ExperienceLadder;
///
/// let ladder = ExperienceLadder::default();
/// assert_eq!(ladder.xp_for_level(2), Some(100));
/// assert_eq!(ladder.xp_for_level(3), Some(150));
/// assert_eq!(ladder.xp_for_level(100), None); // capped
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceLadder {
    pub base_xp_required: u32,
    pub scaling_factor: f32,
    pub max_level: u32,
}

impl Default for ExperienceLadder {
    fn default() -> Self {
        Self {
            base_xp_required: 100,
            scaling_factor: 1.5,
            max_level: 100,
        }
    }
}

impl ExperienceLadder {
    pub fn new(base_xp_required: u32, scaling_factor: f32, max_level: u32) -> Self {
        Self {
            base_xp_required,
            scaling_factor,
            max_level,
        }
    }

    /// XP that must be granted to advance to `level` from the level
    /// below.
    ///
    /// Geometric curve: `round(base * factor^(level - 2))`, so the first
    /// advance (level 1 to 2) costs exactly `base`. Returns `None` at or
    /// above the level cap: no further leveling is possible.
    pub fn xp_for_level(&self, level: u32) -> Option<u64> {
        if level >= self.max_level {
            return None;
        }
        let exponent = level as i32 - 2;
        let xp = self.base_xp_required as f64 * (self.scaling_factor as f64).powi(exponent);
        Some(xp.round() as u64)
    }

    /// Grant XP, cascading through as many level-ups as it covers.
    ///
    /// A character at the level cap is untouched and the call returns
    /// `false`. Otherwise whole thresholds are consumed one level at a
    /// time; the sub-threshold remainder after the last gain is
    /// discarded. Returns `true` if at least one level was gained.
    pub fn add_experience(&self, character: &mut Character, xp: u64) -> bool {
        if character.level() >= self.max_level {
            return false;
        }

        let mut remaining = xp;
        let mut leveled_up = false;
        while let Some(needed) = self.xp_for_level(character.level() + 1) {
            if remaining < needed {
                break;
            }
            remaining -= needed;
            character.grant_level();
            leveled_up = true;
        }

        if leveled_up {
            debug!(
                name = %character.name(),
                level = character.level(),
                discarded_xp = remaining,
                "experience applied"
            );
        }
        leveled_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeBlock;
    use crate::roster::{ClassDef, ClassType, Faction, RaceDef, RaceType};
    use std::sync::Arc;

    fn scout(level: u32) -> Character {
        let race = Arc::new(RaceDef {
            race: RaceType::Elf,
            name: "Elf".into(),
            faction: Faction::Fabled,
            base_attributes: AttributeBlock::new(2, 3, 2, 4, 2, 3, 4, 1),
        });
        let class = Arc::new(ClassDef {
            class: ClassType::RangerScout,
            name: "Ranger".into(),
            role: "Skirmisher".into(),
            base_attributes: AttributeBlock::new(2, 1, 2, 5, 2, 1, 4, 2),
            base_hp: 100.0,
            base_mana: 100.0,
            hp_per_level: 10.0,
            mana_per_level: 5.0,
        });
        Character::new("Duskwind", race, class, level, 1)
    }

    #[test]
    fn test_curve_values() {
        let ladder = ExperienceLadder::default();
        assert_eq!(ladder.xp_for_level(2), Some(100));
        assert_eq!(ladder.xp_for_level(3), Some(150));
        assert_eq!(ladder.xp_for_level(4), Some(225));
        assert_eq!(ladder.xp_for_level(5), Some(338)); // round(337.5)
    }

    #[test]
    fn test_grant_below_threshold_is_discarded() {
        let ladder = ExperienceLadder::default();
        let mut hero = scout(1);
        assert!(!ladder.add_experience(&mut hero, 99));
        assert_eq!(hero.level(), 1);

        // The 99 from the previous grant was not banked.
        assert!(!ladder.add_experience(&mut hero, 1));
        assert_eq!(hero.level(), 1);
    }

    #[test]
    fn test_single_level_gain() {
        let ladder = ExperienceLadder::default();
        let mut hero = scout(1);
        let points_before = hero.unspent_points();

        assert!(ladder.add_experience(&mut hero, 100));
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.unspent_points(), points_before + 7);
        assert_eq!(hero.current_hp(), hero.stats().max_hp);
        assert_eq!(hero.current_mp(), hero.stats().max_mp);
    }

    #[test]
    fn test_cascade_two_levels() {
        let ladder = ExperienceLadder::default();
        let mut hero = scout(1);

        // 250 = 100 (level 2) + 150 (level 3), remainder 0.
        assert!(ladder.add_experience(&mut hero, 250));
        assert_eq!(hero.level(), 3);
    }

    #[test]
    fn test_max_level_is_a_noop() {
        let ladder = ExperienceLadder::new(100, 1.5, 5);
        let mut hero = scout(5);
        let stats_before = *hero.stats();

        assert!(!ladder.add_experience(&mut hero, u64::MAX));
        assert_eq!(hero.level(), 5);
        assert_eq!(*hero.stats(), stats_before);
    }

    #[test]
    fn test_level_bonus_raises_maxima() {
        let ladder = ExperienceLadder::default();
        let mut hero = scout(1);
        let hp_before = hero.stats().max_hp;
        let mp_before = hero.stats().max_mp;

        ladder.add_experience(&mut hero, 100);
        assert_eq!(hero.stats().max_hp, hp_before + 10.0);
        assert_eq!(hero.stats().max_mp, mp_before + 5.0);
    }
}
