//! Error types for rejected mutations.
//!
//! Every expected failure path in the crate is represented by the
//! `HeroError` enum. Rejections never mutate state: an operation that
//! returns an error leaves the character, ledger, or slot exactly as it
//! found it.

use crate::equipment::ArmorMaterial;
use crate::id::{ItemId, MaterialId};
use crate::roster::ClassType;
use thiserror::Error;

/// Errors that can occur when mutating a character or crafting an item.
///
/// # Examples
///
/// ```rust
/// use herostat::HeroError;
///
/// let err = HeroError::InsufficientPoints { requested: 5, available: 2 };
/// assert!(err.to_string().contains("attribute points"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeroError {
    /// The item's armor material is not permitted for the character's class.
    #[error("{class:?} cannot equip {item} ({material:?} is restricted)")]
    MaterialRestricted {
        item: ItemId,
        class: ClassType,
        material: ArmorMaterial,
    },

    /// A two-handed weapon was offered for the secondary slot.
    #[error("cannot equip two-handed weapon {weapon} in the offhand")]
    TwoHandedOffhand { weapon: ItemId },

    /// An attribute allocation asked for more points than are unspent.
    #[error("insufficient attribute points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u32, available: u32 },

    /// A crafting material is missing or short.
    #[error("missing material {material}: need {needed}, have {have}")]
    MissingMaterial {
        material: MaterialId,
        needed: u32,
        have: u32,
    },

    /// The character's level is below a recipe's requirement.
    #[error("level too low: need {required}, have {current}")]
    LevelTooLow { required: u32, current: u32 },
}
