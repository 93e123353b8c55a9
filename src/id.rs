//! Identifier module.
//!
//! Provides the `ItemId` and `MaterialId` types, interned string
//! identifiers for catalog entries and crafting materials. Both use
//! `Arc<str>` for cheap cloning and fast comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for equipment and weapon definitions.
///
/// Uses `Arc<str>` so that every reference to the same definition shares
/// one allocation and comparisons stay cheap.
///
/// # Examples
///
/// ```rust
/// use herostat::ItemId;
///
/// let helm = ItemId::new("bloodfeud_helm");
///
/// // Can be created from string slices or owned strings
/// let helm2: ItemId = "bloodfeud_helm".into();
/// let helm3: ItemId = String::from("bloodfeud_helm").into();
///
/// assert_eq!(helm, helm2);
/// assert_eq!(helm, helm3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Create a new `ItemId` from a string slice.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `ItemId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ItemId::from(s))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interned string identifier for fungible crafting materials.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaterialId(Arc<str>);

impl MaterialId {
    /// Create a new `MaterialId` from a string slice.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `MaterialId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for MaterialId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MaterialId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MaterialId::from(s))
    }
}

impl From<&str> for MaterialId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MaterialId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
