//! Item definitions.

use std::fmt;

use ashvale_foundation::{ItemId, ItemSlot};

/// Rarity band of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemTier {
    /// Everyday goods
    #[default]
    Common,
    /// Reinforced gear
    Tempered,
    /// Blessed gear
    Consecrated,
    /// Relics and quest items
    Relic,
}

/// Behavioural tag attached to an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemTag {
    /// Removed from the inventory when used; grants a one-attack buff.
    Consumable,
    /// Protective consumable.
    Ward,
    /// Opens something.
    Key,
    /// Hand-held weapon.
    Weapon,
    /// Worn protection.
    Armor,
    /// Worn charm.
    Trinket,
    /// Needed to finish the game.
    Quest,
}

impl ItemTag {
    /// Returns the lowercase tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemTag::Consumable => "consumable",
            ItemTag::Ward => "ward",
            ItemTag::Key => "key",
            ItemTag::Weapon => "weapon",
            ItemTag::Armor => "armor",
            ItemTag::Trinket => "trinket",
            ItemTag::Quest => "quest",
        }
    }
}

impl fmt::Display for ItemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static catalog entry for an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique id.
    pub id: ItemId,
    /// Display name. Several items may share one.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Equipment slot, if the item can be worn or wielded.
    pub slot: Option<ItemSlot>,
    /// Power bonus while equipped or while its buff is active.
    pub power: Option<i32>,
    /// Ward bonus while equipped or while its buff is active.
    pub ward: Option<i32>,
    /// Rarity band.
    pub tier: ItemTier,
    /// Behavioural tags.
    pub tags: Vec<ItemTag>,
}

impl Item {
    /// Creates a common, untagged item.
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            slot: None,
            power: None,
            ward: None,
            tier: ItemTier::Common,
            tags: Vec::new(),
        }
    }

    /// Sets the equipment slot.
    #[must_use]
    pub fn with_slot(mut self, slot: ItemSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Sets the power bonus.
    #[must_use]
    pub fn with_power(mut self, power: i32) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the ward bonus.
    #[must_use]
    pub fn with_ward(mut self, ward: i32) -> Self {
        self.ward = Some(ward);
        self
    }

    /// Sets the tier.
    #[must_use]
    pub fn with_tier(mut self, tier: ItemTier) -> Self {
        self.tier = tier;
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Returns true if the item carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns true if the item is used up on use.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.has_tag(ItemTag::Consumable)
    }

    /// Returns true if the item can be equipped.
    #[must_use]
    pub fn is_equipable(&self) -> bool {
        self.slot.is_some()
    }

    /// Power bonus, zero when absent.
    #[must_use]
    pub fn power_bonus(&self) -> i32 {
        self.power.unwrap_or(0)
    }

    /// Ward bonus, zero when absent.
    #[must_use]
    pub fn ward_bonus(&self) -> i32 {
        self.ward.unwrap_or(0)
    }
}
