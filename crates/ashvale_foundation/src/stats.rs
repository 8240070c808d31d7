//! Character stats and equipment slots.

use std::fmt;
use std::ops::Add;

/// Health, attack power, and damage reduction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Hit points. A player at or below zero is fallen.
    pub hp: i32,
    /// Damage dealt per blow before the target's ward.
    pub power: i32,
    /// Damage absorbed per blow received.
    pub ward: i32,
}

/// Stats every new player starts with.
pub const BASE_STATS: Stats = Stats {
    hp: 10,
    power: 3,
    ward: 2,
};

impl Stats {
    /// Creates a stat block.
    #[must_use]
    pub const fn new(hp: i32, power: i32, ward: i32) -> Self {
        Self { hp, power, ward }
    }

    /// Returns the per-field difference `self - before`, with unchanged fields left empty.
    #[must_use]
    pub fn delta_from(&self, before: &Stats) -> StatsDelta {
        let diff = |now: i32, then: i32| (now != then).then_some(now - then);
        StatsDelta {
            hp: diff(self.hp, before.hp),
            power: diff(self.power, before.power),
            ward: diff(self.ward, before.ward),
        }
    }

    /// Applies a partial delta.
    #[must_use]
    pub fn apply(&self, delta: &StatsDelta) -> Stats {
        Stats {
            hp: self.hp + delta.hp.unwrap_or(0),
            power: self.power + delta.power.unwrap_or(0),
            ward: self.ward + delta.ward.unwrap_or(0),
        }
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            hp: self.hp + rhs.hp,
            power: self.power + rhs.power,
            ward: self.ward + rhs.ward,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hp {} / power {} / ward {}", self.hp, self.power, self.ward)
    }
}

/// Partial stat change. `None` fields are untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsDelta {
    /// Change in hit points.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub hp: Option<i32>,
    /// Change in power.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub power: Option<i32>,
    /// Change in ward.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ward: Option<i32>,
}

impl StatsDelta {
    /// Delta touching only hit points.
    #[must_use]
    pub const fn hp(amount: i32) -> Self {
        Self {
            hp: Some(amount),
            power: None,
            ward: None,
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hp.is_none() && self.power.is_none() && self.ward.is_none()
    }
}

/// Equipment slot an item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemSlot {
    /// Main hand
    Hand,
    /// Off hand
    Offhand,
    /// Head
    Head,
    /// Chest
    Chest,
    /// Trinket
    Trinket,
}

impl ItemSlot {
    /// All slots in display order.
    pub const ALL: [ItemSlot; 5] = [
        ItemSlot::Hand,
        ItemSlot::Offhand,
        ItemSlot::Head,
        ItemSlot::Chest,
        ItemSlot::Trinket,
    ];

    /// Returns the lowercase slot name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemSlot::Hand => "hand",
            ItemSlot::Offhand => "offhand",
            ItemSlot::Head => "head",
            ItemSlot::Chest => "chest",
            ItemSlot::Trinket => "trinket",
        }
    }

    /// Parses a slot name.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "hand" | "mainhand" | "main-hand" => Some(ItemSlot::Hand),
            "offhand" | "off-hand" => Some(ItemSlot::Offhand),
            "head" => Some(ItemSlot::Head),
            "chest" => Some(ItemSlot::Chest),
            "trinket" => Some(ItemSlot::Trinket),
            _ => None,
        }
    }
}

impl fmt::Display for ItemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
