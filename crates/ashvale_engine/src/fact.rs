//! Typed keys for the boolean fact store.
//!
//! Facts render to namespaced strings (`item:taken:<id>`, `enemy:defeated:<id>`,
//! `use:temp:item:<id>`, `pray:used:<room>`) and parse back losslessly, so
//! stored flag maps stay readable while handlers match on variants.

use std::fmt;

use ashvale_foundation::{ActorId, ItemId, RoomId};

const ITEM_TAKEN: &str = "item:taken:";
const ENEMY_DEFEATED: &str = "enemy:defeated:";
const ITEM_BUFF: &str = "use:temp:item:";
const PRAYER_USED: &str = "pray:used:";
const WARD_AURA: &str = "ward:aura";
const VICTORY: &str = "game:victory";

/// A boolean fact about one session.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", from = "String"))]
pub enum Fact {
    /// A room item has been picked up.
    ItemTaken(ItemId),
    /// An enemy has been killed.
    EnemyDefeated(ActorId),
    /// A consumable's bonus applies to the next attack.
    ItemBuff(ItemId),
    /// The player has prayed in this room.
    PrayerUsed(RoomId),
    /// Incoming enemy damage is reduced by one.
    WardAura,
    /// The relic has been reforged.
    Victory,
    /// Any other key.
    Custom(String),
}

impl Fact {
    /// Parses a namespaced key. Unrecognised keys become [`Fact::Custom`].
    #[must_use]
    pub fn parse(key: &str) -> Self {
        let tail = |prefix: &str| key.strip_prefix(prefix).filter(|rest| !rest.is_empty());
        if let Some(id) = tail(ITEM_TAKEN) {
            Fact::ItemTaken(ItemId::new(id))
        } else if let Some(id) = tail(ENEMY_DEFEATED) {
            Fact::EnemyDefeated(ActorId::new(id))
        } else if let Some(id) = tail(ITEM_BUFF) {
            Fact::ItemBuff(ItemId::new(id))
        } else if let Some(id) = tail(PRAYER_USED) {
            Fact::PrayerUsed(RoomId::new(id))
        } else if key == WARD_AURA {
            Fact::WardAura
        } else if key == VICTORY {
            Fact::Victory
        } else {
            Fact::Custom(key.to_string())
        }
    }

    /// The buffed item, if this is a consumable buff.
    #[must_use]
    pub fn buffed_item(&self) -> Option<&ItemId> {
        match self {
            Fact::ItemBuff(item) => Some(item),
            _ => None,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fact::ItemTaken(id) => write!(f, "{ITEM_TAKEN}{id}"),
            Fact::EnemyDefeated(id) => write!(f, "{ENEMY_DEFEATED}{id}"),
            Fact::ItemBuff(id) => write!(f, "{ITEM_BUFF}{id}"),
            Fact::PrayerUsed(id) => write!(f, "{PRAYER_USED}{id}"),
            Fact::WardAura => f.write_str(WARD_AURA),
            Fact::Victory => f.write_str(VICTORY),
            Fact::Custom(key) => f.write_str(key),
        }
    }
}

impl From<&str> for Fact {
    fn from(key: &str) -> Self {
        Fact::parse(key)
    }
}

impl From<String> for Fact {
    fn from(key: String) -> Self {
        Fact::parse(&key)
    }
}

impl From<Fact> for String {
    fn from(fact: Fact) -> Self {
        fact.to_string()
    }
}
