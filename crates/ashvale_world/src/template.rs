//! Room templates: the static, never-mutated definition of each room.

use std::fmt;

use ashvale_foundation::{ActorId, ItemId, RoomId};

/// Structural role of a room in the generated layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoomRole {
    /// Starting room every zone connects back to.
    Hub,
    /// First room of a zone.
    Entry,
    /// Holds a quest shard and its guardian.
    Boss,
    /// Anything else.
    #[default]
    Normal,
}

/// Thematic chain a room belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoomChain {
    /// The hub.
    Hub,
    /// Ember Chapel, vertical.
    Chapel,
    /// Witchwell, vertical.
    Well,
    /// Hollow Monastery, horizontal.
    Monastery,
    /// Blackroot Orchard, horizontal.
    Orchard,
    /// The Old Road.
    Road,
    /// Flavour rooms sprinkled anywhere.
    #[default]
    Misc,
}

impl RoomChain {
    /// Returns the lowercase chain name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoomChain::Hub => "hub",
            RoomChain::Chapel => "chapel",
            RoomChain::Well => "well",
            RoomChain::Monastery => "monastery",
            RoomChain::Orchard => "orchard",
            RoomChain::Road => "road",
            RoomChain::Misc => "misc",
        }
    }
}

impl fmt::Display for RoomChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable definition of a room. Exits are assigned by the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomTemplate {
    /// Unique id.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Items lying here at the start.
    pub items: Vec<ItemId>,
    /// Actors present at the start.
    pub actors: Vec<ActorId>,
    /// Free-form trait tags such as `safe` or `boss`.
    pub traits: Vec<String>,
    /// Structural role.
    pub role: RoomRole,
    /// Thematic chain.
    pub chain: RoomChain,
}

impl RoomTemplate {
    /// Creates an empty normal room in the misc chain.
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: RoomId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            items: Vec::new(),
            actors: Vec::new(),
            traits: Vec::new(),
            role: RoomRole::Normal,
            chain: RoomChain::Misc,
        }
    }

    /// Adds a starting item.
    #[must_use]
    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(ItemId::new(item));
        self
    }

    /// Adds a starting actor.
    #[must_use]
    pub fn with_actor(mut self, actor: &str) -> Self {
        self.actors.push(ActorId::new(actor));
        self
    }

    /// Adds a trait tag.
    #[must_use]
    pub fn with_trait(mut self, tag: &str) -> Self {
        self.traits.push(tag.to_string());
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: RoomRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the chain.
    #[must_use]
    pub fn in_chain(mut self, chain: RoomChain) -> Self {
        self.chain = chain;
        self
    }

    /// Returns true for filler rooms the generator may place anywhere.
    #[must_use]
    pub fn is_flavor(&self) -> bool {
        self.chain == RoomChain::Misc
    }
}
