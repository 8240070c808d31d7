//! Loot tables and the weighted roll.

use ashvale_foundation::{ItemId, LootTableId, RandomSource};

/// One possible drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    /// Item awarded.
    pub item: ItemId,
    /// Relative weight among non-guaranteed entries.
    pub weight: u32,
    /// Always awarded, never rolled.
    pub guaranteed: bool,
}

/// A named set of drops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    /// Unique id.
    pub id: LootTableId,
    /// Entries in declaration order.
    pub entries: Vec<LootEntry>,
}

impl LootTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: LootTableId::new(id),
            entries: Vec::new(),
        }
    }

    /// Adds a weighted entry.
    #[must_use]
    pub fn with_entry(mut self, item: &str, weight: u32) -> Self {
        self.entries.push(LootEntry {
            item: ItemId::new(item),
            weight,
            guaranteed: false,
        });
        self
    }

    /// Adds a guaranteed entry.
    #[must_use]
    pub fn with_guaranteed(mut self, item: &str, weight: u32) -> Self {
        self.entries.push(LootEntry {
            item: ItemId::new(item),
            weight,
            guaranteed: true,
        });
        self
    }

    /// Rolls the table.
    ///
    /// Every guaranteed entry is awarded. If any weighted entries exist,
    /// exactly one of them is added: a single draw `r = random * total`
    /// picks the first entry whose running weight reaches `r`.
    pub fn roll(&self, random: &mut dyn RandomSource) -> Vec<ItemId> {
        let mut awarded: Vec<ItemId> = self
            .entries
            .iter()
            .filter(|entry| entry.guaranteed)
            .map(|entry| entry.item.clone())
            .collect();

        let weighted: Vec<&LootEntry> = self.entries.iter().filter(|e| !e.guaranteed).collect();
        if weighted.is_empty() {
            return awarded;
        }

        let total: u32 = weighted.iter().map(|entry| entry.weight).sum();
        let roll = random.next_f64() * f64::from(total);
        let mut cumulative = 0u32;
        for entry in &weighted {
            cumulative += entry.weight;
            if f64::from(cumulative) >= roll {
                awarded.push(entry.item.clone());
                return awarded;
            }
        }

        // Only reachable when every weight is zero.
        if let Some(last) = weighted.last() {
            awarded.push(last.item.clone());
        }
        awarded
    }
}
