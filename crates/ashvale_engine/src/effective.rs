//! Effective stats: base stats plus equipment plus one-shot buffs.

use ashvale_foundation::Stats;
use ashvale_world::{Catalog, Item};

use crate::state::GameState;

/// Recomputes the player's effective stats.
///
/// Buffs pointing at items the catalog does not know are skipped.
#[must_use]
pub fn effective_stats(state: &GameState, catalog: &Catalog) -> Stats {
    let bonus = |item: &Item| Stats::new(0, item.power_bonus(), item.ward_bonus());
    let equipped = state
        .equipment
        .values()
        .filter_map(|id| catalog.item(id.as_str()));
    let buffed = state
        .active_buffs()
        .filter_map(|id| catalog.item(id.as_str()));
    equipped
        .chain(buffed)
        .fold(state.stats, |total, item| total + bonus(item))
}
