//! The pure event reducer.
//!
//! `apply_event` is total: every event kind has a defined effect, and events
//! that reference a stale encounter, or that this build does not recognise,
//! return the input state unchanged.

use ashvale_foundation::BASE_STATS;

use crate::event::Event;
use crate::state::{EncounterStatus, GameState};

/// Narrative lines kept in the log.
pub const LOG_LIMIT: usize = 50;

/// Applies one event.
#[must_use]
pub fn apply_event(state: &GameState, event: &Event) -> GameState {
    let mut next = state.clone();
    let max_hp = BASE_STATS.hp;

    match event {
        Event::Move { to, .. } => {
            next.room = to.clone();
            next.encounter = None;
        }
        Event::GiveItem { item } => next.inventory.push_back(item.clone()),
        Event::RemoveItem { item } => {
            if let Some(index) = next.inventory.index_of(item) {
                next.inventory.remove(index);
            }
        }
        Event::Equip { slot, item } => {
            next.equipment.insert(*slot, item.clone());
        }
        Event::Unequip { slot } => {
            next.equipment.remove(slot);
        }
        Event::Damage { target, amount } => match &mut next.encounter {
            Some(encounter) if &encounter.enemy == target => {
                encounter.enemy_hp = (encounter.enemy_hp - amount).max(0);
            }
            _ => return state.clone(),
        },
        Event::PlayerDamage { amount } => {
            next.stats.hp = (next.stats.hp - amount).clamp(0, max_hp);
        }
        Event::PlayerHeal { amount } => {
            next.stats.hp = (next.stats.hp + amount).clamp(0, max_hp);
        }
        Event::AdjustStats(delta) => {
            if let Some(hp) = delta.hp {
                next.stats.hp = (next.stats.hp + hp).clamp(0, max_hp);
            }
            if let Some(power) = delta.power {
                next.stats.power = (next.stats.power + power).max(0);
            }
            if let Some(ward) = delta.ward {
                next.stats.ward = (next.stats.ward + ward).max(0);
            }
        }
        Event::Defeat { target } => match &mut next.encounter {
            Some(encounter) if &encounter.enemy == target => {
                encounter.status = EncounterStatus::Victory;
                encounter.enemy_hp = 0;
            }
            _ => return state.clone(),
        },
        Event::PlayerDefeated => match &mut next.encounter {
            Some(encounter) => encounter.status = EncounterStatus::Defeat,
            None => return state.clone(),
        },
        Event::SetFlag { fact, value } => {
            next.flags.insert(fact.clone(), *value);
        }
        Event::AppendLog { line } => {
            next.log.push_back(line.clone());
            while next.log.len() > LOG_LIMIT {
                next.log.pop_front();
            }
        }
        Event::UpdateEncounter(None) => next.encounter = None,
        Event::UpdateEncounter(Some(patch)) => {
            let base = next.encounter.take().unwrap_or_default();
            next.encounter = Some(base.patched(patch));
        }
        Event::Unknown => return state.clone(),
    }

    next
}

/// Folds events left to right.
#[must_use]
pub fn apply_events<'a>(state: &GameState, events: impl IntoIterator<Item = &'a Event>) -> GameState {
    events
        .into_iter()
        .fold(state.clone(), |acc, event| apply_event(&acc, event))
}
