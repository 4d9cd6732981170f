//! `DoctorSchedule` — one doctor's arrival-tick-indexed waiting list.
//!
//! # Layout
//!
//! ```text
//! BTreeMap<Tick, BTreeMap<MonkId, Itinerary>>
//!          │              └─ ascending id = admission priority
//!          └─ ascending arrival tick; only the first key is ever served
//! ```
//!
//! Keying the inner map by `MonkId` makes the lowest-id pop a
//! `pop_first()`.  A monk is never queued twice; debug builds assert it.
//! A tick key is removed the moment its inner map empties, so
//! `peek_earliest` never reports a slot with nobody in it.

use std::collections::BTreeMap;

use mc_core::{MonkId, Tick};

use crate::{Itinerary, Monk};

/// Monks waiting for one doctor, grouped by arrival tick.
#[derive(Debug, Default)]
pub struct DoctorSchedule {
    slots: BTreeMap<Tick, BTreeMap<MonkId, Itinerary>>,
    /// Cached total monk count for O(1) `len()`.
    total: usize,
}

impl DoctorSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `monk` to arrive at `tick`, creating the slot if absent.
    pub fn insert(&mut self, tick: Tick, monk: Monk) {
        let previous = self.slots.entry(tick).or_default().insert(monk.id, monk.itinerary);
        debug_assert!(previous.is_none(), "{} queued twice at {tick}", monk.id);
        if previous.is_none() {
            self.total += 1;
        }
    }

    /// The earliest tick with at least one waiting monk, or `None` if empty.
    pub fn peek_earliest(&self) -> Option<Tick> {
        self.slots.keys().next().copied()
    }

    /// Remove and return the lowest-id monk waiting at `tick`.
    ///
    /// Deletes the slot when it becomes empty.  Returns `None` if nobody is
    /// waiting at `tick`.
    pub fn pop_highest_priority(&mut self, tick: Tick) -> Option<Monk> {
        let slot = self.slots.get_mut(&tick)?;
        let (id, itinerary) = slot.pop_first()?;
        if slot.is_empty() {
            self.slots.remove(&tick);
        }
        self.total -= 1;
        Some(Monk::new(id, itinerary))
    }

    /// Number of monks waiting at exactly `tick`.
    pub fn waiting_at(&self, tick: Tick) -> usize {
        self.slots.get(&tick).map_or(0, BTreeMap::len)
    }

    /// `true` if a slot exists for `tick`.
    pub fn has_slot(&self, tick: Tick) -> bool {
        self.slots.contains_key(&tick)
    }

    /// Total number of waiting monks across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct arrival ticks with at least one waiting monk.
    pub fn tick_count(&self) -> usize {
        self.slots.len()
    }
}
