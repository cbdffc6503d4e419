// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Draw records and the per-game ordering the matching engine relies on.
//!
//! A [`Draw`] is one published result of one game: a calendar date, an
//! optional draw-number label, and the ordered sequence of drawn numbers.
//! Draws are fetched once per search and treated as an immutable snapshot;
//! nothing here mutates or persists them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One published draw of one game.
///
/// The `numbers` sequence is game-defined in length and domain; the engine
/// treats it opaquely as an ordered sequence indexed from 0. Multi-set games
/// pad unused extra-number slots with zeros, which [`Draw::number_at`]
/// reports as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Storage identifier of the draw record.
    pub id: i64,
    /// Identifier of the game this draw belongs to.
    pub game_id: i64,
    /// Display name of the game.
    pub game_name: String,
    /// Identifier of the game family (country/type grouping).
    pub game_type_id: i64,
    /// Calendar date the draw was held.
    pub draw_date: NaiveDate,
    /// Optional draw-number label (games without one leave it empty).
    pub draw_number: Option<String>,
    /// Drawn numbers in published order.
    pub numbers: Vec<i32>,
}

impl Draw {
    /// Returns the drawn number at `position`, or `None` when the position
    /// is out of bounds or holds a non-positive padding value.
    #[must_use]
    #[inline]
    pub fn number_at(&self, position: usize) -> Option<i32> {
        match self.numbers.get(position) {
            Some(&n) if n > 0 => Some(n),
            _ => None,
        }
    }
}

/// Sorts draws newest-first by draw date.
///
/// The sort is stable: draws sharing a date keep their repository return
/// order. Ties are deliberately not disambiguated further (the draw-number
/// label does not participate). An O(n) presorted check skips the sort for
/// repositories that already return newest-first data, the common case.
pub fn sort_newest_first(draws: &mut [Draw]) {
    if draws.windows(2).all(|w| w[0].draw_date >= w[1].draw_date) {
        return;
    }
    draws.sort_by(|a, b| b.draw_date.cmp(&a.draw_date));
}

/// Partitions a flat fetch result into per-game groups.
///
/// Group order is first-seen order of each `game_id` in the input, which is
/// the repository return order. Result assembly inherits this order, so
/// games are never globally re-sorted against each other.
#[must_use]
pub fn group_by_game(draws: Vec<Draw>) -> Vec<(i64, Vec<Draw>)> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<(i64, Vec<Draw>)> = Vec::new();
    for draw in draws {
        match index.get(&draw.game_id) {
            Some(&slot) => groups[slot].1.push(draw),
            None => {
                index.insert(draw.game_id, groups.len());
                groups.push((draw.game_id, vec![draw]));
            }
        }
    }
    groups
}
