// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Sliding-window construction over per-game draw history.
//!
//! The lapping features compare each draw against the draws immediately
//! before it: two-row searches look at overlapping pairs of consecutive
//! draws, three-row searches at overlapping triples. Windows never span
//! games, and within a game they run newest-first.
//!
//! Construction is a pure function of the fetched snapshot: partition by
//! game, stable-sort each group newest-first, then slide. A game with fewer
//! draws than the window size simply yields no windows.

use crate::common::draw::{group_by_game, sort_newest_first, Draw};

/// A window of 2 or 3 consecutive draws of one game, newest first.
///
/// Borrowed from the builder's sorted per-game groups; windows are cheap to
/// copy and never outlive the snapshot they were cut from.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    draws: &'a [Draw],
}

impl<'a> Window<'a> {
    /// Wraps a slice of consecutive same-game draws, newest first.
    #[must_use]
    pub fn new(draws: &'a [Draw]) -> Self {
        debug_assert!(matches!(draws.len(), 2 | 3));
        debug_assert!(draws.iter().all(|d| d.game_id == draws[0].game_id));
        Self { draws }
    }

    /// The draw at `row` (0 = newest).
    #[must_use]
    pub fn draw(&self, row: usize) -> &'a Draw {
        &self.draws[row]
    }

    /// The newest draw, whose identity fields label the result.
    #[must_use]
    pub fn newest(&self) -> &'a Draw {
        &self.draws[0]
    }

    /// Number of rows in the window (2 or 3).
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.draws.len()
    }

    /// All draws in the window, newest first.
    #[must_use]
    pub const fn draws(&self) -> &'a [Draw] {
        self.draws
    }
}

/// Builds per-game sliding windows of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct WindowBuilder {
    size: usize,
}

impl WindowBuilder {
    /// Builder for two-draw (lapping) windows.
    #[must_use]
    pub const fn two_row() -> Self {
        Self { size: 2 }
    }

    /// Builder for three-draw (knocking) windows.
    #[must_use]
    pub const fn three_row() -> Self {
        Self { size: 3 }
    }

    /// Builder for an explicit window size (2 or 3).
    #[must_use]
    pub const fn with_size(size: usize) -> Self {
        debug_assert!(matches!(size, 2 | 3));
        Self { size }
    }

    /// Partitions and sorts the snapshot, ready for window iteration.
    ///
    /// Group order is the repository's first-seen game order; draws within a
    /// group are newest-first with ties kept in repository order.
    #[must_use]
    pub fn build(&self, draws: Vec<Draw>) -> GameWindows {
        let mut groups = group_by_game(draws);
        for (_, group) in &mut groups {
            sort_newest_first(group);
        }
        GameWindows {
            size: self.size,
            groups,
        }
    }
}

/// Sorted per-game draw groups with their sliding windows.
#[derive(Debug, Clone)]
pub struct GameWindows {
    size: usize,
    groups: Vec<(i64, Vec<Draw>)>,
}

impl GameWindows {
    /// The window size (2 or 3).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Per-game groups in repository order, each sorted newest-first.
    #[must_use]
    pub fn groups(&self) -> &[(i64, Vec<Draw>)] {
        &self.groups
    }

    /// Windows of one sorted group, newest window first.
    pub fn windows_in<'a>(&self, group: &'a [Draw]) -> impl Iterator<Item = Window<'a>> {
        group.windows(self.size).map(Window::new)
    }

    /// All windows across games: per-game newest-first, games in group order.
    pub fn iter(&self) -> impl Iterator<Item = Window<'_>> {
        let size = self.size;
        self.groups
            .iter()
            .flat_map(move |(_, group)| group.windows(size).map(Window::new))
    }

    /// Total number of windows across all games.
    #[must_use]
    pub fn window_count(&self) -> usize {
        self.groups
            .iter()
            .map(|(_, group)| group.len().saturating_sub(self.size - 1))
            .sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn window_count_invariant(
            draws_per_game in proptest::collection::vec(0..20usize, 1..6),
            size in 2..=3usize,
        ) {
            let mut draws = Vec::new();
            for (game, &count) in draws_per_game.iter().enumerate() {
                for i in 0..count {
                    draws.push(Draw {
                        id: (game * 100 + i) as i64,
                        game_id: game as i64,
                        game_name: format!("Game {game}"),
                        game_type_id: 1,
                        draw_date: chrono::NaiveDate::from_num_days_from_ce_opt(730_000 + i as i32)
                            .unwrap(),
                        draw_number: None,
                        numbers: vec![1],
                    });
                }
            }
            let windows = WindowBuilder::with_size(size).build(draws);
            let expected: usize = draws_per_game
                .iter()
                .map(|&n| n.saturating_sub(size - 1))
                .sum();
            prop_assert_eq!(windows.window_count(), expected);
            prop_assert_eq!(windows.iter().count(), expected);
        }

        #[test]
        fn windows_sorted_newest_first_within_game(
            count in 2..15usize,
        ) {
            let draws: Vec<Draw> = (0..count)
                .map(|i| Draw {
                    id: i as i64,
                    game_id: 1,
                    game_name: "Game 1".to_string(),
                    game_type_id: 1,
                    // Deliberately unsorted input dates.
                    draw_date: chrono::NaiveDate::from_num_days_from_ce_opt(
                        730_000 + ((i * 7) % count) as i32,
                    )
                    .unwrap(),
                    draw_number: None,
                    numbers: vec![1],
                })
                .collect();
            let windows = WindowBuilder::two_row().build(draws);
            for window in windows.iter() {
                prop_assert!(window.draw(0).draw_date >= window.draw(1).draw_date);
            }
        }
    }
}
