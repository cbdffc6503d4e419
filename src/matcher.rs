// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! The matching policy families.
//!
//! Every function here evaluates one window against the query's valid
//! pairs/triplets and reports which positions matched. Nothing is mutated
//! and nothing is fetched; callers own iteration over windows.
//!
//! # Policy Families
//!
//! - **Positional** — a pair matches only at the identical index in every
//!   row of the window.
//! - **Random (free position)** — a pair may match at any index, but still
//!   the *same* index across rows; the lowest qualifying index wins and
//!   scanning stops for that pair. With duplicate numbers in a draw this
//!   first-match-wins rule is what makes results deterministic.
//! - **Diagonal (cross-position, "zebra")** — indices may differ per row;
//!   every qualifying index combination contributes its positions. Policies
//!   that include diagonal evaluate it *in addition to* the positional
//!   result (union, not replacement).
//! - **Min-count gates** — the underlying matches are computed as usual, but
//!   the window only becomes a result when enough distinct pattern entries
//!   matched. Below the gate the window is excluded entirely.
//! - **Row membership** — position-free: counts which entered numbers occur
//!   anywhere in a row's draw. Used by the generic threshold searches where
//!   rows are evaluated independently and OR-ed.

use crate::common::draw::Draw;
use crate::common::positions::PositionSet;
use crate::pattern::logic::{ThreeRowLogic, TwoRowLogic};
use crate::pattern::parser::RowPattern;
use crate::pattern::query::{PairEntry, RowThreshold, TripletEntry};
use crate::window::Window;

/// Matched positions plus how many pattern entries produced them.
///
/// The entry count drives the min-count gates: a single pair can contribute
/// two positions under diagonal matching, so `positions.len()` alone would
/// overcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Union of matched position indices.
    pub positions: PositionSet,
    /// Number of distinct pattern entries that matched.
    pub entries_matched: usize,
}

impl MatchOutcome {
    /// Merges another outcome produced from the same entry list.
    ///
    /// Positions union; the entry count takes the maximum rather than the
    /// sum, since both outcomes counted the same entries.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            positions: self.positions.union(other.positions),
            entries_matched: self.entries_matched.max(other.entries_matched),
        }
    }
}

/// Positional matching for two-row windows.
///
/// A pair matches when both draws carry its values at the pair's own slot
/// position.
#[must_use]
pub fn positional_pairs(window: &Window<'_>, pairs: &[PairEntry]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for pair in pairs {
        if window.draw(0).number_at(pair.position) == Some(pair.first)
            && window.draw(1).number_at(pair.position) == Some(pair.second)
        {
            outcome.positions.insert(pair.position);
            outcome.entries_matched += 1;
        }
    }
    outcome
}

/// Free-position matching for two-row windows.
///
/// For each pair, draw indices are scanned left to right; the first index
/// where the newer draw carries `pair.first` *and* the older draw carries
/// `pair.second` is recorded and scanning stops for that pair. The entered
/// slot position plays no role.
#[must_use]
pub fn random_pairs(window: &Window<'_>, pairs: &[PairEntry]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for pair in pairs {
        for position in 0..window.draw(0).numbers.len() {
            if window.draw(0).number_at(position) == Some(pair.first)
                && window.draw(1).number_at(position) == Some(pair.second)
            {
                outcome.positions.insert(position);
                outcome.entries_matched += 1;
                break;
            }
        }
    }
    outcome
}

/// Cross-position ("zebra") matching for two-row windows.
///
/// For each pair, every index combination with `pos1 != pos2` where the
/// newer draw carries `pair.first` at `pos1` and the older draw carries
/// `pair.second` at `pos2` contributes both positions. Unlike the free
/// policy, all qualifying combinations are collected.
#[must_use]
pub fn diagonal_pairs(window: &Window<'_>, pairs: &[PairEntry]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for pair in pairs {
        let mut pair_hit = false;
        for pos1 in 0..window.draw(0).numbers.len() {
            if window.draw(0).number_at(pos1) != Some(pair.first) {
                continue;
            }
            for pos2 in 0..window.draw(1).numbers.len() {
                if pos2 != pos1 && window.draw(1).number_at(pos2) == Some(pair.second) {
                    outcome.positions.insert(pos1);
                    outcome.positions.insert(pos2);
                    pair_hit = true;
                }
            }
        }
        if pair_hit {
            outcome.entries_matched += 1;
        }
    }
    outcome
}

/// Positional (vertical) matching for three-row windows.
#[must_use]
pub fn positional_triplets(window: &Window<'_>, triplets: &[TripletEntry]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for triplet in triplets {
        if window.draw(0).number_at(triplet.position) == Some(triplet.first)
            && window.draw(1).number_at(triplet.position) == Some(triplet.second)
            && window.draw(2).number_at(triplet.position) == Some(triplet.third)
        {
            outcome.positions.insert(triplet.position);
            outcome.entries_matched += 1;
        }
    }
    outcome
}

/// Cross-position matching for three-row windows.
///
/// Requires pairwise-distinct indices across the three draws; every
/// qualifying combination contributes all three positions.
#[must_use]
pub fn diagonal_triplets(window: &Window<'_>, triplets: &[TripletEntry]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for triplet in triplets {
        let mut triplet_hit = false;
        for pos1 in 0..window.draw(0).numbers.len() {
            if window.draw(0).number_at(pos1) != Some(triplet.first) {
                continue;
            }
            for pos2 in 0..window.draw(1).numbers.len() {
                if pos2 == pos1 || window.draw(1).number_at(pos2) != Some(triplet.second) {
                    continue;
                }
                for pos3 in 0..window.draw(2).numbers.len() {
                    if pos3 != pos1
                        && pos3 != pos2
                        && window.draw(2).number_at(pos3) == Some(triplet.third)
                    {
                        outcome.positions.insert(pos1);
                        outcome.positions.insert(pos2);
                        outcome.positions.insert(pos3);
                        triplet_hit = true;
                    }
                }
            }
        }
        if triplet_hit {
            outcome.entries_matched += 1;
        }
    }
    outcome
}

/// Where one entered number occurs in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatch {
    /// The entered number.
    pub number: i32,
    /// Every draw index holding that number (empty when absent).
    pub positions: PositionSet,
}

/// Occurrence positions of each entered number, in slot order.
#[must_use]
pub fn number_occurrences(draw: &Draw, pattern: &RowPattern) -> Vec<NumberMatch> {
    pattern
        .entries()
        .map(|(_, number)| {
            let mut positions = PositionSet::new();
            for position in 0..draw.numbers.len() {
                if draw.number_at(position) == Some(number) {
                    positions.insert(position);
                }
            }
            NumberMatch { number, positions }
        })
        .collect()
}

/// Position-free membership: how many entered numbers occur anywhere in the
/// draw, and at which indices.
#[must_use]
pub fn membership(draw: &Draw, pattern: &RowPattern) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for found in number_occurrences(draw, pattern) {
        if !found.positions.is_empty() {
            outcome.positions = outcome.positions.union(found.positions);
            outcome.entries_matched += 1;
        }
    }
    outcome
}

/// Evaluates one two-row window under the given policy.
///
/// Returns the matched positions, or `None` when the window is not a result
/// (no match, or a min-count gate left unreached — gated windows yield no
/// partial credit).
#[must_use]
pub fn match_two_row(
    window: &Window<'_>,
    pairs: &[PairEntry],
    logic: TwoRowLogic,
) -> Option<PositionSet> {
    let outcome = match logic {
        TwoRowLogic::Positional => positional_pairs(window, pairs),
        TwoRowLogic::Random => random_pairs(window, pairs),
        TwoRowLogic::PositionRandomZebra => positional_pairs(window, pairs)
            .merged(random_pairs(window, pairs))
            .merged(diagonal_pairs(window, pairs)),
        TwoRowLogic::MatchTwoLapping => positional_pairs(window, pairs),
        TwoRowLogic::MatchTwoDiagonal => diagonal_pairs(window, pairs),
    };
    (outcome.entries_matched >= logic.min_required() && !outcome.positions.is_empty())
        .then_some(outcome.positions)
}

/// Evaluates one three-row window under the given policy.
#[must_use]
pub fn match_three_row(
    window: &Window<'_>,
    triplets: &[TripletEntry],
    logic: ThreeRowLogic,
) -> Option<PositionSet> {
    let outcome = match logic {
        ThreeRowLogic::Vertical => positional_triplets(window, triplets),
        ThreeRowLogic::Diagonal => {
            positional_triplets(window, triplets).merged(diagonal_triplets(window, triplets))
        }
    };
    (!outcome.positions.is_empty()).then_some(outcome.positions)
}

/// Per-row outcome of a row-threshold evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOutcome {
    /// Whether this row cleared its own threshold.
    pub matched: bool,
    /// Draw indices where the row's entered numbers occur.
    pub positions: PositionSet,
}

/// Evaluates one window under the generic per-row threshold mode.
///
/// Each row is compared against its own draw by membership; rows are OR-ed.
/// Returns one outcome per row when at least one row cleared its threshold,
/// `None` otherwise.
#[must_use]
pub fn match_row_threshold(window: &Window<'_>, rows: &[RowThreshold]) -> Option<Vec<RowOutcome>> {
    let outcomes: Vec<RowOutcome> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let found = membership(window.draw(index), &row.pattern);
            RowOutcome {
                matched: found.entries_matched >= row.logic.threshold(),
                positions: found.positions,
            }
        })
        .collect();
    outcomes.iter().any(|o| o.matched).then_some(outcomes)
}
