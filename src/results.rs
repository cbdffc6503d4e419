//! Search results as handed to the presentation layer.
//!
//! Each result carries the newest draw's identity fields, every row's raw
//! number sequence, and the matched-position set(s) — enough for a two- or
//! three-column highlighted-number display without another fetch. Results
//! are plain data, serialized as-is.

use crate::common::draw::Draw;
use crate::common::positions::PositionSet;
use crate::matcher::{NumberMatch, RowOutcome};
use crate::window::Window;
use chrono::NaiveDate;
use serde::Serialize;

/// One matching two-draw window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoRowResult {
    /// Id of the newest draw in the window.
    pub id: i64,
    /// Game the window belongs to.
    pub game_name: String,
    /// Date of the newest draw.
    pub draw_date: NaiveDate,
    /// Draw-number label of the newest draw, when the game has one.
    pub draw_number: Option<String>,
    /// Numbers of the newer draw.
    pub first_numbers: Vec<i32>,
    /// Numbers of the older draw.
    pub second_numbers: Vec<i32>,
    /// Positions to highlight in both rows.
    pub matched_positions: PositionSet,
}

impl TwoRowResult {
    /// Assembles a result from a matched window.
    #[must_use]
    pub fn from_window(window: &Window<'_>, matched_positions: PositionSet) -> Self {
        let newest = window.newest();
        Self {
            id: newest.id,
            game_name: newest.game_name.clone(),
            draw_date: newest.draw_date,
            draw_number: newest.draw_number.clone(),
            first_numbers: window.draw(0).numbers.clone(),
            second_numbers: window.draw(1).numbers.clone(),
            matched_positions,
        }
    }
}

/// One matching three-draw window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeRowResult {
    /// Id of the newest draw in the window.
    pub id: i64,
    /// Game the window belongs to.
    pub game_name: String,
    /// Date of the newest draw.
    pub draw_date: NaiveDate,
    /// Draw-number label of the newest draw, when the game has one.
    pub draw_number: Option<String>,
    /// Numbers of the newest draw.
    pub first_numbers: Vec<i32>,
    /// Numbers of the middle draw.
    pub second_numbers: Vec<i32>,
    /// Numbers of the oldest draw.
    pub third_numbers: Vec<i32>,
    /// Positions to highlight in all rows.
    pub matched_positions: PositionSet,
}

impl ThreeRowResult {
    /// Assembles a result from a matched window.
    #[must_use]
    pub fn from_window(window: &Window<'_>, matched_positions: PositionSet) -> Self {
        let newest = window.newest();
        Self {
            id: newest.id,
            game_name: newest.game_name.clone(),
            draw_date: newest.draw_date,
            draw_number: newest.draw_number.clone(),
            first_numbers: window.draw(0).numbers.clone(),
            second_numbers: window.draw(1).numbers.clone(),
            third_numbers: window.draw(2).numbers.clone(),
            matched_positions,
        }
    }
}

/// One row of a [`RowThresholdResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// The draw's numbers.
    pub numbers: Vec<i32>,
    /// Whether this row cleared its own threshold.
    pub matched: bool,
    /// Draw indices where entered numbers occur.
    pub matched_positions: PositionSet,
}

/// One window accepted by the generic per-row threshold search.
///
/// Rows keep their own match flag: the window is a result because *some*
/// row cleared its threshold, and the display marks which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowThresholdResult {
    /// Id of the newest draw in the window.
    pub id: i64,
    /// Game the window belongs to.
    pub game_name: String,
    /// Date of the newest draw.
    pub draw_date: NaiveDate,
    /// Draw-number label of the newest draw, when the game has one.
    pub draw_number: Option<String>,
    /// One entry per window row, newest draw first.
    pub rows: Vec<ResultRow>,
}

impl RowThresholdResult {
    /// Assembles a result from a window and its per-row outcomes.
    #[must_use]
    pub fn from_window(window: &Window<'_>, outcomes: &[RowOutcome]) -> Self {
        let newest = window.newest();
        Self {
            id: newest.id,
            game_name: newest.game_name.clone(),
            draw_date: newest.draw_date,
            draw_number: newest.draw_number.clone(),
            rows: outcomes
                .iter()
                .enumerate()
                .map(|(index, outcome)| ResultRow {
                    numbers: window.draw(index).numbers.clone(),
                    matched: outcome.matched,
                    matched_positions: outcome.positions,
                })
                .collect(),
        }
    }

    /// Whether the first (newest) row matched.
    #[must_use]
    pub fn first_row_matched(&self) -> bool {
        self.rows.first().is_some_and(|r| r.matched)
    }

    /// Whether the second row matched.
    #[must_use]
    pub fn second_row_matched(&self) -> bool {
        self.rows.get(1).is_some_and(|r| r.matched)
    }

    /// Whether the third row matched (always false for two-row searches).
    #[must_use]
    pub fn third_row_matched(&self) -> bool {
        self.rows.get(2).is_some_and(|r| r.matched)
    }
}

/// Found positions of one entered number in a [`OneRowResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultNumber {
    /// The entered number.
    pub number: i32,
    /// Every draw index holding that number (empty when absent).
    pub positions: PositionSet,
}

/// One draw accepted by the single-row membership search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneRowResult {
    /// Id of the draw.
    pub id: i64,
    /// Game the draw belongs to.
    pub game_name: String,
    /// Date of the draw.
    pub draw_date: NaiveDate,
    /// Draw-number label, when the game has one.
    pub draw_number: Option<String>,
    /// The draw's numbers.
    pub numbers: Vec<i32>,
    /// Per entered number, where it was found. Unfound numbers are listed
    /// with an empty position set so the form can mark them.
    pub matches: Vec<ResultNumber>,
}

impl OneRowResult {
    /// Assembles a result from a draw and its per-number occurrences.
    #[must_use]
    pub fn from_draw(draw: &Draw, found: &[NumberMatch]) -> Self {
        Self {
            id: draw.id,
            game_name: draw.game_name.clone(),
            draw_date: draw.draw_date,
            draw_number: draw.draw_number.clone(),
            numbers: draw.numbers.clone(),
            matches: found
                .iter()
                .map(|m| ResultNumber {
                    number: m.number,
                    positions: m.positions,
                })
                .collect(),
        }
    }
}
