// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! The user's query: pattern rows plus a match policy.
//!
//! A query is validated once, before any repository fetch; a query that can
//! never match any window is rejected up front instead of producing an empty
//! scan.
//!
//! # Valid pairs and triplets
//!
//! Window matching only considers positions where *every* row has a value.
//! A value entered at position 3 of row one but not row two contributes
//! nothing — the position is excluded entirely, not evaluated per row. This
//! mirrors how the entry forms have always behaved and is intentional.

use crate::error::ValidationError;
use crate::pattern::logic::{RowLogic, ThreeRowLogic, TwoRowLogic};
use crate::pattern::parser::{parse_row, NumberRange, RowPattern};

/// A pattern position filled in both rows of a two-row query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEntry {
    /// Value entered in the first (newer) row.
    pub first: i32,
    /// Value entered in the second (older) row.
    pub second: i32,
    /// Slot position the pair was entered at.
    pub position: usize,
}

/// A pattern position filled in all three rows of a three-row query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripletEntry {
    /// Value entered in the first (newest) row.
    pub first: i32,
    /// Value entered in the second row.
    pub second: i32,
    /// Value entered in the third (oldest) row.
    pub third: i32,
    /// Slot position the triplet was entered at.
    pub position: usize,
}

/// Two-row (lapping) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoRowQuery {
    /// Pattern for the newer draw of each window.
    pub first: RowPattern,
    /// Pattern for the older draw of each window.
    pub second: RowPattern,
    /// Window match policy.
    pub logic: TwoRowLogic,
}

impl TwoRowQuery {
    /// Creates a query from typed rows.
    #[must_use]
    pub const fn new(first: RowPattern, second: RowPattern, logic: TwoRowLogic) -> Self {
        Self {
            first,
            second,
            logic,
        }
    }

    /// Parses a query from raw form input.
    pub fn parse(
        first_inputs: &[impl AsRef<str>],
        second_inputs: &[impl AsRef<str>],
        logic: TwoRowLogic,
        range: Option<NumberRange>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first: parse_row(1, first_inputs, range)?,
            second: parse_row(2, second_inputs, range)?,
            logic,
        })
    }

    /// Positions filled in both rows, in position order.
    #[must_use]
    pub fn valid_pairs(&self) -> Vec<PairEntry> {
        self.first
            .entries()
            .filter_map(|(position, first)| {
                self.second.get(position).map(|second| PairEntry {
                    first,
                    second,
                    position,
                })
            })
            .collect()
    }

    /// Rejects queries that cannot match any window under the chosen policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let usable = self.valid_pairs().len();
        let required = self.logic.min_required();
        if usable == 0 {
            return Err(ValidationError::EmptyPattern);
        }
        if usable < required {
            return Err(ValidationError::InsufficientPattern {
                row: sparser_row(&[self.first, self.second]),
                entered: usable,
                required,
            });
        }
        Ok(())
    }
}

/// Three-row (knocking) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeRowQuery {
    /// Pattern for the newest draw of each window.
    pub first: RowPattern,
    /// Pattern for the middle draw of each window.
    pub second: RowPattern,
    /// Pattern for the oldest draw of each window.
    pub third: RowPattern,
    /// Window match policy.
    pub logic: ThreeRowLogic,
}

impl ThreeRowQuery {
    /// Creates a query from typed rows.
    #[must_use]
    pub const fn new(
        first: RowPattern,
        second: RowPattern,
        third: RowPattern,
        logic: ThreeRowLogic,
    ) -> Self {
        Self {
            first,
            second,
            third,
            logic,
        }
    }

    /// Parses a query from raw form input.
    pub fn parse(
        first_inputs: &[impl AsRef<str>],
        second_inputs: &[impl AsRef<str>],
        third_inputs: &[impl AsRef<str>],
        logic: ThreeRowLogic,
        range: Option<NumberRange>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first: parse_row(1, first_inputs, range)?,
            second: parse_row(2, second_inputs, range)?,
            third: parse_row(3, third_inputs, range)?,
            logic,
        })
    }

    /// Positions filled in all three rows, in position order.
    #[must_use]
    pub fn valid_triplets(&self) -> Vec<TripletEntry> {
        self.first
            .entries()
            .filter_map(|(position, first)| {
                match (self.second.get(position), self.third.get(position)) {
                    (Some(second), Some(third)) => Some(TripletEntry {
                        first,
                        second,
                        third,
                        position,
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// Rejects queries that cannot match any window under the chosen policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let usable = self.valid_triplets().len();
        let required = self.logic.min_required();
        if usable == 0 {
            return Err(ValidationError::EmptyPattern);
        }
        if usable < required {
            return Err(ValidationError::InsufficientPattern {
                row: sparser_row(&[self.first, self.second, self.third]),
                entered: usable,
                required,
            });
        }
        Ok(())
    }
}

/// One row of a row-threshold query: a pattern plus its own threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowThreshold {
    /// Numbers entered for this row.
    pub pattern: RowPattern,
    /// Membership threshold this row must clear on its own.
    pub logic: RowLogic,
}

/// Generic "match at least N per row" query over 2- or 3-draw windows.
///
/// Rows are evaluated independently against their own draw and OR-ed: the
/// window is a result as soon as any one row clears its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowThresholdQuery {
    rows: Vec<RowThreshold>,
}

impl RowThresholdQuery {
    /// Creates a two-row query.
    #[must_use]
    pub fn two_row(first: RowThreshold, second: RowThreshold) -> Self {
        Self {
            rows: vec![first, second],
        }
    }

    /// Creates a three-row query.
    #[must_use]
    pub fn three_row(first: RowThreshold, second: RowThreshold, third: RowThreshold) -> Self {
        Self {
            rows: vec![first, second, third],
        }
    }

    /// The rows, newest window draw first.
    #[must_use]
    pub fn rows(&self) -> &[RowThreshold] {
        &self.rows
    }

    /// Window size this query needs (2 or 3).
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.rows.len()
    }

    /// Rejects queries where no row can ever clear its threshold.
    ///
    /// Empty rows are allowed as long as at least one row has entries (the
    /// OR semantics make empty rows inert); a non-empty row entered below
    /// its own threshold is reported, since it silently never matching is
    /// exactly the confusion validation exists to prevent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rows.iter().all(|r| r.pattern.is_empty()) {
            return Err(ValidationError::EmptyPattern);
        }
        for (index, row) in self.rows.iter().enumerate() {
            let entered = row.pattern.entered_count();
            let required = row.logic.threshold();
            if entered > 0 && entered < required {
                return Err(ValidationError::InsufficientPattern {
                    row: index + 1,
                    entered,
                    required,
                });
            }
        }
        Ok(())
    }
}

/// Single-row membership query over individual draws (no windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneRowQuery {
    /// Numbers to look for.
    pub pattern: RowPattern,
    /// Membership threshold a draw must clear.
    pub logic: RowLogic,
}

impl OneRowQuery {
    /// Creates a query from a typed row.
    #[must_use]
    pub const fn new(pattern: RowPattern, logic: RowLogic) -> Self {
        Self { pattern, logic }
    }

    /// Parses a query from raw form input.
    pub fn parse(
        inputs: &[impl AsRef<str>],
        logic: RowLogic,
        range: Option<NumberRange>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            pattern: parse_row(1, inputs, range)?,
            logic,
        })
    }

    /// Rejects queries that cannot match any draw.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let entered = self.pattern.entered_count();
        if entered == 0 {
            return Err(ValidationError::EmptyPattern);
        }
        let required = self.logic.threshold();
        if entered < required {
            return Err(ValidationError::InsufficientPattern {
                row: 1,
                entered,
                required,
            });
        }
        Ok(())
    }
}

/// 1-based index of the row with the fewest entered values (first on ties).
fn sparser_row(rows: &[RowPattern]) -> usize {
    let mut row = 1;
    let mut fewest = usize::MAX;
    for (index, pattern) in rows.iter().enumerate() {
        let entered = pattern.entered_count();
        if entered < fewest {
            fewest = entered;
            row = index + 1;
        }
    }
    row
}
