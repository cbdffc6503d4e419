// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Parses user-entered row slots into a [`RowPattern`].
//!
//! Parsing is the only place raw strings appear; everything downstream of it
//! works on typed values. Invalid tokens are reported as validation errors
//! naming the row and position, never silently dropped.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of entry slots per pattern row.
pub const MAX_ROW_POSITIONS: usize = 10;

/// A game's declared number domain, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    /// Smallest drawable number.
    pub min: i32,
    /// Largest drawable number.
    pub max: i32,
}

impl NumberRange {
    /// Creates a range. `min` must not exceed `max`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if `n` lies inside the range.
    #[must_use]
    #[inline]
    pub const fn contains(self, n: i32) -> bool {
        self.min <= n && n <= self.max
    }
}

/// One row of the user's pattern: a sparse array of up to ten numbers.
///
/// The slot index is meaningful only to the positional policies; the free
/// and cross-position policies treat slots as mere input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowPattern {
    slots: [Option<i32>; MAX_ROW_POSITIONS],
}

impl RowPattern {
    /// Creates a row with every slot empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [None; MAX_ROW_POSITIONS],
        }
    }

    /// Creates a row from already-typed slot values.
    ///
    /// Values beyond [`MAX_ROW_POSITIONS`] are ignored, mirroring the entry
    /// form which has exactly ten slots.
    #[must_use]
    pub fn from_values(values: &[Option<i32>]) -> Self {
        let mut slots = [None; MAX_ROW_POSITIONS];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = *value;
        }
        Self { slots }
    }

    /// Returns the value at `position`, if entered.
    #[must_use]
    #[inline]
    pub fn get(&self, position: usize) -> Option<i32> {
        self.slots.get(position).copied().flatten()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn entered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates `(position, value)` over filled slots in position order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|value| (position, value)))
    }
}

/// Parses one row of text slots.
///
/// `row` is the 1-based row number, used only for error reporting so the
/// message matches the on-screen form. Each slot is trimmed; empty slots are
/// "no value here". Slots beyond [`MAX_ROW_POSITIONS`] are ignored.
///
/// # Errors
///
/// [`ValidationError::InvalidNumber`] when a non-empty slot fails to parse,
/// [`ValidationError::OutOfRange`] when a parsed value falls outside the
/// game's declared `range` (if one is given).
pub fn parse_row(
    row: usize,
    inputs: &[impl AsRef<str>],
    range: Option<NumberRange>,
) -> Result<RowPattern, ValidationError> {
    let mut slots = [None; MAX_ROW_POSITIONS];
    for (position, input) in inputs.iter().take(MAX_ROW_POSITIONS).enumerate() {
        let token = input.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let value: i32 = token.parse().map_err(|_| ValidationError::InvalidNumber {
            row,
            position: position + 1,
            token: token.to_string(),
        })?;
        if let Some(range) = range {
            if !range.contains(value) {
                return Err(ValidationError::OutOfRange {
                    row,
                    position: position + 1,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        slots[position] = Some(value);
    }
    Ok(RowPattern { slots })
}
