// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Match-policy selection, one closed enum per search feature.
//!
//! Keeping a separate enum per feature means every policy branch is
//! exhaustively matched where it is handled; adding a variant fails to
//! compile until each matcher covers it.
//!
//! # Policy Overview
//!
//! ```text
//! positional            — same index in every row of the window
//! random                — any single shared index, lowest qualifying wins
//! position-random-zebra — positional ∪ random ∪ cross-position
//! match-two-lapping     — positional, at least two positions required
//! match-two-diagonal    — cross-position, at least two pattern pairs required
//! vertical              — three-row positional
//! diagonal              — three-row positional ∪ cross-position
//! any / at-least-N      — per-row membership threshold, rows OR-ed
//! ```

/// Match policy for the two-row (lapping) window search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoRowLogic {
    /// Pattern pairs must match at the identical index in both draws.
    Positional,
    /// Pattern pairs may match at any single shared index; the lowest
    /// qualifying index wins and scanning stops for that pair.
    Random,
    /// Union of positional, random, and cross-position matching.
    PositionRandomZebra,
    /// Positional matching gated on at least two matched positions.
    MatchTwoLapping,
    /// Cross-position matching gated on at least two matched pattern pairs.
    MatchTwoDiagonal,
}

impl TwoRowLogic {
    /// Minimum number of usable pattern entries this policy needs.
    #[must_use]
    pub const fn min_required(self) -> usize {
        match self {
            Self::Positional | Self::Random | Self::PositionRandomZebra => 1,
            Self::MatchTwoLapping | Self::MatchTwoDiagonal => 2,
        }
    }

    /// Parses a policy name from the request layer.
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn parse_logic_str(s: &str) -> Option<Self> {
        match s {
            "positional" => Some(Self::Positional),
            "random" => Some(Self::Random),
            "position-random-zebra" => Some(Self::PositionRandomZebra),
            "match-two-lapping" => Some(Self::MatchTwoLapping),
            "match-two-diagonal" => Some(Self::MatchTwoDiagonal),
            _ => None,
        }
    }
}

impl std::fmt::Display for TwoRowLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positional => "positional",
            Self::Random => "random",
            Self::PositionRandomZebra => "position-random-zebra",
            Self::MatchTwoLapping => "match-two-lapping",
            Self::MatchTwoDiagonal => "match-two-diagonal",
        };
        write!(f, "{s}")
    }
}

/// Match policy for the three-row (knocking) window search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeRowLogic {
    /// Pattern triplets must match at the identical index in all three draws.
    Vertical,
    /// Vertical matching plus cross-position triplets at pairwise-distinct
    /// indices (union, not replacement).
    Diagonal,
}

impl ThreeRowLogic {
    /// Minimum number of usable pattern entries this policy needs.
    #[must_use]
    pub const fn min_required(self) -> usize {
        match self {
            Self::Vertical | Self::Diagonal => 1,
        }
    }

    /// Parses a policy name from the request layer.
    #[must_use]
    pub fn parse_logic_str(s: &str) -> Option<Self> {
        match s {
            "vertical" => Some(Self::Vertical),
            "diagonal" => Some(Self::Diagonal),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThreeRowLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Per-row membership threshold for the generic row searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLogic {
    /// At least one entered number present anywhere in the row's draw.
    Any,
    /// At least `n` entered numbers present anywhere in the row's draw.
    AtLeast(u8),
}

impl RowLogic {
    /// Largest threshold the entry form offers.
    pub const MAX_THRESHOLD: u8 = 5;

    /// Creates an `AtLeast` threshold, rejecting values outside `1..=5`.
    #[must_use]
    pub fn at_least(n: u8) -> Option<Self> {
        (1..=Self::MAX_THRESHOLD).contains(&n).then_some(Self::AtLeast(n))
    }

    /// Number of entered values that must be present for a row to match.
    #[must_use]
    pub const fn threshold(self) -> usize {
        match self {
            Self::Any => 1,
            Self::AtLeast(n) => n as usize,
        }
    }

    /// Parses a policy name (`any` or `at-least-N`) from the request layer.
    #[must_use]
    pub fn parse_logic_str(s: &str) -> Option<Self> {
        if s == "any" {
            return Some(Self::Any);
        }
        let n: u8 = s.strip_prefix("at-least-")?.parse().ok()?;
        Self::at_least(n)
    }
}

impl std::fmt::Display for RowLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::AtLeast(n) => write!(f, "at-least-{n}"),
        }
    }
}
