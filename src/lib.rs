// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! # `lapping` — Sequential Pattern Search over Lottery Draw History
//!
//! Implements the number-search features of the draw-statistics product:
//! sliding windows of consecutive draws per game, matched against
//! user-entered number patterns under several policies.
//!
//! ## Searches
//!
//! | Search | Entry point | Window | Description |
//! |--------|-------------|--------|-------------|
//! | Lapping | [`search::search_two_row`] | 2 draws | Positional, free-position, zebra and match-two policies |
//! | Knocking | [`search::search_three_row`] | 3 draws | Vertical and diagonal policies |
//! | Row threshold | [`search::search_row_threshold`] | 2–3 draws | Per-row membership counts, rows OR-ed |
//! | One row | [`search::search_one_row`] | single draw | Membership of entered numbers in each draw |
//!
//! ## Shape of a search
//!
//! ```text
//! validate query → fetch snapshot → window per game → match → assemble
//! ```
//!
//! Everything after the fetch is a pure function of the snapshot: no I/O,
//! no shared state, deterministic results (ordering included). Matching is
//! parallelized across per-game groups; the order-preserving collect keeps
//! the output identical to a sequential run.
//!
//! ## Example
//!
//! ```
//! use lapping::pattern::logic::TwoRowLogic;
//! use lapping::pattern::query::TwoRowQuery;
//! use lapping::repository::MemoryDrawRepository;
//! use lapping::search::{search_two_row, GameFilter};
//!
//! let repo = MemoryDrawRepository::default();
//! let query = TwoRowQuery::parse(
//!     &["5", "", "23"],
//!     &["5", "", "23"],
//!     TwoRowLogic::Positional,
//!     None,
//! )?;
//! let results = search_two_row(&repo, &query, GameFilter::default())?;
//! assert!(results.is_empty()); // empty snapshot, empty result — not an error
//! # Ok::<(), lapping::error::SearchError>(())
//! ```

pub mod common;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod repository;
pub mod results;
pub mod search;
pub mod window;
