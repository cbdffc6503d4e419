// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Search entry points: validate, fetch, window, match, assemble.
//!
//! Each search is a pure function of the repository snapshot and the query:
//! validation runs first (an unusable pattern never triggers a fetch), the
//! snapshot is fetched exactly once, and matching is fanned out across
//! per-game groups. Game groups are independent, so they are mapped in
//! parallel; the order-preserving collect keeps results identical to a
//! sequential run — newest window per game first, games in repository
//! order.

use crate::common::draw::{group_by_game, sort_newest_first};
use crate::error::SearchError;
use crate::matcher::{
    match_row_threshold, match_three_row, match_two_row, membership, number_occurrences,
};
use crate::pattern::query::{OneRowQuery, RowThresholdQuery, ThreeRowQuery, TwoRowQuery};
use crate::repository::DrawRepository;
use crate::results::{OneRowResult, RowThresholdResult, ThreeRowResult, TwoRowResult};
use crate::window::{GameWindows, Window, WindowBuilder};
use rayon::prelude::*;
use tracing::debug;

/// Restricts a search to a game family and/or a single game.
///
/// Both filters are optional and combine as AND; the default searches
/// everything the repository holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Restrict to one game family.
    pub game_type_id: Option<i64>,
    /// Restrict to one specific game.
    pub game_id: Option<i64>,
}

impl GameFilter {
    /// Filter for one specific game.
    #[must_use]
    pub const fn game(game_id: i64) -> Self {
        Self {
            game_type_id: None,
            game_id: Some(game_id),
        }
    }

    /// Filter for one game family.
    #[must_use]
    pub const fn game_type(game_type_id: i64) -> Self {
        Self {
            game_type_id: Some(game_type_id),
            game_id: None,
        }
    }
}

fn fetch_windows(
    repo: &dyn DrawRepository,
    filter: GameFilter,
    builder: WindowBuilder,
) -> Result<GameWindows, SearchError> {
    let draws = repo.fetch_draws(filter.game_type_id, filter.game_id)?;
    let windows = builder.build(draws);
    debug!(
        games = windows.groups().len(),
        windows = windows.window_count(),
        size = windows.size(),
        "windowed draw snapshot"
    );
    Ok(windows)
}

/// Runs a matcher over every window, in parallel across game groups.
fn scan<R, F>(windows: &GameWindows, match_window: F) -> Vec<R>
where
    R: Send,
    F: Fn(&Window<'_>) -> Option<R> + Sync,
{
    windows
        .groups()
        .par_iter()
        .map(|(_, group)| {
            windows
                .windows_in(group)
                .filter_map(|window| match_window(&window))
                .collect::<Vec<R>>()
        })
        .collect::<Vec<Vec<R>>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Two-row ("lapping") search over consecutive draw pairs.
///
/// # Errors
///
/// [`SearchError::Validation`] when the query cannot match any window,
/// [`SearchError::Repository`] when the snapshot fetch fails. An empty
/// result list is a normal outcome, not an error.
pub fn search_two_row(
    repo: &dyn DrawRepository,
    query: &TwoRowQuery,
    filter: GameFilter,
) -> Result<Vec<TwoRowResult>, SearchError> {
    query.validate()?;
    let pairs = query.valid_pairs();
    debug!(logic = %query.logic, pairs = pairs.len(), "two-row search");
    let windows = fetch_windows(repo, filter, WindowBuilder::two_row())?;
    let results = scan(&windows, |window| {
        match_two_row(window, &pairs, query.logic)
            .map(|positions| TwoRowResult::from_window(window, positions))
    });
    debug!(results = results.len(), "two-row search complete");
    Ok(results)
}

/// Three-row ("knocking") search over consecutive draw triples.
///
/// # Errors
///
/// Same taxonomy as [`search_two_row`].
pub fn search_three_row(
    repo: &dyn DrawRepository,
    query: &ThreeRowQuery,
    filter: GameFilter,
) -> Result<Vec<ThreeRowResult>, SearchError> {
    query.validate()?;
    let triplets = query.valid_triplets();
    debug!(logic = %query.logic, triplets = triplets.len(), "three-row search");
    let windows = fetch_windows(repo, filter, WindowBuilder::three_row())?;
    let results = scan(&windows, |window| {
        match_three_row(window, &triplets, query.logic)
            .map(|positions| ThreeRowResult::from_window(window, positions))
    });
    debug!(results = results.len(), "three-row search complete");
    Ok(results)
}

/// Generic per-row membership search over 2- or 3-draw windows.
///
/// Rows are evaluated independently against their own draw and OR-ed; each
/// row's flag is carried into the result.
///
/// # Errors
///
/// Same taxonomy as [`search_two_row`].
pub fn search_row_threshold(
    repo: &dyn DrawRepository,
    query: &RowThresholdQuery,
    filter: GameFilter,
) -> Result<Vec<RowThresholdResult>, SearchError> {
    query.validate()?;
    debug!(rows = query.rows().len(), "row-threshold search");
    let windows = fetch_windows(repo, filter, WindowBuilder::with_size(query.window_size()))?;
    let results = scan(&windows, |window| {
        match_row_threshold(window, query.rows())
            .map(|outcomes| RowThresholdResult::from_window(window, &outcomes))
    });
    debug!(results = results.len(), "row-threshold search complete");
    Ok(results)
}

/// Single-row membership search over individual draws (no windows).
///
/// Accepts every draw where at least `threshold` of the entered numbers are
/// present anywhere in the draw. Draw order matches the window searches:
/// newest first per game, games in repository order.
///
/// # Errors
///
/// Same taxonomy as [`search_two_row`].
pub fn search_one_row(
    repo: &dyn DrawRepository,
    query: &OneRowQuery,
    filter: GameFilter,
) -> Result<Vec<OneRowResult>, SearchError> {
    query.validate()?;
    debug!(logic = %query.logic, "one-row search");
    let draws = repo.fetch_draws(filter.game_type_id, filter.game_id)?;
    let mut groups = group_by_game(draws);
    for (_, group) in &mut groups {
        sort_newest_first(group);
    }
    let threshold = query.logic.threshold();
    let results: Vec<OneRowResult> = groups
        .par_iter()
        .map(|(_, group)| {
            group
                .iter()
                .filter(|draw| membership(draw, &query.pattern).entries_matched >= threshold)
                .map(|draw| {
                    OneRowResult::from_draw(draw, &number_occurrences(draw, &query.pattern))
                })
                .collect::<Vec<OneRowResult>>()
        })
        .collect::<Vec<Vec<OneRowResult>>>()
        .into_iter()
        .flatten()
        .collect();
    debug!(results = results.len(), "one-row search complete");
    Ok(results)
}
