//! The draw-snapshot boundary.
//!
//! The engine never talks to storage directly: a [`DrawRepository`] hands it
//! a finite, immutable snapshot of draws and everything after that is pure
//! computation. Authorization, caching, and retries all live on the other
//! side of this trait.

use crate::common::draw::Draw;
use crate::error::RepositoryError;

/// Supplies the draw snapshot for one search.
///
/// `game_type_id` restricts the fetch to a game family, `game_id` to one
/// specific game; both are optional and combine as AND. Return order is
/// arbitrary — the engine imposes its own ordering.
pub trait DrawRepository {
    /// Fetches the draws matching the given filters.
    fn fetch_draws(
        &self,
        game_type_id: Option<i64>,
        game_id: Option<i64>,
    ) -> Result<Vec<Draw>, RepositoryError>;
}

/// In-memory repository over a fixed draw list.
///
/// Backs tests and demo data, and adapts any pre-fetched snapshot to the
/// engine's entry points.
#[derive(Debug, Clone, Default)]
pub struct MemoryDrawRepository {
    draws: Vec<Draw>,
}

impl MemoryDrawRepository {
    /// Creates a repository over the given draws.
    #[must_use]
    pub const fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }

    /// Appends a draw to the snapshot.
    pub fn push(&mut self, draw: Draw) {
        self.draws.push(draw);
    }

    /// Number of draws held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Returns true if no draws are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

impl DrawRepository for MemoryDrawRepository {
    fn fetch_draws(
        &self,
        game_type_id: Option<i64>,
        game_id: Option<i64>,
    ) -> Result<Vec<Draw>, RepositoryError> {
        Ok(self
            .draws
            .iter()
            .filter(|draw| game_type_id.is_none_or(|t| draw.game_type_id == t))
            .filter(|draw| game_id.is_none_or(|g| draw.game_id == g))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draw(id: i64, game_id: i64, game_type_id: i64) -> Draw {
        Draw {
            id,
            game_id,
            game_name: format!("Game {game_id}"),
            game_type_id,
            draw_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            draw_number: None,
            numbers: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_fetch_all_without_filters() {
        let repo = MemoryDrawRepository::new(vec![
            make_draw(1, 1, 1),
            make_draw(2, 2, 1),
            make_draw(3, 3, 2),
        ]);
        let draws = repo.fetch_draws(None, None).unwrap();
        assert_eq!(draws.len(), 3);
    }

    #[test]
    fn test_fetch_filters_by_game_type() {
        let repo = MemoryDrawRepository::new(vec![
            make_draw(1, 1, 1),
            make_draw(2, 2, 1),
            make_draw(3, 3, 2),
        ]);
        let draws = repo.fetch_draws(Some(1), None).unwrap();
        assert_eq!(draws.len(), 2);
        assert!(draws.iter().all(|d| d.game_type_id == 1));
    }

    #[test]
    fn test_fetch_filters_combine_as_and() {
        let repo = MemoryDrawRepository::new(vec![
            make_draw(1, 1, 1),
            make_draw(2, 2, 1),
            make_draw(3, 2, 2),
        ]);
        let draws = repo.fetch_draws(Some(1), Some(2)).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].id, 2);
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let repo = MemoryDrawRepository::new(vec![
            make_draw(5, 1, 1),
            make_draw(3, 1, 1),
            make_draw(9, 1, 1),
        ]);
        let ids: Vec<i64> = repo
            .fetch_draws(None, None)
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_empty_repository() {
        let repo = MemoryDrawRepository::default();
        assert!(repo.is_empty());
        assert!(repo.fetch_draws(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_push() {
        let mut repo = MemoryDrawRepository::default();
        repo.push(make_draw(1, 1, 1));
        assert_eq!(repo.len(), 1);
    }
}
