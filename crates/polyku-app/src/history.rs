//! Filter and sort state for the saved-game history screen.

use std::time::Duration;

use polyku_core::GridSize;

/// Difficulty rating attached to a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Difficulty {
    /// Few empty cells.
    Easy,
    /// The default rating.
    Moderate,
    /// Requires chained deductions.
    Hard,
    /// Requires guessing or advanced techniques.
    Challenge,
}

impl Difficulty {
    /// All ratings, in ascending order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Moderate, Self::Hard, Self::Challenge];
}

/// Sort direction for the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The field the history list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum SortField {
    /// Order of play.
    #[default]
    #[display("Game")]
    GameId,
    /// Time taken to finish.
    #[display("Time")]
    Timer,
}

impl SortField {
    /// All sortable fields.
    pub const ALL: [Self; 2] = [Self::GameId, Self::Timer];
}

/// Static facts about a finished game's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRecord {
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Grid size the game was played at.
    pub size: GridSize,
}

impl BoardRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(difficulty: Difficulty, size: GridSize) -> Self {
        Self { difficulty, size }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    /// Monotonically assigned game id.
    pub id: u64,
    /// Time taken to finish.
    pub elapsed: Duration,
    /// The board it was played on.
    pub board: BoardRecord,
}

impl SavedGame {
    /// Creates a saved game.
    #[must_use]
    pub const fn new(id: u64, elapsed: Duration, board: BoardRecord) -> Self {
        Self { id, elapsed, board }
    }
}

/// Current filters and sort of the history screen.
///
/// An empty filter list means "show everything"; toggling an entry adds it,
/// toggling it again removes it. Sorting defaults to newest game first.
#[derive(Debug, Default)]
pub struct HistoryViewModel {
    sort_order: SortOrder,
    sort_field: SortField,
    difficulties: Vec<Difficulty>,
    sizes: Vec<GridSize>,
}

impl HistoryViewModel {
    /// The current sort direction.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The current sort field.
    #[must_use]
    pub const fn sort_field(&self) -> SortField {
        self.sort_field
    }

    /// Whether `difficulty` is part of the active filter.
    #[must_use]
    pub fn filters_difficulty(&self, difficulty: Difficulty) -> bool {
        self.difficulties.contains(&difficulty)
    }

    /// Whether `size` is part of the active filter.
    #[must_use]
    pub fn filters_size(&self, size: GridSize) -> bool {
        self.sizes.contains(&size)
    }

    /// Reverses the sort direction.
    pub fn switch_sort_order(&mut self) {
        self.sort_order = self.sort_order.flipped();
    }

    /// Changes the sort field.
    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
    }

    /// Adds `difficulty` to the filter, or removes it if already present.
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        toggle(&mut self.difficulties, difficulty);
    }

    /// Adds `size` to the filter, or removes it if already present.
    pub fn toggle_size(&mut self, size: GridSize) {
        toggle(&mut self.sizes, size);
    }

    /// Filters then sorts `games` into a fresh list for display.
    #[must_use]
    pub fn apply(&self, games: &[SavedGame]) -> Vec<SavedGame> {
        let mut list: Vec<SavedGame> = games
            .iter()
            .filter(|game| {
                self.difficulties.is_empty()
                    || self.difficulties.contains(&game.board.difficulty)
            })
            .filter(|game| self.sizes.is_empty() || self.sizes.contains(&game.board.size))
            .cloned()
            .collect();
        match self.sort_field {
            SortField::GameId => list.sort_by_key(|game| game.id),
            SortField::Timer => list.sort_by_key(|game| game.elapsed),
        }
        if self.sort_order == SortOrder::Descending {
            list.reverse();
        }
        list
    }
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(index) = list.iter().position(|x| *x == item) {
        list.remove(index);
    } else {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> Vec<SavedGame> {
        vec![
            SavedGame::new(
                1,
                Duration::from_secs(900),
                BoardRecord::new(Difficulty::Easy, GridSize::NINE),
            ),
            SavedGame::new(
                2,
                Duration::from_secs(300),
                BoardRecord::new(Difficulty::Hard, GridSize::SIX),
            ),
            SavedGame::new(
                3,
                Duration::from_secs(600),
                BoardRecord::new(Difficulty::Easy, GridSize::TWELVE),
            ),
        ]
    }

    fn ids(list: &[SavedGame]) -> Vec<u64> {
        list.iter().map(|game| game.id).collect()
    }

    #[test]
    fn test_default_shows_newest_first() {
        let model = HistoryViewModel::default();
        assert_eq!(model.sort_order(), SortOrder::Descending);
        assert_eq!(model.sort_field(), SortField::GameId);
        assert_eq!(ids(&model.apply(&games())), [3, 2, 1]);
    }

    #[test]
    fn test_sort_by_timer_both_directions() {
        let mut model = HistoryViewModel::default();
        model.set_sort_field(SortField::Timer);
        assert_eq!(ids(&model.apply(&games())), [1, 3, 2]);
        model.switch_sort_order();
        assert_eq!(ids(&model.apply(&games())), [2, 3, 1]);
    }

    #[test]
    fn test_difficulty_filter_toggles() {
        let mut model = HistoryViewModel::default();
        model.toggle_difficulty(Difficulty::Easy);
        assert!(model.filters_difficulty(Difficulty::Easy));
        assert_eq!(ids(&model.apply(&games())), [3, 1]);

        model.toggle_difficulty(Difficulty::Easy);
        assert!(!model.filters_difficulty(Difficulty::Easy));
        assert_eq!(ids(&model.apply(&games())), [3, 2, 1]);
    }

    #[test]
    fn test_filters_combine() {
        let mut model = HistoryViewModel::default();
        model.toggle_difficulty(Difficulty::Easy);
        model.toggle_size(GridSize::NINE);
        assert_eq!(ids(&model.apply(&games())), [1]);

        model.toggle_size(GridSize::SIX);
        // Size filter admits 9x9 and 6x6; difficulty filter still drops id 2.
        assert_eq!(ids(&model.apply(&games())), [1]);
    }
}
