use crate::{CellSet, Position, TeamColor};

/// Restricts which catalog sequences [`Board::iter_sequences()`](crate::Board::iter_sequences) yields.
///
/// The default filter lets every sequence through.
///
/// ```
/// # use sequence::{Board, Position, SequenceFilter, TeamColor};
/// let board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
/// let filter = SequenceFilter::new()
///     .exclude_corner_extensions()
///     .must_include(Position::new(0, 1));
/// // Along row 0 from (0, 0), down column 1, and diagonally down from (0, 1).
/// // The run (0, 1)..(0, 5) is a corner extension.
/// assert_eq!(board.iter_sequences(&filter).count(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceFilter {
    pub(crate) exclude_corner_extensions: bool,
    pub(crate) possible_for: Option<(TeamColor, usize)>,
    pub(crate) must_include: CellSet,
}

impl SequenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop sequences that share exactly four cells with a corner sequence.
    #[must_use]
    pub fn exclude_corner_extensions(mut self) -> Self {
        self.exclude_corner_extensions = true;
        self
    }

    /// Drop sequences that `team` can no longer complete.
    ///
    /// A chip of another team makes a sequence impossible, unless it is
    /// unlocked and one of the `one_eyed_budget` removals is still left to
    /// take it off. Removals are spent in the sequence's cell order.
    #[must_use]
    pub fn possible_for(mut self, team: TeamColor, one_eyed_budget: usize) -> Self {
        self.possible_for = Some((team, one_eyed_budget));
        self
    }

    /// Keep only sequences containing `pos`. May be given several times.
    #[must_use]
    pub fn must_include(mut self, pos: Position) -> Self {
        self.must_include = self.must_include.insert(pos);
        self
    }
}
