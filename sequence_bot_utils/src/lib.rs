mod human;
pub use human::*;

use sequence::{Board, Card, Hand, Move, TeamColor};

/// What a strategy is told about the game before the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameParameters {
    /// The team of the player this strategy decides for.
    pub team: TeamColor,
    /// Number of sequences a team needs to win.
    pub sequences_to_win: usize,
    /// Size of a freshly dealt hand.
    pub cards_per_player: usize,
}

/// A trait to simplify writing strategies.
///
/// The judge owns the board and only lends it out while a strategy decides,
/// so strategies never change the board themselves.
pub trait Strategy {
    fn new_game(&mut self, params: &GameParameters);

    /// Choose the move for this turn.
    ///
    /// Only called when at least one card in `hand` has a legal move. Returning
    /// `None` or an illegal move ends the game with an illegal move by this player.
    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move>;

    /// Whether to discard the dead `card` and draw a replacement.
    fn query_dead_card(&mut self, _card: Card, _board: &Board) -> bool {
        true
    }

    /// Another player made a move.
    fn notify_move(&mut self, _player: &str, _team: TeamColor, _mv: Move) {}

    /// Another player discarded a dead card.
    fn notify_dead_card_discard(&mut self, _player: &str, _card: Card) {}

    /// This player drew `card`.
    fn notify_pickup(&mut self, _card: Card) {}
}

/// The moves worth considering for `team`: every legal move of every card in
/// the hand, but with equivalent jacks expanded only once.
///
/// Ordered by card, then as given by [`Board::iter_moves()`].
pub fn candidate_moves<'a>(
    hand: &Hand,
    board: &'a Board,
    team: TeamColor,
) -> impl Iterator<Item = Move> + 'a {
    hand.unique_by_effect()
        .into_iter()
        .flat_map(move |card| board.iter_moves(card, team))
}

/// The move with the highest weight. On ties, the move seen first wins.
pub fn max_by_weight<I, F>(moves: I, mut weight: F) -> Option<Move>
where
    I: IntoIterator<Item = Move>,
    F: FnMut(&Move) -> f64,
{
    let mut best: Option<(Move, f64)> = None;
    for mv in moves {
        let w = weight(&mv);
        match best {
            Some((_, best_w)) if w <= best_w => {}
            _ => best = Some((mv, w)),
        }
    }
    best.map(|(mv, _)| mv)
}
