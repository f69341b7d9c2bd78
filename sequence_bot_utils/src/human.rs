use sequence::{Board, Card, Hand, Move, TeamColor};
use tracing::debug;

use crate::{GameParameters, Strategy};

/// The user interface side of a human player.
///
/// Implemented outside of this workspace by whatever presents the game to a person.
pub trait MovePrompt {
    /// Ask for a move. `None` means the person gave up.
    fn query_move(&mut self, hand: &Hand, board: &Board, team: TeamColor) -> Option<Move>;

    /// Ask whether the dead `card` should be swapped for a new one.
    fn query_dead_card(&mut self, card: Card) -> bool;

    /// Tell the person why their last answer was not accepted.
    fn reject(&mut self, _mv: Move, _reason: &str) {}

    fn notify_pickup(&mut self, _card: Card) {}
}

/// Forwards every decision to a [`MovePrompt`], asking again until the answer is a legal move.
pub struct HumanStrategy {
    prompt: Box<dyn MovePrompt>,
    team: TeamColor,
}

impl HumanStrategy {
    pub fn new(prompt: Box<dyn MovePrompt>) -> Self {
        Self {
            prompt,
            // Replaced in new_game()
            team: TeamColor::Blue,
        }
    }

    fn check(&self, mv: Move, hand: &Hand, board: &Board) -> Result<(), &'static str> {
        if !hand.contains(mv.card) {
            return Err("That card is not in your hand.");
        }
        if !board.iter_moves(mv.card, self.team).any(|legal| legal == mv) {
            return Err("That card cannot be played there.");
        }
        Ok(())
    }
}

impl Strategy for HumanStrategy {
    fn new_game(&mut self, params: &GameParameters) {
        self.team = params.team;
    }

    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move> {
        loop {
            let mv = self.prompt.query_move(hand, board, self.team)?;
            match self.check(mv, hand, board) {
                Ok(()) => return Some(mv),
                Err(reason) => {
                    debug!(?mv, reason, "Rejected move from prompt");
                    self.prompt.reject(mv, reason);
                }
            }
        }
    }

    fn query_dead_card(&mut self, card: Card, _board: &Board) -> bool {
        self.prompt.query_dead_card(card)
    }

    fn notify_pickup(&mut self, card: Card) {
        self.prompt.notify_pickup(card);
    }
}
