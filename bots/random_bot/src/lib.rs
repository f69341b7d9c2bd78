use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sequence::{Board, Hand, Move, TeamColor};
use sequence_bot_utils::{GameParameters, Strategy};

/// Plays a uniformly random legal move.
///
/// Every card in the hand counts, so holding both copies of a card makes its
/// moves twice as likely.
pub struct RandomBot {
    rng: StdRng,
    team: TeamColor,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            // Replaced in new_game()
            team: TeamColor::Blue,
        }
    }
}

fn possible_moves(board: &Board, hand: &Hand, team: TeamColor) -> Vec<Move> {
    let mut moves = Vec::new();
    for card in hand.iter() {
        moves.extend(board.iter_moves(card, team));
    }
    moves
}

impl Strategy for RandomBot {
    fn new_game(&mut self, params: &GameParameters) {
        self.team = params.team;
    }

    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move> {
        possible_moves(board, hand, self.team)
            .choose(&mut self.rng)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use sequence::{Card, Rank, Suit};

    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let mut bot = RandomBot::new(7);
        bot.new_game(&GameParameters {
            team: TeamColor::Green,
            sequences_to_win: 2,
            cards_per_player: 7,
        });
        let board = Board::new(&[TeamColor::Blue, TeamColor::Green]);
        // The one-eyed jack is dead on an empty board
        let hand = Hand::from_iter([
            Card::new(Rank::Jack, Suit::Spade),
            Card::new(Rank::Two, Suit::Heart),
        ]);
        for _ in 0..20 {
            let mv = bot.query_move(&hand, &board).unwrap();
            assert_eq!(mv.card, Card::new(Rank::Two, Suit::Heart));
            assert!(board.clone().apply(mv, TeamColor::Green).is_ok());
        }
    }

    #[test]
    fn no_move_without_legal_moves() {
        let mut bot = RandomBot::new(7);
        let board = Board::new(&[TeamColor::Blue, TeamColor::Green]);
        let hand = Hand::from_iter([Card::new(Rank::Jack, Suit::Heart)]);
        assert_eq!(bot.query_move(&hand, &board), None);
    }
}
