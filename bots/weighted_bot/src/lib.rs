//! A strategy that weighs every candidate move by the sequences it advances
//! for its own team and the sequences it blocks for the others.

mod completion;
mod config;
mod evaluation;

pub use completion::*;
pub use config::*;
pub use evaluation::*;

use sequence::{Board, Hand, Move, TeamColor};
use sequence_bot_utils::{candidate_moves, max_by_weight, GameParameters, Strategy};
use tracing::{debug, trace};

pub struct WeightedBot {
    config: WeightedConfig,
    team: TeamColor,
    sequences_to_win: usize,
}

impl WeightedBot {
    pub fn new(config: WeightedConfig) -> Self {
        Self {
            config,
            // Replaced in new_game()
            team: TeamColor::Blue,
            sequences_to_win: 2,
        }
    }

    pub fn config(&self) -> &WeightedConfig {
        &self.config
    }
}

impl Default for WeightedBot {
    fn default() -> Self {
        Self::new(WeightedConfig::default())
    }
}

impl Strategy for WeightedBot {
    fn new_game(&mut self, params: &GameParameters) {
        self.team = params.team;
        self.sequences_to_win = params.sequences_to_win;
    }

    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move> {
        let evaluator = MoveEvaluator::new(&self.config, board, hand, self.team, self.sequences_to_win);
        let best = max_by_weight(candidate_moves(hand, board, self.team), |mv| {
            let score = evaluator.score(mv);
            trace!(
                card = %mv.card,
                pos = %mv.pos,
                kind = ?mv.kind,
                offense = ?score.offense,
                defense = ?score.defense,
                weight = score.weight,
                "Scored move"
            );
            score.weight
        });
        if let Some(mv) = best {
            debug!(team = %self.team, "Chose {}", mv.describe(board));
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use sequence::{Card, MoveKind, Position, Rank, Suit};

    use super::*;

    fn bot(team: TeamColor, sequences_to_win: usize) -> WeightedBot {
        let mut bot = WeightedBot::default();
        bot.new_game(&GameParameters {
            team,
            sequences_to_win,
            cards_per_player: 7,
        });
        bot
    }

    #[test]
    fn takes_the_winning_move() {
        let mut board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        let wildcard = Card::new(Rank::Jack, Suit::Diamond);
        // 2C 3C 4C 5C on row 6, completed by 6C at (6, 7)
        for col in 3..7 {
            board
                .put_chip(wildcard, Position::new(6, col), TeamColor::Blue)
                .unwrap();
        }
        let six_clubs = Card::new(Rank::Six, Suit::Club);
        let hand = Hand::from_iter([Card::new(Rank::Two, Suit::Heart), six_clubs, Card::Joker]);
        let mv = bot(TeamColor::Blue, 1).query_move(&hand, &board).unwrap();
        assert_eq!(
            mv,
            Move {
                card: six_clubs,
                kind: MoveKind::Place,
                pos: Position::new(6, 7),
            }
        );
    }

    #[test]
    fn blocks_an_open_four() {
        let mut board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        let wildcard = Card::new(Rank::Jack, Suit::Diamond);
        for col in 3..7 {
            board
                .put_chip(wildcard, Position::new(6, col), TeamColor::Red)
                .unwrap();
        }
        // 6C is printed at (6, 7) next to the red run and at (8, 9)
        let hand = Hand::from_iter([Card::new(Rank::Six, Suit::Club)]);
        let mv = bot(TeamColor::Blue, 2).query_move(&hand, &board).unwrap();
        assert_eq!(mv.pos, Position::new(6, 7));
    }

    #[test]
    fn no_move_without_legal_moves() {
        let board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        let hand = Hand::from_iter([Card::new(Rank::Jack, Suit::Spade)]);
        assert_eq!(bot(TeamColor::Red, 2).query_move(&hand, &board), None);
    }
}
