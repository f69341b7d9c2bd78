use sequence::{Board, Hand, Move, TeamColor};
use sequence_bot_utils::{candidate_moves, max_by_weight, GameParameters, Strategy};

/// Plays as close to the middle of the board as possible.
pub struct CentermostBot {
    team: TeamColor,
}

impl CentermostBot {
    pub fn new() -> Self {
        Self {
            // Replaced in new_game()
            team: TeamColor::Blue,
        }
    }
}

impl Default for CentermostBot {
    fn default() -> Self {
        Self::new()
    }
}

/// 5 for the two middle rows (or columns), down to 1 for the outermost ones.
fn closeness_to_center(coord: u8) -> u8 {
    match coord {
        4 | 5 => 5,
        3 | 6 => 4,
        2 | 7 => 3,
        1 | 8 => 2,
        _ => 1,
    }
}

pub fn move_weight(mv: &Move) -> f64 {
    let closeness = closeness_to_center(mv.pos.row).min(closeness_to_center(mv.pos.col));
    f64::from(closeness)
}

impl Strategy for CentermostBot {
    fn new_game(&mut self, params: &GameParameters) {
        self.team = params.team;
    }

    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move> {
        max_by_weight(candidate_moves(hand, board, self.team), move_weight)
    }
}

#[cfg(test)]
mod tests {
    use sequence::{Card, MoveKind, Position, Rank, Suit};

    use super::*;

    #[test]
    fn weight_rings() {
        let at = |row, col| Move {
            card: Card::Joker,
            kind: MoveKind::Place,
            pos: Position::new(row, col),
        };
        assert_eq!(move_weight(&at(4, 5)), 5.0);
        assert_eq!(move_weight(&at(4, 8)), 2.0);
        assert_eq!(move_weight(&at(0, 5)), 1.0);
        assert_eq!(move_weight(&at(7, 3)), 3.0);
    }

    #[test]
    fn prefers_the_inner_cell() {
        let mut bot = CentermostBot::new();
        bot.new_game(&GameParameters {
            team: TeamColor::Red,
            sequences_to_win: 2,
            cards_per_player: 7,
        });
        let board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        // 3H is printed at (1, 1) and (4, 4)
        let three_hearts = Card::new(Rank::Three, Suit::Heart);
        let hand = Hand::from_iter([three_hearts]);
        let mv = bot.query_move(&hand, &board).unwrap();
        assert_eq!(mv.pos, Position::new(4, 4));

        // A wildcard reaches the center too, but the first maximum wins
        let hand = Hand::from_iter([Card::Joker, three_hearts]);
        let mv = bot.query_move(&hand, &board).unwrap();
        assert_eq!(mv.card, three_hearts);
    }
}
