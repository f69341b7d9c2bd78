use crate::{Board, Card, Move, Rank, Suit, TeamColor};

/// A board reached by playing random legal moves from an empty board.
#[derive(Clone, Debug)]
pub struct RandomGame {
    pub teams: Vec<TeamColor>,
    /// The moves in the order they were played, with the team that played them.
    pub moves: Vec<(Move, TeamColor)>,
}

impl RandomGame {
    /// Replays all moves on a fresh board.
    pub fn board(&self) -> Board {
        let mut board = Board::new(&self.teams);
        for &(mv, team) in &self.moves {
            board
                .apply(mv, team)
                .expect("Recorded move is no longer legal");
        }
        board
    }
}

impl quickcheck::Arbitrary for RandomGame {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let teams = if bool::arbitrary(g) {
            vec![TeamColor::Blue, TeamColor::Green]
        } else {
            vec![TeamColor::Blue, TeamColor::Green, TeamColor::Red]
        };
        let mut board = Board::new(&teams);
        let mut moves = Vec::new();

        // Long enough games to regularly see completed (and overlapping) sequences
        let num_turns = usize::arbitrary(g) % 120;
        for _ in 0..num_turns {
            // Mostly play with the first team, so that sequences get completed
            let team = if u8::arbitrary(g) % 4 == 0 {
                *g.choose(&teams).unwrap()
            } else {
                teams[0]
            };
            let card = Card::arbitrary(g);
            let candidates: Vec<Move> = board.iter_moves(card, team).collect();
            if let Some(&mv) = g.choose(&candidates) {
                board.apply(mv, team).unwrap();
                moves.push((mv, team));
            }
        }

        RandomGame { teams, moves }
    }
}

impl quickcheck::Arbitrary for Suit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Rank::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Jacks and the Joker come up more often than in a real deck, so that removals happen
        match u8::arbitrary(g) % 8 {
            0 => Card::Joker,
            1 => Card::new(Rank::Jack, Suit::arbitrary(g)),
            _ => Card::new(Rank::arbitrary(g), Suit::arbitrary(g)),
        }
    }
}
