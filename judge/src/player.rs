use centermost_bot::CentermostBot;
use random_bot::RandomBot;
use sequence::{Board, Card, CardRole, Hand, Move, MoveKind, TeamColor};
use sequence_bot_utils::{GameParameters, HumanStrategy, Strategy};
use tracing::trace;
use weighted_bot::WeightedBot;

use crate::error::IllegalTurn;

/// Every strategy the judge can seat.
pub enum AnyStrategy {
    Human(HumanStrategy),
    Random(RandomBot),
    Centermost(CentermostBot),
    Weighted(WeightedBot),
}

impl AnyStrategy {
    fn as_dyn(&mut self) -> &mut dyn Strategy {
        match self {
            AnyStrategy::Human(s) => s,
            AnyStrategy::Random(s) => s,
            AnyStrategy::Centermost(s) => s,
            AnyStrategy::Weighted(s) => s,
        }
    }
}

impl Strategy for AnyStrategy {
    fn new_game(&mut self, params: &GameParameters) {
        self.as_dyn().new_game(params)
    }

    fn query_move(&mut self, hand: &Hand, board: &Board) -> Option<Move> {
        self.as_dyn().query_move(hand, board)
    }

    fn query_dead_card(&mut self, card: Card, board: &Board) -> bool {
        self.as_dyn().query_dead_card(card, board)
    }

    fn notify_move(&mut self, player: &str, team: TeamColor, mv: Move) {
        self.as_dyn().notify_move(player, team, mv)
    }

    fn notify_dead_card_discard(&mut self, player: &str, card: Card) {
        self.as_dyn().notify_dead_card_discard(player, card)
    }

    fn notify_pickup(&mut self, card: Card) {
        self.as_dyn().notify_pickup(card)
    }
}

pub struct Player {
    pub name: String,
    pub strategy: AnyStrategy,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: AnyStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

pub struct Team {
    pub color: TeamColor,
    pub players: Vec<Player>,
}

/// A player seated for one game, with the hand it holds in that game.
pub struct PlayerWithGameState<'a> {
    pub player: &'a mut Player,
    pub team: TeamColor,
    pub hand: Hand,
}

impl<'a> PlayerWithGameState<'a> {
    pub fn new(player: &'a mut Player, team: TeamColor) -> Self {
        Self {
            player,
            team,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.player.name
    }

    pub fn has_legal_move(&self, board: &Board) -> bool {
        self.hand.iter().any(|card| !board.is_dead(card, self.team))
    }

    /// Cards that could be traded in this turn. One-eyed jacks are kept
    /// even when there is nothing to remove.
    pub fn dead_cards(&self, board: &Board) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|&card| card.role() != CardRole::OneEyed && board.is_dead(card, self.team))
            .collect()
    }

    /// Asks the strategy for a move and plays it. Returns the team whose chip
    /// was taken off the board, if any.
    pub fn play_turn(&mut self, board: &mut Board) -> Result<(Move, Option<TeamColor>), IllegalTurn> {
        let mv = self
            .player
            .strategy
            .query_move(&self.hand, board)
            .ok_or(IllegalTurn::NoMoveChosen)?;
        trace!(player = %self.player.name, ?mv, "Received move");
        if !self.hand.contains(mv.card) {
            return Err(IllegalTurn::CardNotInHand { card: mv.card });
        }
        let removed_owner = match mv.kind {
            MoveKind::Place => None,
            MoveKind::Remove => board.chip(mv.pos).map(|chip| chip.team),
        };
        board
            .apply(mv, self.team)
            .map_err(|err| IllegalTurn::IllegalMove { mv, err })?;
        self.hand.remove(mv.card);
        Ok((mv, removed_owner))
    }
}

#[cfg(test)]
mod tests {
    use sequence::{Position, Rank, Suit};
    use sequence_bot_utils::MovePrompt;

    use super::*;

    struct GivesUp;

    impl MovePrompt for GivesUp {
        fn query_move(&mut self, _: &Hand, _: &Board, _: TeamColor) -> Option<Move> {
            None
        }

        fn query_dead_card(&mut self, _card: Card) -> bool {
            false
        }
    }

    #[test]
    fn play_turn_moves_the_card_to_the_board() {
        let mut player = Player::new("ada", AnyStrategy::Centermost(CentermostBot::new()));
        let mut seat = PlayerWithGameState::new(&mut player, TeamColor::Blue);
        seat.hand = Hand::from_iter([Card::new(Rank::Three, Suit::Heart)]);
        let mut board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        let (mv, removed) = seat.play_turn(&mut board).unwrap();
        assert_eq!(mv.pos, Position::new(4, 4));
        assert_eq!(removed, None);
        assert!(seat.hand.is_empty());
        assert_eq!(board.chip(mv.pos).map(|chip| chip.team), Some(TeamColor::Blue));
    }

    #[test]
    fn dead_cards_skip_one_eyed_jacks() {
        let mut player = Player::new("ada", AnyStrategy::Centermost(CentermostBot::new()));
        let mut seat = PlayerWithGameState::new(&mut player, TeamColor::Blue);
        let one_eyed = Card::new(Rank::Jack, Suit::Heart);
        seat.hand = Hand::from_iter([one_eyed, Card::new(Rank::Two, Suit::Diamond)]);
        let board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        assert!(board.is_dead(one_eyed, TeamColor::Blue));
        assert!(seat.dead_cards(&board).is_empty());
        assert!(seat.has_legal_move(&board));
    }

    #[test]
    fn human_without_an_answer_forfeits() {
        let mut player = Player::new("bob", AnyStrategy::Human(HumanStrategy::new(Box::new(GivesUp))));
        let mut seat = PlayerWithGameState::new(&mut player, TeamColor::Red);
        seat.hand = Hand::from_iter([Card::Joker]);
        let mut board = Board::new(&[TeamColor::Blue, TeamColor::Red]);
        assert_eq!(seat.play_turn(&mut board), Err(IllegalTurn::NoMoveChosen));
    }
}
