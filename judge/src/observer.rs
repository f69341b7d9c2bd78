use sequence::{Board, Card, Move, Sequence, TeamColor};
use tracing::{debug, info, trace};

/// What to do after a team reached the number of sequences it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverChoice {
    /// End the match with that team as the winner.
    Exit,
    /// Play on until a player runs out of cards. No further wins are reported.
    KeepPlaying,
}

/// Gets told about everything that happens during a match.
///
/// Only [`MatchObserver::game_over()`] has a say in how the match goes on.
pub trait MatchObserver {
    fn notify_turn(&mut self, _player: &str, _team: TeamColor) {}

    fn update_board(&mut self, _board: &Board) {}

    fn dead_card_discarded(&mut self, _player: &str, _card: Card) {}

    /// The player had no legal move and passed.
    fn turn_skipped(&mut self, _player: &str) {}

    /// `removed_owner` is the team whose chip a removal took off the board.
    fn move_applied(&mut self, _player: &str, _mv: Move, _removed_owner: Option<TeamColor>) {}

    fn card_picked_up(&mut self, _player: &str, _card: Card) {}

    fn player_has_empty_hand(&mut self, _player: &str) {}

    /// `shut_out` is true if no other team completed any sequence.
    fn game_over(&mut self, team: TeamColor, winning_sequences: &[Sequence], shut_out: bool) -> GameOverChoice;
}

/// Reports every notification as a log event.
pub struct TracingObserver {
    keep_playing: bool,
}

impl TracingObserver {
    /// With `keep_playing`, every match goes on after the first team wins.
    pub fn new(keep_playing: bool) -> Self {
        Self { keep_playing }
    }
}

impl MatchObserver for TracingObserver {
    fn notify_turn(&mut self, player: &str, team: TeamColor) {
        debug!(player, %team, "Turn starts");
    }

    fn update_board(&mut self, board: &Board) {
        trace!("Board:\n{}", board);
    }

    fn dead_card_discarded(&mut self, player: &str, card: Card) {
        debug!(player, %card, "Discarded dead card");
    }

    fn turn_skipped(&mut self, player: &str) {
        debug!(player, "No legal move, turn skipped");
    }

    fn move_applied(&mut self, player: &str, mv: Move, removed_owner: Option<TeamColor>) {
        match removed_owner {
            Some(owner) => debug!(player, card = %mv.card, pos = %mv.pos, %owner, "Removed chip"),
            None => debug!(player, card = %mv.card, pos = %mv.pos, "Placed chip"),
        }
    }

    fn card_picked_up(&mut self, player: &str, card: Card) {
        trace!(player, %card, "Picked up card");
    }

    fn player_has_empty_hand(&mut self, player: &str) {
        debug!(player, "Out of cards");
    }

    fn game_over(&mut self, team: TeamColor, winning_sequences: &[Sequence], shut_out: bool) -> GameOverChoice {
        info!(%team, sequences = winning_sequences.len(), shut_out, "Team won");
        if self.keep_playing {
            GameOverChoice::KeepPlaying
        } else {
            GameOverChoice::Exit
        }
    }
}
