use std::collections::HashSet;

use rand::Rng;
use sequence::{Board, Card, Deck, Sequence, TeamColor};
use sequence_bot_utils::{GameParameters, Strategy};
use tracing::{debug, info};

use crate::error::{GameSetupError, IllegalTurn};
use crate::observer::{GameOverChoice, MatchObserver};
use crate::player::{PlayerWithGameState, Team};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByTeam {
        team: TeamColor,
        sequences: usize,
        /// No other team completed a sequence.
        shut_out: bool,
    },
    /// Play stopped with several teams tied for the most sequences.
    Draw,
    IllegalMoveByPlayer {
        player: String,
        team: TeamColor,
        err: IllegalTurn,
    },
}

/// The numbers a valid set of teams plays with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSetup {
    pub cards_per_player: usize,
    pub sequences_to_win: usize,
}

/// Hand size by total number of players.
fn hand_size(num_players: usize) -> Option<usize> {
    match num_players {
        2 => Some(7),
        3 | 4 => Some(6),
        6 => Some(5),
        8 | 9 => Some(4),
        10 | 12 => Some(3),
        _ => None,
    }
}

pub fn validate_setup(teams: &[Team]) -> Result<MatchSetup, GameSetupError> {
    if !(2..=3).contains(&teams.len()) {
        return Err(GameSetupError::WrongTeamCount { count: teams.len() });
    }
    let mut colors = HashSet::new();
    for team in teams {
        if !colors.insert(team.color) {
            return Err(GameSetupError::DuplicateTeam { team: team.color });
        }
    }
    let size = teams[0].players.len();
    if teams.iter().any(|team| team.players.len() != size) {
        return Err(GameSetupError::UnequalTeamSizes);
    }
    if size == 0 {
        return Err(GameSetupError::NoPlayers);
    }
    let max = if teams.len() == 2 { 5 } else { 4 };
    if size > max {
        return Err(GameSetupError::TeamTooLarge {
            team: teams[0].color,
            size,
            max,
        });
    }
    let mut names = HashSet::new();
    for player in teams.iter().flat_map(|team| &team.players) {
        if !names.insert(player.name.as_str()) {
            return Err(GameSetupError::DuplicatePlayer {
                name: player.name.clone(),
            });
        }
    }
    let count = size * teams.len();
    let cards_per_player = hand_size(count).ok_or(GameSetupError::UnsupportedPlayerCount { count })?;
    Ok(MatchSetup {
        cards_per_player,
        sequences_to_win: if teams.len() == 2 { 2 } else { 1 },
    })
}

/// Seats the first player of every team, then the second of every team, and so on.
fn seat_players(teams: &mut [Team]) -> Vec<PlayerWithGameState<'_>> {
    let size = teams.first().map_or(0, |team| team.players.len());
    let mut per_team: Vec<_> = teams
        .iter_mut()
        .map(|team| (team.color, team.players.iter_mut()))
        .collect();
    let mut seats = Vec::with_capacity(size * per_team.len());
    for _ in 0..size {
        for (color, players) in per_team.iter_mut() {
            if let Some(player) = players.next() {
                seats.push(PlayerWithGameState::new(player, *color));
            }
        }
    }
    seats
}

fn deal(deck: &mut Deck, seats: &mut [PlayerWithGameState], cards_per_player: usize) {
    for seat in seats {
        for _ in 0..cards_per_player {
            if let Some(card) = deck.draw() {
                seat.hand.add(card);
            }
        }
    }
}

/// Plays one match between `teams`.
///
/// Returns an error only if the teams cannot play, not when an illegal move
/// is played.
pub fn play_game<R: Rng + ?Sized>(
    rng: &mut R,
    teams: &mut [Team],
    observer: &mut dyn MatchObserver,
) -> Result<GameResult, GameSetupError> {
    let setup = validate_setup(teams)?;
    let colors: Vec<TeamColor> = teams.iter().map(|team| team.color).collect();
    let mut board = Board::new(&colors);
    let mut deck = Deck::shuffled(rng);
    let mut seats = seat_players(teams);
    deal(&mut deck, &mut seats, setup.cards_per_player);
    for seat in seats.iter_mut() {
        let params = GameParameters {
            team: seat.team,
            sequences_to_win: setup.sequences_to_win,
            cards_per_player: setup.cards_per_player,
        };
        seat.player.strategy.new_game(&params);
    }
    info!(
        players = seats.len(),
        cards_per_player = setup.cards_per_player,
        sequences_to_win = setup.sequences_to_win,
        "Starting game"
    );

    let mut keep_playing = false;
    let mut consecutive_skips = 0;
    for current in (0..seats.len()).cycle() {
        if seats[current].hand.is_empty() {
            observer.player_has_empty_hand(seats[current].name());
            return Ok(final_standing(&board, &colors));
        }
        observer.notify_turn(seats[current].name(), seats[current].team);
        observer.update_board(&board);

        exchange_dead_cards(&mut seats, current, &board, &mut deck, observer);

        if !seats[current].has_legal_move(&board) {
            observer.turn_skipped(seats[current].name());
            consecutive_skips += 1;
            if consecutive_skips == seats.len() {
                debug!("Nobody can move anymore");
                return Ok(final_standing(&board, &colors));
            }
            continue;
        }
        consecutive_skips = 0;

        let seat = &mut seats[current];
        let (mv, removed_owner) = match seat.play_turn(&mut board) {
            Ok(outcome) => outcome,
            Err(err) => {
                return Ok(GameResult::IllegalMoveByPlayer {
                    player: seat.player.name.clone(),
                    team: seat.team,
                    err,
                })
            }
        };
        let (name, team) = (seat.player.name.clone(), seat.team);
        observer.move_applied(&name, mv, removed_owner);
        for (idx, other) in seats.iter_mut().enumerate() {
            if idx != current {
                other.player.strategy.notify_move(&name, team, mv);
            }
        }

        if !keep_playing {
            let winning = board.get_winning_sequences(team);
            if winning.len() >= setup.sequences_to_win {
                let shut_out = colors
                    .iter()
                    .filter(|&&other| other != team)
                    .all(|&other| board.get_winning_sequences(other).is_empty());
                match observer.game_over(team, &winning, shut_out) {
                    GameOverChoice::Exit => {
                        return Ok(GameResult::WonByTeam {
                            team,
                            sequences: winning.len(),
                            shut_out,
                        })
                    }
                    GameOverChoice::KeepPlaying => {
                        info!(%team, "Keep playing after win");
                        keep_playing = true;
                    }
                }
            }
        }

        let seat = &mut seats[current];
        if let Some(card) = deck.draw() {
            seat.hand.add(card);
            seat.player.strategy.notify_pickup(card);
            observer.card_picked_up(&seat.player.name, card);
        }
    }
    // Only reachable without seats, which validation rules out
    Err(GameSetupError::NoPlayers)
}

/// Offers every dead card in the current player's hand for a new one.
fn exchange_dead_cards(
    seats: &mut [PlayerWithGameState],
    current: usize,
    board: &Board,
    deck: &mut Deck,
    observer: &mut dyn MatchObserver,
) {
    let dead_cards: Vec<Card> = seats[current].dead_cards(board);
    for card in dead_cards {
        let seat = &mut seats[current];
        if !seat.player.strategy.query_dead_card(card, board) {
            continue;
        }
        seat.hand.remove(card);
        let name = seat.player.name.clone();
        observer.dead_card_discarded(&name, card);
        for (idx, other) in seats.iter_mut().enumerate() {
            if idx != current {
                other.player.strategy.notify_dead_card_discard(&name, card);
            }
        }
        if let Some(new_card) = deck.draw() {
            let seat = &mut seats[current];
            seat.hand.add(new_card);
            seat.player.strategy.notify_pickup(new_card);
            observer.card_picked_up(&name, new_card);
        }
    }
}

/// The team with the most sequences wins, a tie at the top is a draw.
fn final_standing(board: &Board, colors: &[TeamColor]) -> GameResult {
    let won: Vec<(TeamColor, Vec<Sequence>)> = colors
        .iter()
        .map(|&team| (team, board.get_winning_sequences(team)))
        .collect();
    let most = won.iter().map(|(_, seqs)| seqs.len()).max().unwrap_or(0);
    let mut leaders = won.iter().filter(|(_, seqs)| seqs.len() == most);
    match (leaders.next(), leaders.next()) {
        (Some(&(team, _)), None) => GameResult::WonByTeam {
            team,
            sequences: most,
            shut_out: won
                .iter()
                .all(|(other, seqs)| *other == team || seqs.is_empty()),
        },
        _ => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use centermost_bot::CentermostBot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use random_bot::RandomBot;
    use sequence::DECK_SIZE;
    use weighted_bot::WeightedBot;

    use super::*;
    use crate::player::{AnyStrategy, Player};

    fn team(color: TeamColor, names: &[&str]) -> Team {
        Team {
            color,
            players: names
                .iter()
                .map(|&name| Player::new(name, AnyStrategy::Centermost(CentermostBot::new())))
                .collect(),
        }
    }

    #[test]
    fn setup_errors() {
        let four_teams = [
            team(TeamColor::Blue, &["a"]),
            team(TeamColor::Green, &["b"]),
            team(TeamColor::Red, &["c"]),
            team(TeamColor::Red, &["d"]),
        ];
        assert_eq!(
            validate_setup(&four_teams),
            Err(GameSetupError::WrongTeamCount { count: 4 })
        );
        let unequal = [team(TeamColor::Blue, &["a", "b"]), team(TeamColor::Red, &["c"])];
        assert_eq!(validate_setup(&unequal), Err(GameSetupError::UnequalTeamSizes));
        let empty = [team(TeamColor::Blue, &[]), team(TeamColor::Red, &[])];
        assert_eq!(validate_setup(&empty), Err(GameSetupError::NoPlayers));
        let same_color = [team(TeamColor::Blue, &["a"]), team(TeamColor::Blue, &["b"])];
        assert_eq!(
            validate_setup(&same_color),
            Err(GameSetupError::DuplicateTeam { team: TeamColor::Blue })
        );
        let too_large = [
            team(TeamColor::Blue, &["a", "b", "c", "d", "e"]),
            team(TeamColor::Green, &["f", "g", "h", "i", "j"]),
            team(TeamColor::Red, &["k", "l", "m", "n", "o"]),
        ];
        assert_eq!(
            validate_setup(&too_large),
            Err(GameSetupError::TeamTooLarge {
                team: TeamColor::Blue,
                size: 5,
                max: 4
            })
        );
        let same_name = [team(TeamColor::Blue, &["a", "b"]), team(TeamColor::Red, &["c", "a"])];
        assert_eq!(
            validate_setup(&same_name),
            Err(GameSetupError::DuplicatePlayer { name: String::from("a") })
        );
    }

    #[test]
    fn hand_sizes() {
        let two = [team(TeamColor::Blue, &["a"]), team(TeamColor::Red, &["b"])];
        assert_eq!(
            validate_setup(&two),
            Ok(MatchSetup {
                cards_per_player: 7,
                sequences_to_win: 2
            })
        );
        let three = [
            team(TeamColor::Blue, &["a", "b", "c", "d"]),
            team(TeamColor::Green, &["e", "f", "g", "h"]),
            team(TeamColor::Red, &["i", "j", "k", "l"]),
        ];
        assert_eq!(
            validate_setup(&three),
            Ok(MatchSetup {
                cards_per_player: 3,
                sequences_to_win: 1
            })
        );
    }

    #[test]
    fn deal_two_teams_of_three() {
        let mut teams = [
            team(TeamColor::Blue, &["b1", "b2", "b3"]),
            team(TeamColor::Red, &["r1", "r2", "r3"]),
        ];
        let setup = validate_setup(&teams).unwrap();
        assert_eq!(setup.cards_per_player, 5);
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
        let mut seats = seat_players(&mut teams);
        deal(&mut deck, &mut seats, setup.cards_per_player);
        let names: Vec<&str> = seats.iter().map(|seat| seat.name()).collect();
        assert_eq!(names, ["b1", "r1", "b2", "r2", "b3", "r3"]);
        assert!(seats.iter().all(|seat| seat.hand.len() == 5));
        assert_eq!(deck.len(), DECK_SIZE - 30);
    }

    /// Counts the calls that matter for ending a match.
    #[derive(Default)]
    struct Counting {
        keep_playing: bool,
        game_overs: usize,
        reported: Option<(TeamColor, usize, bool)>,
        moves: usize,
        empty_hands: usize,
    }

    impl MatchObserver for Counting {
        fn move_applied(&mut self, _player: &str, _mv: sequence::Move, _removed_owner: Option<TeamColor>) {
            self.moves += 1;
        }

        fn player_has_empty_hand(&mut self, _player: &str) {
            self.empty_hands += 1;
        }

        fn game_over(&mut self, team: TeamColor, seqs: &[Sequence], shut_out: bool) -> GameOverChoice {
            self.game_overs += 1;
            self.reported = Some((team, seqs.len(), shut_out));
            if self.keep_playing {
                GameOverChoice::KeepPlaying
            } else {
                GameOverChoice::Exit
            }
        }
    }

    /// Checks that a match without keep-playing ended for the right reason.
    fn assert_ends_at_threshold(result: &GameResult, observer: &Counting, sequences_to_win: usize) {
        match (result, observer.reported) {
            (GameResult::IllegalMoveByPlayer { err, .. }, _) => panic!("illegal move: {}", err),
            (
                GameResult::WonByTeam {
                    team,
                    sequences,
                    shut_out,
                },
                Some(reported),
            ) => {
                assert!(*sequences >= sequences_to_win);
                assert_eq!((*team, *sequences, *shut_out), reported);
            }
            // Ran out of cards or moves before anybody reached the threshold
            (GameResult::WonByTeam { sequences, .. }, None) => {
                assert!(*sequences < sequences_to_win);
            }
            (GameResult::Draw, reported) => assert_eq!(reported, None),
        }
        assert!(observer.game_overs <= 1);
    }

    fn bots() -> Vec<Team> {
        vec![
            Team {
                color: TeamColor::Blue,
                players: vec![Player::new("weighted", AnyStrategy::Weighted(WeightedBot::default()))],
            },
            Team {
                color: TeamColor::Green,
                players: vec![Player::new("random", AnyStrategy::Random(RandomBot::new(3)))],
            },
        ]
    }

    #[test]
    fn bot_match_ends_with_a_result() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut teams = bots();
        let setup = validate_setup(&teams).unwrap();
        assert_eq!(setup.sequences_to_win, 2);
        for _ in 0..3 {
            let mut observer = Counting::default();
            let result = play_game(&mut rng, &mut teams, &mut observer).unwrap();
            assert_ends_at_threshold(&result, &observer, setup.sequences_to_win);
            assert!(observer.moves <= DECK_SIZE);
        }
    }

    #[test]
    fn keep_playing_until_out_of_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut teams = bots();
        let mut observer = Counting {
            keep_playing: true,
            ..Counting::default()
        };
        let result = play_game(&mut rng, &mut teams, &mut observer).unwrap();
        assert!(!matches!(result, GameResult::IllegalMoveByPlayer { .. }));
        assert!(observer.game_overs <= 1);
        // The first empty hand ends the match
        assert!(observer.empty_hands <= 1);
    }

    #[test]
    fn three_team_match() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut teams = [
            team(TeamColor::Blue, &["a"]),
            team(TeamColor::Green, &["b"]),
            team(TeamColor::Red, &["c"]),
        ];
        let setup = validate_setup(&teams).unwrap();
        assert_eq!(setup.sequences_to_win, 1);
        let mut observer = Counting::default();
        let result = play_game(&mut rng, &mut teams, &mut observer).unwrap();
        assert_ends_at_threshold(&result, &observer, setup.sequences_to_win);
        if observer.game_overs == 0 {
            // Nobody completed anything, so all teams are tied at zero
            assert_eq!(result, GameResult::Draw);
        }
    }

    /// Completes the run (row, 0)..(row, 4) for `team`.
    fn fill_row(board: &mut Board, team: TeamColor, row: u8) {
        let wildcard = sequence::Card::new(sequence::Rank::Jack, sequence::Suit::Club);
        for col in 0..5 {
            board
                .put_chip(wildcard, sequence::Position::new(row, col), team)
                .unwrap();
        }
    }

    #[test]
    fn final_standing_picks_the_single_leader() {
        let colors = [TeamColor::Blue, TeamColor::Green, TeamColor::Red];

        let mut board = Board::new(&colors);
        assert_eq!(final_standing(&board, &colors), GameResult::Draw);

        fill_row(&mut board, TeamColor::Blue, 1);
        assert_eq!(
            final_standing(&board, &colors),
            GameResult::WonByTeam {
                team: TeamColor::Blue,
                sequences: 1,
                shut_out: true
            }
        );

        fill_row(&mut board, TeamColor::Red, 5);
        assert_eq!(final_standing(&board, &colors), GameResult::Draw);

        fill_row(&mut board, TeamColor::Red, 7);
        assert_eq!(
            final_standing(&board, &colors),
            GameResult::WonByTeam {
                team: TeamColor::Red,
                sequences: 2,
                shut_out: false
            }
        );
    }
}
