use sequence::{Card, IllegalMove, Move, TeamColor};

/// The teams handed to [`play_game()`](crate::play_game) cannot play a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameSetupError {
    WrongTeamCount { count: usize },
    DuplicateTeam { team: TeamColor },
    UnequalTeamSizes,
    NoPlayers,
    TeamTooLarge { team: TeamColor, size: usize, max: usize },
    DuplicatePlayer { name: String },
    UnsupportedPlayerCount { count: usize },
}

impl std::error::Error for GameSetupError {}

impl std::fmt::Display for GameSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameSetupError::WrongTeamCount { count } => {
                write!(f, "A match needs two or three teams, got {}", count)
            }
            GameSetupError::DuplicateTeam { team } => write!(f, "{} was given twice", team),
            GameSetupError::UnequalTeamSizes => write!(f, "All teams must have the same number of players"),
            GameSetupError::NoPlayers => write!(f, "The teams have no players"),
            GameSetupError::TeamTooLarge { team, size, max } => write!(
                f,
                "{} has {} players, but at most {} are allowed with this many teams",
                team, size, max
            ),
            GameSetupError::DuplicatePlayer { name } => {
                write!(f, "The player name '{}' is used more than once", name)
            }
            GameSetupError::UnsupportedPlayerCount { count } => {
                write!(f, "There is no hand size for {} players", count)
            }
        }
    }
}

/// Error type for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalTurn {
    NoMoveChosen,
    CardNotInHand { card: Card },
    IllegalMove { mv: Move, err: IllegalMove },
}

impl std::error::Error for IllegalTurn {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalTurn::IllegalMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalTurn::NoMoveChosen => {
                write!(f, "Did not choose a move although a legal one existed")
            }
            IllegalTurn::CardNotInHand { card } => {
                write!(f, "Tried to play {}, which was not in the player's hand", card)
            }
            IllegalTurn::IllegalMove { mv, .. } => write!(
                f,
                "Tried to {} at {} with {}",
                match mv.kind {
                    sequence::MoveKind::Place => "place a chip",
                    sequence::MoveKind::Remove => "remove a chip",
                },
                mv.pos,
                mv.card
            ),
        }
    }
}
