use serde::{Deserialize, Serialize};

use crate::{Board, Card, Cell};

/// The colors a team can play with. A team owns all chips of its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Green,
    Red,
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TeamColor::Blue => "Blue Team",
            TeamColor::Green => "Green Team",
            TeamColor::Red => "Red Team",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for TeamColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(TeamColor::Blue),
            "green" => Ok(TeamColor::Green),
            "red" => Ok(TeamColor::Red),
            _ => Err(format!("Unknown team color '{}'", s)),
        }
    }
}

/// A cell on the board, addressed by row and column (both in `0..10`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 10 && col < 10);
        Self { row, col }
    }

    /// Index of this cell in row-major order.
    pub const fn index(self) -> usize {
        self.row as usize * 10 + self.col as usize
    }

    /// All 100 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..10u8).flat_map(|row| (0..10u8).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Put a new chip on an empty cell.
    Place,
    /// Take an opposing, unlocked chip off the board.
    Remove,
}

/// Specifies which card to play, what to do with it, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub kind: MoveKind,
    pub pos: Position,
}

impl Move {
    /// A human-readable description of the move, given the board before it is applied.
    pub fn describe(&self, board: &Board) -> String {
        let cell = match board.cell(self.pos) {
            Cell::Corner => String::from("corner"),
            Cell::Card(card) => card.to_string(),
        };
        match self.kind {
            MoveKind::Place => format!("Play the {} on the {} at {}.", self.card, cell, self.pos),
            MoveKind::Remove => match board.chip(self.pos) {
                Some(chip) => format!(
                    "Use the {} to remove the {}'s chip on the {} at {}.",
                    self.card, chip.team, cell, self.pos
                ),
                None => format!("Use the {} to remove a chip at {}.", self.card, self.pos),
            },
        }
    }
}
