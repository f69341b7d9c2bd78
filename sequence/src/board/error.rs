use crate::{Card, Position};

/// The error type for [`Board::put_chip()`](crate::Board::put_chip) and
/// [`Board::remove_chip()`](crate::Board::remove_chip).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    Corner { pos: Position },
    OneEyedCannotPlace { card: Card },
    Occupied { pos: Position },
    WrongCard { card: Card, cell_card: Card },
    NoChip { pos: Position },
    Locked { pos: Position },
    OwnChip { pos: Position },
    CannotRemove { card: Card },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::Corner { pos } =>
                write!(f, "Cannot play on the corner at {}", pos),
            IllegalMove::OneEyedCannotPlace { card } =>
                write!(f, "One-eyed jacks cannot be used to play a chip, but {} was", card),
            IllegalMove::Occupied { pos } =>
                write!(f, "There is already a chip at {}", pos),
            IllegalMove::WrongCard { card, cell_card } =>
                write!(f, "The {} cannot be played on the {}", card, cell_card),
            IllegalMove::NoChip { pos } =>
                write!(f, "There is no chip at {} to remove", pos),
            IllegalMove::Locked { pos } =>
                write!(f, "The chip at {} is part of a sequence and cannot be removed", pos),
            IllegalMove::OwnChip { pos } =>
                write!(f, "The chip at {} belongs to the playing team", pos),
            IllegalMove::CannotRemove { card } =>
                write!(f, "The {} cannot be used to remove chips", card),
        }
    }
}
