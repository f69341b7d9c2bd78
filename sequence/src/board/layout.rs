use crate::{Card, Position};

/// The fixed content of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Never playable; counts as owned by every team when checking sequences.
    Corner,
    /// Only this card (or a wildcard) may place a chip here.
    Card(Card),
}

impl Cell {
    pub fn is_corner(self) -> bool {
        self == Cell::Corner
    }
}

// `%%` marks a corner.
const CODES: [[&[u8; 2]; 10]; 10] = [
    [b"%%", b"6D", b"7D", b"8D", b"9D", b"TD", b"QD", b"KD", b"AD", b"%%"],
    [b"5D", b"3H", b"2H", b"2S", b"3S", b"4S", b"5S", b"6S", b"7S", b"AC"],
    [b"4D", b"4H", b"KD", b"AD", b"AC", b"KC", b"QC", b"TC", b"8S", b"KC"],
    [b"3D", b"5H", b"QD", b"QH", b"TH", b"9H", b"8H", b"9C", b"9S", b"QC"],
    [b"2D", b"6H", b"TD", b"KH", b"3H", b"2H", b"7H", b"8C", b"TS", b"TC"],
    [b"AS", b"7H", b"9D", b"AH", b"4H", b"5H", b"6H", b"7C", b"QS", b"9C"],
    [b"KS", b"8H", b"8D", b"2C", b"3C", b"4C", b"5C", b"6C", b"KS", b"8C"],
    [b"QS", b"9H", b"7D", b"6D", b"5D", b"4D", b"3D", b"2D", b"AS", b"7C"],
    [b"TS", b"TH", b"QH", b"KH", b"AH", b"2C", b"3C", b"4C", b"5C", b"6C"],
    [b"%%", b"9S", b"8S", b"7S", b"6S", b"5S", b"4S", b"3S", b"2S", b"%%"],
];

const fn build_layout() -> [[Cell; 10]; 10] {
    let mut layout = [[Cell::Corner; 10]; 10];
    let mut row = 0;
    while row < 10 {
        let mut col = 0;
        while col < 10 {
            let code = *CODES[row][col];
            if code[0] != b'%' {
                layout[row][col] = match Card::from_ascii(code) {
                    Some(card) => Cell::Card(card),
                    None => panic!("invalid card code in board layout"),
                };
            }
            col += 1;
        }
        row += 1;
    }
    layout
}

/// The card printed on every cell, row-major. Identical for every game.
pub static LAYOUT: [[Cell; 10]; 10] = build_layout();

/// The four corner cells.
pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 9),
    Position::new(9, 0),
    Position::new(9, 9),
];

pub fn cell_at(pos: Position) -> Cell {
    LAYOUT[pos.row as usize][pos.col as usize]
}
