use std::sync::OnceLock;

use crate::{CellSet, Position};

/// Length of a winning run.
pub const SEQUENCE_LEN: usize = 5;

/// The direction in which a sequence extends from its start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Towards the bottom right.
    DiagonalDown,
    /// Towards the top right.
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// The start cells that keep all five cells on the board, as row and column ranges.
    fn start_ranges(self) -> (std::ops::Range<u8>, std::ops::Range<u8>) {
        match self {
            Orientation::Horizontal => (0..10, 0..6),
            Orientation::Vertical => (0..6, 0..10),
            Orientation::DiagonalDown => (0..6, 0..6),
            Orientation::DiagonalUp => (4..10, 0..6),
        }
    }

    fn step(self, start: Position, n: u8) -> Position {
        let Position { row, col } = start;
        match self {
            Orientation::Horizontal => Position::new(row, col + n),
            Orientation::Vertical => Position::new(row + n, col),
            Orientation::DiagonalDown => Position::new(row + n, col + n),
            Orientation::DiagonalUp => Position::new(row - n, col + n),
        }
    }
}

/// Five cells in a straight line.
///
/// The cells are ordered from the start cell outward. That order is fixed and
/// matters wherever a sequence is walked cell by cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sequence {
    cells: [Position; SEQUENCE_LEN],
    set: CellSet,
    orientation: Orientation,
}

impl Sequence {
    /// Panics if the sequence would leave the board.
    pub fn new(orientation: Orientation, start: Position) -> Self {
        let (rows, cols) = orientation.start_ranges();
        assert!(
            rows.contains(&start.row) && cols.contains(&start.col),
            "{:?} sequence cannot start at {}",
            orientation,
            start
        );
        let cells = [0, 1, 2, 3, 4].map(|n| orientation.step(start, n));
        Self {
            cells,
            set: CellSet::from_iter(cells),
            orientation,
        }
    }

    pub fn cells(&self) -> &[Position; SEQUENCE_LEN] {
        &self.cells
    }

    pub fn cell_set(&self) -> CellSet {
        self.set
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.set.contains(pos)
    }

    /// Number of cells this sequence has in common with `other`.
    pub fn shared_cells(&self, other: &Sequence) -> u32 {
        self.set.overlap(other.set)
    }
}

/// A sequence as stored in the catalog, together with precomputed facts about it.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub sequence: Sequence,
    /// Shares exactly four cells with one of the corner sequences.
    pub corner_extension: bool,
}

/// Every possible sequence on the board, in canonical order.
///
/// The order is: horizontal, vertical, diagonal down, diagonal up; inside an
/// orientation, by start row and then start column. Win-set resolution is
/// greedy over this order, so it must never change.
pub struct SequenceCatalog {
    entries: Vec<CatalogEntry>,
    corner_sequences: [Sequence; 12],
}

impl SequenceCatalog {
    fn build() -> Self {
        let corner_sequences = corner_sequences();
        let mut entries = Vec::with_capacity(192);
        for orientation in Orientation::ALL {
            let (rows, cols) = orientation.start_ranges();
            for row in rows {
                for col in cols.clone() {
                    let sequence = Sequence::new(orientation, Position::new(row, col));
                    let corner_extension = corner_sequences
                        .iter()
                        .any(|corner| corner.shared_cells(&sequence) == 4);
                    entries.push(CatalogEntry {
                        sequence,
                        corner_extension,
                    });
                }
            }
        }
        Self {
            entries,
            corner_sequences,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn sequences(&self) -> impl Iterator<Item = &Sequence> + '_ {
        self.entries.iter().map(|entry| &entry.sequence)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The three sequences of each corner that start or end in that corner.
    pub fn corner_sequences(&self) -> &[Sequence; 12] {
        &self.corner_sequences
    }
}

fn corner_sequences() -> [Sequence; 12] {
    use Orientation::*;
    let seq = |orientation, row, col| Sequence::new(orientation, Position::new(row, col));
    [
        // Top left
        seq(Horizontal, 0, 0),
        seq(Vertical, 0, 0),
        seq(DiagonalDown, 0, 0),
        // Top right
        seq(Horizontal, 0, 5),
        seq(Vertical, 0, 9),
        seq(DiagonalUp, 4, 5),
        // Bottom left
        seq(Horizontal, 9, 0),
        seq(Vertical, 5, 0),
        seq(DiagonalUp, 9, 0),
        // Bottom right
        seq(Horizontal, 9, 5),
        seq(Vertical, 5, 9),
        seq(DiagonalDown, 5, 5),
    ]
}

/// The process-wide catalog, built on first use.
pub fn catalog() -> &'static SequenceCatalog {
    static CATALOG: OnceLock<SequenceCatalog> = OnceLock::new();
    CATALOG.get_or_init(SequenceCatalog::build)
}
