mod catalog;
mod cell_set;
mod error;
mod filter;
mod layout;

pub use catalog::*;
pub use cell_set::*;
pub use error::*;
pub use filter::*;
pub use layout::*;

use crate::{Card, CardRole, Move, MoveKind, Position, TeamColor};

/// A chip on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chip {
    pub team: TeamColor,
    /// Set once the chip is part of a completed sequence. Never cleared.
    locked: bool,
}

impl Chip {
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// The game state shared by all teams: which chips lie where.
///
/// This is the only place where chips are added, removed or locked, and the
/// single authority on which moves are legal. The card printed on each cell
/// is fixed, see [`LAYOUT`].
#[derive(Clone, Debug)]
pub struct Board {
    /// Indexed by [`Position::index()`].
    chips: [Option<Chip>; 100],
    teams: Vec<TeamColor>,
}

impl Board {
    /// Creates an empty board for a game between `teams`.
    pub fn new(teams: &[TeamColor]) -> Self {
        Self {
            chips: [None; 100],
            teams: teams.to_vec(),
        }
    }

    /// The teams taking part in this game.
    pub fn teams(&self) -> &[TeamColor] {
        &self.teams
    }

    /// The fixed content of a cell.
    pub fn cell(&self, pos: Position) -> Cell {
        cell_at(pos)
    }

    pub fn chip(&self, pos: Position) -> Option<Chip> {
        self.chips[pos.index()]
    }

    /// All chips on the board, in row-major order.
    pub fn chips(&self) -> impl Iterator<Item = (Position, Chip)> + '_ {
        Position::all().filter_map(|pos| self.chip(pos).map(|chip| (pos, chip)))
    }

    /// All legal moves for `team` playing `card`.
    ///
    /// Removals (one-eyed Jacks and the Joker) come first, then placements,
    /// each in row-major order. The iterator is lazy and can be recreated at
    /// any time by calling this method again.
    pub fn iter_moves(&self, card: Card, team: TeamColor) -> impl Iterator<Item = Move> + '_ {
        let removals = card
            .can_remove()
            .then(|| {
                Position::all()
                    .filter(move |&pos| {
                        matches!(self.chip(pos), Some(chip) if chip.team != team && !chip.locked)
                    })
                    .map(move |pos| Move {
                        card,
                        kind: MoveKind::Remove,
                        pos,
                    })
            })
            .into_iter()
            .flatten();

        let placements = (card.role() != CardRole::OneEyed)
            .then(|| {
                Position::all()
                    .filter(move |&pos| {
                        if self.chip(pos).is_some() {
                            return false;
                        }
                        match cell_at(pos) {
                            Cell::Corner => false,
                            Cell::Card(cell_card) => card.is_wildcard() || cell_card == card,
                        }
                    })
                    .map(move |pos| Move {
                        card,
                        kind: MoveKind::Place,
                        pos,
                    })
            })
            .into_iter()
            .flatten();

        removals.chain(placements)
    }

    /// A card is dead for `team` when there is no legal move to make with it.
    pub fn is_dead(&self, card: Card, team: TeamColor) -> bool {
        self.iter_moves(card, team).next().is_none()
    }

    /// Applies a move of either kind.
    pub fn apply(&mut self, mv: Move, team: TeamColor) -> Result<(), IllegalMove> {
        match mv.kind {
            MoveKind::Place => self.put_chip(mv.card, mv.pos, team),
            MoveKind::Remove => self.remove_chip(mv.card, mv.pos, team),
        }
    }

    /// Places a chip of `team` on `pos`, paying with `card`.
    ///
    /// Afterwards, all chips in completed sequences are locked.
    pub fn put_chip(&mut self, card: Card, pos: Position, team: TeamColor) -> Result<(), IllegalMove> {
        let cell_card = match cell_at(pos) {
            Cell::Corner => return Err(IllegalMove::Corner { pos }),
            Cell::Card(cell_card) => cell_card,
        };
        if card.role() == CardRole::OneEyed {
            return Err(IllegalMove::OneEyedCannotPlace { card });
        }
        if self.chip(pos).is_some() {
            return Err(IllegalMove::Occupied { pos });
        }
        if !card.is_wildcard() && card != cell_card {
            return Err(IllegalMove::WrongCard { card, cell_card });
        }
        self.chips[pos.index()] = Some(Chip {
            team,
            locked: false,
        });
        self.lock_completed_sequences();
        Ok(())
    }

    /// Takes the chip on `pos` off the board, paying with `card`.
    pub fn remove_chip(&mut self, card: Card, pos: Position, team: TeamColor) -> Result<(), IllegalMove> {
        let chip = self.chip(pos).ok_or(IllegalMove::NoChip { pos })?;
        if chip.locked {
            return Err(IllegalMove::Locked { pos });
        }
        if chip.team == team {
            return Err(IllegalMove::OwnChip { pos });
        }
        if !card.can_remove() {
            return Err(IllegalMove::CannotRemove { card });
        }
        self.chips[pos.index()] = None;
        Ok(())
    }

    /// Locks every chip that is part of a completed sequence.
    ///
    /// A sequence is complete when every non-corner cell holds a chip and all
    /// of those chips belong to the same team. Returns the number of chips
    /// that were not locked before.
    pub fn lock_completed_sequences(&mut self) -> usize {
        let mut newly_locked = 0;
        for seq in catalog().sequences() {
            if self.completing_team(seq).is_none() {
                continue;
            }
            for pos in seq.cells() {
                if let Some(chip) = &mut self.chips[pos.index()] {
                    if !chip.locked {
                        chip.locked = true;
                        newly_locked += 1;
                    }
                }
            }
        }
        newly_locked
    }

    /// The team owning all chips of a full sequence, if there is one.
    fn completing_team(&self, seq: &Sequence) -> Option<TeamColor> {
        let mut owner = None;
        for &pos in seq.cells() {
            if cell_at(pos).is_corner() {
                continue;
            }
            let chip = self.chip(pos)?;
            match owner {
                Some(team) if team != chip.team => return None,
                _ => owner = Some(chip.team),
            }
        }
        owner
    }

    /// The catalog sequences passing `filter`, in canonical order.
    pub fn iter_sequences<'a>(
        &'a self,
        filter: &'a SequenceFilter,
    ) -> impl Iterator<Item = &'static Sequence> + 'a {
        catalog()
            .entries()
            .iter()
            .filter(move |entry| {
                if filter.exclude_corner_extensions && entry.corner_extension {
                    return false;
                }
                if !entry.sequence.cell_set().is_superset(filter.must_include) {
                    return false;
                }
                match filter.possible_for {
                    Some((team, budget)) => self.is_possible_for(&entry.sequence, team, budget),
                    None => true,
                }
            })
            .map(|entry| &entry.sequence)
    }

    fn is_possible_for(&self, seq: &Sequence, team: TeamColor, mut one_eyed_budget: usize) -> bool {
        for &pos in seq.cells() {
            match self.chip(pos) {
                Some(chip) if chip.team != team => {
                    if one_eyed_budget > 0 && !chip.locked {
                        one_eyed_budget -= 1;
                    } else {
                        return false;
                    }
                }
                _ => {}
            }
        }
        true
    }

    /// The completed sequences that count towards the win total of `team`.
    ///
    /// Goes through the catalog in canonical order and accepts a sequence if
    /// all its non-corner cells hold locked chips of `team` and it shares at
    /// most one cell with every sequence accepted before. Two overlapping
    /// runs therefore only count twice if they have at most one cell in common.
    pub fn get_winning_sequences(&self, team: TeamColor) -> Vec<Sequence> {
        let mut winning: Vec<Sequence> = Vec::new();
        for seq in catalog().sequences() {
            if winning.iter().any(|w| w.shared_cells(seq) > 1) {
                continue;
            }
            let owned = seq.cells().iter().all(|&pos| {
                cell_at(pos).is_corner()
                    || matches!(self.chip(pos), Some(chip) if chip.team == team && chip.locked)
            });
            if owned {
                winning.push(*seq);
            }
        }
        winning
    }
}
