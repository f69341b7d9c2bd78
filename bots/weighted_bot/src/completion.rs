use sequence::{Board, Sequence, TeamColor};

/// How far a team has come with one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Cells already counting for the team: corners, its unlocked chips, and
    /// at most one locked chip of its own.
    pub completion: usize,
    /// Opposing unlocked chips that would have to be removed first.
    pub one_eyeds_required: usize,
}

/// Walks `seq` in cell order and measures it for `team`.
///
/// Returns `None` if the team can never complete it: a sequence may reuse
/// one chip of an already completed sequence, but not two, and never an
/// opponent's locked chip.
pub fn sequence_completion(seq: &Sequence, board: &Board, team: TeamColor) -> Option<Completion> {
    let mut completion = 0;
    let mut one_eyeds_required = 0;
    let mut shared_chip_encountered = false;
    for &pos in seq.cells() {
        if board.cell(pos).is_corner() {
            completion += 1;
            continue;
        }
        let Some(chip) = board.chip(pos) else {
            continue;
        };
        if chip.is_locked() {
            if chip.team == team && !shared_chip_encountered {
                shared_chip_encountered = true;
                completion += 1;
                continue;
            }
            return None;
        }
        if chip.team == team {
            completion += 1;
        } else {
            one_eyeds_required += 1;
        }
    }
    Some(Completion {
        completion,
        one_eyeds_required,
    })
}
