use sequence::{Board, CardRole, Hand, Move, MoveKind, SequenceFilter, TeamColor};

use crate::{sequence_completion, WeightedConfig};

/// Multiplies the weight of a move that wins the game on the spot.
pub const WINNING_MOVE_MULTIPLIER: f64 = 9999.0;

/// Defense score of placing a chip into an opposing sequence.
const BLOCK_BY_PLACING: f64 = 1.0;
/// Defense score of taking a chip out of an opposing sequence.
const BLOCK_BY_REMOVING: f64 = 0.75;
/// Applied to the defense score when the opponent still needs a one-eyed jack there.
const ALREADY_CONTESTED: f64 = 0.25;

/// The breakdown behind a move's weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveScore {
    /// Own sequences through the move's cell, bucketed by how many of their
    /// cells count for the team before the move. Bucket 4 means the move completes one.
    pub offense: [u32; 5],
    /// Opposing sequences through the move's cell that the move gets in the way of,
    /// bucketed by their completion.
    pub defense: [f64; 5],
    pub weight: f64,
}

/// Scores moves for one decision of one team.
///
/// Everything that does not depend on the move is computed once in [`MoveEvaluator::new()`].
pub struct MoveEvaluator<'a> {
    config: &'a WeightedConfig,
    board: &'a Board,
    team: TeamColor,
    removal_cards: usize,
    sequences_won: usize,
    sequences_to_win: usize,
}

impl<'a> MoveEvaluator<'a> {
    pub fn new(
        config: &'a WeightedConfig,
        board: &'a Board,
        hand: &Hand,
        team: TeamColor,
        sequences_to_win: usize,
    ) -> Self {
        Self {
            config,
            board,
            team,
            removal_cards: hand.removal_cards(),
            sequences_won: board.get_winning_sequences(team).len(),
            sequences_to_win,
        }
    }

    pub fn score(&self, mv: &Move) -> MoveScore {
        let offense = self.offense(mv);
        let defense = self.defense(mv);

        let mut weight: f64 = offense
            .iter()
            .zip(&self.config.offense_multipliers)
            .map(|(&count, m)| f64::from(count) * m)
            .sum();
        weight += defense
            .iter()
            .zip(&self.config.defense_multipliers)
            .map(|(score, m)| score * m)
            .sum::<f64>();

        match mv.card.role() {
            CardRole::Joker => weight *= self.config.joker_multiplier,
            CardRole::TwoEyed => weight *= self.config.two_eyed_multiplier,
            CardRole::Standard | CardRole::OneEyed => {}
        }
        if mv.card.is_wildcard() && offense[4] == 0 {
            weight *= self.config.two_eyed_non_completion_multiplier;
        }
        if self.sequences_won + offense[4] as usize >= self.sequences_to_win {
            weight *= WINNING_MOVE_MULTIPLIER;
        }

        MoveScore {
            offense,
            defense,
            weight,
        }
    }

    fn filter(mv: &Move) -> SequenceFilter {
        SequenceFilter::new()
            .exclude_corner_extensions()
            .must_include(mv.pos)
    }

    /// Counts own sequences by how complete the move leaves them.
    ///
    /// Placing adds to every sequence through the cell. Removing an opposing
    /// chip spends one of the removals a sequence needs, which only helps if
    /// the sequence is at least as far along as its removals.
    fn offense(&self, mv: &Move) -> [u32; 5] {
        let mut offense = [0; 5];
        let filter = Self::filter(mv);
        for seq in self.board.iter_sequences(&filter) {
            let Some(c) = sequence_completion(seq, self.board, self.team) else {
                continue;
            };
            if c.one_eyeds_required > self.removal_cards {
                continue;
            }
            let mut completion = c.completion;
            if mv.kind == MoveKind::Remove {
                if c.one_eyeds_required > completion {
                    continue;
                }
                completion -= c.one_eyeds_required;
            }
            if let Some(bucket) = offense.get_mut(completion) {
                *bucket += 1;
            }
        }
        offense
    }

    /// Scores the opposing sequences through the cell that the move disturbs.
    ///
    /// Sequences the opponent would need two or more removals for are
    /// ignored, and those needing one count a quarter.
    fn defense(&self, mv: &Move) -> [f64; 5] {
        let mut defense = [0.0; 5];
        let filter = Self::filter(mv);
        let opponents = self.board.teams().iter().filter(|&&t| t != self.team);
        for &opponent in opponents {
            for seq in self.board.iter_sequences(&filter) {
                let Some(c) = sequence_completion(seq, self.board, opponent) else {
                    continue;
                };
                if c.one_eyeds_required >= 2 {
                    continue;
                }
                let mut score = match mv.kind {
                    MoveKind::Place => BLOCK_BY_PLACING,
                    MoveKind::Remove => {
                        let owner = self.board.chip(mv.pos).map(|chip| chip.team);
                        if owner != Some(opponent) {
                            continue;
                        }
                        BLOCK_BY_REMOVING
                    }
                };
                if c.one_eyeds_required > 0 {
                    score *= ALREADY_CONTESTED;
                }
                if let Some(bucket) = defense.get_mut(c.completion) {
                    *bucket += score;
                }
            }
        }
        defense
    }
}
