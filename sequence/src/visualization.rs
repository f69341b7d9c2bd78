use crate::{Board, Cell, Position, TeamColor};

fn team_initial(team: TeamColor) -> char {
    match team {
        TeamColor::Blue => 'b',
        TeamColor::Green => 'g',
        TeamColor::Red => 'r',
    }
}

/// A plain text grid. Empty cells show their card code, corners show `%%`,
/// chips show their team's initial twice (uppercase once locked).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..10 {
            write!(f, " {:>2}", col)?;
        }
        for row in 0..10u8 {
            write!(f, "\n{:>2}", row)?;
            for col in 0..10u8 {
                let pos = Position::new(row, col);
                match (self.cell(pos), self.chip(pos)) {
                    (Cell::Corner, _) => write!(f, " %%")?,
                    (_, Some(chip)) => {
                        let mut initial = team_initial(chip.team);
                        if chip.is_locked() {
                            initial = initial.to_ascii_uppercase();
                        }
                        write!(f, " {}{}", initial, initial)?
                    }
                    (Cell::Card(card), None) => write!(f, " {}", card.code())?,
                }
            }
        }
        Ok(())
    }
}
