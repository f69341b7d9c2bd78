pub use board::*;
pub use cards::*;
pub use hand::*;
pub use moves::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod hand;
mod moves;
mod visualization;
