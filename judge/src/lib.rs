mod config;
mod error;
mod game;
mod observer;
mod player;
pub use config::*;
pub use error::*;
pub use game::*;
pub use observer::*;
pub use player::*;
