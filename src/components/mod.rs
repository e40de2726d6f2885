// src/components/mod.rs

pub mod board;
pub mod card;
pub mod game_state;
pub mod pile;
pub mod stack;

pub use board::Board;
pub use card::{Card, CardColor, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use pile::Pile;
pub use stack::{PileType, StackInfo, StackType};
