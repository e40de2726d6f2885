// src/systems/mod.rs

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{MoveCardSystem, MoveOutcome};
pub use stock_system::RefillReport;
pub use win_condition_system::WinConditionSystem;
