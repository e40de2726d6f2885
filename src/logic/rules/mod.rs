// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも World を見ない純粋な判定関数。カードのデータだけ渡せば答えが出る。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
