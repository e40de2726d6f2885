// src/logic/mod.rs
//! ゲームのルールと、デッキ操作のロジック。World には触らない純粋な関数たち！

pub mod deck;
pub mod rules;
