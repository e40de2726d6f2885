// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// ゲーム全体の現在の状態だよ！🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 進行中
    Playing,
    /// 勝利！🏆 (組札 4 つが全部 13 枚)
    Won,
}

/// ゲーム状態。専用のエンティティに 1 つだけ付けておく。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self { status: GameStatus::Playing }
    }
}

impl Component for GameState {}

impl GameState {
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}
