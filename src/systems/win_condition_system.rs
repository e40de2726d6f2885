// src/systems/win_condition_system.rs

use log::info;

use crate::components::board::Board;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::pile::Pile;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 毎回、組札の枚数から `game_entity` に付いてる GameState を決め直す。
/// 4 つ全部 13 枚なら `Won`、1 枚でも足りなければ `Playing`。
pub struct WinConditionSystem {
    game_entity: Entity,
}

impl WinConditionSystem {
    pub fn new(game_entity: Entity) -> Self {
        Self { game_entity }
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World, board: &mut Board) {
        let sizes: Vec<usize> = board.foundations().iter().map(Pile::num_of_cards).collect();
        let status = if check_win_condition(&sizes) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        let Some(state) = world.get_component_mut::<GameState>(self.game_entity) else {
            return;
        };
        if state.status == status {
            return;
        }
        state.status = status;
        match status {
            GameStatus::Won => info!("🏆 All foundations complete. You win!"),
            GameStatus::Playing => info!("A card left a full foundation. Back to playing."),
        }
    }
}
