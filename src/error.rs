// src/error.rs
//! エンジン内部の「ありえないはず」の状態を表すエラー型。
//!
//! 置けない場所への移動や、裏向きカードのドラッグみたいな操作は
//! エラーじゃなくて普通の結果 (`MoveOutcome` / `ClickOutcome`) だよ。
//! ここに来るのは、World と Board の整合性が崩れたときだけ！

use thiserror::Error;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("entity {0} has no Card component")]
    MissingCard(Entity),

    #[error("card {0} reports no containing pile")]
    NoContainingPile(Entity),

    #[error("card {card} claims to be in {stack_type} but that pile does not hold it")]
    PileMismatch { card: Entity, stack_type: StackType },

    #[error("no pile named {0} on this board")]
    UnknownPile(StackType),

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),
}
