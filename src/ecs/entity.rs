// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このクレートでは 52 枚のカード 1 枚 1 枚がエンティティになる。
/// ランクとスートが同じデータでも、ID が違えば別のカードとして区別されるんだ。🃏
/// (カードの「同一性」はこの ID で決まる！)
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
