// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 何番の組札/場札か、も含めた「山の名札」だよ。
/// クロンダイクの 13 個の山は、これで一意に決まる！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードの山。
    Stock,
    /// 捨て札 (Discard / Waste)。山札からめくったカードが表向きで乗る。
    Discard,
    /// 組札 (Foundation)。4 つあるので番号 (0-3) を持つ。
    Foundation(u8),
    /// 場札 (Tableau)。7 列あるので列番号 (0-6) を持つ。
    Tableau(u8),
}

pub const FOUNDATION_COUNT: u8 = 4;
pub const TABLEAU_COUNT: u8 = 7;

/// 山の「種類」。番号は持たない。ルール判定はこっちで分岐するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileType {
    Stock,
    Discard,
    Foundation,
    Tableau,
}

impl StackType {
    pub fn pile_type(self) -> PileType {
        match self {
            StackType::Stock => PileType::Stock,
            StackType::Discard => PileType::Discard,
            StackType::Foundation(_) => PileType::Foundation,
            StackType::Tableau(_) => PileType::Tableau,
        }
    }

    /// 13 個の山を、山札 → 捨て札 → 組札 0..4 → 場札 0..7 の順で全部返す。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Discard]
            .into_iter()
            .chain((0..FOUNDATION_COUNT).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT).map(StackType::Tableau))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Stock => write!(f, "Stock"),
            StackType::Discard => write!(f, "Discard"),
            StackType::Foundation(i) => write!(f, "Foundation {}", i),
            StackType::Tableau(i) => write!(f, "Tableau {}", i),
        }
    }
}

/// カードが「どの山の何番目にいるか」を表すコンポーネント。
///
/// カード → 山 への逆参照 (持ち主じゃなくて、ただの関係) だよ。
/// これを書き換えていいのは `Pile` の add/remove/clear だけ！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    pub stack_type: StackType,
    /// 下から何番目か (0 が一番下)。
    pub position_in_stack: usize,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: usize) -> Self {
        Self { stack_type, position_in_stack }
    }
}

impl Component for StackInfo {}
