//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// 2 枚の色が違う (赤と黒) なら true。
pub fn is_opposite_color(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}

pub fn is_same_suit(a: &Card, b: &Card) -> bool {
    a.suit == b.suit
}
