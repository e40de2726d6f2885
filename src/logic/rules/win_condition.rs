//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;
use crate::components::stack::FOUNDATION_COUNT;

/// 組札 4 つの枚数を渡すと、全部 13 枚ずつ揃ってるか判定する🏆
pub fn check_win_condition(foundation_sizes: &[usize]) -> bool {
    foundation_sizes.len() == FOUNDATION_COUNT as usize
        && foundation_sizes.iter().all(|&size| size == ALL_RANKS.len())
}
