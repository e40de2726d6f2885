//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::is_same_suit;
use crate::components::card::{Card, Rank};

/// `card` を、一番上が `target_top` の組札に置けるかチェックする。
///
/// - 空の組札: Ace だけ
/// - それ以外: 同じスートで、ランクがちょうど 1 つ上
///
/// どの組札がどのスートか、は決まってないよ。最初に置いた Ace で決まる！
pub fn can_move_to_foundation(card: &Card, target_top: Option<&Card>) -> bool {
    let result = match target_top {
        None => card.rank == Rank::Ace,
        Some(top) => is_same_suit(card, top) && top.rank.value() + 1 == card.rank.value(),
    };
    debug!(
        "[Foundation Rule] {} onto {}: {}",
        card,
        target_top.map_or_else(|| "empty foundation".to_string(), |top| top.to_string()),
        result
    );
    result
}
