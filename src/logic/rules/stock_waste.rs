//! 山札 (Stock) と捨て札 (Discard) に関するルール、それとドラッグできるかどうかの判定。

use crate::components::stack::PileType;

/// 山札からカードをめくれるか。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 捨て札を山札に戻せるか。山札が空で、捨て札に何かあるときだけ！
pub fn can_refill_stock_from_discard(stock_is_empty: bool, discard_is_empty: bool) -> bool {
    stock_is_empty && !discard_is_empty
}

/// そのカードからドラッグを始められるか。
///
/// - 山札のカードはドラッグできない (クリックでめくるだけ)
/// - 裏向きのカードもダメ
/// - 捨て札・組札は一番上だけ
/// - 場札は表向きならどこからでも (上に乗ってるカードごと持っていく)
pub fn can_start_drag(pile_type: PileType, is_face_up: bool, is_top_card: bool) -> bool {
    if !is_face_up {
        return false;
    }
    match pile_type {
        PileType::Stock => false,
        PileType::Discard | PileType::Foundation => is_top_card,
        PileType::Tableau => true,
    }
}
