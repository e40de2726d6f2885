// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックと、ドロップ先の選び方。

use itertools::Itertools;
use log::debug;

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::stack::{PileType, StackType};

/// `card` を種類 `destination` の山 (一番上が `destination_top`) に置けるか。
///
/// 束 (run) を動かすときは、束の一番下のカードだけを渡してね。
/// 束の中身はもともと正しい並びだから、残りは見ない！
pub fn is_move_valid(card: &Card, destination: PileType, destination_top: Option<&Card>) -> bool {
    match destination {
        PileType::Tableau => tableau::can_move_to_tableau(card, destination_top),
        PileType::Foundation => foundation::can_move_to_foundation(card, destination_top),
        PileType::Stock | PileType::Discard => {
            debug!("[Rules Validation] Moving to {:?} is not allowed.", destination);
            false
        }
    }
}

/// ドロップ先の候補を、試す順番に並べ替える。
///
/// 場札の候補が先、組札の候補が後 (それぞれ渡された順)。
/// 移動元の山、山札・捨て札、重複は外すよ。
pub fn order_candidates(candidates: &[StackType], origin: StackType) -> Vec<StackType> {
    let of_type = |pile_type: PileType| {
        candidates
            .iter()
            .copied()
            .filter(move |&c| c != origin && c.pile_type() == pile_type)
    };
    of_type(PileType::Tableau)
        .chain(of_type(PileType::Foundation))
        .unique()
        .collect()
}

/// 候補を順番に試して、最初に置ける山を返す (一番良い山、じゃなくて最初の山！)。
///
/// `top_of` は山の一番上のカードを教えてくれる関数。空の山なら `None` を返す。
pub fn find_destination<'a, F>(
    card: &Card,
    origin: StackType,
    candidates: &[StackType],
    top_of: F,
) -> Option<StackType>
where
    F: Fn(StackType) -> Option<&'a Card>,
{
    order_candidates(candidates, origin)
        .into_iter()
        .find(|&candidate| is_move_valid(card, candidate.pile_type(), top_of(candidate)))
}
