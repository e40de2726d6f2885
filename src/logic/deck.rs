// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

pub const DECK_SIZE: usize = 52;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
/// スートごとに A から K まで。全部裏向きで出来上がる。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// 一様ランダムにシャッフルする。乱数生成器は呼び出し側から渡してね
/// (シード固定のテストで同じ並びを再現できるように)。
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    deck.shuffle(rng);
}
