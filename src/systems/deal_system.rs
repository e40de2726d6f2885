// src/systems/deal_system.rs

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::board::Board;
use crate::components::card::Card;
use crate::components::stack::{StackInfo, StackType, TABLEAU_COUNT};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::deck::{create_standard_deck, shuffle_deck, DECK_SIZE};

/// 場札に配る枚数の合計 (1 + 2 + ... + 7 = 28)。
pub const TABLEAU_DEAL_SIZE: usize = 28;

/// ゲーム開始時 (とリスタート時) にカードを配るシステムだよ！🎉
///
/// 1. カードエンティティがまだなければ 52 枚作る (2 回目以降は同じ 52 枚を使い回す)
/// 2. 全部の山を空にして、表向きのカードは裏返す
/// 3. シャッフル
/// 4. 先頭 28 枚を場札に 1, 2, ..., 7 枚ずつ。各列の最後の 1 枚だけ表向き！
/// 5. 残り 24 枚は山札に裏向きで
pub struct DealInitialCardsSystem {
    rng: StdRng,
}

impl DealInitialCardsSystem {
    /// `seed` があれば毎回同じ配り方になる。`None` ならエントロピーから。
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// カードエンティティを全部返す。なければここで作る。
    fn ensure_card_entities(world: &mut World) -> Vec<Entity> {
        if !world.is_component_registered::<Card>() {
            world.register_component::<Card>();
        }
        if !world.is_component_registered::<StackInfo>() {
            world.register_component::<StackInfo>();
        }
        let existing = world.get_all_entities_with_component::<Card>();
        if !existing.is_empty() {
            return existing;
        }
        create_standard_deck()
            .into_iter()
            .map(|card| {
                let entity = world.create_entity();
                world.add_component(entity, card);
                entity
            })
            .collect()
    }

    /// 山から全部下ろして、表向きのものは裏返す。
    fn reset_cards(world: &mut World, board: &mut Board, cards: &[Entity]) {
        let cleared = board.clear_all(world);
        debug!("🧹 {} 枚を山から下ろしました", cleared.len());
        for &entity in cards {
            if let Some(card) = world.get_component_mut::<Card>(entity) {
                if card.is_face_up {
                    card.flip();
                }
            }
        }
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, world: &mut World, board: &mut Board) {
        let mut deck = Self::ensure_card_entities(world);
        debug_assert_eq!(deck.len(), DECK_SIZE);
        Self::reset_cards(world, board, &deck);
        shuffle_deck(&mut deck, &mut self.rng);

        let (tableau_cards, stock_cards) = deck.split_at(TABLEAU_DEAL_SIZE.min(deck.len()));

        // --- 場札: 列 i に i+1 枚。配る順番はシャッフル後の並びのまま ---
        let mut remaining = tableau_cards.iter().copied();
        for tableau_index in 0..TABLEAU_COUNT {
            let Some(pile) = board.pile_mut(StackType::Tableau(tableau_index)) else {
                continue;
            };
            for _ in 0..=tableau_index {
                let Some(entity) = remaining.next() else {
                    break;
                };
                pile.add_card(world, entity);
            }
            // 最後に配った 1 枚だけ表向きに！👀
            if let Some(top) = pile.top_card() {
                if let Some(card) = world.get_component_mut::<Card>(top) {
                    card.flip();
                }
            }
        }

        // --- 山札: 残り全部、裏向きのまま ---
        if let Some(stock) = board.pile_mut(StackType::Stock) {
            for &entity in stock_cards {
                stock.add_card(world, entity);
            }
        }

        info!(
            "🃏 Dealt {} cards to the tableau and {} to the stock.",
            tableau_cards.len(),
            stock_cards.len()
        );
    }
}
