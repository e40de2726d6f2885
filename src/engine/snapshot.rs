// src/engine/snapshot.rs

use log::warn;
use serde::{Deserialize, Serialize};

use super::GameEngine;
use crate::components::card::{Card, Suit};
use crate::components::pile::Pile;
use crate::components::stack::{PileType, StackInfo, StackType};

/// 描画に必要なカード 1 枚分の情報。
/// `stack_type` が `None` のカードは場から外れていて、描かなくていい。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: usize,
    pub suit: Suit,
    /// 1 (Ace) 〜 13 (King)
    pub rank: u8,
    pub is_face_up: bool,
    pub stack_type: Option<StackType>,
    pub position_in_stack: Option<usize>,
    pub draggable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileSnapshot {
    pub stack_type: StackType,
    pub pile_type: PileType,
    pub name: String,
    pub layout_gap: f32,
    /// 下から順のカード id
    pub cards: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub piles: Vec<PileSnapshot>,
    pub won: bool,
}

impl GameSnapshot {
    pub(crate) fn capture(engine: &GameEngine) -> Self {
        let world = engine.world();
        let cards = engine
            .card_entities()
            .into_iter()
            .filter_map(|entity| {
                let card: &Card = world.get_component(entity)?;
                let info = world.get_component::<StackInfo>(entity);
                Some(CardSnapshot {
                    id: entity.0,
                    suit: card.suit,
                    rank: card.rank.value(),
                    is_face_up: card.is_face_up,
                    stack_type: info.map(|i| i.stack_type),
                    position_in_stack: info.map(|i| i.position_in_stack),
                    draggable: engine.is_draggable(entity).unwrap_or_else(|e| {
                        warn!("Snapshot: treating {} as not draggable: {}", entity, e);
                        false
                    }),
                })
            })
            .collect();

        let piles = engine
            .board()
            .piles()
            .iter()
            .map(|pile: &Pile| PileSnapshot {
                stack_type: pile.stack_type(),
                pile_type: pile.pile_type(),
                name: pile.name().to_string(),
                layout_gap: pile.layout_gap(),
                cards: pile.cards().iter().map(|e| e.0).collect(),
            })
            .collect();

        Self { cards, piles, won: engine.is_game_won() }
    }

    pub fn card(&self, id: usize) -> Option<&CardSnapshot> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn pile(&self, stack_type: StackType) -> Option<&PileSnapshot> {
        self.piles.iter().find(|p| p.stack_type == stack_type)
    }
}
