// src/components/board.rs

use crate::components::pile::Pile;
use crate::components::stack::{PileType, StackInfo, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::layout::{FOUNDATION_GAP, STOCK_GAP, TABLEAU_GAP};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::EngineError;

const STOCK_INDEX: usize = 0;
const DISCARD_INDEX: usize = 1;
const FOUNDATION_START: usize = 2;
const TABLEAU_START: usize = FOUNDATION_START + FOUNDATION_COUNT as usize;

/// 1 ゲーム分の 13 個の山 (山札 1, 捨て札 1, 組札 4, 場札 7) をまとめて持つよ！
///
/// 山の中身を書き換えられるのは、これを持ってるエンジン (とそのシステム) だけ。
#[derive(Debug, Clone)]
pub struct Board {
    /// `StackType::all()` と同じ順番で並んでる。
    piles: Vec<Pile>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let piles = StackType::all()
            .map(|stack_type| {
                let gap = match stack_type.pile_type() {
                    PileType::Stock | PileType::Discard => STOCK_GAP,
                    PileType::Foundation => FOUNDATION_GAP,
                    PileType::Tableau => TABLEAU_GAP,
                };
                Pile::new(stack_type, gap)
            })
            .collect();
        Self { piles }
    }

    fn index_of(stack_type: StackType) -> Option<usize> {
        match stack_type {
            StackType::Stock => Some(STOCK_INDEX),
            StackType::Discard => Some(DISCARD_INDEX),
            StackType::Foundation(i) if i < FOUNDATION_COUNT => Some(FOUNDATION_START + i as usize),
            StackType::Tableau(i) if i < TABLEAU_COUNT => Some(TABLEAU_START + i as usize),
            _ => None,
        }
    }

    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        Self::index_of(stack_type).map(|i| &self.piles[i])
    }

    pub fn pile_mut(&mut self, stack_type: StackType) -> Option<&mut Pile> {
        match Self::index_of(stack_type) {
            Some(i) => Some(&mut self.piles[i]),
            None => None,
        }
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn stock(&self) -> &Pile {
        &self.piles[STOCK_INDEX]
    }

    pub fn discard(&self) -> &Pile {
        &self.piles[DISCARD_INDEX]
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.piles[FOUNDATION_START..TABLEAU_START]
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.piles[TABLEAU_START..]
    }

    /// 山札と捨て札を同時に可変で借りる (リサイクル用)。
    pub fn stock_and_discard_mut(&mut self) -> (&mut Pile, &mut Pile) {
        let (head, tail) = self.piles.split_at_mut(DISCARD_INDEX);
        (&mut head[STOCK_INDEX], &mut tail[0])
    }

    /// 全部の山を空にして、取り除いたカードを返す。
    pub fn clear_all(&mut self, world: &mut World) -> Vec<Entity> {
        self.piles
            .iter_mut()
            .flat_map(|pile| pile.clear(world))
            .collect()
    }

    /// カードの逆参照をたどって、今いる山を返す。
    ///
    /// 逆参照がない、または指してる山にカードがいない場合は整合性エラー！
    pub fn pile_of(&self, world: &World, card: Entity) -> Result<&Pile, EngineError> {
        let info = world
            .get_component::<StackInfo>(card)
            .ok_or(EngineError::NoContainingPile(card))?;
        let pile = self
            .pile(info.stack_type)
            .ok_or(EngineError::UnknownPile(info.stack_type))?;
        if pile.cards().get(info.position_in_stack) != Some(&card) {
            return Err(EngineError::PileMismatch { card, stack_type: info.stack_type });
        }
        Ok(pile)
    }

    /// `card` から上を丸ごと `destination` に移す。順番は保つよ。
    /// 移したカードの一覧を返す。ルールチェックはしない！
    pub fn transfer(
        &mut self,
        world: &mut World,
        card: Entity,
        destination: StackType,
    ) -> Result<Vec<Entity>, EngineError> {
        let origin = self.pile_of(world, card)?.stack_type();
        if self.pile(destination).is_none() {
            return Err(EngineError::UnknownPile(destination));
        }
        let moved = self
            .pile_mut(origin)
            .ok_or(EngineError::UnknownPile(origin))?
            .split_off_from(world, card);
        let dest_pile = self
            .pile_mut(destination)
            .ok_or(EngineError::UnknownPile(destination))?;
        for &entity in &moved {
            dest_pile.add_card(world, entity);
        }
        Ok(moved)
    }

    /// 山に乗っているカードの総数。
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::num_of_cards).sum()
    }
}
