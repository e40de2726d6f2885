// src/engine/mod.rs
//! ゲーム 1 回分を丸ごと持つ `GameEngine` だよ！🎮
//!
//! 外からの入力は「カードをクリックした」「山札をクリックした」
//! 「カードを掴んだ」「カードを (この山たちの上で) 離した」「リスタート」だけ。
//! どれも画面の座標は知らない。座標から候補の山を絞るのは `app` 側の仕事！

pub mod snapshot;

#[cfg(test)]
mod tests;

use log::{debug, info};

use crate::components::board::Board;
use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{PileType, StackInfo, StackType};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::logic::rules::can_start_drag;
use crate::systems::stock_system::{self, RefillReport};
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, MoveOutcome, WinConditionSystem};

pub use snapshot::{CardSnapshot, GameSnapshot, PileSnapshot};

/// クリックの結果。何も起きなかったのも普通の結果 (`Ignored`)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 山札の一番上を捨て札にめくった
    Dealt(Entity),
    /// 場札の一番上の裏向きカードを表にした
    Flipped(Entity),
    /// 空の山札に捨て札を戻した
    Refilled(RefillReport),
    Ignored,
}

/// ドラッグ中の束。`group[0]` が掴んだカードで、その上に乗ってたカードが続く。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub group: Vec<Entity>,
    pub origin: StackType,
}

pub struct GameEngine {
    world: World,
    board: Board,
    /// GameState を付けておくエンティティ
    game_entity: Entity,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
    drag: Option<DragSession>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameEngine {
    /// World を準備して、最初のゲームを配るところまでやる。
    pub fn new(config: &GameConfig) -> Self {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<StackInfo>();
        world.register_component::<GameState>();

        let game_entity = world.create_entity();
        world.add_component(game_entity, GameState::default());

        let mut engine = Self {
            world,
            board: Board::new(),
            game_entity,
            deal_system: DealInitialCardsSystem::new(config.seed),
            move_system: MoveCardSystem::new(),
            win_system: WinConditionSystem::new(game_entity),
            drag: None,
        };
        engine.deal_system.run(&mut engine.world, &mut engine.board);
        engine
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn card(&self, entity: Entity) -> Result<&Card, EngineError> {
        self.world
            .get_component::<Card>(entity)
            .ok_or(EngineError::MissingCard(entity))
    }

    /// 52 枚のカードエンティティ (id 順)。
    pub fn card_entities(&self) -> Vec<Entity> {
        self.world.get_all_entities_with_component::<Card>()
    }

    pub fn status(&self) -> GameStatus {
        self.world
            .get_component::<GameState>(self.game_entity)
            .map_or(GameStatus::Playing, |state| state.status)
    }

    pub fn is_game_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// カードが今いる山の種類と、一番上かどうか。
    /// 場から外れたカード (捨て札リサイクルで落ちた 1 枚) は `None`。
    fn locate(&self, card: Entity) -> Result<Option<(StackType, bool)>, EngineError> {
        self.card(card)?;
        if self.world.get_component::<StackInfo>(card).is_none() {
            return Ok(None);
        }
        let pile = self.board.pile_of(&self.world, card)?;
        Ok(Some((pile.stack_type(), pile.is_top_card(card))))
    }

    /// カードをクリックしたとき。
    ///
    /// - 山札の一番上 → 捨て札へ、表向きで
    /// - 場札の一番上で裏向き → 表にするだけ
    /// - それ以外 → 何もしない
    pub fn card_clicked(&mut self, card: Entity) -> Result<ClickOutcome, EngineError> {
        let Some((stack_type, is_top)) = self.locate(card)? else {
            debug!("Clicked {} which is out of play.", card);
            return Ok(ClickOutcome::Ignored);
        };
        let is_face_up = self.card(card)?.is_face_up;

        match stack_type.pile_type() {
            PileType::Stock if is_top => {
                let dealt = stock_system::deal_one_card_from_stock(&mut self.world, &mut self.board)?;
                Ok(dealt.map_or(ClickOutcome::Ignored, ClickOutcome::Dealt))
            }
            PileType::Tableau if is_top && !is_face_up => {
                if let Some(c) = self.world.get_component_mut::<Card>(card) {
                    c.flip();
                    debug!("Flipped {} on {}.", c, stack_type);
                }
                Ok(ClickOutcome::Flipped(card))
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }

    /// 山札 (の置き場所) をクリックしたとき。
    /// カードが残っていれば 1 枚めくる。空なら捨て札を戻す。
    pub fn stock_clicked(&mut self) -> Result<ClickOutcome, EngineError> {
        if let Some(top) = self.board.stock().top_card() {
            return self.card_clicked(top);
        }
        Ok(self
            .refill_stock_from_discard()?
            .map_or(ClickOutcome::Ignored, ClickOutcome::Refilled))
    }

    /// 空の山札に捨て札を戻す。捨て札の一番下の 1 枚は戻らないので注意！
    pub fn refill_stock_from_discard(&mut self) -> Result<Option<RefillReport>, EngineError> {
        stock_system::refill_stock_from_discard(&mut self.world, &mut self.board)
    }

    /// ドラッグ開始。掴めるカードなら、一緒に動く束を返す。
    ///
    /// 掴めないカード (裏向き、山札、捨て札や組札の一番上以外) なら `None`。
    pub fn begin_drag(&mut self, card: Entity) -> Result<Option<Vec<Entity>>, EngineError> {
        self.drag = None;
        if !self.is_draggable(card)? {
            debug!("{} cannot be dragged.", card);
            return Ok(None);
        }
        let pile = self.board.pile_of(&self.world, card)?;
        let start = pile.position_of(card).ok_or(EngineError::PileMismatch {
            card,
            stack_type: pile.stack_type(),
        })?;
        let session = DragSession {
            group: pile.cards()[start..].to_vec(),
            origin: pile.stack_type(),
        };
        debug!("Dragging {} card(s) from {}.", session.group.len(), session.origin);
        let group = session.group.clone();
        self.drag = Some(session);
        Ok(Some(group))
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// ドラッグを離したとき。`candidates` は掴んだカードと重なっている山たち。
    ///
    /// 場札の候補 → 組札の候補の順に試して、最初に置ける山へ束ごと移す。
    /// 置けなければ `Cancelled` で、何も変わらない。
    pub fn release_drag(&mut self, candidates: &[StackType]) -> Result<MoveOutcome, EngineError> {
        let Some(session) = self.drag.take() else {
            return Ok(MoveOutcome::Cancelled);
        };
        let Some(&head) = session.group.first() else {
            return Ok(MoveOutcome::Cancelled);
        };
        let outcome = self
            .move_system
            .try_move(&mut self.world, &mut self.board, head, candidates)?;
        if outcome.is_moved() {
            self.win_system.run(&mut self.world, &mut self.board);
        }
        Ok(outcome)
    }

    /// 掴んで離すのを一度にやる。
    pub fn drop_card(&mut self, card: Entity, candidates: &[StackType]) -> Result<MoveOutcome, EngineError> {
        match self.begin_drag(card)? {
            Some(_) => self.release_drag(candidates),
            None => Ok(MoveOutcome::Cancelled),
        }
    }

    /// ドラッグを始められるカードか。場から外れたカードは `false`。
    pub fn is_draggable(&self, card: Entity) -> Result<bool, EngineError> {
        let Some((stack_type, is_top)) = self.locate(card)? else {
            return Ok(false);
        };
        let is_face_up = self.card(card)?.is_face_up;
        Ok(can_start_drag(stack_type.pile_type(), is_face_up, is_top))
    }

    /// 同じ 52 枚のカードで配り直す。
    pub fn restart(&mut self) {
        self.drag = None;
        if let Some(state) = self.world.get_component_mut::<GameState>(self.game_entity) {
            *state = GameState::default();
        }
        self.deal_system.run(&mut self.world, &mut self.board);
        info!("🔄 Game restarted.");
    }

    /// 描画側に渡す今の状態。
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
