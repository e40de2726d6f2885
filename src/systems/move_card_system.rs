// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::board::Board;
use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::{PileType, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::logic::rules::find_destination;

/// ドロップの結果。置けなかったのはエラーじゃなくて `Cancelled`！
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// `cards` (下から順) が `from` から `to` へ移動した
    Moved {
        cards: Vec<Entity>,
        from: StackType,
        to: StackType,
    },
    /// 置ける候補がなかった。状態は何も変わってない
    Cancelled,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「このカードを、この山たちの上で離した」という入力を受け取って、
/// ルール上置ける最初の山に、カードとその上に乗ってる束をまとめて移す。
#[derive(Debug, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `card` を `candidates` のどれかに動かしてみる。
    ///
    /// 候補は場札 → 組札の順に試して、移動元の山は飛ばす。
    /// 束の判定は一番下の `card` だけで行う。
    pub fn try_move(
        &self,
        world: &mut World,
        board: &mut Board,
        card: Entity,
        candidates: &[StackType],
    ) -> Result<MoveOutcome, EngineError> {
        let (world_view, board_view): (&World, &Board) = (world, board);
        let origin = board_view.pile_of(world_view, card)?.stack_type();
        let moving = world_view
            .get_component::<Card>(card)
            .ok_or(EngineError::MissingCard(card))?;

        let destination = find_destination(moving, origin, candidates, |stack_type| {
            board_view
                .pile(stack_type)
                .and_then(Pile::top_card)
                .and_then(|top| world_view.get_component::<Card>(top))
        });
        let Some(destination) = destination else {
            debug!("No legal destination for {} among {:?}.", moving, candidates);
            return Ok(MoveOutcome::Cancelled);
        };

        let beneath = board.pile(destination).and_then(Pile::top_card);
        let moved = board.transfer(world, card, destination)?;
        self.narrate(world, card, destination, beneath);

        Ok(MoveOutcome::Moved { cards: moved, from: origin, to: destination })
    }

    /// ゲーム画面のメッセージと同じ文言でログを出す。
    fn narrate(&self, world: &World, card: Entity, destination: StackType, beneath: Option<Entity>) {
        let Some(moved) = world.get_component::<Card>(card) else {
            return;
        };
        match beneath.and_then(|e| world.get_component::<Card>(e)) {
            Some(under) => info!("Placed {} to {}.", moved, under),
            None => match destination.pile_type() {
                PileType::Foundation => info!("Placed {} to the foundation.", moved),
                PileType::Tableau => info!("Placed {} to a new pile.", moved),
                PileType::Stock | PileType::Discard => {}
            },
        }
    }
}
