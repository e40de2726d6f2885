// src/app/dragging_info.rs

use crate::app::layout_calculator::Position;
use crate::ecs::entity::Entity;

/// ドラッグ中のカード 1 枚。元の位置と今の位置を覚えておく。
#[derive(Debug, Clone, PartialEq)]
pub struct DraggedCard {
    pub entity: Entity,
    pub original: Position,
    pub current: Position,
}

/// ドラッグ中の束の情報だよ！🖱️
///
/// `cards[0]` が掴んだカード。`offset_x` / `offset_y` は、
/// 掴んだ瞬間のポインタ位置と `cards[0]` の左上とのずれ。
#[derive(Debug, Clone, PartialEq)]
pub struct DraggingInfo {
    pub cards: Vec<DraggedCard>,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl DraggingInfo {
    pub fn head(&self) -> Option<&DraggedCard> {
        self.cards.first()
    }

    pub fn current_position_of(&self, entity: Entity) -> Option<Position> {
        self.cards.iter().find(|c| c.entity == entity).map(|c| c.current)
    }
}
