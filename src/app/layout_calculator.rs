// src/app/layout_calculator.rs
//! Calculates where piles and cards are drawn, and which piles a dragged
//! card is hovering over.

use serde::{Deserialize, Serialize};

use crate::components::board::Board;
use crate::components::stack::{PileType, StackType};
use crate::config::layout::{
    CARD_HEIGHT, CARD_WIDTH, DISCARD_POS_X, DISCARD_POS_Y, FOUNDATION_START_X,
    FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y, TABLEAU_START_X,
    TABLEAU_START_Y, TABLEAU_X_OFFSET,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// カード 1 枚分の当たり判定の箱。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// 左上が `position` の、カードと同じ大きさの箱。
    pub fn card_at(position: Position) -> Self {
        Self { x: position.x, y: position.y, width: CARD_WIDTH, height: CARD_HEIGHT }
    }

    /// 辺が触れているだけでも重なり扱い。
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }
}

/// 山の左上の座標。
pub fn pile_origin(stack_type: StackType) -> Position {
    match stack_type {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Discard => Position::new(DISCARD_POS_X, DISCARD_POS_Y),
        StackType::Foundation(index) => Position::new(
            FOUNDATION_START_X + FOUNDATION_X_OFFSET * f32::from(index),
            FOUNDATION_START_Y,
        ),
        StackType::Tableau(index) => Position::new(
            TABLEAU_START_X + TABLEAU_X_OFFSET * f32::from(index),
            TABLEAU_START_Y,
        ),
    }
}

/// 山の中で `position_in_stack` 番目のカードの座標。
/// 山ごとの `layout_gap` ずつ下にずらして重ねる。
pub fn calculate_card_position(stack_type: StackType, position_in_stack: usize, layout_gap: f32) -> Position {
    let origin = pile_origin(stack_type);
    Position::new(origin.x, origin.y + layout_gap * position_in_stack as f32)
}

/// ドロップ判定に使う山の箱。
/// 空の山なら山そのもの、カードがあれば一番上のカードの箱。
pub fn drop_target_bounds(board: &Board, stack_type: StackType) -> Option<Rect> {
    let pile = board.pile(stack_type)?;
    let position = match pile.num_of_cards() {
        0 => pile_origin(stack_type),
        n => calculate_card_position(stack_type, n - 1, pile.layout_gap()),
    };
    Some(Rect::card_at(position))
}

/// `card_bounds` と重なっている場札・組札を、場札 → 組札の順で返す。
pub fn find_overlapping_piles(board: &Board, card_bounds: &Rect) -> Vec<StackType> {
    StackType::all()
        .filter(|stack_type| {
            matches!(stack_type.pile_type(), PileType::Tableau | PileType::Foundation)
        })
        .filter(|&stack_type| {
            drop_target_bounds(board, stack_type).is_some_and(|bounds| bounds.intersects(card_bounds))
        })
        .collect()
}
