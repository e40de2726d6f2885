// src/app/drag_handler.rs
//! Handles card dragging (start, update, end) on top of the engine's
//! drag session. Pixel work lives here; the engine only sees candidate piles.

use log::{debug, info};

use crate::app::dragging_info::{DraggedCard, DraggingInfo};
use crate::app::layout_calculator::{self, Position, Rect};
use crate::components::stack::StackInfo;
use crate::ecs::entity::Entity;
use crate::engine::GameEngine;
use crate::error::EngineError;
use crate::systems::MoveOutcome;

/// 盤面上でのカードの今の座標。場から外れたカードは `None`。
pub fn card_position(engine: &GameEngine, entity: Entity) -> Option<Position> {
    let info = engine.world().get_component::<StackInfo>(entity)?;
    let pile = engine.board().pile(info.stack_type)?;
    Some(layout_calculator::calculate_card_position(
        info.stack_type,
        info.position_in_stack,
        pile.layout_gap(),
    ))
}

/// ドラッグ開始。掴めないカードなら `None` (何も始まらない)。
pub fn handle_drag_start(
    engine: &mut GameEngine,
    entity: Entity,
    start_x: f32,
    start_y: f32,
) -> Result<Option<DraggingInfo>, EngineError> {
    let Some(group) = engine.begin_drag(entity)? else {
        return Ok(None);
    };
    let cards: Vec<DraggedCard> = group
        .iter()
        .filter_map(|&e| {
            let original = card_position(engine, e)?;
            Some(DraggedCard { entity: e, original, current: original })
        })
        .collect();
    let Some(head) = cards.first() else {
        engine.cancel_drag();
        return Ok(None);
    };
    let info = DraggingInfo {
        offset_x: start_x - head.original.x,
        offset_y: start_y - head.original.y,
        cards,
    };
    info!("Drag started with {} card(s) from {}.", info.cards.len(), entity);
    Ok(Some(info))
}

/// ポインタに合わせて束を動かす。束の中の並び (ずれ) はそのまま。
pub fn update_dragged_position(dragging: &mut DraggingInfo, mouse_x: f32, mouse_y: f32) {
    let Some(head) = dragging.head().map(|c| c.original) else {
        return;
    };
    let head_x = mouse_x - dragging.offset_x;
    let head_y = mouse_y - dragging.offset_y;
    for card in &mut dragging.cards {
        card.current = Position::new(
            head_x + (card.original.x - head.x),
            head_y + (card.original.y - head.y),
        );
    }
}

/// ドラッグ終了。掴んだカードの今の箱と重なっている山を候補にしてエンジンに渡す。
pub fn handle_drag_end(
    engine: &mut GameEngine,
    dragging: &DraggingInfo,
) -> Result<MoveOutcome, EngineError> {
    let Some(head) = dragging.head() else {
        engine.cancel_drag();
        return Ok(MoveOutcome::Cancelled);
    };
    let bounds = Rect::card_at(head.current);
    let candidates = layout_calculator::find_overlapping_piles(engine.board(), &bounds);
    debug!("Released {} over {:?}.", head.entity, candidates);
    let outcome = engine.release_drag(&candidates)?;
    if outcome == MoveOutcome::Cancelled {
        info!("No valid pile under {}. Sliding back.", head.entity);
    }
    Ok(outcome)
}
