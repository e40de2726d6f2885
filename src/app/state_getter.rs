// src/app/state_getter.rs
//! Builds the render state (engine snapshot plus pixel positions) and
//! converts it to JSON for the JavaScript side.

use log::error;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::app::dragging_info::DraggingInfo;
use crate::app::layout_calculator::{self, Position};
use crate::ecs::entity::Entity;
use crate::engine::{CardSnapshot, GameEngine, PileSnapshot};

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    #[serde(flatten)]
    pub card: CardSnapshot,
    /// 場から外れたカードは `None` (描かない)
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PileView {
    #[serde(flatten)]
    pub pile: PileSnapshot,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderState {
    pub cards: Vec<CardView>,
    pub piles: Vec<PileView>,
    pub won: bool,
}

/// 描画用の状態を組み立てる。ドラッグ中のカードはポインタに付いていく位置にする。
pub fn build_render_state(engine: &GameEngine, dragging: Option<&DraggingInfo>) -> RenderState {
    let snapshot = engine.snapshot();
    let cards = snapshot
        .cards
        .into_iter()
        .map(|card| {
            let entity = Entity(card.id);
            let position = dragging
                .and_then(|d| d.current_position_of(entity))
                .or_else(|| super::drag_handler::card_position(engine, entity));
            CardView { card, position }
        })
        .collect();
    let piles = snapshot
        .piles
        .into_iter()
        .map(|pile| PileView {
            position: layout_calculator::pile_origin(pile.stack_type),
            pile,
        })
        .collect();
    RenderState { cards, piles, won: snapshot.won }
}

/// ゲームの状態を JSON 文字列 (JsValue) にして返す。
pub fn get_game_state_json(
    engine: &GameEngine,
    dragging: Option<&DraggingInfo>,
) -> Result<JsValue, JsValue> {
    let state = build_render_state(engine, dragging);
    match serde_json::to_string(&state) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            let msg = format!("Failed to serialize game state: {}", e);
            error!("{}", msg);
            Err(js_sys::Error::new(&msg).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::drag_handler;
    use crate::components::stack::StackType;
    use crate::config::GameConfig;

    #[test]
    fn render_state_places_every_card() {
        let engine = GameEngine::new(&GameConfig::with_seed(3));
        let state = build_render_state(&engine, None);

        assert_eq!(state.cards.len(), 52);
        assert!(state.cards.iter().all(|c| c.position.is_some()));
        let tableau = state
            .piles
            .iter()
            .find(|p| p.pile.stack_type == StackType::Tableau(2))
            .unwrap();
        assert_eq!(tableau.position, Position::new(455.0, 275.0));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"position\":{\"x\":"));
        assert!(json.contains("\"layout_gap\":30.0"));
    }

    #[test]
    fn dragged_cards_use_pointer_position() {
        let mut engine = GameEngine::new(&GameConfig::with_seed(3));
        let top = engine.board().tableaus()[0].top_card().unwrap();
        let mut dragging = drag_handler::handle_drag_start(&mut engine, top, 95.0, 275.0)
            .unwrap()
            .unwrap();
        drag_handler::update_dragged_position(&mut dragging, 700.0, 400.0);

        let state = build_render_state(&engine, Some(&dragging));
        let view = state.cards.iter().find(|c| c.card.id == top.0).unwrap();
        assert_eq!(view.position, Some(Position::new(700.0, 400.0)));
    }
}
