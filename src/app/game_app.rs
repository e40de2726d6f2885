// src/app/game_app.rs

use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::app::dragging_info::DraggingInfo;
use crate::app::{drag_handler, state_getter};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::engine::{ClickOutcome, GameEngine};
use crate::error::EngineError;

fn to_js_error(err: EngineError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// JS から見えるゲーム本体だよ！🎮
///
/// JS 側はポインタ操作をそのまま渡して、`get_game_state_json` の結果を描くだけ。
#[wasm_bindgen]
pub struct GameApp {
    engine: GameEngine,
    /// ドラッグ中だけ Some
    dragging: Option<DraggingInfo>,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は `{"seed": 42, "log_level": "debug"}` みたいな JSON (省略可)。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json.as_deref().unwrap_or("")).map_err(to_js_error)?;
        log::set_max_level(config.level_filter());
        info!("GameApp: initializing (seed: {:?})", config.seed);
        Ok(Self {
            engine: GameEngine::new(&config),
            dragging: None,
        })
    }

    /// カードがクリックされた。状態が変わったら true。
    pub fn card_clicked(&mut self, entity_id: usize) -> bool {
        match self.engine.card_clicked(Entity(entity_id)) {
            Ok(outcome) => outcome != ClickOutcome::Ignored,
            Err(e) => {
                error!("card_clicked({}) failed: {}", entity_id, e);
                false
            }
        }
    }

    /// 山札の置き場所がクリックされた。状態が変わったら true。
    pub fn stock_clicked(&mut self) -> bool {
        match self.engine.stock_clicked() {
            Ok(outcome) => outcome != ClickOutcome::Ignored,
            Err(e) => {
                error!("stock_clicked failed: {}", e);
                false
            }
        }
    }

    /// ドラッグ開始。掴めたら true。
    pub fn drag_started(&mut self, entity_id: usize, x: f32, y: f32) -> bool {
        self.dragging = None;
        match drag_handler::handle_drag_start(&mut self.engine, Entity(entity_id), x, y) {
            Ok(dragging) => {
                self.dragging = dragging;
                self.dragging.is_some()
            }
            Err(e) => {
                error!("drag_started({}) failed: {}", entity_id, e);
                false
            }
        }
    }

    pub fn dragged(&mut self, entity_id: usize, x: f32, y: f32) {
        match self.dragging.as_mut() {
            Some(dragging) if dragging.head().map(|c| c.entity) == Some(Entity(entity_id)) => {
                drag_handler::update_dragged_position(dragging, x, y);
            }
            _ => warn!("dragged({}) without a matching drag in progress", entity_id),
        }
    }

    /// ドラッグ終了。カードが移動したら true (false ならカードは元の場所へ戻る)。
    pub fn drag_released(&mut self, entity_id: usize) -> bool {
        let Some(dragging) = self.dragging.take() else {
            warn!("drag_released({}) without a drag in progress", entity_id);
            return false;
        };
        match drag_handler::handle_drag_end(&mut self.engine, &dragging) {
            Ok(outcome) => {
                if self.engine.is_game_won() {
                    info!("🎉 Congratulations, you won!");
                }
                outcome.is_moved()
            }
            Err(e) => {
                error!("drag_released({}) failed: {}", entity_id, e);
                false
            }
        }
    }

    pub fn restart(&mut self) {
        self.dragging = None;
        self.engine.restart();
    }

    pub fn is_game_won(&self) -> bool {
        self.engine.is_game_won()
    }

    /// カード・山・勝利フラグを JSON 文字列で返す。
    pub fn get_game_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_game_state_json(&self.engine, self.dragging.as_ref())
    }
}
