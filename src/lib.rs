// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod engine;
pub mod error;
pub mod logic;
pub mod systems;

pub use app::game_app::GameApp;
pub use config::GameConfig;
pub use engine::{ClickOutcome, GameEngine, GameSnapshot};
pub use error::EngineError;
pub use systems::MoveOutcome;

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if app::console_logger::init(log::LevelFilter::Info).is_err() {
        log::warn!("Console logger was already installed.");
    }
    log::info!("Panic hook and console logger set!");
}
