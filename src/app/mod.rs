// src/app/mod.rs
//! JS とつなぐ部分 (GameApp) と、座標まわりの処理をまとめたモジュールだよ！

pub mod console_logger;
pub mod drag_handler;
pub mod dragging_info;
pub mod game_app;
pub mod layout_calculator;
pub mod state_getter;
