// src/config/game_config.rs

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 実行時の設定だよ⚙️
///
/// JS 側からは JSON で渡す: `{"seed": 42, "log_level": "debug"}`。
/// どのキーも省略できて、省略したらデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルの種。`None` ならエントロピーから。同じ種なら同じ配り方になる！
    pub seed: Option<u64>,
    /// コンソールロガーのレベル ("error" / "warn" / "info" / "debug" / "trace" / "off")。
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// 空文字列ならデフォルト設定。
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// 知らないレベル名なら Info にしておく。
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
