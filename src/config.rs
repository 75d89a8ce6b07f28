//! アプリケーション設定管理モジュール
//! 対局モードやログ出力の設定を設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::game::GameMode;

/// ログレベルとして受け付ける値
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 対局の設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// "two-human"なら二人対戦、それ以外はコンピュータ対戦
    pub mode: GameMode,
    /// 自動プレイヤーのサイド選択に使う乱数シード
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            seed: None,
        }
    }
}

/// ログ出力の設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub enable_logging: bool,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            level: "warn".to_string(),
        }
    }
}

/// アプリケーションの全設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

/// 設定関連のエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },

    #[error("設定値が無効です: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// 設定済みの値に環境変数を上書きする
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(mode) = env::var("REVERSY_MODE") {
            self.game.mode = GameMode::from(mode);
        }

        if let Ok(seed) = env::var("REVERSY_SEED") {
            self.game.seed = Some(seed.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSY_SEED".to_string(),
                value: seed,
            })?);
        }

        if let Ok(level) = env::var("REVERSY_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(enable) = env::var("REVERSY_ENABLE_LOGGING") {
            self.logging.enable_logging = enable.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSY_ENABLE_LOGGING".to_string(),
                value: enable,
            })?;
        }

        Ok(())
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("config.json")
            .or_else(|_| Self::from_file("config/reversy.json"))
            .unwrap_or_default();
        config.apply_env()?;
        Ok(config)
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 設定値の妥当性をチェックする
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }
}
