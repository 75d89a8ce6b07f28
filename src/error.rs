//! アプリケーション全体のエラー定義モジュール
//! ゲームロジックと自動プレイヤーのエラーを統一管理。

use thiserror::Error;

/// ゲームロジックに関連するエラー
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid input: ({x}, {y}) is outside the board")]
    InvalidInput { x: usize, y: usize },

    #[error("Invalid input: {input:?} (expected two numbers like '1 2')")]
    MalformedInput { input: String },

    #[error("Invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("Game already finished")]
    GameFinished,

    #[error("AI calculation failed: {source}")]
    AIError {
        #[from]
        source: AIError,
    },
}

/// 自動プレイヤーに関連するエラー
#[derive(Debug, Error)]
pub enum AIError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("AI strategy error: {message}")]
    StrategyError { message: String },
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
