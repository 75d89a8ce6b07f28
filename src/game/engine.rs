//! 対局エンジンモジュール
//! 盤面と手番を保持し、着手要求の検証・適用・描画通知と
//! 自動プレイヤーの応手をまとめて処理する。

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

use super::board::Board;
use super::rules::ReversiRules;
use super::state::GameState;
use super::types::{Outcome, Position, Side};
use crate::ai::{AIStrategy, CornerGreedyAI};
use crate::error::{GameError, Result};
use crate::render::Renderer;

/// 対局モード
/// two-human以外の文字列はすべてコンピュータ対戦として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum GameMode {
    TwoHuman,
    VsComputer,
}

impl FromStr for GameMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "two-human" | "twogamer" => GameMode::TwoHuman,
            _ => GameMode::VsComputer,
        })
    }
}

impl From<String> for GameMode {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(GameMode::VsComputer)
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoHuman => write!(f, "two-human"),
            GameMode::VsComputer => write!(f, "computer"),
        }
    }
}

/// 着手要求の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 着手が適用された（自動プレイヤーの応手数を含む）
    Applied { flipped: usize, automated_replies: usize },
    /// 非合法手または終局後の要求で、状態は変わっていない
    Rejected,
}

/// 対局エンジン
///
/// 盤面を専有し、着手のたびに描画コールバックへ盤面とステータスを渡す。
/// 自動プレイヤーの手番になった場合は人間の手番か終局になるまで
/// 同じ呼び出しの中で応手を続ける。
pub struct ReversyLogic<R: Renderer> {
    state: GameState,
    automated_side: Option<Side>,
    strategy: Box<dyn AIStrategy>,
    renderer: R,
}

impl<R: Renderer> ReversyLogic<R> {
    /// モードに従って新しい対局を開始する
    /// コンピュータ対戦では自動プレイヤーのサイドを50%ずつの確率で選ぶ
    pub fn new(mode: GameMode, renderer: R) -> Result<Self> {
        Self::with_rng(mode, &mut rand::thread_rng(), renderer)
    }

    /// 乱数生成器を指定して対局を開始する
    pub fn with_rng<G: Rng + ?Sized>(mode: GameMode, rng: &mut G, renderer: R) -> Result<Self> {
        let automated_side = match mode {
            GameMode::TwoHuman => None,
            GameMode::VsComputer => Some(if rng.gen_bool(0.5) { Side::Zero } else { Side::One }),
        };
        Self::with_automated_side(automated_side, renderer)
    }

    /// 自動プレイヤーのサイドを直接指定して対局を開始する
    /// 初期局面を描画し、自動プレイヤーが先手なら初手まで進める
    pub fn with_automated_side(automated_side: Option<Side>, renderer: R) -> Result<Self> {
        let mut logic = Self {
            state: GameState::new(),
            automated_side,
            strategy: Box::new(CornerGreedyAI::new()),
            renderer,
        };

        info!(
            game_id = %logic.state.id,
            automated_side = ?logic.automated_side,
            "new game started"
        );

        logic.update();
        logic.play_automated()?;
        Ok(logic)
    }

    /// 入力アダプタからの着手要求
    /// 盤面外の座標はInvalidInputとして拒否し、描画は行わない
    pub fn request_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome> {
        let position = Position::new(x, y).ok_or(GameError::InvalidInput { x, y })?;
        self.apply_move(position)
    }

    /// 現在の手番で着手する
    /// 非合法手は状態を変えずに再描画だけ行う
    #[instrument(skip(self), fields(game_id = %self.state.id))]
    pub fn apply_move(&mut self, position: Position) -> Result<MoveOutcome> {
        let mover = self.state.active;
        let flipped = match ReversiRules::apply_move(&mut self.state, position, false) {
            Ok(flipped) => flipped,
            Err(GameError::InvalidMove { reason }) => {
                debug!(%reason, "move rejected");
                self.update();
                return Ok(MoveOutcome::Rejected);
            }
            Err(GameError::GameFinished) => {
                debug!("move after game end ignored");
                self.update();
                return Ok(MoveOutcome::Rejected);
            }
            Err(e) => return Err(e),
        };

        self.log_ply(mover, position, flipped.len(), false);
        self.update();

        let automated_replies = self.play_automated()?;
        Ok(MoveOutcome::Applied {
            flipped: flipped.len(),
            automated_replies,
        })
    }

    /// 自動プレイヤーの手番が続く限り応手する
    /// 再帰ではなくループで処理し、1手ごとに描画する
    fn play_automated(&mut self) -> Result<usize> {
        let mut replies = 0;

        while self.state.running
            && self.automated_side.is_some()
            && self.state.active == self.automated_side
        {
            let mover = self.state.active;
            let position = self.strategy.calculate_move(&self.state)?;
            let flipped = ReversiRules::apply_move(&mut self.state, position, true)?;

            self.log_ply(mover, position, flipped.len(), true);
            self.update();
            replies += 1;
        }

        Ok(replies)
    }

    fn log_ply(&self, mover: Option<Side>, position: Position, flipped: usize, automated: bool) {
        info!(side = ?mover, %position, flipped, automated, "move applied");

        match self.state.active {
            Some(next) if Some(next) == mover => {
                info!(side = ?next, "opponent has no legal move, same side moves again");
            }
            None => info!("no side can move"),
            _ => {}
        }
    }

    /// 勝敗を評価してrunningを更新し、描画コールバックを呼ぶ
    fn update(&mut self) {
        let was_running = self.state.running;
        let message = self.state.refresh();
        if was_running && !self.state.running {
            let (zero, one) = self.state.get_score();
            info!(outcome = ?self.state.winner(), zero, one, "game over");
        }
        self.renderer.render(&self.state.board, &message);
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// 手番のサイド（Noneならどちらも着手できない）
    pub fn active(&self) -> Option<Side> {
        self.state.active
    }

    pub fn automated_side(&self) -> Option<Side> {
        self.automated_side
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner()
    }

    /// 現在のステータスメッセージ
    pub fn status_message(&self) -> String {
        GameState::status_message(self.state.active, self.state.winner())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
