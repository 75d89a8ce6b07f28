//! ゲーム状態管理モジュール
//! 盤面、手番、進行フラグ、手の履歴をまとめて保持する。

use super::board::Board;
use super::rules::ReversiRules;
use super::types::{Move, Outcome, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 1局分の状態
/// activeがNoneのときはどちらのサイドも着手できない
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: Uuid,
    pub board: Board,
    pub active: Option<Side>,
    pub running: bool,
    pub move_history: Vec<Move>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl GameState {
    /// 新しいゲーム状態を作成する
    /// 初期状態：サイド0の番で開始
    pub fn new() -> Self {
        Self::new_with_id(Uuid::new_v4())
    }

    /// 指定IDで新しいゲーム状態を作成する
    pub fn new_with_id(id: Uuid) -> Self {
        Self::from_board(id, Board::new(), Some(Side::Zero))
    }

    /// 任意の盤面と手番から状態を作る
    /// 終局済みの盤面ならrunningはfalseになる
    pub fn from_board(id: Uuid, board: Board, active: Option<Side>) -> Self {
        let now = Utc::now();
        let mut state = Self {
            id,
            board,
            active,
            running: true,
            move_history: Vec::new(),
            created_at: now,
            last_updated: now,
        };
        state.running = state.winner().is_none();
        state
    }

    /// 勝敗判定（未決着ならNone）
    pub fn winner(&self) -> Option<Outcome> {
        ReversiRules::determine_winner(&self.board, self.active)
    }

    /// 終局しているか
    pub fn is_finished(&self) -> bool {
        !self.running
    }

    /// 手番を更新する
    pub fn set_active(&mut self, active: Option<Side>) {
        self.active = active;
        self.last_updated = Utc::now();
    }

    /// 手の履歴に新しい手を追加する
    pub fn add_move(&mut self, game_move: Move) {
        self.move_history.push(game_move);
        self.last_updated = Utc::now();
    }

    /// 勝敗を評価し直してrunningを更新する
    /// 戻り値は表示用のステータスメッセージ
    pub fn refresh(&mut self) -> String {
        let winner = self.winner();
        self.running = winner.is_none();
        Self::status_message(self.active, winner)
    }

    /// ステータスメッセージを組み立てる
    pub fn status_message(active: Option<Side>, winner: Option<Outcome>) -> String {
        match winner {
            None => match active {
                Some(side) => format!("Player#{}, select cell to turn", side),
                None => "Player#None, select cell to turn".to_string(),
            },
            Some(Outcome::Draw) => "There is draw".to_string(),
            Some(Outcome::Winner(side)) => format!("Player#{} win", side),
        }
    }

    /// 現在のスコア
    /// 戻り値: (サイド0の石数, サイド1の石数)
    pub fn get_score(&self) -> (usize, usize) {
        self.board.count_discs()
    }

    /// これまでの手数
    pub fn get_move_count(&self) -> usize {
        self.move_history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
