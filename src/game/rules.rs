//! リバーシのルール実装モジュール
//! 合法手の判定、石のフリップ、手番の進行、勝敗判定を担当する。
//! いずれも盤面を受け取る純粋関数で、盤面の変更は`apply_move`だけが行う。

use super::board::Board;
use super::state::GameState;
use super::types::{Move, Outcome, Position, Side, H, W};
use crate::error::{GameError, Result};

/// 盤面上の8方向への移動ベクトル (dx, dy)
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// リバーシのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct ReversiRules;

impl ReversiRules {
    /// 指定位置に着手した場合にフリップされる石の位置を返す
    /// 8方向それぞれについて、隣接する相手の石の連続が自分の石で終わる場合のみ採用する。
    /// 盤端や空マスで終わった方向の石は捨てる。
    pub fn get_flipped_positions(board: &Board, position: Position, side: Side) -> Vec<Position> {
        let own = side.to_cell();
        let opponent = side.opponent().to_cell();
        let mut flipped = Vec::new();

        for &(dx, dy) in &DIRECTIONS {
            let mut line = Vec::new();
            let mut current = position.offset(dx, dy);

            while let Some(pos) = current {
                if board.get_cell(pos) != Some(opponent) {
                    break;
                }
                line.push(pos);
                current = pos.offset(dx, dy);
            }

            // 盤内の自分の石で挟めた場合のみ確定
            if let Some(end) = current {
                if board.get_cell(end) == Some(own) {
                    flipped.extend(line);
                }
            }
        }

        flipped
    }

    /// 合法判定とフリップ集合を同時に求める
    /// 合法ならフリップされる石（必ず1個以上）を返し、非合法ならNone
    pub fn legal_flips(board: &Board, position: Position, side: Side) -> Option<Vec<Position>> {
        if !board.is_empty(position) {
            return None;
        }

        let opponent = side.opponent().to_cell();
        let touches_opponent = board
            .neighbours(position)
            .into_iter()
            .any(|pos| board.get_cell(pos) == Some(opponent));
        if !touches_opponent {
            return None;
        }

        let flipped = Self::get_flipped_positions(board, position, side);
        if flipped.is_empty() {
            None
        } else {
            Some(flipped)
        }
    }

    /// 指定位置に指定サイドが置けるかチェックする
    pub fn is_valid_move(board: &Board, position: Position, side: Side) -> bool {
        Self::legal_flips(board, position, side).is_some()
    }

    /// 指定サイドの合法手を全て取得する
    /// xを外側、yを内側のループとして走査する
    pub fn get_valid_moves(board: &Board, side: Side) -> Vec<Position> {
        let mut valid_moves = Vec::new();

        for x in 0..W {
            for y in 0..H {
                if let Some(position) = Position::new(x, y) {
                    if Self::is_valid_move(board, position, side) {
                        valid_moves.push(position);
                    }
                }
            }
        }

        valid_moves
    }

    /// 指定サイドに合法手が一つでもあるか
    pub fn has_valid_moves(board: &Board, side: Side) -> bool {
        (0..W)
            .flat_map(|x| (0..H).map(move |y| Position { x, y }))
            .any(|position| Self::is_valid_move(board, position, side))
    }

    /// 着手後の手番を決める
    /// 相手に合法手があれば相手、なければ着手側がもう一度（相手のパス）、
    /// どちらにもなければNone（終局）
    pub fn next_active(board: &Board, mover: Side) -> Option<Side> {
        let opponent = mover.opponent();
        if Self::has_valid_moves(board, opponent) {
            return Some(opponent);
        }
        if Self::has_valid_moves(board, mover) {
            return Some(mover);
        }
        None
    }

    /// 勝敗を判定する
    /// 片方の石が0個なら盤面が埋まっていなくても相手の勝ち。
    /// 盤面が埋まったか手番がNoneなら石数で比較する。
    /// それ以外は対局継続中としてNoneを返す。
    pub fn determine_winner(board: &Board, active: Option<Side>) -> Option<Outcome> {
        let (zero, one) = board.count_discs();

        if zero == 0 {
            return Some(Outcome::Winner(Side::One));
        }
        if one == 0 {
            return Some(Outcome::Winner(Side::Zero));
        }

        if board.is_full() || active.is_none() {
            return Some(if zero == one {
                Outcome::Draw
            } else if zero > one {
                Outcome::Winner(Side::Zero)
            } else {
                Outcome::Winner(Side::One)
            });
        }

        None
    }

    /// 現在の手番で指定位置に着手し、盤面と手番を更新する
    /// 戻り値はフリップされた石の位置リスト
    pub fn apply_move(
        game_state: &mut GameState,
        position: Position,
        automated: bool,
    ) -> Result<Vec<Position>> {
        let side = match game_state.active {
            Some(side) if game_state.running => side,
            _ => return Err(GameError::GameFinished),
        };

        let flipped = Self::legal_flips(&game_state.board, position, side).ok_or_else(|| {
            GameError::InvalidMove {
                reason: format!("Position {} is not a valid move for Player#{}", position, side),
            }
        })?;

        game_state.board.set_cell(position, side.to_cell());
        for &pos in &flipped {
            game_state.board.set_cell(pos, side.to_cell());
        }

        game_state.add_move(Move::new(side, position, flipped.clone(), automated));
        game_state.set_active(Self::next_active(&game_state.board, side));

        Ok(flipped)
    }
}
