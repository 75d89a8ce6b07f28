//! ゲームの基本型定義モジュール
//! 8x8盤面のリバーシで使用するサイド、セル、座標、手の記録などを定義する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面の幅
pub const W: usize = 8;
/// 盤面の高さ
pub const H: usize = 8;

/// プレイヤー（サイド）を表すenum
/// サイド0が先手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Zero,
    One,
}

impl Side {
    /// 相手サイドを返す
    pub fn opponent(self) -> Side {
        match self {
            Side::Zero => Side::One,
            Side::One => Side::Zero,
        }
    }

    /// サイドを対応するセル状態に変換する
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Zero => Cell::Side0,
            Side::One => Cell::Side1,
        }
    }

    /// 表示用の番号（0または1）
    pub fn index(self) -> usize {
        match self {
            Side::Zero => 0,
            Side::One => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// 盤面の各マスの状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Side0,
    Side1,
}

impl Cell {
    /// 石が置かれている場合はその所有サイドを返す
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Side0 => Some(Side::Zero),
            Cell::Side1 => Some(Side::One),
        }
    }
}

/// 盤面上の座標
/// xは列、yは行（ともに0-7）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// 範囲チェック付きのコンストラクタ
    /// 盤面外の座標の場合はNoneを返す
    pub fn new(x: usize, y: usize) -> Option<Position> {
        if x < W && y < H {
            Some(Position { x, y })
        } else {
            None
        }
    }

    /// 座標が盤面内かチェックする
    pub fn is_valid(&self) -> bool {
        self.x < W && self.y < H
    }

    /// 四隅のいずれかかどうか
    pub fn is_corner(&self) -> bool {
        CORNERS.contains(self)
    }

    /// (dx, dy)だけずらした座標を返す。盤面外ならNone
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        if x < 0 || y < 0 {
            return None;
        }
        Position::new(x as usize, y as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 盤面の四隅
pub const CORNERS: [Position; 4] = [
    Position { x: 0, y: 0 },
    Position { x: W - 1, y: H - 1 },
    Position { x: 0, y: H - 1 },
    Position { x: W - 1, y: 0 },
];

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// 1手の記録
/// 置いた位置、ひっくり返した石、自動プレイヤーの手かどうかを保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub side: Side,
    pub position: Position,
    pub flipped: Vec<Position>,
    pub automated: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Move {
    /// 新しい手を作成する
    /// タイムスタンプは現在時刻で自動設定される
    pub fn new(side: Side, position: Position, flipped: Vec<Position>, automated: bool) -> Self {
        Self {
            side,
            position,
            flipped,
            automated,
            timestamp: chrono::Utc::now(),
        }
    }
}
