//! 盤面の状態を管理するモジュール
//! 8x8グリッドの石の配置と基本操作を担当する。

use super::types::{Cell, Position, Side, H, W};
use serde::{Deserialize, Serialize};

/// 8x8盤面を表現する構造体
/// cells[y][x]の順で各マスのCell状態を保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; W]; H],
}

impl Board {
    /// 対局開始時の盤面を作成する
    /// 中央の4マスに各サイド2個ずつ斜めに配置する
    pub fn new() -> Self {
        let mut board = Board::empty();

        board.cells[3][3] = Cell::Side1;
        board.cells[4][4] = Cell::Side1;
        board.cells[3][4] = Cell::Side0;
        board.cells[4][3] = Cell::Side0;

        board
    }

    /// 石が一つもない盤面を作成する
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; W]; H],
        }
    }

    /// 指定した位置のセル状態を取得する
    /// 範囲外の場合はNoneを返す
    pub fn get_cell(&self, position: Position) -> Option<Cell> {
        if position.is_valid() {
            Some(self.cells[position.y][position.x])
        } else {
            None
        }
    }

    /// 指定した位置にセル状態を設定する
    /// 範囲外の場合はfalseを返す
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> bool {
        if position.is_valid() {
            self.cells[position.y][position.x] = cell;
            true
        } else {
            false
        }
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get_cell(position), Some(Cell::Empty))
    }

    /// 行ごとのセル配列
    pub fn rows(&self) -> &[[Cell; W]; H] {
        &self.cells
    }

    /// 各サイドの石数を数える
    /// 戻り値: (サイド0の石数, サイド1の石数)
    pub fn count_discs(&self) -> (usize, usize) {
        let mut zero = 0;
        let mut one = 0;

        for row in &self.cells {
            for &cell in row {
                match cell {
                    Cell::Side0 => zero += 1,
                    Cell::Side1 => one += 1,
                    Cell::Empty => {}
                }
            }
        }

        (zero, one)
    }

    /// 指定サイドの石数
    pub fn count_side(&self, side: Side) -> usize {
        let (zero, one) = self.count_discs();
        match side {
            Side::Zero => zero,
            Side::One => one,
        }
    }

    /// 空きマスが残っていないか
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// 指定位置を囲む盤面内のマス（自分自身を除く）
    pub fn neighbours(&self, position: Position) -> Vec<Position> {
        let mut result = Vec::with_capacity(8);
        for dx in -1i8..=1 {
            for dy in -1i8..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(pos) = position.offset(dx, dy) {
                    result.push(pos);
                }
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
