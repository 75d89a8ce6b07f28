//! テキストコンソール用の描画アダプタ

use std::io::{self, Write};

use tracing::warn;

use super::Renderer;
use crate::game::{Board, Cell, W};

/// 入力形式の案内（ステータスメッセージの後ろに付ける）
pub const INPUT_HINT: &str = "Two digits like this: '1 2'";

/// 盤面をテキストで書き出す描画アダプタ
/// 空マスは`-`、石はサイド番号で表示する
#[derive(Debug)]
pub struct ConsoleRenderer<O: Write> {
    out: O,
}

impl ConsoleRenderer<io::Stdout> {
    /// 標準出力に書き出すアダプタを作成する
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<O: Write> ConsoleRenderer<O> {
    pub fn new(out: O) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }

    /// 盤面とメッセージを表示用の文字列に変換する
    pub fn format_board(board: &Board, message: &str) -> String {
        let mut result = String::from("    ");
        for x in 0..W {
            result.push_str(&format!("{} ", x));
        }
        result.push('\n');

        for (y, row) in board.rows().iter().enumerate() {
            result.push_str(&format!("{} | ", y));
            for &cell in row {
                let symbol = match cell {
                    Cell::Empty => "-",
                    Cell::Side0 => "0",
                    Cell::Side1 => "1",
                };
                result.push_str(symbol);
                result.push(' ');
            }
            result.push('\n');
        }

        result.push_str(&format!("{}. {}\n", message, INPUT_HINT));
        result
    }
}

impl<O: Write> Renderer for ConsoleRenderer<O> {
    fn render(&mut self, board: &Board, message: &str) {
        let text = Self::format_board(board, message);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write board");
        }
    }
}
