//! 表示・入力アダプタモジュール
//! エンジンが呼び出す描画コールバックと、テキスト入力の解釈を提供する。

pub mod console;
pub mod input;

pub use console::*;
pub use input::*;

use crate::game::Board;

/// 描画コールバック
/// エンジンは着手・拒否のたびに盤面とステータスメッセージを渡す
pub trait Renderer {
    fn render(&mut self, board: &Board, message: &str);
}

impl<F> Renderer for F
where
    F: FnMut(&Board, &str),
{
    fn render(&mut self, board: &Board, message: &str) {
        self(board, message)
    }
}
