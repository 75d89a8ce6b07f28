//! テキスト入力アダプタ
//! "x y"形式の1行を座標に変換する。範囲チェックはエンジン側で行う。

use crate::error::{GameError, Result};

/// 空白区切りの2つの非負整数を(x, y)として読み取る
pub fn parse_move_input(line: &str) -> Result<(usize, usize)> {
    let malformed = || GameError::MalformedInput {
        input: line.trim().to_string(),
    };

    let mut parts = line.split_whitespace();
    let x = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let y = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok((x, y))
}
