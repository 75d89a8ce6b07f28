//! 自動プレイヤーの戦略モジュール
//! 手番側の合法手から1手を選ぶ戦略を定義する。

use crate::error::AIError;
use crate::game::{GameState, Position, ReversiRules, H, W};

/// AI戦略の共通インターフェース
pub trait AIStrategy {
    /// ゲーム状態から手番側の手を選ぶ
    fn calculate_move(&self, game_state: &GameState) -> Result<Position, AIError>;
    /// AIの名前を返す
    fn get_name(&self) -> &'static str;
}

/// 角を優先し、それ以外はフリップ数の多い手を選ぶ単純なAI
///
/// xを外側、yを内側のループで走査し、最初の合法手を暫定の最善手とする。
/// 以降の候補は次のいずれかで最善手を置き換える:
/// - 最善手が角でなく、候補が角である
/// - 候補のフリップ数が最善手より真に多い（角かどうかは問わない）
///
/// そのため後から見つかったフリップ数の多い辺の手が角を上書きすることもある。
#[derive(Debug, Clone, Default)]
pub struct CornerGreedyAI;

impl CornerGreedyAI {
    pub fn new() -> Self {
        CornerGreedyAI
    }
}

impl AIStrategy for CornerGreedyAI {
    fn calculate_move(&self, game_state: &GameState) -> Result<Position, AIError> {
        let side = match game_state.active {
            Some(side) if game_state.running => side,
            _ => {
                return Err(AIError::StrategyError {
                    message: "Cannot calculate move for finished game".to_string(),
                })
            }
        };

        let mut best: Option<(Position, usize)> = None;

        for x in 0..W {
            for y in 0..H {
                let candidate = Position { x, y };
                let flips = match ReversiRules::legal_flips(&game_state.board, candidate, side) {
                    Some(flips) => flips.len(),
                    None => continue,
                };

                let replace = match best {
                    None => true,
                    Some((best_pos, best_flips)) => {
                        (!best_pos.is_corner() && candidate.is_corner()) || flips > best_flips
                    }
                };
                if replace {
                    best = Some((candidate, flips));
                }
            }
        }

        best.map(|(position, _)| position).ok_or(AIError::NoValidMoves)
    }

    fn get_name(&self) -> &'static str {
        "CornerGreedyAI"
    }
}
