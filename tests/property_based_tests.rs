//! プロパティベーステストモジュール
//! ランダムな着手シーケンスで盤面・手番・描画の不変条件を検証する。

use proptest::prelude::*;

use reversy::game::{Board, Cell, MoveOutcome, Position, ReversiRules, ReversyLogic, Side};

/// 有効な座標を生成する戦略
fn valid_position_strategy() -> impl Strategy<Value = Position> {
    (0usize..8, 0usize..8).prop_map(|(x, y)| Position::new(x, y).unwrap())
}

/// ランダム着手シーケンスを生成する戦略
fn move_sequence_strategy() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(valid_position_strategy(), 1..120)
}

/// 自動プレイヤーのサイドを生成する戦略
fn automated_side_strategy() -> impl Strategy<Value = Option<Side>> {
    prop_oneof![Just(None), Just(Some(Side::Zero)), Just(Some(Side::One))]
}

/// 着手前の盤面で、フリップされた石が着手位置と自分の石の間に
/// 途切れなく挟まれているかを確認する
fn is_sandwiched(before: &Board, placed: Position, flipped: Position, side: Side) -> bool {
    let dx = (flipped.x as i8 - placed.x as i8).signum();
    let dy = (flipped.y as i8 - placed.y as i8).signum();
    let aligned = flipped.x == placed.x
        || flipped.y == placed.y
        || (flipped.x as i64 - placed.x as i64).abs() == (flipped.y as i64 - placed.y as i64).abs();
    if !aligned {
        return false;
    }

    let mut current = placed.offset(dx, dy);
    let mut passed = false;
    while let Some(pos) = current {
        match before.get_cell(pos) {
            Some(cell) if cell == side.opponent().to_cell() => {
                if pos == flipped {
                    passed = true;
                }
            }
            Some(cell) if cell == side.to_cell() => return passed,
            _ => return false,
        }
        current = pos.offset(dx, dy);
    }
    false
}

proptest! {
    /// プロパティ: 非合法手は盤面も手番も変えず、直前と同じ描画を繰り返す
    #[test]
    fn test_rejection_is_idempotent(moves in move_sequence_strategy()) {
        let mut frames: Vec<(Board, String)> = Vec::new();
        let mut logic = ReversyLogic::with_automated_side(None, |board: &Board, message: &str| {
            frames.push((board.clone(), message.to_string()));
        }).unwrap();

        let mut rejected = Vec::new();
        for position in moves {
            let board_before = logic.board().clone();
            let active_before = logic.active();
            let message_before = logic.status_message();

            if logic.apply_move(position).unwrap() == MoveOutcome::Rejected {
                prop_assert_eq!(logic.board(), &board_before);
                prop_assert_eq!(logic.active(), active_before);
                rejected.push((board_before, message_before));
            }
        }
        drop(logic);

        // 拒否時の描画は変更前の盤面とメッセージそのもの
        for (board, message) in &rejected {
            prop_assert!(frames.iter().any(|(b, m)| b == board && m == message));
        }
    }

    /// プロパティ: 合法手は挟んだ相手の石だけを返し、手番は規則どおり進む
    #[test]
    fn test_applied_moves_follow_the_rules(
        moves in move_sequence_strategy(),
        automated in automated_side_strategy()
    ) {
        let mut logic = ReversyLogic::with_automated_side(automated, |_: &Board, _: &str| {}).unwrap();

        for position in moves {
            if !logic.is_running() {
                break;
            }
            let before = logic.board().clone();
            let side = logic.active().unwrap();
            let history_before = logic.state().get_move_count();

            match logic.apply_move(position).unwrap() {
                MoveOutcome::Rejected => {
                    prop_assert!(!ReversiRules::is_valid_move(&before, position, side));
                }
                MoveOutcome::Applied { flipped, automated_replies } => {
                    let record = &logic.state().move_history[history_before];
                    prop_assert_eq!(record.side, side);
                    prop_assert_eq!(record.flipped.len(), flipped);
                    prop_assert!(flipped > 0);
                    prop_assert_eq!(logic.state().get_move_count(), history_before + 1 + automated_replies);

                    for &f in &record.flipped {
                        prop_assert!(is_sandwiched(&before, position, f, side));
                    }

                    // 自動応手がなければ石数の変化を直接確認できる
                    if automated_replies == 0 {
                        let (zero_before, one_before) = before.count_discs();
                        let (zero, one) = logic.board().count_discs();
                        let (gain, loss) = match side {
                            Side::Zero => (zero - zero_before, one_before - one),
                            Side::One => (one - one_before, zero_before - zero),
                        };
                        prop_assert_eq!(gain, flipped + 1);
                        prop_assert_eq!(loss, flipped);

                        let mut after_move = before.clone();
                        after_move.set_cell(position, side.to_cell());
                        for &f in &record.flipped {
                            after_move.set_cell(f, side.to_cell());
                        }
                        prop_assert_eq!(logic.board(), &after_move);
                        prop_assert_eq!(logic.active(), ReversiRules::next_active(&after_move, side));
                    }
                }
            }

            // 手番は常に着手可能なサイドかNone
            if let Some(active) = logic.active() {
                prop_assert!(ReversiRules::has_valid_moves(logic.board(), active));
            }
            // 進行中なら手番は自動プレイヤー側ではない
            if logic.is_running() && automated.is_some() {
                prop_assert_ne!(logic.active(), automated);
            }
        }
    }

    /// プロパティ: 盤面の各マスは常に3状態のいずれかで、石数の合計は64以下
    #[test]
    fn test_board_cell_totals(moves in move_sequence_strategy()) {
        let mut logic = ReversyLogic::with_automated_side(None, |_: &Board, _: &str| {}).unwrap();
        for position in moves {
            logic.apply_move(position).unwrap();
        }

        let board = logic.board();
        let (zero, one) = board.count_discs();
        let empty = board.rows().iter().flatten().filter(|&&c| c == Cell::Empty).count();
        prop_assert_eq!(zero + one + empty, 64);
        prop_assert_eq!(zero + one, 4 + logic.state().get_move_count());
    }
}

#[test]
fn test_sandwich_helper() {
    assert!(is_sandwiched(
        &Board::new(),
        Position::new(2, 3).unwrap(),
        Position::new(3, 3).unwrap(),
        Side::Zero
    ));
    assert!(!is_sandwiched(
        &Board::new(),
        Position::new(2, 3).unwrap(),
        Position::new(4, 4).unwrap(),
        Side::Zero
    ));
}
