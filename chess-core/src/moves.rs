//! 走法生成
//!
//! 只生成目标格，不检查走子后己方王是否被攻击（本变体没有将军概念）。

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::piece::{Piece, PieceType, Position, Side};

/// 斜线方向
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 直线方向
const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 马的 8 个跳法
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// 王的 8 个相邻格
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// 目标格类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// 走到空格
    Move,
    /// 吃掉对方棋子
    Capture,
}

/// 合法目标格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveTarget {
    pub to: Position,
    pub kind: MoveKind,
}

impl MoveTarget {
    /// 走到空格
    pub fn quiet(to: Position) -> Self {
        Self {
            to,
            kind: MoveKind::Move,
        }
    }

    /// 吃子
    pub fn capture(to: Position) -> Self {
        Self {
            to,
            kind: MoveKind::Capture,
        }
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定格子上棋子的所有目标格
    ///
    /// 空格或越界位置返回空列表。
    pub fn legal_targets(board: &Board, pos: Position) -> Vec<MoveTarget> {
        let Some(piece) = board.get(pos) else {
            return Vec::new();
        };

        let mut targets = Vec::with_capacity(32);
        Self::generate_piece_targets(board, pos, piece, &mut targets);

        trace!(
            "{} 在 {} 共有 {} 个目标格",
            piece.description(),
            pos,
            targets.len()
        );
        targets
    }

    fn generate_piece_targets(
        board: &Board,
        pos: Position,
        piece: Piece,
        targets: &mut Vec<MoveTarget>,
    ) {
        let side = piece.side;
        match piece.piece_type {
            PieceType::Pawn => Self::generate_pawn_targets(board, pos, piece, targets),
            PieceType::Knight => {
                Self::generate_step_targets(board, pos, side, &KNIGHT_OFFSETS, targets)
            }
            PieceType::Bishop => {
                Self::generate_sliding_targets(board, pos, side, &DIAGONAL_DIRECTIONS, targets)
            }
            PieceType::Rook => {
                Self::generate_sliding_targets(board, pos, side, &ORTHOGONAL_DIRECTIONS, targets)
            }
            PieceType::Queen => {
                Self::generate_sliding_targets(board, pos, side, &DIAGONAL_DIRECTIONS, targets);
                Self::generate_sliding_targets(board, pos, side, &ORTHOGONAL_DIRECTIONS, targets);
            }
            PieceType::King => {
                Self::generate_step_targets(board, pos, side, &KING_OFFSETS, targets)
            }
        }
    }

    /// 生成兵的目标格
    fn generate_pawn_targets(
        board: &Board,
        pos: Position,
        piece: Piece,
        targets: &mut Vec<MoveTarget>,
    ) {
        let forward = piece.side.forward();

        // 前进一步，未走过且在起始行时可再走一步
        if let Some(one_step) = pos.offset(forward, 0) {
            if board.get(one_step).is_none() {
                targets.push(MoveTarget::quiet(one_step));

                let on_start_row = pos.row == piece.side.pawn_start_row();
                if on_start_row && !piece.has_moved {
                    if let Some(two_step) = pos.offset(forward * 2, 0) {
                        if board.get(two_step).is_none() {
                            targets.push(MoveTarget::quiet(two_step));
                        }
                    }
                }
            }
        }

        // 斜前方只能吃子
        for d_col in [-1i8, 1i8] {
            if let Some(to) = pos.offset(forward, d_col) {
                if let Some(occupant) = board.get(to) {
                    if occupant.side != piece.side {
                        targets.push(MoveTarget::capture(to));
                    }
                }
            }
        }
    }

    /// 生成单步棋子（马、王）的目标格
    fn generate_step_targets(
        board: &Board,
        pos: Position,
        side: Side,
        offsets: &[(i8, i8)],
        targets: &mut Vec<MoveTarget>,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = pos.offset(d_row, d_col) {
                Self::try_add_target(board, to, side, targets);
            }
        }
    }

    /// 生成滑行棋子（象、车、后）的目标格
    fn generate_sliding_targets(
        board: &Board,
        pos: Position,
        side: Side,
        directions: &[(i8, i8)],
        targets: &mut Vec<MoveTarget>,
    ) {
        for &(d_row, d_col) in directions {
            let mut current = pos;
            while let Some(to) = current.offset(d_row, d_col) {
                if let Some(occupant) = board.get(to) {
                    // 遇到棋子，对方的可以吃，然后停止
                    if occupant.side != side {
                        targets.push(MoveTarget::capture(to));
                    }
                    break;
                }
                targets.push(MoveTarget::quiet(to));
                current = to;
            }
        }
    }

    /// 尝试添加目标格（空格可走，对方棋子可吃，己方棋子跳过）
    fn try_add_target(board: &Board, to: Position, side: Side, targets: &mut Vec<MoveTarget>) {
        match board.get(to) {
            None => targets.push(MoveTarget::quiet(to)),
            Some(occupant) if occupant.side != side => targets.push(MoveTarget::capture(to)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: u8, col: u8, piece_type: PieceType, side: Side) {
        board.set(Position::new_unchecked(row, col), Some(Piece::new(piece_type, side)));
    }

    fn targets_at(board: &Board, row: u8, col: u8) -> Vec<MoveTarget> {
        MoveGenerator::legal_targets(board, Position::new_unchecked(row, col))
    }

    #[test]
    fn test_empty_square_no_targets() {
        let board = Board::empty();
        assert!(targets_at(&board, 5, 5).is_empty());
        assert!(targets_at(&board, 12, 3).is_empty());
    }

    #[test]
    fn test_white_pawn_double_step() {
        let mut board = Board::empty();
        place(&mut board, 9, 0, PieceType::Pawn, Side::White);

        let targets = targets_at(&board, 9, 0);
        assert_eq!(
            targets,
            vec![
                MoveTarget::quiet(Position::new_unchecked(8, 0)),
                MoveTarget::quiet(Position::new_unchecked(7, 0)),
            ]
        );
    }

    #[test]
    fn test_pawn_off_start_row_single_step() {
        let mut board = Board::empty();
        place(&mut board, 8, 0, PieceType::Pawn, Side::White);

        let targets = targets_at(&board, 8, 0);
        assert_eq!(targets, vec![MoveTarget::quiet(Position::new_unchecked(7, 0))]);
    }

    #[test]
    fn test_moved_pawn_single_step() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceType::Pawn, Side::White);
        pawn.has_moved = true;
        board.set(Position::new_unchecked(9, 0), Some(pawn));

        let targets = targets_at(&board, 9, 0);
        assert_eq!(targets, vec![MoveTarget::quiet(Position::new_unchecked(8, 0))]);
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let mut board = Board::empty();
        place(&mut board, 2, 5, PieceType::Pawn, Side::Black);

        let targets = targets_at(&board, 2, 5);
        assert_eq!(
            targets,
            vec![
                MoveTarget::quiet(Position::new_unchecked(3, 5)),
                MoveTarget::quiet(Position::new_unchecked(4, 5)),
            ]
        );
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        let mut board = Board::empty();
        place(&mut board, 9, 3, PieceType::Pawn, Side::White);
        place(&mut board, 7, 3, PieceType::Knight, Side::Black);

        // 第二格被挡住，只能走一步
        assert_eq!(
            targets_at(&board, 9, 3),
            vec![MoveTarget::quiet(Position::new_unchecked(8, 3))]
        );

        // 第一格被挡住，一步也不能走
        place(&mut board, 8, 3, PieceType::Knight, Side::Black);
        assert!(targets_at(&board, 9, 3).is_empty());
    }

    #[test]
    fn test_pawn_diagonal_capture_only() {
        let mut board = Board::empty();
        place(&mut board, 6, 6, PieceType::Pawn, Side::White);
        place(&mut board, 5, 6, PieceType::Rook, Side::Black);
        place(&mut board, 5, 5, PieceType::Bishop, Side::Black);
        place(&mut board, 5, 7, PieceType::Bishop, Side::White);

        let targets = targets_at(&board, 6, 6);
        // 正前方被挡，不能吃正前方；左斜可吃，右斜是己方
        assert_eq!(targets, vec![MoveTarget::capture(Position::new_unchecked(5, 5))]);
    }

    #[test]
    fn test_pawn_on_last_row_no_forward() {
        let mut board = Board::empty();
        place(&mut board, 11, 4, PieceType::Pawn, Side::Black);
        assert!(targets_at(&board, 11, 4).is_empty());
    }

    #[test]
    fn test_knight_center_and_corner() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Knight, Side::White);
        assert_eq!(targets_at(&board, 5, 5).len(), 8);

        place(&mut board, 0, 0, PieceType::Knight, Side::Black);
        let corner = targets_at(&board, 0, 0);
        assert_eq!(corner.len(), 2);
        assert!(corner.iter().all(|t| t.kind == MoveKind::Move));
    }

    #[test]
    fn test_knight_own_and_opponent_targets() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Knight, Side::White);
        place(&mut board, 7, 6, PieceType::Pawn, Side::White);
        place(&mut board, 3, 4, PieceType::Pawn, Side::Black);

        let targets = targets_at(&board, 5, 5);
        assert_eq!(targets.len(), 7);
        assert!(!targets.iter().any(|t| t.to == Position::new_unchecked(7, 6)));
        assert!(targets.contains(&MoveTarget::capture(Position::new_unchecked(3, 4))));
    }

    #[test]
    fn test_rook_empty_board() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Rook, Side::White);

        let targets = targets_at(&board, 5, 5);
        // 上 5 + 下 6 + 左 5 + 右 6
        assert_eq!(targets.len(), 22);
        assert!(targets.iter().all(|t| t.kind == MoveKind::Move));
    }

    #[test]
    fn test_rook_ray_truncated_by_capture() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Rook, Side::White);
        place(&mut board, 5, 8, PieceType::Pawn, Side::Black);

        let targets = targets_at(&board, 5, 5);
        let rightward: Vec<MoveTarget> = targets
            .iter()
            .copied()
            .filter(|t| t.to.row == 5 && t.to.col > 5)
            .collect();
        assert_eq!(
            rightward,
            vec![
                MoveTarget::quiet(Position::new_unchecked(5, 6)),
                MoveTarget::quiet(Position::new_unchecked(5, 7)),
                MoveTarget::capture(Position::new_unchecked(5, 8)),
            ]
        );
        assert_eq!(targets.len(), 19);
    }

    #[test]
    fn test_rook_blocked_by_own_piece() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Rook, Side::White);
        place(&mut board, 5, 6, PieceType::Pawn, Side::White);

        let targets = targets_at(&board, 5, 5);
        assert!(!targets.iter().any(|t| t.to.row == 5 && t.to.col > 5));
    }

    #[test]
    fn test_bishop_empty_board() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Bishop, Side::Black);

        // 右下 6 + 左下 5 + 右上 5 + 左上 5
        assert_eq!(targets_at(&board, 5, 5).len(), 21);
    }

    #[test]
    fn test_queen_is_bishop_plus_rook() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::Queen, Side::White);
        place(&mut board, 3, 3, PieceType::Knight, Side::Black);
        place(&mut board, 5, 9, PieceType::Knight, Side::White);

        let queen = targets_at(&board, 5, 5);

        place(&mut board, 5, 5, PieceType::Rook, Side::White);
        let rook = targets_at(&board, 5, 5);
        place(&mut board, 5, 5, PieceType::Bishop, Side::White);
        let bishop = targets_at(&board, 5, 5);

        assert_eq!(queen.len(), rook.len() + bishop.len());
        let mut combined = bishop;
        combined.extend(rook);
        assert_eq!(queen, combined);
    }

    #[test]
    fn test_king_moves() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::King, Side::White);
        assert_eq!(targets_at(&board, 5, 5).len(), 8);

        place(&mut board, 11, 0, PieceType::King, Side::Black);
        assert_eq!(targets_at(&board, 11, 0).len(), 3);
    }

    #[test]
    fn test_king_ignores_attacked_squares() {
        let mut board = Board::empty();
        place(&mut board, 5, 5, PieceType::King, Side::White);
        // 对方车控制第 4 行，王仍然可以走进去
        place(&mut board, 4, 0, PieceType::Rook, Side::Black);

        let targets = targets_at(&board, 5, 5);
        assert!(targets.contains(&MoveTarget::quiet(Position::new_unchecked(4, 5))));
        assert_eq!(targets.len(), 8);
    }
}
