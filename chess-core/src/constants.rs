//! 规则常量定义

use crate::piece::PieceType;

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 12;

/// 格子总数
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 每方底线行数
pub const BACK_ROWS_PER_SIDE: usize = 2;

/// 每方兵行数
pub const PAWN_ROWS_PER_SIDE: usize = 2;

/// 每方底线棋子配置（类型, 数量），合计正好填满两行底线
pub const BACK_PIECE_COUNTS: [(PieceType, usize); 5] = [
    (PieceType::King, 1),
    (PieceType::Queen, 2),
    (PieceType::Rook, 7),
    (PieceType::Bishop, 7),
    (PieceType::Knight, 7),
];

/// 每方底线棋子总数
pub const BACK_PIECES_PER_SIDE: usize = BACK_ROWS_PER_SIDE * BOARD_SIZE;

/// 每方兵总数
pub const PAWNS_PER_SIDE: usize = PAWN_ROWS_PER_SIDE * BOARD_SIZE;

/// 首个棋谱回合号
pub const FIRST_MOVE_NUMBER: u32 = 1;
