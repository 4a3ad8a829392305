//! 随机开局布置
//!
//! 每方底线的 24 个棋子（1 王、2 后、7 车、7 象、7 马）随机洗牌后，
//! 按洗牌顺序从左到右填满两行底线；底线前方两行全部是兵。

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::constants::{
    BACK_PIECES_PER_SIDE, BACK_PIECE_COUNTS, BACK_ROWS_PER_SIDE, BOARD_SIZE, PAWN_ROWS_PER_SIDE,
};
use crate::piece::{Piece, PieceType, Position, Side};

/// 开局生成器
pub struct SetupGenerator;

impl SetupGenerator {
    /// 生成一个全新的随机开局棋盘
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut board = Board::empty();
        Self::populate(&mut board, rng);
        board
    }

    /// 用随机开局完全覆盖已有棋盘
    pub fn populate<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
        board.clear();

        // 黑方先洗牌，白方再独立洗牌
        for side in [Side::Black, Side::White] {
            Self::populate_back_rows(board, side, rng);
            Self::populate_pawn_rows(board, side);
        }

        debug!("随机开局已生成");
    }

    /// 底线棋子池（未洗牌）
    pub fn back_piece_pool() -> Vec<PieceType> {
        let mut pool = Vec::with_capacity(BACK_PIECES_PER_SIDE);
        for (piece_type, count) in BACK_PIECE_COUNTS {
            pool.extend(std::iter::repeat(piece_type).take(count));
        }
        pool
    }

    /// 底线所在行，按填充顺序排列（从棋盘边缘向内）
    pub fn back_rows(side: Side) -> [u8; BACK_ROWS_PER_SIDE] {
        std::array::from_fn(|idx| match side {
            Side::Black => idx as u8,
            Side::White => (BOARD_SIZE - 1 - idx) as u8,
        })
    }

    /// 兵所在行，按填充顺序排列（从底线向内）
    pub fn pawn_rows(side: Side) -> [u8; PAWN_ROWS_PER_SIDE] {
        std::array::from_fn(|idx| match side {
            Side::Black => (BACK_ROWS_PER_SIDE + idx) as u8,
            Side::White => (BOARD_SIZE - BACK_ROWS_PER_SIDE - 1 - idx) as u8,
        })
    }

    fn populate_back_rows<R: Rng + ?Sized>(board: &mut Board, side: Side, rng: &mut R) {
        let mut pool = Self::back_piece_pool();
        pool.shuffle(rng);

        let squares = Self::back_rows(side)
            .into_iter()
            .flat_map(|row| {
                (0..BOARD_SIZE as u8).map(move |col| Position::new_unchecked(row, col))
            });

        for (pos, piece_type) in squares.zip(pool) {
            board.set(pos, Some(Piece::new(piece_type, side)));
        }
    }

    fn populate_pawn_rows(board: &mut Board, side: Side) {
        for row in Self::pawn_rows(side) {
            for col in 0..BOARD_SIZE as u8 {
                board.set(
                    Position::new_unchecked(row, col),
                    Some(Piece::new(PieceType::Pawn, side)),
                );
            }
        }
    }
}
