//! 棋盘状态

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, FIRST_MOVE_NUMBER, SQUARE_COUNT};
use crate::piece::{Piece, PieceType, Position, Side};
use crate::setup::SetupGenerator;

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 12x12 棋盘，索引为 row * 12 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; SQUARE_COUNT],
        }
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 取走指定位置的棋子
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()].take()
        } else {
            None
        }
    }

    /// 移动棋子（不检查规则），返回被覆盖的棋子
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.take(from);
        let captured = self.get(to);
        self.set(to, piece);
        captured
    }

    /// 清空整个棋盘
    pub fn clear(&mut self) {
        self.squares.iter_mut().for_each(|square| *square = None);
    }

    /// 指定行的所有格子，越界返回 None
    pub fn row(&self, row: u8) -> Option<&[Option<Piece>]> {
        let start = row as usize * BOARD_SIZE;
        self.squares.get(start..start + BOARD_SIZE)
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, side: Side) -> Vec<(Position, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, square)| {
                let piece = (*square)?;
                Position::from_index(index).map(|pos| (pos, piece))
            })
            .collect()
    }

    /// 统计指定阵营某类棋子的数量
    pub fn count(&self, side: Side, piece_type: PieceType) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.side == side && piece.piece_type == piece_type)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 完整的棋盘状态（包含走子方、回合数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
    /// 完整回合数（一回合 = 白黑各走一步，黑方走完后 +1）
    pub round: u32,
}

impl BoardState {
    /// 创建随机开局状态
    pub fn initial<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_board(SetupGenerator::generate(rng), Side::White)
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self {
            board,
            current_turn,
            round: FIRST_MOVE_NUMBER,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
        if self.current_turn == Side::White {
            self.round += 1;
        }
    }
}
