//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessError {
    /// 无效的位置
    #[error("Invalid position: ({row}, {col})")]
    InvalidPosition { row: u8, col: u8 },

    /// 没有棋子
    #[error("No piece at {square}")]
    NoPiece { square: String },

    /// 无效的坐标记法
    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),

    /// 无效的局面字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
