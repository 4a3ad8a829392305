//! 12x12 随机底线国际象棋变体规则库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 随机开局生成
//! - 走法生成（不检查王的安全）
//! - 对局控制（选中、走子、升变、棋谱）
//! - 展示层快照
//! - 局面字符串格式

mod board;
mod constants;
mod error;
mod fen;
mod game;
mod moves;
mod notation;
mod piece;
mod setup;
mod snapshot;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{ChessError, Result};
pub use fen::Fen;
pub use game::{Game, MoveRecord, SelectOutcome};
pub use moves::{MoveGenerator, MoveKind, MoveTarget};
pub use notation::{MoveLog, Notation};
pub use piece::{Piece, PieceType, Position, Side};
pub use setup::SetupGenerator;
pub use snapshot::{GameSnapshot, Orientation, PieceView};
