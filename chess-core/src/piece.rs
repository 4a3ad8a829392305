//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BACK_ROWS_PER_SIDE, BOARD_SIZE};
use crate::error::ChessError;

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// 棋谱中的棋子字母（兵为空）
    pub fn notation_letter(&self) -> &'static str {
        match self {
            PieceType::King => "K",
            PieceType::Queen => "Q",
            PieceType::Rook => "R",
            PieceType::Bishop => "B",
            PieceType::Knight => "N",
            PieceType::Pawn => "",
        }
    }

    /// 小写英文名称
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }

    /// 获取局面字符（白方大写，黑方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// 从局面字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// 白方（先手，占据下方 8-11 行）
    White,
    /// 黑方（后手，占据上方 0-3 行）
    Black,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// 兵前进方向（行增量）
    pub fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// 兵的起始行（紧贴己方底线的兵行），只有这一行的兵可以走两步
    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Side::White => (BOARD_SIZE - BACK_ROWS_PER_SIDE - 1) as u8,
            Side::Black => BACK_ROWS_PER_SIDE as u8,
        }
    }

    /// 升变行（离己方最远的一行）
    pub fn promotion_row(&self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => (BOARD_SIZE - 1) as u8,
        }
    }

    /// 小写英文名称
    pub fn name(&self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    /// 走子提示文本
    pub fn turn_label(&self) -> &'static str {
        match self {
            Side::White => "White to move",
            Side::Black => "Black to move",
        }
    }

    /// 获取局面字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    /// 从局面字符解析
    pub fn from_fen_char(c: char) -> Option<Side> {
        match c {
            'w' | 'W' => Some(Side::White),
            'b' | 'B' => Some(Side::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
    /// 是否已经走过
    pub has_moved: bool,
}

impl Piece {
    /// 创建新棋子（未走过）
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self {
            piece_type,
            side,
            has_moved: false,
        }
    }

    /// 获取棋子显示字符
    pub fn display_char(&self) -> char {
        match (self.piece_type, self.side) {
            (PieceType::King, Side::White) => '♔',
            (PieceType::Queen, Side::White) => '♕',
            (PieceType::Rook, Side::White) => '♖',
            (PieceType::Bishop, Side::White) => '♗',
            (PieceType::Knight, Side::White) => '♘',
            (PieceType::Pawn, Side::White) => '♙',
            (PieceType::King, Side::Black) => '♚',
            (PieceType::Queen, Side::Black) => '♛',
            (PieceType::Rook, Side::Black) => '♜',
            (PieceType::Bishop, Side::Black) => '♝',
            (PieceType::Knight, Side::Black) => '♞',
            (PieceType::Pawn, Side::Black) => '♟',
        }
    }

    /// 文字描述，例如 "white king"
    pub fn description(&self) -> String {
        format!("{} {}", self.side.name(), self.piece_type.name())
    }

    /// 获取局面字符
    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    /// 从局面字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece::new(piece_type, side))
    }
}

/// 棋盘位置，行 0 为存储中的最上一行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-11)
    pub row: u8,
    /// 列 (0-11)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 浅色格（行列和为偶数）
    pub fn is_light_square(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 列字母（a-l）
    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    /// 横线编号（1-12，行 0 为 12）
    pub fn rank(&self) -> usize {
        BOARD_SIZE - self.row as usize
    }

    /// 解析坐标记法，例如 "a1"、"l12"
    pub fn from_notation(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let col = file as u8 - b'a';
        let rank: usize = chars.as_str().parse().ok()?;
        if rank == 0 || rank > BOARD_SIZE {
            return None;
        }
        Position::new((BOARD_SIZE - rank) as u8, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl std::str::FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}
