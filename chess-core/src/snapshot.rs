//! 界面快照
//!
//! 展示层每次操作后重新拉取快照，快照只描述状态，不含任何渲染技术细节。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::moves::{MoveKind, MoveTarget};
use crate::piece::{Piece, PieceType, Position, Side};

/// 棋盘显示方向，只影响渲染顺序，不影响坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// 默认方向：行从 11 到 0，列从 0 到 11
    #[default]
    Normal,
    /// 翻转：行从 0 到 11，列从 11 到 0
    Flipped,
}

impl Orientation {
    /// 切换方向
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Flipped,
            Orientation::Flipped => Orientation::Normal,
        }
    }

    pub fn is_flipped(&self) -> bool {
        *self == Orientation::Flipped
    }

    /// 行的显示顺序
    pub fn row_order(&self) -> Vec<u8> {
        let rows = 0..BOARD_SIZE as u8;
        match self {
            Orientation::Normal => rows.rev().collect(),
            Orientation::Flipped => rows.collect(),
        }
    }

    /// 列的显示顺序
    pub fn col_order(&self) -> Vec<u8> {
        let cols = 0..BOARD_SIZE as u8;
        match self {
            Orientation::Normal => cols.collect(),
            Orientation::Flipped => cols.rev().collect(),
        }
    }
}

/// 展示用棋子描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    #[serde(rename = "color")]
    pub side: Side,
}

impl From<Piece> for PieceView {
    fn from(piece: Piece) -> Self {
        Self {
            piece_type: piece.piece_type,
            side: piece.side,
        }
    }
}

/// 游戏快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 12x12，board[row][col]
    pub board: Vec<Vec<Option<PieceView>>>,
    pub selected: Option<Position>,
    pub legal_targets: Vec<MoveTarget>,
    pub turn: Side,
    pub move_count: u32,
    pub move_log: Vec<String>,
    pub flipped: bool,
}

impl GameSnapshot {
    pub(crate) fn capture(
        board: &Board,
        selected: Option<Position>,
        legal_targets: &[MoveTarget],
        turn: Side,
        move_count: u32,
        move_log: &[String],
        orientation: Orientation,
    ) -> Self {
        let board = (0..BOARD_SIZE as u8)
            .map(|row| {
                board
                    .row(row)
                    .unwrap_or_default()
                    .iter()
                    .map(|square| square.map(PieceView::from))
                    .collect()
            })
            .collect();

        Self {
            board,
            selected,
            legal_targets: legal_targets.to_vec(),
            turn,
            move_count,
            move_log: move_log.to_vec(),
            flipped: orientation.is_flipped(),
        }
    }

    /// 获取指定位置的棋子
    pub fn piece_at(&self, pos: Position) -> Option<PieceView> {
        self.board
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    /// 指定位置是否是合法目标格
    pub fn target_at(&self, pos: Position) -> Option<MoveKind> {
        self.legal_targets
            .iter()
            .find(|target| target.to == pos)
            .map(|target| target.kind)
    }

    /// 显示方向
    pub fn orientation(&self) -> Orientation {
        if self.flipped {
            Orientation::Flipped
        } else {
            Orientation::Normal
        }
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_order() {
        let normal = Orientation::Normal;
        assert_eq!(normal.row_order().first(), Some(&11));
        assert_eq!(normal.col_order().first(), Some(&0));

        let flipped = normal.toggled();
        assert!(flipped.is_flipped());
        assert_eq!(flipped.row_order().first(), Some(&0));
        assert_eq!(flipped.col_order().first(), Some(&11));
        assert_eq!(flipped.toggled(), Orientation::Normal);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut board = Board::empty();
        let rook_pos = Position::new_unchecked(5, 5);
        board.set(rook_pos, Some(Piece::new(PieceType::Rook, Side::White)));
        let target = MoveTarget::quiet(Position::new_unchecked(5, 6));

        let snapshot = GameSnapshot::capture(
            &board,
            Some(rook_pos),
            &[target],
            Side::White,
            1,
            &[],
            Orientation::Flipped,
        );

        assert_eq!(snapshot.board.len(), 12);
        assert!(snapshot.board.iter().all(|row| row.len() == 12));
        assert_eq!(
            snapshot.piece_at(rook_pos),
            Some(PieceView {
                piece_type: PieceType::Rook,
                side: Side::White
            })
        );
        assert_eq!(snapshot.target_at(target.to), Some(MoveKind::Move));
        assert_eq!(snapshot.target_at(Position::new_unchecked(0, 0)), None);
        assert_eq!(snapshot.orientation(), Orientation::Flipped);
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let mut board = Board::empty();
        board.set(
            Position::new_unchecked(0, 0),
            Some(Piece::new(PieceType::Knight, Side::Black)),
        );
        let snapshot =
            GameSnapshot::capture(&board, None, &[], Side::Black, 3, &[], Orientation::Normal);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"type\": \"knight\""));
        assert!(json.contains("\"color\": \"black\""));
        assert!(json.contains("\"turn\": \"black\""));

        let parsed = GameSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
