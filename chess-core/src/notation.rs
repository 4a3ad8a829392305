//! 走法记法和棋谱
//!
//! 格式：<棋子字母><起点><x|-><终点>
//! - 棋子字母：K Q R B N，兵不写
//! - 坐标：列字母 a-l + 横线编号 1-12（行 0 为 12）
//! - 吃子用 x，普通走子用 -

use serde::{Deserialize, Serialize};

use crate::piece::{PieceType, Position, Side};

/// 黑方走法与白方走法之间的分隔
const HALF_MOVE_SEPARATOR: &str = "   ";

/// 走法记法
pub struct Notation;

impl Notation {
    /// 格式化一步走法
    pub fn format_move(
        piece_type: PieceType,
        from: Position,
        to: Position,
        captured: bool,
    ) -> String {
        format!(
            "{}{}{}{}",
            piece_type.notation_letter(),
            from,
            if captured { 'x' } else { '-' },
            to
        )
    }
}

/// 棋谱，每个完整回合一行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    lines: Vec<String>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一步走法
    ///
    /// 白方新起一行 `"<回合>. <走法>"`；黑方接在当前行后面。
    pub fn record(&mut self, side: Side, round: u32, notation: &str) {
        match side {
            Side::White => {
                self.lines.push(format!("{}. {}", round, notation));
            }
            Side::Black => {
                // 正常流程白方先走，这里只为黑方先走的局面补一个占位行
                if self.lines.is_empty() {
                    self.lines.push(format!("{}. ...", round));
                }
                if let Some(line) = self.lines.last_mut() {
                    line.push_str(HALF_MOVE_SEPARATOR);
                    line.push_str(notation);
                }
            }
        }
    }

    /// 所有棋谱行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
