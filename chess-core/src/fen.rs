//! 局面字符串解析和生成
//!
//! 格式：`<棋盘> <走子方> <回合数>`
//!
//! 棋盘从行 0（最上方）到行 11，行之间用 `/` 分隔；白方大写，黑方小写，
//! 连续空格写成十进制数字（1-12）。
//!
//! 示例（只有两个王）：
//! `5k6/12/12/12/12/12/12/12/12/12/12/6K5 w 1`

use crate::board::{Board, BoardState};
use crate::constants::{BOARD_SIZE, FIRST_MOVE_NUMBER};
use crate::error::ChessError;
use crate::piece::{Piece, Position, Side};

/// 局面字符串处理
pub struct Fen;

impl Fen {
    /// 解析局面字符串为棋盘状态
    ///
    /// 解析出的棋子都视为未走过；兵是否能走两步只看它所在的行。
    pub fn parse(fen: &str) -> Result<BoardState, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ChessError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 走子方（默认白方）
        let current_turn = match parts.get(1) {
            Some(field) => {
                let mut chars = field.chars();
                match (chars.next().and_then(Side::from_fen_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => {
                        return Err(ChessError::InvalidFen {
                            reason: format!("Invalid side to move: {}", field),
                        })
                    }
                }
            }
            None => Side::White,
        };

        // 回合数（默认 1）
        let round = match parts.get(2) {
            Some(field) => field
                .parse::<u32>()
                .ok()
                .filter(|round| *round >= FIRST_MOVE_NUMBER)
                .ok_or_else(|| ChessError::InvalidFen {
                    reason: format!("Invalid move number: {}", field),
                })?,
            None => FIRST_MOVE_NUMBER,
        };

        Ok(BoardState {
            board,
            current_turn,
            round,
        })
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, ChessError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut empty_run = 0usize;

            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    empty_run = empty_run * 10 + digit as usize;
                    if col + empty_run > BOARD_SIZE {
                        return Err(ChessError::InvalidFen {
                            reason: format!("Row {} has too many columns", row_idx),
                        });
                    }
                    continue;
                }

                col += empty_run;
                empty_run = 0;

                let Some(piece) = Piece::from_fen_char(c) else {
                    return Err(ChessError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                };
                if col >= BOARD_SIZE {
                    return Err(ChessError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }
                board.set(Position::new_unchecked(row_idx as u8, col as u8), Some(piece));
                col += 1;
            }
            col += empty_run;

            if col != BOARD_SIZE {
                return Err(ChessError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘状态转换为局面字符串
    pub fn to_string(state: &BoardState) -> String {
        format!(
            "{} {} {}",
            Self::board_to_string(&state.board),
            state.current_turn.to_fen_char(),
            state.round
        )
    }

    /// 将棋盘转换为局面字符串的棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE as u8 {
            let mut line = String::new();
            let mut empty_count = 0;

            for square in board.row(row).unwrap_or_default() {
                if let Some(piece) = square {
                    if empty_count > 0 {
                        line.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    line.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                line.push_str(&empty_count.to_string());
            }

            rows.push(line);
        }

        rows.join("/")
    }
}
