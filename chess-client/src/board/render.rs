//! 终端棋盘渲染

use std::fmt::Write;

use chess_core::{GameSnapshot, MoveKind, Piece, PieceView, Position};

/// 渲染选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 标出合法目标格
    pub show_move_hints: bool,
    /// 使用 Unicode 棋子符号
    pub unicode_pieces: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_move_hints: true,
            unicode_pieces: false,
        }
    }
}

/// 渲染棋盘
///
/// 选中格用 `[ ]` 包围，可吃子格用 `( )` 包围，可走空格显示 `*`。
pub fn render_board(snapshot: &GameSnapshot, options: &RenderOptions) -> String {
    let orientation = snapshot.orientation();
    let col_order = orientation.col_order();
    let mut out = String::new();

    let header: String = col_order
        .iter()
        .map(|&col| format!(" {} ", Position::new_unchecked(0, col).file_char()))
        .collect();
    let _ = writeln!(out, "    {}", header);

    for row in orientation.row_order() {
        let rank = Position::new_unchecked(row, 0).rank();
        let _ = write!(out, "{:>3} ", rank);
        for &col in &col_order {
            out.push_str(&render_cell(snapshot, Position::new_unchecked(row, col), options));
        }
        let _ = writeln!(out, " {}", rank);
    }

    let _ = write!(out, "    {}", header);
    out
}

fn render_cell(snapshot: &GameSnapshot, pos: Position, options: &RenderOptions) -> String {
    let glyph = match snapshot.piece_at(pos) {
        Some(view) => piece_glyph(view, options.unicode_pieces),
        None if pos.is_light_square() => '.',
        None => ':',
    };

    if snapshot.selected == Some(pos) {
        return format!("[{}]", glyph);
    }

    match snapshot.target_at(pos).filter(|_| options.show_move_hints) {
        Some(MoveKind::Capture) => format!("({})", glyph),
        Some(MoveKind::Move) => " * ".to_string(),
        None => format!(" {} ", glyph),
    }
}

fn piece_glyph(view: PieceView, unicode: bool) -> char {
    let piece = Piece::new(view.piece_type, view.side);
    if unicode {
        piece.display_char()
    } else {
        piece.to_fen_char()
    }
}

/// 渲染走子方和棋谱
pub fn render_status(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.turn.turn_label());
    for line in &snapshot.move_log {
        let _ = writeln!(out, "  {}", line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Board, BoardState, Game, PieceType, Side};

    fn game_with_rook() -> Game {
        let mut board = Board::empty();
        board.set(
            Position::new_unchecked(5, 5),
            Some(Piece::new(PieceType::Rook, Side::White)),
        );
        board.set(
            Position::new_unchecked(5, 8),
            Some(Piece::new(PieceType::Pawn, Side::Black)),
        );
        Game::from_state(BoardState::from_board(board, Side::White))
    }

    #[test]
    fn test_render_normal_orientation() {
        let game = game_with_rook();
        let text = render_board(&game.snapshot(), &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        // 表头 + 12 行 + 表尾
        assert_eq!(lines.len(), 14);
        assert!(lines[0].trim_start().starts_with('a'));
        // 默认方向第一行是横线 1（行 11）
        assert!(lines[1].trim_start().starts_with("1 "));
        assert!(lines[12].trim_start().starts_with("12 "));
    }

    #[test]
    fn test_render_flipped_orientation() {
        let mut game = game_with_rook();
        game.flip_orientation();
        let text = render_board(&game.snapshot(), &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].trim_start().starts_with('l'));
        assert!(lines[1].trim_start().starts_with("12 "));
    }

    #[test]
    fn test_render_selection_and_hints() {
        let mut game = game_with_rook();
        game.select_square(5, 5);
        let snapshot = game.snapshot();

        let text = render_board(&snapshot, &RenderOptions::default());
        assert!(text.contains("[R]"));
        assert!(text.contains("(p)"));
        assert!(text.contains(" * "));

        let plain = render_board(
            &snapshot,
            &RenderOptions {
                show_move_hints: false,
                unicode_pieces: true,
            },
        );
        assert!(plain.contains("[♖]"));
        assert!(!plain.contains(" * "));
        assert!(plain.contains(" ♟ "));
    }

    #[test]
    fn test_render_status() {
        let mut game = game_with_rook();
        game.select_square(5, 5);
        game.select_square(5, 8);

        let status = render_status(&game.snapshot());
        assert!(status.starts_with("Black to move"));
        assert!(status.contains("1. Rf7xi7"));
    }
}
