//! 对局控制
//!
//! 持有棋盘、走子方、选中状态和棋谱，处理点击并执行走子。
//! 每个 `Game` 是独立的值，可以同时存在多局。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, BoardState};
use crate::constants::FIRST_MOVE_NUMBER;
use crate::error::{ChessError, Result};
use crate::moves::{MoveGenerator, MoveTarget};
use crate::notation::{MoveLog, Notation};
use crate::piece::{Piece, PieceType, Position, Side};
use crate::setup::SetupGenerator;
use crate::snapshot::{GameSnapshot, Orientation};

/// 已执行的走法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    /// 走子的棋子（升变前）
    pub piece: Piece,
    /// 被吃的棋子
    pub captured: Option<Piece>,
    /// 是否升变为后
    pub promoted: bool,
    /// 走法记法
    pub notation: String,
}

/// 一次点击的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// 再次点击已选中的格子，取消选择
    Deselected,
    /// 选中了己方棋子
    Selected(Position),
    /// 执行了走子
    Moved(MoveRecord),
    /// 点击了无效格子，清除选择
    Cleared,
}

/// 对局
#[derive(Debug, Clone)]
pub struct Game {
    state: BoardState,
    selected: Option<Position>,
    legal_targets: Vec<MoveTarget>,
    log: MoveLog,
    orientation: Orientation,
    rng: ChaCha8Rng,
}

impl Game {
    /// 创建新对局（随机种子）
    pub fn new() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        info!("新对局，随机种子: {}", seed);
        Self::with_seed(seed)
    }

    /// 使用固定种子创建对局，开局及之后每次重开都可复现
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// 使用给定随机数生成器创建对局
    pub fn with_rng(mut rng: ChaCha8Rng) -> Self {
        let state = BoardState::initial(&mut rng);
        Self::assemble(state, rng)
    }

    /// 从已有局面创建对局（用于测试和局面导入）
    pub fn from_state(state: BoardState) -> Self {
        Self::assemble(state, ChaCha8Rng::seed_from_u64(0))
    }

    fn assemble(state: BoardState, rng: ChaCha8Rng) -> Self {
        Self {
            state,
            selected: None,
            legal_targets: Vec::new(),
            log: MoveLog::new(),
            orientation: Orientation::default(),
            rng,
        }
    }

    /// 处理一次点击
    ///
    /// 优先级：取消选择 > 执行走子 > 选中己方棋子或清除选择。
    /// 越界坐标视为点击无效格子。
    pub fn select_square(&mut self, row: u8, col: u8) -> SelectOutcome {
        let Some(pos) = Position::new(row, col) else {
            self.clear_selection();
            return SelectOutcome::Cleared;
        };

        if self.selected == Some(pos) {
            self.clear_selection();
            return SelectOutcome::Deselected;
        }

        if let Some(from) = self.selected {
            if self.legal_targets.iter().any(|target| target.to == pos) {
                // 目标格来自走法生成器，起点必有棋子
                if let Ok(record) = self.execute_move(from, pos) {
                    return SelectOutcome::Moved(record);
                }
            }
        }

        match self.state.board.get(pos) {
            Some(piece) if piece.side == self.state.current_turn => {
                self.selected = Some(pos);
                self.legal_targets = MoveGenerator::legal_targets(&self.state.board, pos);
                debug!(
                    "选中 {} {}，{} 个目标格",
                    piece.description(),
                    pos,
                    self.legal_targets.len()
                );
                SelectOutcome::Selected(pos)
            }
            _ => {
                self.clear_selection();
                SelectOutcome::Cleared
            }
        }
    }

    /// 执行走子（不检查规则）
    ///
    /// 目标格上的棋子被直接覆盖；兵到达底线升变为后。
    /// 走完后记录棋谱、切换走子方并清除选择。
    pub fn execute_move(&mut self, from: Position, to: Position) -> Result<MoveRecord> {
        for pos in [from, to] {
            if !pos.is_valid() {
                return Err(ChessError::InvalidPosition {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        let Some(mut piece) = self.state.board.get(from) else {
            return Err(ChessError::NoPiece {
                square: from.to_string(),
            });
        };

        let captured = self.state.board.move_piece(from, to);
        piece.has_moved = true;

        let promoted =
            piece.piece_type == PieceType::Pawn && to.row == piece.side.promotion_row();
        let placed = if promoted {
            Piece::new(PieceType::Queen, piece.side)
        } else {
            piece
        };
        self.state.board.set(to, Some(placed));

        let notation = Notation::format_move(piece.piece_type, from, to, captured.is_some());
        let mover = self.state.current_turn;
        self.log.record(mover, self.state.round, &notation);
        debug!("{} 走子: {}", mover, notation);

        self.state.switch_turn();
        self.clear_selection();

        Ok(MoveRecord {
            from,
            to,
            piece,
            captured,
            promoted,
            notation,
        })
    }

    /// 重新开局
    pub fn reset(&mut self) {
        SetupGenerator::populate(&mut self.state.board, &mut self.rng);
        self.state.current_turn = Side::White;
        self.state.round = FIRST_MOVE_NUMBER;
        self.log.clear();
        self.clear_selection();
        info!("对局已重置");
    }

    /// 翻转棋盘显示方向
    pub fn flip_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// 设置棋盘显示方向
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// 清除选择
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_targets.clear();
    }

    /// 获取当前快照
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(
            &self.state.board,
            self.selected,
            &self.legal_targets,
            self.state.current_turn,
            self.state.round,
            self.log.lines(),
            self.orientation,
        )
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// 当前走子方
    pub fn turn(&self) -> Side {
        self.state.current_turn
    }

    /// 当前回合号
    pub fn move_count(&self) -> u32 {
        self.state.round
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn legal_targets(&self) -> &[MoveTarget] {
        &self.legal_targets
    }

    pub fn move_log(&self) -> &[String] {
        self.log.lines()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
