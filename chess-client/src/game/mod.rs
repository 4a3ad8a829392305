//! 对局会话
//!
//! 把输入事件交给规则库处理，并生成需要输出的文字

mod input;

pub use input::*;

use anyhow::{Context, Result};
use chess_core::{Fen, Game, MoveRecord, SelectOutcome};
use tracing::{debug, info};

use crate::board::{render_board, render_status, RenderOptions};
use crate::settings::{BoardFlip, ClientSettings};

/// 事件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutput {
    /// 需要重绘棋盘
    Redraw,
    /// 输出一段文字
    Text(String),
    /// 退出程序
    Quit,
}

/// 客户端会话
pub struct ClientSession {
    game: Game,
    settings: ClientSettings,
    /// 最后一步走法
    last_move: Option<MoveRecord>,
}

impl ClientSession {
    /// 按设置创建会话，设置里有种子时开局可复现
    pub fn new(settings: ClientSettings) -> Self {
        let mut game = match settings.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        };
        game.set_orientation(settings.board_flip.to_orientation());

        Self {
            game,
            settings,
            last_move: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// 处理一个事件
    pub fn handle_event(&mut self, event: GameEvent) -> Result<SessionOutput> {
        debug!("处理事件: {:?}", event);

        let output = match event {
            GameEvent::Click { row, col } => {
                if let SelectOutcome::Moved(record) = self.game.select_square(row, col) {
                    info!("走子: {}", record.notation);
                    self.last_move = Some(record);
                }
                SessionOutput::Redraw
            }
            GameEvent::Reset => {
                self.game.reset();
                self.last_move = None;
                SessionOutput::Redraw
            }
            GameEvent::Flip => {
                let orientation = self.game.flip_orientation();
                self.settings.board_flip = BoardFlip::from_orientation(orientation);
                info!("棋盘视角: {}", self.settings.board_flip.display_name());
                SessionOutput::Redraw
            }
            GameEvent::ShowFen => SessionOutput::Text(Fen::to_string(self.game.state())),
            GameEvent::ShowJson => {
                let json = self
                    .game
                    .snapshot()
                    .to_json()
                    .context("序列化快照失败")?;
                SessionOutput::Text(json)
            }
            GameEvent::Help => SessionOutput::Text(HELP_TEXT.to_string()),
            GameEvent::Quit => SessionOutput::Quit,
        };

        Ok(output)
    }

    /// 渲染完整画面：棋盘、最后一步和走子方
    pub fn render(&self) -> String {
        let snapshot = self.game.snapshot();
        let options = RenderOptions {
            show_move_hints: self.settings.show_move_hints,
            unicode_pieces: self.settings.unicode_pieces,
        };

        let mut out = render_board(&snapshot, &options);
        out.push('\n');
        if let Some(record) = &self.last_move {
            out.push_str(&describe_move(record));
            out.push('\n');
        }
        out.push_str(&render_status(&snapshot));
        out
    }
}

/// 最后一步的文字描述
fn describe_move(record: &MoveRecord) -> String {
    let mut text = format!("{} {} -> {}", record.piece.description(), record.from, record.to);
    if let Some(captured) = record.captured {
        text.push_str(&format!(", captures {}", captured.description()));
    }
    if record.promoted {
        text.push_str(", promotes to queen");
    }
    text
}
