//! 输入处理
//!
//! 把终端输入的一行文字解析为游戏事件

use chess_core::Position;
use thiserror::Error;

/// 游戏事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// 点击格子（行、列，越界由对局自行处理）
    Click { row: u8, col: u8 },
    /// 重新开局
    Reset,
    /// 翻转棋盘
    Flip,
    /// 输出局面字符串
    ShowFen,
    /// 输出 JSON 快照
    ShowJson,
    /// 显示帮助
    Help,
    /// 退出
    Quit,
}

/// 输入错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// 帮助文本
pub const HELP_TEXT: &str = "\
命令:
  <格子>        点击格子，例如 e3、l12
  <行> <列>     按存储坐标点击格子，例如 9 4
  reset         重新开局
  flip          翻转棋盘
  fen           输出局面字符串
  json          输出 JSON 快照
  help          显示帮助
  quit          退出";

/// 解析一行输入
pub fn parse_input(line: &str) -> Result<GameEvent, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [single] => parse_single(single),
        [row, col] => {
            let parse = |token: &str| {
                token
                    .parse::<u8>()
                    .map_err(|_| InputError::InvalidCoordinate(line.to_string()))
            };
            Ok(GameEvent::Click {
                row: parse(*row)?,
                col: parse(*col)?,
            })
        }
        _ => Err(InputError::UnknownCommand(line.to_string())),
    }
}

fn parse_single(token: &str) -> Result<GameEvent, InputError> {
    let event = match token.to_ascii_lowercase().as_str() {
        "reset" | "r" => GameEvent::Reset,
        "flip" | "f" => GameEvent::Flip,
        "fen" => GameEvent::ShowFen,
        "json" => GameEvent::ShowJson,
        "help" | "h" | "?" => GameEvent::Help,
        "quit" | "exit" | "q" => GameEvent::Quit,
        _ => {
            let starts_with_letter = token.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
            if !starts_with_letter {
                return Err(InputError::UnknownCommand(token.to_string()));
            }
            let pos: Position = token
                .parse()
                .map_err(|_| InputError::InvalidCoordinate(token.to_string()))?;
            GameEvent::Click {
                row: pos.row,
                col: pos.col,
            }
        }
    };
    Ok(event)
}
