//! 12x12 随机底线国际象棋终端客户端
//!
//! 规则全部来自 chess-core，这里只负责输入解析、文字渲染和设置持久化

pub mod board;
pub mod game;
pub mod settings;
