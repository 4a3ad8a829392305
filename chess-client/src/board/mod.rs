//! 棋盘渲染模块

mod render;

pub use render::*;
