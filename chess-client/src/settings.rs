//! 客户端设置模块
//!
//! 提供设置数据结构和 JSON 文件持久化

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_core::Orientation;
use serde::{Deserialize, Serialize};

/// 配置目录名
const APP_DIR: &str = "dozen-chess";

/// 设置文件名
const SETTINGS_FILE: &str = "settings.json";

/// 棋盘视角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoardFlip {
    /// 默认方向
    #[default]
    Normal,
    /// 翻转方向
    Flipped,
}

impl BoardFlip {
    pub fn display_name(&self) -> &'static str {
        match self {
            BoardFlip::Normal => "默认视角",
            BoardFlip::Flipped => "翻转视角",
        }
    }

    pub fn to_orientation(self) -> Orientation {
        match self {
            BoardFlip::Normal => Orientation::Normal,
            BoardFlip::Flipped => Orientation::Flipped,
        }
    }

    pub fn from_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Normal => BoardFlip::Normal,
            Orientation::Flipped => BoardFlip::Flipped,
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 对应的过滤指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 客户端设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    // === 显示设置 ===
    pub board_flip: BoardFlip,
    /// 是否标出合法目标格
    pub show_move_hints: bool,
    /// 使用 Unicode 棋子符号（否则使用字母）
    pub unicode_pieces: bool,

    // === 对局设置 ===
    /// 固定随机种子（None 表示每局随机）
    pub seed: Option<u64>,

    // === 高级设置 ===
    pub log_level: LogLevel,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            board_flip: BoardFlip::default(),
            show_move_hints: true,
            unicode_pieces: false,
            seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl ClientSettings {
    /// 默认设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(APP_DIR);
            path.push(SETTINGS_FILE);
            path
        })
    }

    /// 从默认路径加载设置，失败时使用默认设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// 从指定路径加载设置，文件不存在或格式无效时使用默认设置
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 从指定路径加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存到默认路径
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let settings = ClientSettings {
            board_flip: BoardFlip::Flipped,
            show_move_hints: false,
            unicode_pieces: true,
            seed: Some(42),
            log_level: LogLevel::Debug,
        };
        settings.save_to(&path).unwrap();

        let loaded = ClientSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        assert_eq!(ClientSettings::load_or_default(&path), ClientSettings::default());
        assert!(ClientSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(ClientSettings::load_or_default(&path), ClientSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "seed": 7, "board_flip": "Flipped" }"#).unwrap();

        let loaded = ClientSettings::load_from(&path).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.board_flip.to_orientation(), Orientation::Flipped);
        assert!(loaded.show_move_hints);
    }
}
