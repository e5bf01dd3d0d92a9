//! 配置文件加载
//!
//! 查找顺序：命令行指定的路径，其次是用户配置目录下的
//! `pagination-state/config.toml`，都不存在时使用内置默认值。

use std::fs;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::error::types::ConfigError;
use crate::core::pagination::PaginationOptions;

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "pagination-state";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// 默认按键防抖间隔（毫秒）
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pagination: PaginationOptions,
    pub viewer: ViewerConfig,
}

/// 终端显示配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// 是否启用颜色输出
    pub color: bool,
    /// 同一按键的防抖间隔（毫秒）
    pub debounce_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            color: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// 加载配置
///
/// # Errors
///
/// 指定的文件无法读取或不是合法的 TOML 时返回 [`ConfigError`]。
/// 默认位置的文件不存在不算错误。
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        let path = path.absolutize()?.into_owned();
        return read_config(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// 读取并解析配置文件
fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let config =
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "loaded config file");
    Ok(config)
}
