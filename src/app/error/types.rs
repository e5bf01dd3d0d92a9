//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

pub use crate::core::pagination::PaginationError;

/// 配置文件错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config path: {0}")]
    InvalidPath(#[from] std::io::Error),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
