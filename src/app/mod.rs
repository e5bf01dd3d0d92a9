//! 应用程序支撑模块：错误、日志与配置

pub mod config;
pub mod error;
pub mod logging;
