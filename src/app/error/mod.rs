//! 错误处理

pub mod types;
