//! 日志

pub mod setup;
