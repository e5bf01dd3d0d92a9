//! 配置文件

pub mod loader;
