//! 核心模块

pub mod input;
pub mod pagination;
pub mod viewer;
