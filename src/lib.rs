//! 分页状态计算与导航
//!
//! 核心是 [`core::pagination`]：由配置推导分页快照的纯函数，
//! 以及由动作驱动的状态转换引擎和导航门面。
//! `app` 与 `cli` 是终端演示宿主使用的配置、日志和交互层。

pub mod app;
pub mod cli;
pub mod core;

pub use crate::core::pagination::{
    Action, Arg, PageLink, Page, Pagination, PaginationError,
    PaginationOptions, Snapshot,
};
