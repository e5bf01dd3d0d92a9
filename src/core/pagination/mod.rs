//! 分页状态计算与导航

pub mod action;
pub mod argument;
pub mod calculator;
pub mod engine;
pub mod error;
pub mod facade;
pub mod options;
pub mod page;

pub use action::Action;
pub use argument::Arg;
pub use calculator::{calculate, RawState, Snapshot};
pub use engine::reduce;
pub use error::PaginationError;
pub use facade::{PageLink, Pagination};
pub use options::PaginationOptions;
pub use page::Page;
