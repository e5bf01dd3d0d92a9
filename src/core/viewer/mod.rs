//! 终端显示

pub mod page_bar;
pub mod terminal;
