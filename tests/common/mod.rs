//! 集成测试共用的初始配置

#![allow(dead_code)]

use pagination_state::{Pagination, PaginationOptions};

pub const ITEM_COUNT: i64 = 2475;
pub const ITEMS_PER_PAGE: i64 = 50;
pub const PAGE_COUNT: i64 = 50;

/// 2475 条、每页 50 条、首尾固定 2 页、相邻 4 页
pub fn options() -> PaginationOptions {
    PaginationOptions {
        item_count: ITEM_COUNT,
        items_per_page: ITEMS_PER_PAGE,
        initial_page_index: 0,
        pages_before_margin: 2,
        pages_after_margin: 4,
    }
}

pub fn pagination(options: PaginationOptions) -> Pagination {
    Pagination::new(&options).expect("valid pagination options")
}

/// 按比例取页索引，如 0.5 对应中间页
pub fn page_index_at(fraction: f64) -> i64 {
    (PAGE_COUNT as f64 * fraction).ceil() as i64 - 1
}

pub fn page_count(item_count: i64, items_per_page: i64) -> usize {
    (item_count as usize).div_ceil(items_per_page as usize)
}

pub fn indices(pages: &[pagination_state::Page]) -> Vec<usize> {
    pages.iter().map(|p| p.index).collect()
}
