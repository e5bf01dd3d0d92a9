//! 分页初始化选项

use serde::{Deserialize, Serialize};

/// 默认每页条目数
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;

/// 分页初始化选项
///
/// 数值以 `i64` 接收，负数或零值在构造时被拒绝，
/// 超出范围的初始页索引会被静默钳制。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// 总条目数
    pub item_count: i64,
    /// 初始页索引
    pub initial_page_index: i64,
    /// 每页条目数
    pub items_per_page: i64,
    /// 首尾固定显示的页数
    pub pages_before_margin: i64,
    /// 当前页两侧显示的相邻页数
    pub pages_after_margin: i64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            item_count: 0,
            initial_page_index: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            pages_before_margin: 0,
            pages_after_margin: 0,
        }
    }
}

impl PaginationOptions {
    /// 以给定总条目数创建，其余取默认值
    pub fn with_item_count(item_count: i64) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PaginationOptions::with_item_count(42);
        assert_eq!(options.item_count, 42);
        assert_eq!(options.items_per_page, 10);
        assert_eq!(options.initial_page_index, 0);
        assert_eq!(options.pages_before_margin, 0);
        assert_eq!(options.pages_after_margin, 0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: PaginationOptions =
            toml::from_str("item_count = 7\npages_before_margin = 2")
                .unwrap();
        assert_eq!(options.item_count, 7);
        assert_eq!(options.pages_before_margin, 2);
        assert_eq!(options.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }
}
