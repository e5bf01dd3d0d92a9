//! 页面值类型

use serde::Serialize;

/// 单个页面（索引从0开始，页码从1开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Page {
    pub index: usize,
    pub number: usize,
}

impl Page {
    /// 由页索引创建页面
    pub fn from_index(index: usize) -> Self {
        Self {
            index,
            number: index + 1,
        }
    }
}

/// 将索引区间转换为页面列表
pub(crate) fn pages_in(
    range: std::ops::Range<usize>,
) -> Vec<Page> {
    range.map(Page::from_index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_index_plus_one() {
        let page = Page::from_index(0);
        assert_eq!(page, Page { index: 0, number: 1 });
        assert_eq!(Page::from_index(41).number, 42);
    }

    #[test]
    fn test_pages_in_empty_range() {
        assert!(pages_in(3..3).is_empty());
        assert_eq!(
            pages_in(2..4),
            vec![Page::from_index(2), Page::from_index(3)]
        );
    }
}
