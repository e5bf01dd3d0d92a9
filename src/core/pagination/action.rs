//! 分页动作定义

use std::fmt;

/// 可分派给状态转换引擎的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 跳转到指定页索引（越界时钳制）
    GotoPage { page: i64 },
    /// 更新总条目数
    SetTotalItems { item_count: i64, reset: bool },
    /// 更新每页条目数
    SetItemsPerPage { items_per_page: i64, reset: bool },
    /// 更新首尾固定页数
    SetPagesBeforeMargin { pages: i64 },
    /// 更新当前页两侧的相邻页数
    SetPagesAfterMargin { pages: i64 },
}

impl Action {
    pub fn goto_page(page: i64) -> Self {
        Self::GotoPage { page }
    }

    /// 更新总条目数并回到第一页
    pub fn set_total_items(item_count: i64) -> Self {
        Self::SetTotalItems {
            item_count,
            reset: true,
        }
    }

    /// 更新每页条目数并回到第一页
    pub fn set_items_per_page(items_per_page: i64) -> Self {
        Self::SetItemsPerPage {
            items_per_page,
            reset: true,
        }
    }

    /// 设置重置标志（仅对条目数与每页条目数动作有效）
    pub fn with_reset(self, reset: bool) -> Self {
        match self {
            Self::SetTotalItems { item_count, .. } => {
                Self::SetTotalItems { item_count, reset }
            }
            Self::SetItemsPerPage { items_per_page, .. } => {
                Self::SetItemsPerPage {
                    items_per_page,
                    reset,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GotoPage { page } => write!(f, "GOTO_PAGE({page})"),
            Self::SetTotalItems { item_count, reset } => {
                write!(f, "SET_TOTAL_ITEMS({item_count}, reset={reset})")
            }
            Self::SetItemsPerPage {
                items_per_page,
                reset,
            } => write!(
                f,
                "SET_ITEMS_PER_PAGE({items_per_page}, reset={reset})"
            ),
            Self::SetPagesBeforeMargin { pages } => {
                write!(f, "SET_PAGES_BEFORE_MARGIN({pages})")
            }
            Self::SetPagesAfterMargin { pages } => {
                write!(f, "SET_PAGES_AFTER_MARGIN({pages})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_defaults_to_true() {
        assert_eq!(
            Action::set_total_items(5),
            Action::SetTotalItems {
                item_count: 5,
                reset: true
            }
        );
        assert_eq!(
            Action::set_items_per_page(20).with_reset(false),
            Action::SetItemsPerPage {
                items_per_page: 20,
                reset: false
            }
        );
    }

    #[test]
    fn test_with_reset_ignores_other_actions() {
        let action = Action::goto_page(3);
        assert_eq!(action.with_reset(false), action);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::goto_page(-1).to_string(), "GOTO_PAGE(-1)");
        assert_eq!(
            Action::set_total_items(9).to_string(),
            "SET_TOTAL_ITEMS(9, reset=true)"
        );
    }
}
