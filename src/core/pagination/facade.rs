//! 分页导航门面
//!
//! 持有当前快照与分派能力，每个便捷操作都恰好分派一个动作。

use std::sync::Arc;

use super::action::Action;
use super::argument::Arg;
use super::calculator::{calculate, index_to_i64, RawState, Snapshot};
use super::engine::reduce;
use super::error::PaginationError;
use super::options::PaginationOptions;
use super::page::Page;

/// 绑定了跳转动作的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: Page,
}

impl PageLink {
    /// 跳转到此页的动作
    pub fn action(&self) -> Action {
        Action::goto_page(index_to_i64(self.page.index))
    }

    /// 在给定的分页上跳转到此页
    pub fn goto<'p>(
        &self,
        pagination: &'p mut Pagination,
    ) -> &'p Arc<Snapshot> {
        pagination.navigate(index_to_i64(self.page.index))
    }
}

/// 分页导航门面
#[derive(Debug, Clone)]
pub struct Pagination {
    state: Arc<Snapshot>,
}

impl Pagination {
    /// 校验选项并计算初始快照
    ///
    /// # Errors
    ///
    /// 选项中的配置值非法时返回 [`PaginationError`]。
    pub fn new(
        options: &PaginationOptions,
    ) -> Result<Self, PaginationError> {
        let raw = RawState::new(options)?;
        Ok(Self {
            state: Arc::new(calculate(&raw)),
        })
    }

    /// 当前快照
    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.state
    }

    /// 分派一个动作
    ///
    /// # Errors
    ///
    /// 动作被拒绝时返回错误，当前快照保持不变。
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        self.state = reduce(&self.state, action)?;
        Ok(&self.state)
    }

    /// 跳转到第一页
    pub fn goto_first(&mut self) -> &Arc<Snapshot> {
        self.navigate(0)
    }

    /// 跳转到最后一页
    pub fn goto_last(&mut self) -> &Arc<Snapshot> {
        let last = index_to_i64(self.state.page_count) - 1;
        self.navigate(last)
    }

    /// 上一页
    pub fn goto_past(&mut self) -> &Arc<Snapshot> {
        let page = index_to_i64(self.state.current_page_index) - 1;
        self.navigate(page)
    }

    /// 下一页
    pub fn goto_future(&mut self) -> &Arc<Snapshot> {
        let page = index_to_i64(self.state.current_page_index) + 1;
        self.navigate(page)
    }

    /// 按页索引跳转
    pub fn goto_page_index<'a>(
        &mut self,
        index: impl Into<Arg<'a>>,
    ) -> &Arc<Snapshot> {
        let page = index.into().resolve(&self.state);
        self.navigate(page)
    }

    /// 按页码跳转（页码从1开始）
    pub fn goto_page_number<'a>(
        &mut self,
        number: impl Into<Arg<'a>>,
    ) -> &Arc<Snapshot> {
        let number = number.into().resolve(&self.state);
        self.navigate(number.saturating_sub(1))
    }

    /// 更新总条目数
    ///
    /// # Errors
    ///
    /// 条目数为负时返回 [`PaginationError::InvalidItemCount`]。
    pub fn set_item_count<'a>(
        &mut self,
        count: impl Into<Arg<'a>>,
        reset: bool,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        let item_count = count.into().resolve(&self.state);
        self.dispatch(Action::SetTotalItems { item_count, reset })
    }

    /// 更新总条目数并回到第一页
    ///
    /// # Errors
    ///
    /// 同 [`Pagination::set_item_count`]。
    pub fn set_item_count_and_reset<'a>(
        &mut self,
        count: impl Into<Arg<'a>>,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        self.set_item_count(count, true)
    }

    /// 更新每页条目数
    ///
    /// # Errors
    ///
    /// 每页条目数不大于0时返回 [`PaginationError::InvalidItemsPerPage`]。
    pub fn set_items_per_page<'a>(
        &mut self,
        size: impl Into<Arg<'a>>,
        reset: bool,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        let items_per_page = size.into().resolve(&self.state);
        self.dispatch(Action::SetItemsPerPage {
            items_per_page,
            reset,
        })
    }

    /// 更新每页条目数并回到第一页
    ///
    /// # Errors
    ///
    /// 同 [`Pagination::set_items_per_page`]。
    pub fn set_items_per_page_and_reset<'a>(
        &mut self,
        size: impl Into<Arg<'a>>,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        self.set_items_per_page(size, true)
    }

    /// 更新首尾固定页数
    ///
    /// # Errors
    ///
    /// 页数为负时返回 [`PaginationError::InvalidMarginPages`]。
    pub fn set_pages_before_margin<'a>(
        &mut self,
        pages: impl Into<Arg<'a>>,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        let pages = pages.into().resolve(&self.state);
        self.dispatch(Action::SetPagesBeforeMargin { pages })
    }

    /// 更新当前页两侧的相邻页数
    ///
    /// # Errors
    ///
    /// 页数为负时返回 [`PaginationError::InvalidMarginPages`]。
    pub fn set_pages_after_margin<'a>(
        &mut self,
        pages: impl Into<Arg<'a>>,
    ) -> Result<&Arc<Snapshot>, PaginationError> {
        let pages = pages.into().resolve(&self.state);
        self.dispatch(Action::SetPagesAfterMargin { pages })
    }

    pub fn before_start_margin_links(&self) -> Vec<PageLink> {
        links(&self.state.before_start_margin_pages)
    }

    pub fn after_end_margin_links(&self) -> Vec<PageLink> {
        links(&self.state.after_end_margin_pages)
    }

    pub fn before_current_page_links(&self) -> Vec<PageLink> {
        links(&self.state.before_current_page_pages)
    }

    pub fn after_current_page_links(&self) -> Vec<PageLink> {
        links(&self.state.after_current_page_pages)
    }

    /// 按显示顺序列出除当前页外的所有可跳转页面
    pub fn visible_links(&self) -> Vec<PageLink> {
        let state = &self.state;
        state
            .before_start_margin_pages
            .iter()
            .chain(&state.before_current_page_pages)
            .chain(&state.after_current_page_pages)
            .chain(&state.after_end_margin_pages)
            .map(|&page| PageLink { page })
            .collect()
    }

    /// 跳转动作只会钳制，不会被拒绝
    fn navigate(&mut self, page: i64) -> &Arc<Snapshot> {
        if let Ok(next) = reduce(&self.state, Action::goto_page(page)) {
            self.state = next;
        }
        &self.state
    }
}

fn links(pages: &[Page]) -> Vec<PageLink> {
    pages.iter().map(|&page| PageLink { page }).collect()
}
