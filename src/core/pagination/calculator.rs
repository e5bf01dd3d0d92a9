//! 分页状态计算
//!
//! 由原始配置与请求的页索引推导出完整、自洽的分页快照。
//! 计算是纯函数：相同输入总是得到相同快照，且不会失败。

use std::ops::Range;

use serde::Serialize;

use super::error::{
    validate_item_count, validate_items_per_page,
    validate_margin_pages, PaginationError,
};
use super::options::PaginationOptions;
use super::page::{pages_in, Page};

/// 计算前的原始状态（配置已校验，页索引尚未钳制）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawState {
    pub item_count: usize,
    pub items_per_page: usize,
    pub pages_before_margin: usize,
    pub pages_after_margin: usize,
    /// 请求的页索引，可能为负或越界
    pub current_page_index: i64,
    pub old_page_index: Option<usize>,
}

impl RawState {
    /// 校验初始化选项并创建原始状态
    pub fn new(
        options: &PaginationOptions,
    ) -> Result<Self, PaginationError> {
        Ok(Self {
            item_count: validate_item_count(options.item_count)?,
            items_per_page: validate_items_per_page(
                options.items_per_page,
            )?,
            pages_before_margin: validate_margin_pages(
                options.pages_before_margin,
            )?,
            pages_after_margin: validate_margin_pages(
                options.pages_after_margin,
            )?,
            current_page_index: options.initial_page_index,
            old_page_index: None,
        })
    }

    /// 由已有快照还原原始状态，作为状态转换的草稿
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            item_count: snapshot.item_count,
            items_per_page: snapshot.items_per_page,
            pages_before_margin: snapshot.pages_before_margin,
            pages_after_margin: snapshot.pages_after_margin,
            current_page_index: index_to_i64(
                snapshot.current_page_index,
            ),
            old_page_index: snapshot.old_page_index,
        }
    }
}

/// 分页快照：一次完整推导的结果，生成后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub item_count: usize,
    pub items_per_page: usize,
    pub pages_before_margin: usize,
    pub pages_after_margin: usize,
    pub page_count: usize,
    pub current_page_index: usize,
    pub current_page_number: usize,
    pub old_page_index: Option<usize>,
    pub old_page_number: Option<usize>,
    /// 当前页第一条的偏移
    pub item_start: usize,
    /// 当前页最后一条的偏移（含）；无条目时等于 `item_start`
    pub item_end: usize,
    pub before_start_margin_pages: Vec<Page>,
    pub after_end_margin_pages: Vec<Page>,
    pub before_current_page_pages: Vec<Page>,
    pub after_current_page_pages: Vec<Page>,
    /// 起始边距与相邻页之间是否有被省略的页
    pub has_more_past_pages: bool,
    /// 相邻页与结尾边距之间是否有被省略的页
    pub has_more_future_pages: bool,
    pub has_past_page: bool,
    pub has_future_page: bool,
}

impl Snapshot {
    /// 是否没有任何条目
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// 当前页条目的半开区间，可直接用于切片
    pub fn item_range(&self) -> Range<usize> {
        if self.is_empty() {
            self.item_start..self.item_start
        } else {
            self.item_start..self.item_end + 1
        }
    }

    /// 当前页
    pub fn current_page(&self) -> Page {
        Page::from_index(self.current_page_index)
    }

    /// 最后一页的索引；无页时为 0
    pub fn last_page_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }
}

/// 由原始状态计算快照
pub fn calculate(raw: &RawState) -> Snapshot {
    let page_count = raw.item_count.div_ceil(raw.items_per_page);
    let current =
        clamp_page_index(raw.current_page_index, page_count);

    let item_start = current * raw.items_per_page;
    let item_end = (item_start + raw.items_per_page)
        .min(raw.item_count)
        .saturating_sub(1);

    let layout = PageLayout::new(raw, page_count, current);

    Snapshot {
        item_count: raw.item_count,
        items_per_page: raw.items_per_page,
        pages_before_margin: raw.pages_before_margin,
        pages_after_margin: raw.pages_after_margin,
        page_count,
        current_page_index: current,
        current_page_number: current + 1,
        old_page_index: raw.old_page_index,
        old_page_number: raw.old_page_index.map(|i| i + 1),
        item_start,
        item_end,
        before_start_margin_pages: pages_in(layout.start_margin()),
        after_end_margin_pages: pages_in(layout.end_margin()),
        before_current_page_pages: pages_in(
            layout.before_current(),
        ),
        after_current_page_pages: pages_in(
            layout.after_current(),
        ),
        has_more_past_pages: layout.has_more_past(),
        has_more_future_pages: layout.has_more_future(),
        has_past_page: current > 0,
        has_future_page: current + 1 < page_count,
    }
}

/// 将请求的页索引钳制到 `[0, page_count - 1]`
pub fn clamp_page_index(
    requested: i64,
    page_count: usize,
) -> usize {
    if requested <= 0 || page_count == 0 {
        return 0;
    }
    let last = page_count - 1;
    usize::try_from(requested).map_or(last, |i| i.min(last))
}

pub(crate) fn index_to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// 各页面列表的边界（均为半开区间）
///
/// 顺序为：起始边距、省略、前相邻页、当前页、后相邻页、省略、结尾边距。
/// 各段互不重叠。
struct PageLayout {
    start_margin_end: usize,
    before_current_start: usize,
    current: usize,
    after_current_end: usize,
    end_margin_start: usize,
    page_count: usize,
}

impl PageLayout {
    fn new(
        raw: &RawState,
        page_count: usize,
        current: usize,
    ) -> Self {
        if page_count == 0 {
            return Self {
                start_margin_end: 0,
                before_current_start: 0,
                current: 0,
                after_current_end: 0,
                end_margin_start: 0,
                page_count: 0,
            };
        }

        let last = page_count - 1;
        let start_margin_end = raw.pages_before_margin.min(current);
        let end_margin_len = raw.pages_before_margin.min(last - current);
        let end_margin_start = page_count - end_margin_len;

        let before_current_start = current
            .saturating_sub(raw.pages_after_margin)
            .max(start_margin_end);
        let after_current_end = current
            .saturating_add(1)
            .saturating_add(raw.pages_after_margin)
            .min(end_margin_start);

        Self {
            start_margin_end,
            before_current_start,
            current,
            after_current_end,
            end_margin_start,
            page_count,
        }
    }

    fn start_margin(&self) -> Range<usize> {
        0..self.start_margin_end
    }

    fn end_margin(&self) -> Range<usize> {
        self.end_margin_start..self.page_count
    }

    fn before_current(&self) -> Range<usize> {
        self.before_current_start..self.current
    }

    fn after_current(&self) -> Range<usize> {
        if self.page_count == 0 {
            return 0..0;
        }
        self.current + 1..self.after_current_end
    }

    fn has_more_past(&self) -> bool {
        self.before_current_start > self.start_margin_end
    }

    fn has_more_future(&self) -> bool {
        self.page_count > 0
            && self.after_current_end < self.end_margin_start
    }
}
