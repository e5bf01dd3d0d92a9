//! 状态转换引擎
//!
//! 接收动作与当前快照，生成下一个快照。空操作（值与当前相同）
//! 直接返回同一个 `Arc`，调用方可以用 `Arc::ptr_eq` 判断是否需要重绘。

use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::action::Action;
use super::calculator::{calculate, index_to_i64, RawState, Snapshot};
use super::error::{
    validate_item_count, validate_items_per_page,
    validate_margin_pages, PaginationError,
};

/// 对当前快照应用一个动作
///
/// # Errors
///
/// 当动作会写入非法配置（每页条目数不大于0，总条目数或边距页数为负）时
/// 返回 [`PaginationError`]，原快照保持不变。
pub fn reduce(
    state: &Arc<Snapshot>,
    action: Action,
) -> Result<Arc<Snapshot>, PaginationError> {
    match apply(state, action) {
        Ok(Some(draft)) => {
            let next = calculate(&draft);
            debug!(
                %action,
                page_index = next.current_page_index,
                page_count = next.page_count,
                "pagination transition"
            );
            Ok(Arc::new(next))
        }
        Ok(None) => {
            trace!(%action, "pagination action is a no-op");
            Ok(Arc::clone(state))
        }
        Err(err) => {
            warn!(%action, error = %err, "pagination action rejected");
            Err(err)
        }
    }
}

/// 生成合并后的草稿状态；返回 `None` 表示无需变化
fn apply(
    state: &Snapshot,
    action: Action,
) -> Result<Option<RawState>, PaginationError> {
    let mut draft = RawState::from_snapshot(state);

    match action {
        Action::GotoPage { page } => {
            if page == index_to_i64(state.current_page_index) {
                return Ok(None);
            }
            draft.current_page_index = page;
            draft.old_page_index = Some(state.current_page_index);
        }
        Action::SetTotalItems { item_count, reset } => {
            if item_count == index_to_i64(state.item_count) {
                return Ok(None);
            }
            draft.item_count = validate_item_count(item_count)?;
            if reset {
                draft.current_page_index = 0;
            }
        }
        Action::SetItemsPerPage {
            items_per_page,
            reset,
        } => {
            if items_per_page == index_to_i64(state.items_per_page) {
                return Ok(None);
            }
            draft.items_per_page =
                validate_items_per_page(items_per_page)?;
            if reset {
                draft.current_page_index = 0;
            }
        }
        Action::SetPagesBeforeMargin { pages } => {
            if pages == index_to_i64(state.pages_before_margin) {
                return Ok(None);
            }
            draft.pages_before_margin = validate_margin_pages(pages)?;
        }
        Action::SetPagesAfterMargin { pages } => {
            if pages == index_to_i64(state.pages_after_margin) {
                return Ok(None);
            }
            draft.pages_after_margin = validate_margin_pages(pages)?;
        }
    }

    Ok(Some(draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::options::PaginationOptions;

    fn initial(
        item_count: i64,
        items_per_page: i64,
        index: i64,
    ) -> Arc<Snapshot> {
        let options = PaginationOptions {
            item_count,
            items_per_page,
            initial_page_index: index,
            ..PaginationOptions::default()
        };
        Arc::new(calculate(&RawState::new(&options).unwrap()))
    }

    #[test]
    fn test_goto_same_page_returns_same_snapshot() {
        let state = initial(100, 10, 3);
        let next = reduce(&state, Action::goto_page(3)).unwrap();
        assert!(Arc::ptr_eq(&state, &next));
        assert_eq!(next.old_page_index, None);
    }

    #[test]
    fn test_goto_page_records_old_index() {
        let state = initial(100, 10, 3);
        let next = reduce(&state, Action::goto_page(7)).unwrap();
        assert_eq!(next.current_page_index, 7);
        assert_eq!(next.old_page_index, Some(3));
        assert_eq!(next.old_page_number, Some(4));
    }

    #[test]
    fn test_goto_out_of_range_is_clamped() {
        let state = initial(2475, 50, 0);
        let next = reduce(&state, Action::goto_page(60)).unwrap();
        assert_eq!(next.current_page_index, 49);
        let next = reduce(&next, Action::goto_page(-100)).unwrap();
        assert_eq!(next.current_page_index, 0);
        assert_eq!(next.old_page_index, Some(49));
    }

    #[test]
    fn test_clamped_goto_still_records_old_index() {
        // 请求值与当前不同，即使钳制后落在同一页也视为一次跳转
        let state = initial(100, 10, 9);
        let next = reduce(&state, Action::goto_page(50)).unwrap();
        assert!(!Arc::ptr_eq(&state, &next));
        assert_eq!(next.current_page_index, 9);
        assert_eq!(next.old_page_index, Some(9));
    }

    #[test]
    fn test_set_total_items_resets_by_default() {
        let state = initial(100, 10, 5);
        let next =
            reduce(&state, Action::set_total_items(200)).unwrap();
        assert_eq!(next.item_count, 200);
        assert_eq!(next.page_count, 20);
        assert_eq!(next.current_page_index, 0);
        assert_eq!(next.old_page_index, None);
    }

    #[test]
    fn test_set_total_items_without_reset_reclamps() {
        let state = initial(100, 10, 8);
        let next = reduce(
            &state,
            Action::set_total_items(50).with_reset(false),
        )
        .unwrap();
        assert_eq!(next.page_count, 5);
        assert_eq!(next.current_page_index, 4);
    }

    #[test]
    fn test_set_items_per_page_without_reset_keeps_index() {
        let state = initial(100, 10, 4);
        let next = reduce(
            &state,
            Action::set_items_per_page(5).with_reset(false),
        )
        .unwrap();
        assert_eq!(next.page_count, 20);
        assert_eq!(next.current_page_index, 4);
    }

    #[test]
    fn test_unchanged_configuration_is_no_op() {
        let state = initial(100, 10, 4);
        for action in [
            Action::set_total_items(100),
            Action::set_items_per_page(10),
            Action::SetPagesBeforeMargin { pages: 0 },
            Action::SetPagesAfterMargin { pages: 0 },
        ] {
            let next = reduce(&state, action).unwrap();
            assert!(Arc::ptr_eq(&state, &next), "{action}");
        }
    }

    #[test]
    fn test_margin_actions() {
        let state = initial(100, 5, 10);
        let next = reduce(&state, Action::SetPagesBeforeMargin { pages: 2 })
            .unwrap();
        assert_eq!(next.before_start_margin_pages.len(), 2);
        assert_eq!(next.after_end_margin_pages.len(), 2);
        assert_eq!(next.current_page_index, 10);

        let next = reduce(&next, Action::SetPagesAfterMargin { pages: 1 })
            .unwrap();
        assert_eq!(next.before_current_page_pages.len(), 1);
        assert_eq!(next.after_current_page_pages.len(), 1);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let state = initial(100, 10, 4);
        assert_eq!(
            reduce(&state, Action::set_items_per_page(0)),
            Err(PaginationError::InvalidItemsPerPage(0))
        );
        assert_eq!(
            reduce(&state, Action::set_total_items(-1)),
            Err(PaginationError::InvalidItemCount(-1))
        );
        assert_eq!(
            reduce(&state, Action::SetPagesAfterMargin { pages: -2 }),
            Err(PaginationError::InvalidMarginPages(-2))
        );
        assert_eq!(state.current_page_index, 4);
    }
}
