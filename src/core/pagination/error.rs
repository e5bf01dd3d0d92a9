//! 分页配置错误

use thiserror::Error;

/// 分页配置错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid items per page: {0} (must be at least 1)")]
    InvalidItemsPerPage(i64),

    #[error("Invalid item count: {0} (must not be negative)")]
    InvalidItemCount(i64),

    #[error("Invalid margin page count: {0} (must not be negative)")]
    InvalidMarginPages(i64),
}

/// 校验总条目数
pub(crate) fn validate_item_count(
    value: i64,
) -> Result<usize, PaginationError> {
    usize::try_from(value)
        .map_err(|_| PaginationError::InvalidItemCount(value))
}

/// 校验每页条目数
pub(crate) fn validate_items_per_page(
    value: i64,
) -> Result<usize, PaginationError> {
    match usize::try_from(value) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(PaginationError::InvalidItemsPerPage(value)),
    }
}

/// 校验边距页数
pub(crate) fn validate_margin_pages(
    value: i64,
) -> Result<usize, PaginationError> {
    usize::try_from(value)
        .map_err(|_| PaginationError::InvalidMarginPages(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_page_must_be_positive() {
        assert_eq!(validate_items_per_page(1), Ok(1));
        assert_eq!(
            validate_items_per_page(0),
            Err(PaginationError::InvalidItemsPerPage(0))
        );
        assert_eq!(
            validate_items_per_page(-5),
            Err(PaginationError::InvalidItemsPerPage(-5))
        );
    }

    #[test]
    fn test_counts_reject_negative() {
        assert_eq!(validate_item_count(0), Ok(0));
        assert_eq!(
            validate_item_count(-1),
            Err(PaginationError::InvalidItemCount(-1))
        );
        assert_eq!(
            validate_margin_pages(-2),
            Err(PaginationError::InvalidMarginPages(-2))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PaginationError::InvalidItemsPerPage(0);
        assert_eq!(
            err.to_string(),
            "Invalid items per page: 0 (must be at least 1)"
        );
    }
}
