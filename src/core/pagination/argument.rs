//! 字面量或回调参数

use std::fmt;

use super::calculator::Snapshot;

/// 导航参数：字面量，或由当前快照计算得到的值
///
/// 在分派动作前同步解析一次。
pub enum Arg<'a> {
    Literal(i64),
    FromState(Box<dyn Fn(&Snapshot) -> i64 + 'a>),
}

impl<'a> Arg<'a> {
    /// 由回调创建参数
    pub fn from_fn(f: impl Fn(&Snapshot) -> i64 + 'a) -> Self {
        Self::FromState(Box::new(f))
    }

    /// 针对当前快照解析参数
    pub fn resolve(&self, state: &Snapshot) -> i64 {
        match self {
            Self::Literal(value) => *value,
            Self::FromState(f) => f(state),
        }
    }
}

impl From<i64> for Arg<'_> {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Self::Literal(i64::from(value))
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Literal(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => {
                f.debug_tuple("Literal").field(value).finish()
            }
            Self::FromState(_) => f.write_str("FromState(..)"),
        }
    }
}
