//! 键盘输入处理

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

use crate::app::config::loader::DEFAULT_DEBOUNCE_MS;

/// 按键对应的导航命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    First,
    Last,
    Past,
    Future,
    /// 跳转到第 n 个可见页面链接（从1开始）
    Link(usize),
    MorePerPage,
    FewerPerPage,
    MoreMarginPages,
    FewerMarginPages,
    MoreNeighborPages,
    FewerNeighborPages,
    Quit,
}

/// 将按键映射为导航命令
pub fn map_key(code: KeyCode) -> Option<NavigationCommand> {
    let command = match code {
        KeyCode::Esc | KeyCode::Char('q') => NavigationCommand::Quit,
        KeyCode::Left => NavigationCommand::Past,
        KeyCode::Right => NavigationCommand::Future,
        KeyCode::Home => NavigationCommand::First,
        KeyCode::End => NavigationCommand::Last,
        KeyCode::Char('+') => NavigationCommand::MorePerPage,
        KeyCode::Char('-') => NavigationCommand::FewerPerPage,
        KeyCode::Char(']') => NavigationCommand::MoreMarginPages,
        KeyCode::Char('[') => NavigationCommand::FewerMarginPages,
        KeyCode::Char('.') => NavigationCommand::MoreNeighborPages,
        KeyCode::Char(',') => NavigationCommand::FewerNeighborPages,
        KeyCode::Char(c @ '1'..='9') => {
            NavigationCommand::Link(c as usize - '0' as usize)
        }
        _ => return None,
    };
    Some(command)
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key_time: Instant,
    last_key_code: Option<KeyCode>,
    debounce: Duration,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_duration_ms: u64) -> Self {
        Self {
            last_key_time: Instant::now(),
            last_key_code: None,
            debounce: Duration::from_millis(debounce_duration_ms),
        }
    }

    /// 判断是否应该处理按键（防抖处理）
    pub fn should_process_key(&mut self, code: &KeyCode) -> bool {
        self.should_process_key_at(code, Instant::now())
    }

    fn should_process_key_at(
        &mut self,
        code: &KeyCode,
        now: Instant,
    ) -> bool {
        let time_since_last = now.duration_since(self.last_key_time);
        let is_same_key = self.last_key_code.as_ref() == Some(code);

        // 同一个键必须间隔指定时间
        if is_same_key && time_since_last < self.debounce {
            return false;
        }

        self.last_key_code = Some(*code);
        self.last_key_time = now;

        true
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
