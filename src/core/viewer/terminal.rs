//! 终端管理模块

use crate::app::error::types::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io;

/// 终端尺寸获取失败时使用的默认宽度
const FALLBACK_WIDTH: usize = 80;

/// 终端管理器，离开作用域时自动恢复终端
pub struct TerminalManager {
    is_raw_mode: bool,
}

impl TerminalManager {
    /// 创建新的终端管理器
    pub fn new() -> Self {
        Self { is_raw_mode: false }
    }

    /// 进入原始模式
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        if !self.is_raw_mode {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), Hide)?;
            self.is_raw_mode = true;
        }
        Ok(())
    }

    /// 退出原始模式
    pub fn exit_raw_mode(&mut self) -> Result<()> {
        if self.is_raw_mode {
            terminal::disable_raw_mode()?;
            execute!(io::stdout(), Show)?;
            self.is_raw_mode = false;
        }
        Ok(())
    }

    /// 清空屏幕并将光标移到左上角
    pub fn clear_screen(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// 终端宽度（列数）
    pub fn width(&self) -> usize {
        terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.exit_raw_mode();
    }
}
