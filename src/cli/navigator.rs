//! 交互式分页导航器

use colored::*;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::app::config::loader::ViewerConfig;
use crate::app::error::types::Result;
use crate::core::input::keyboard::{
    map_key, KeyboardHandler, NavigationCommand,
};
use crate::core::pagination::{
    Arg, Pagination, PaginationError, Snapshot,
};
use crate::core::viewer::page_bar::{render_page_bar, render_status};
use crate::core::viewer::terminal::TerminalManager;

/// 分页导航器
pub struct Navigator {
    pagination: Pagination,
    viewer: ViewerConfig,
    terminal_manager: TerminalManager,
    keyboard_handler: KeyboardHandler,
    // 上次绘制的快照，用于检测是否需要重绘
    last_rendered: Option<Arc<Snapshot>>,
    last_error: Option<PaginationError>,
}

impl Navigator {
    /// 创建新的导航器
    pub fn new(pagination: Pagination, viewer: ViewerConfig) -> Self {
        let keyboard_handler = KeyboardHandler::new(viewer.debounce_ms);
        Self {
            pagination,
            viewer,
            terminal_manager: TerminalManager::new(),
            keyboard_handler,
            last_rendered: None,
            last_error: None,
        }
    }

    /// 运行导航器
    pub fn run(&mut self) -> Result<()> {
        if !self.viewer.color {
            colored::control::set_override(false);
        }

        self.terminal_manager.enter_raw_mode()?;

        loop {
            let needs_redraw = match &self.last_rendered {
                Some(last) => !Arc::ptr_eq(last, self.pagination.snapshot()),
                None => true,
            };
            if needs_redraw {
                self.draw()?;
                self.last_rendered =
                    Some(Arc::clone(self.pagination.snapshot()));
            }

            let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
            else {
                continue;
            };
            if kind != KeyEventKind::Press
                || !self.keyboard_handler.should_process_key(&code)
            {
                continue;
            }
            let Some(command) = map_key(code) else {
                continue;
            };

            match apply_command(&mut self.pagination, command) {
                Ok(ControlFlow::Break(())) => break,
                Ok(ControlFlow::Continue(())) => {
                    self.last_error = None;
                }
                Err(err) => {
                    warn!(?command, error = %err, "command rejected");
                    self.last_error = Some(err);
                    // 快照未变，强制重绘以显示错误
                    self.last_rendered = None;
                }
            }
        }

        // 终端由 TerminalManager 的 Drop 自动恢复
        Ok(())
    }

    /// 绘制页码栏、状态行与帮助信息
    fn draw(&self) -> Result<()> {
        let snapshot = self.pagination.snapshot();
        let width = self.terminal_manager.width().min(80);

        self.terminal_manager.clear_screen()?;
        print!("{}\r\n", "=".repeat(width));
        print!("{}\r\n", render_page_bar(snapshot, self.viewer.color));
        print!(
            "{}\r\n",
            render_status(snapshot).bright_white().bold()
        );
        if let Some(err) = &self.last_error {
            print!("{}\r\n", err.to_string().bright_red());
        }
        print!("{}\r\n", "=".repeat(width));
        print!(
            "{}\r\n",
            "导航: ←→ 翻页 | Home/End 首页/末页 | 1-9 跳转到可见页码 | ESC/q 退出"
                .bright_black()
        );
        print!(
            "{}\r\n",
            "设置: +/- 每页条目数 | [/] 首尾固定页数 | ,/. 相邻页数"
                .bright_black()
        );

        io::stdout().flush()?;
        Ok(())
    }
}

/// 将导航命令转换为一次分派
///
/// # Errors
///
/// 命令写入非法配置时返回 [`PaginationError`]。
pub fn apply_command(
    pagination: &mut Pagination,
    command: NavigationCommand,
) -> std::result::Result<ControlFlow<()>, PaginationError> {
    debug!(?command, "applying navigation command");

    match command {
        NavigationCommand::Quit => return Ok(ControlFlow::Break(())),
        NavigationCommand::First => {
            pagination.goto_first();
        }
        NavigationCommand::Last => {
            pagination.goto_last();
        }
        NavigationCommand::Past => {
            pagination.goto_past();
        }
        NavigationCommand::Future => {
            pagination.goto_future();
        }
        NavigationCommand::Link(position) => {
            let links = pagination.visible_links();
            if let Some(link) = position
                .checked_sub(1)
                .and_then(|i| links.get(i))
            {
                link.goto(pagination);
            }
        }
        NavigationCommand::MorePerPage => {
            pagination.set_items_per_page(
                Arg::from_fn(|s| count(s.items_per_page) + 1),
                false,
            )?;
        }
        NavigationCommand::FewerPerPage => {
            pagination.set_items_per_page(
                Arg::from_fn(|s| (count(s.items_per_page) - 1).max(1)),
                false,
            )?;
        }
        NavigationCommand::MoreMarginPages => {
            pagination.set_pages_before_margin(Arg::from_fn(|s| {
                count(s.pages_before_margin) + 1
            }))?;
        }
        NavigationCommand::FewerMarginPages => {
            pagination.set_pages_before_margin(Arg::from_fn(|s| {
                (count(s.pages_before_margin) - 1).max(0)
            }))?;
        }
        NavigationCommand::MoreNeighborPages => {
            pagination.set_pages_after_margin(Arg::from_fn(|s| {
                count(s.pages_after_margin) + 1
            }))?;
        }
        NavigationCommand::FewerNeighborPages => {
            pagination.set_pages_after_margin(Arg::from_fn(|s| {
                (count(s.pages_after_margin) - 1).max(0)
            }))?;
        }
    }

    Ok(ControlFlow::Continue(()))
}

fn count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::PaginationOptions;

    fn pagination() -> Pagination {
        Pagination::new(&PaginationOptions {
            items_per_page: 5,
            pages_before_margin: 1,
            pages_after_margin: 1,
            ..PaginationOptions::with_item_count(100)
        })
        .unwrap()
    }

    #[test]
    fn test_quit_breaks() {
        let mut p = pagination();
        assert_eq!(
            apply_command(&mut p, NavigationCommand::Quit),
            Ok(ControlFlow::Break(()))
        );
    }

    #[test]
    fn test_navigation_commands() {
        let mut p = pagination();
        apply_command(&mut p, NavigationCommand::Last).unwrap();
        assert_eq!(p.snapshot().current_page_index, 19);
        apply_command(&mut p, NavigationCommand::Past).unwrap();
        assert_eq!(p.snapshot().current_page_index, 18);
        apply_command(&mut p, NavigationCommand::First).unwrap();
        assert_eq!(p.snapshot().current_page_index, 0);
        apply_command(&mut p, NavigationCommand::Future).unwrap();
        assert_eq!(p.snapshot().current_page_index, 1);
    }

    #[test]
    fn test_link_command_uses_visible_order() {
        let mut p = pagination();
        p.goto_page_index(10);
        // 可见顺序: 1, 10, 12, 20（页码）
        apply_command(&mut p, NavigationCommand::Link(4)).unwrap();
        assert_eq!(p.snapshot().current_page_index, 19);
        let unchanged = Arc::clone(p.snapshot());
        apply_command(&mut p, NavigationCommand::Link(9)).unwrap();
        assert!(Arc::ptr_eq(&unchanged, p.snapshot()));
    }

    #[test]
    fn test_per_page_commands_keep_position() {
        let mut p = pagination();
        p.goto_page_index(3);
        apply_command(&mut p, NavigationCommand::MorePerPage).unwrap();
        assert_eq!(p.snapshot().items_per_page, 6);
        assert_eq!(p.snapshot().current_page_index, 3);
    }

    #[test]
    fn test_fewer_commands_stop_at_bounds() {
        let mut p = Pagination::new(&PaginationOptions {
            items_per_page: 1,
            ..PaginationOptions::with_item_count(10)
        })
        .unwrap();
        let before = Arc::clone(p.snapshot());
        apply_command(&mut p, NavigationCommand::FewerPerPage).unwrap();
        apply_command(&mut p, NavigationCommand::FewerMarginPages)
            .unwrap();
        apply_command(&mut p, NavigationCommand::FewerNeighborPages)
            .unwrap();
        assert!(Arc::ptr_eq(&before, p.snapshot()));

        apply_command(&mut p, NavigationCommand::MoreMarginPages).unwrap();
        apply_command(&mut p, NavigationCommand::MoreNeighborPages)
            .unwrap();
        assert_eq!(p.snapshot().pages_before_margin, 1);
        assert_eq!(p.snapshot().pages_after_margin, 1);
    }
}
