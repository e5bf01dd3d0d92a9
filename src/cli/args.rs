//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

use crate::app::config::loader::AppConfig;

/// 分页导航演示 - 用键盘浏览分页状态
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 总条目数
    #[arg(short = 'i', long = "items")]
    pub item_count: Option<i64>,

    /// 每页条目数 (默认: 10)
    #[arg(short = 'p', long = "per-page")]
    pub items_per_page: Option<i64>,

    /// 首尾固定显示的页数 (默认: 0)
    #[arg(short = 'm', long = "margin-pages")]
    pub pages_before_margin: Option<i64>,

    /// 当前页两侧显示的相邻页数 (默认: 0)
    #[arg(short = 'n', long = "neighbor-pages")]
    pub pages_after_margin: Option<i64>,

    /// 初始页索引，越界时自动钳制 (默认: 0)
    #[arg(long = "page", allow_negative_numbers = true)]
    pub initial_page_index: Option<i64>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// 以 TOML 格式打印初始快照后退出
    #[arg(long)]
    pub print: bool,

    /// 详细模式 - 输出状态转换日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// 用命令行参数覆盖配置文件中的值
    pub fn apply_to(&self, config: &mut AppConfig) {
        let options = &mut config.pagination;
        if let Some(value) = self.item_count {
            options.item_count = value;
        }
        if let Some(value) = self.items_per_page {
            options.items_per_page = value;
        }
        if let Some(value) = self.pages_before_margin {
            options.pages_before_margin = value;
        }
        if let Some(value) = self.pages_after_margin {
            options.pages_after_margin = value;
        }
        if let Some(value) = self.initial_page_index {
            options.initial_page_index = value;
        }
        if self.no_color {
            config.viewer.color = false;
        }
    }
}
