//! 命令行界面模块

pub mod args;
pub mod navigator;

use anyhow::Context;
use colored::*;
use tracing::info;

use crate::app::config::loader::load_config;
use crate::app::error::types::Result;
use crate::core::pagination::Pagination;

use self::args::CliArgs;
use self::navigator::Navigator;

/// 运行命令行界面
pub fn run_cli(args: CliArgs) -> Result<()> {
    // 检查配置文件是否存在
    if let Some(path) = &args.config {
        if !path.exists() {
            eprintln!(
                "{} 配置文件不存在: {}",
                "错误".red().bold(),
                path.display()
            );
            std::process::exit(1);
        }
    }

    let mut config = load_config(args.config.as_deref())
        .context("failed to load config")?;
    args.apply_to(&mut config);

    let pagination = Pagination::new(&config.pagination)
        .context("invalid pagination options")?;
    info!(
        item_count = config.pagination.item_count,
        page_count = pagination.snapshot().page_count,
        "pagination initialised"
    );

    if args.print {
        print!("{}", toml::to_string(pagination.snapshot().as_ref())?);
        return Ok(());
    }

    let mut navigator = Navigator::new(pagination, config.viewer);
    navigator.run()
}
