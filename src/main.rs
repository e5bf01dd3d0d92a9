//! 分页导航演示程序

use clap::Parser;

use pagination_state::app::error::types::Result;
use pagination_state::app::logging::setup::init_logging;
use pagination_state::cli::{self, args::CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // 初始化日志系统
    init_logging(args.verbose);

    // 运行命令行界面
    cli::run_cli(args)
}
