use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use file_finder::{run, Config, Console, FinderError, Logger};

/// 按文件名正则或最小字节数交互式查找文件
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

/// 初始化配置和进程级日志记录器
fn init() -> Result<(Config, &'static Logger)> {
    let config = Config::default();
    config.validate().context("invalid configuration")?;

    let logger = Logger::init_global(&config.log.path, config.log.level)?;
    Ok((config, logger))
}

fn main() -> ExitCode {
    let _args = Args::parse();

    let (config, logger) = match init() {
        Ok(initialised) => initialised,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::from(2);
        }
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match run(&mut console, &config, logger) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &FinderError) {
    match err {
        FinderError::InvalidPattern { source, .. } => eprintln!("Error: {} ({})", err, source),
        _ => eprintln!("Error: {}", err),
    }
}
