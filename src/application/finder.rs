use std::io::{BufRead, Write};
use std::path::Path;

use crate::application::config::Config;
use crate::domain::{
    find_by_min_size, find_by_name, validate_byte_size, validate_directory, validate_pattern,
    validate_search_mode, FileMatch, FinderError, SearchMode,
};
use crate::infrastructure::LoggerTrait;
use crate::presentation::{format_elapsed, render_matches, Console};

pub const DIRECTORY_PROMPT: &str = "Enter the directory path to be searched: ";
pub const MODE_PROMPT: &str =
    "Enter 1 to find files with a name regex, or 2 to find files of at least some byte size: ";
pub const PATTERN_PROMPT: &str = "Enter the filename regex to be used: ";
pub const SIZE_PROMPT: &str = "Enter the minimum file byte size: ";

/// 交互式查找: 依次读取目录、搜索模式和对应参数，执行搜索并输出结果
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
    logger: &dyn LoggerTrait,
) -> Result<Vec<FileMatch>, FinderError> {
    let directory = validate_directory(&console.ask(DIRECTORY_PROMPT)?, logger)?;
    let mode = validate_search_mode(&console.ask(MODE_PROMPT)?, logger)?;

    let outcome = match mode {
        SearchMode::ByName => {
            let pattern = validate_pattern(&console.ask(PATTERN_PROMPT)?, logger)?;
            find_by_name(Path::new(&directory), &pattern, &config.traversal, logger)?
        }
        SearchMode::ByMinSize => {
            let min_size = validate_byte_size(&console.ask(SIZE_PROMPT)?, logger)?;
            find_by_min_size(Path::new(&directory), min_size, &config.traversal, logger)?
        }
    };

    let elapsed = format_elapsed(outcome.elapsed);
    console.say(&elapsed)?;
    logger.info(&elapsed);

    let report = render_matches(&outcome.matches);
    logger.info(&report);
    console.say(&report)?;

    Ok(outcome.matches)
}
