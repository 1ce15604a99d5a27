use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ignore::{DirEntry, WalkBuilder};
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::error::FinderError;
use crate::domain::validation::NamePattern;
use crate::infrastructure::LoggerTrait;

/// 遍历配置
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// 遇到无法读取的目录或文件时跳过并记录，而不是中止搜索
    pub skip_unreadable: bool,
    /// 同一目录下的条目按文件名排序
    pub sort_by_name: bool,
    /// 遍历时在终端显示进度
    pub show_progress: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            skip_unreadable: false,
            sort_by_name: true,
            show_progress: true,
        }
    }
}

/// 单个匹配结果: 文件名及其所在目录
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileMatch {
    pub name: String,
    pub directory: PathBuf,
}

/// 一次遍历的结果
#[derive(Debug)]
pub struct WalkOutcome {
    pub matches: Vec<FileMatch>,
    pub elapsed: Duration,
}

/// 按文件名正则查找（从文件名开头匹配）
pub fn find_by_name(
    dir: &Path,
    pattern: &NamePattern,
    config: &TraversalConfig,
    logger: &dyn LoggerTrait,
) -> Result<WalkOutcome, FinderError> {
    scan_directory(dir, config, logger, |entry| {
        let name = entry.file_name().to_string_lossy();
        pattern
            .is_match(&name)
            .map_err(|source| FinderError::PatternMatch {
                name: name.into_owned(),
                source,
            })
    })
}

/// 按最小字节数查找
pub fn find_by_min_size(
    dir: &Path,
    min_size: u64,
    config: &TraversalConfig,
    logger: &dyn LoggerTrait,
) -> Result<WalkOutcome, FinderError> {
    scan_directory(dir, config, logger, |entry| {
        let metadata: Metadata = entry.metadata().map_err(FinderError::from)?;
        Ok(metadata.len() >= min_size)
    })
}

/// 递归遍历目录，收集满足条件的普通文件
fn scan_directory<F>(
    dir: &Path,
    config: &TraversalConfig,
    logger: &dyn LoggerTrait,
    predicate: F,
) -> Result<WalkOutcome, FinderError>
where
    F: Fn(&DirEntry) -> Result<bool, FinderError>,
{
    let start_time = Instant::now();
    let mut matches = Vec::new();

    let progress = if config.show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        progress.set_style(style);
    }

    // 不跟随符号链接，且不应用任何忽略规则
    let mut walker = WalkBuilder::new(dir);
    walker.standard_filters(false).follow_links(false);
    if config.sort_by_name {
        walker.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut visited: u64 = 0;
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                skip_or_fail(err, config, logger, &progress)?;
                continue;
            }
        };

        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        visited += 1;
        if visited % 100 == 0 {
            progress.set_message(format!("Visited {} files", visited));
        }
        progress.tick();

        let matched = match predicate(&entry) {
            Ok(matched) => matched,
            Err(FinderError::Traversal { source }) => {
                skip_or_fail(source, config, logger, &progress)?;
                continue;
            }
            Err(err) => {
                logger.error(&format!("Search aborted: {}", err));
                progress.finish_and_clear();
                return Err(err);
            }
        };

        if matched {
            let name = entry.file_name().to_string_lossy().into_owned();
            // 根目录下的文件保留用户输入的目录写法
            let directory = match entry.path().parent() {
                Some(parent) if entry.depth() > 1 => parent.to_path_buf(),
                _ => dir.to_path_buf(),
            };
            logger.debug(&format!("Matched {}", entry.path().display()));
            matches.push(FileMatch { name, directory });
        }
    }

    progress.finish_and_clear();

    Ok(WalkOutcome {
        matches,
        elapsed: start_time.elapsed(),
    })
}

fn skip_or_fail(
    err: ignore::Error,
    config: &TraversalConfig,
    logger: &dyn LoggerTrait,
    progress: &ProgressBar,
) -> Result<(), FinderError> {
    if config.skip_unreadable {
        logger.error(&format!("Skipping unreadable entry: {}", err));
        Ok(())
    } else {
        logger.error(&format!("Search aborted: {}", err));
        progress.finish_and_clear();
        Err(FinderError::Traversal { source: err })
    }
}
