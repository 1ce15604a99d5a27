use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 日志记录器trait
pub trait LoggerTrait: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// 格式化单条日志: `<时间戳> - <级别> - <消息>`
pub fn format_line(timestamp: &DateTime<Local>, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {}",
        timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
        level,
        message
    )
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// 追加模式的文件日志记录器
pub struct Logger {
    log_file: Mutex<File>,
    log_path: PathBuf,
    min_level: Level,
}

impl Logger {
    /// 以追加模式打开日志文件
    pub fn open(log_path: &Path, min_level: Level) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("cannot open log file {}", log_path.display()))?;

        Ok(Self {
            log_file: Mutex::new(file),
            log_path: log_path.to_path_buf(),
            min_level,
        })
    }

    /// 初始化进程级日志记录器，重复调用返回首次创建的实例
    pub fn init_global(log_path: &Path, min_level: Level) -> Result<&'static Logger> {
        if let Some(logger) = GLOBAL_LOGGER.get() {
            return Ok(logger);
        }

        let logger = Self::open(log_path, min_level)?;
        Ok(GLOBAL_LOGGER.get_or_init(|| logger))
    }
}

impl LoggerTrait for Logger {
    fn log(&self, level: Level, message: &str) {
        if level < self.min_level {
            return;
        }

        let line = format_line(&Local::now(), level, message);

        if let Ok(mut file) = self.log_file.lock() {
            if let Err(err) = writeln!(file, "{}", line).and_then(|_| file.flush()) {
                eprintln!("failed to write to {}: {}", self.log_path.display(), err);
            }
        }
    }
}

/// 测试用内存日志记录器
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl MemoryLogger {
    pub(crate) fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn has(&self, level: Level, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

#[cfg(test)]
impl LoggerTrait for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}
