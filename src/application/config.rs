use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::TraversalConfig;
use crate::infrastructure::logging::Level;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 日志相关配置
    pub log: LogConfig,
    /// 遍历相关配置
    pub traversal: TraversalConfig,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志文件路径
    pub path: PathBuf,
    /// 最低记录级别
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: Config::default_log_path(),
            level: Level::Debug,
        }
    }
}

impl Config {
    /// 日志文件默认位于工作目录的上一级
    pub fn default_log_path() -> PathBuf {
        Path::new("..").join("file_finder.log")
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.log.path.file_name().is_none() {
            anyhow::bail!("log path {} has no file name", self.log.path.display());
        }

        if self.log.path.is_dir() {
            anyhow::bail!("log path {} is a directory", self.log.path.display());
        }

        Ok(())
    }
}
