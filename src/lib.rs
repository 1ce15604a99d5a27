// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{FileMatch, FinderError, NamePattern, SearchMode};
pub use application::{run, Config};
pub use infrastructure::{Level, Logger, LoggerTrait};
pub use presentation::Console;
