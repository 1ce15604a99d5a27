use thiserror::Error;

/// 查找过程中的错误
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("{0} is not an existing directory.")]
    NotADirectory(String),

    #[error("{0:?} is not an integer.")]
    InvalidFormat(String),

    #[error("{0} is not an implemented search criteria.")]
    UnsupportedMode(String),

    #[error("{pattern} is not a valid regex.")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("matching {name} against the filename regex failed: {source}")]
    PatternMatch {
        name: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("traversal failed: {source}")]
    Traversal {
        #[from]
        source: ignore::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FinderError {
    /// 用户输入导致的错误
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FinderError::NotADirectory(_)
                | FinderError::InvalidFormat(_)
                | FinderError::UnsupportedMode(_)
                | FinderError::InvalidPattern { .. }
                | FinderError::InputClosed
        )
    }

    /// 进程退出码: 输入错误为 1，遍历或 I/O 错误为 2
    pub fn exit_code(&self) -> u8 {
        if self.is_validation() {
            1
        } else {
            2
        }
    }
}
