use std::fmt;
use std::num::IntErrorKind;
use std::path::Path;

use humansize::{format_size, BINARY};
use fancy_regex::Regex;

use crate::domain::error::FinderError;
use crate::infrastructure::LoggerTrait;

/// 搜索模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// 按文件名正则搜索
    ByName,
    /// 按最小字节数搜索
    ByMinSize,
}

impl SearchMode {
    /// 用户输入的选项编号
    pub fn selector(&self) -> u8 {
        match self {
            SearchMode::ByName => 1,
            SearchMode::ByMinSize => 2,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::ByName => f.write_str("filename regex"),
            SearchMode::ByMinSize => f.write_str("byte size"),
        }
    }
}

/// 从文件名开头匹配的正则
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            source: pattern.to_string(),
            regex: Regex::new(pattern)?,
        })
    }

    /// 用户输入的原始模式
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// 最左匹配从位置 0 开始即视为匹配，不要求匹配整个文件名
    pub fn is_match(&self, file_name: &str) -> Result<bool, fancy_regex::Error> {
        Ok(self
            .regex
            .find(file_name)?
            .map_or(false, |m| m.start() == 0))
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// 校验目录路径
pub fn validate_directory(input: &str, logger: &dyn LoggerTrait) -> Result<String, FinderError> {
    if !input.is_empty() && Path::new(input).is_dir() {
        logger.info(&format!("Searching for files in directory {}", input));
        Ok(input.to_string())
    } else {
        let err = FinderError::NotADirectory(input.to_string());
        logger.error(&err.to_string());
        Err(err)
    }
}

/// 校验搜索模式 (1: 文件名正则, 2: 最小字节数)
pub fn validate_search_mode(input: &str, logger: &dyn LoggerTrait) -> Result<SearchMode, FinderError> {
    let trimmed = input.trim();

    let mode = match trimmed.parse::<i64>() {
        Ok(1) => SearchMode::ByName,
        Ok(2) => SearchMode::ByMinSize,
        Ok(_) => return Err(unsupported_mode(trimmed, logger)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                return Err(unsupported_mode(trimmed, logger));
            }
            _ => {
                let err = FinderError::InvalidFormat(input.to_string());
                logger.error(&format!("{} Expected 1 or 2 as the search criteria.", err));
                return Err(err);
            }
        },
    };

    logger.info(&format!("Search criteria: {} ({})", mode.selector(), mode));
    Ok(mode)
}

fn unsupported_mode(input: &str, logger: &dyn LoggerTrait) -> FinderError {
    let err = FinderError::UnsupportedMode(input.to_string());
    logger.error(&err.to_string());
    err
}

/// 校验并编译文件名正则
pub fn validate_pattern(input: &str, logger: &dyn LoggerTrait) -> Result<NamePattern, FinderError> {
    match NamePattern::new(input) {
        Ok(pattern) => {
            logger.info(&format!("Filename regex: {}", pattern.as_str()));
            Ok(pattern)
        }
        Err(source) => {
            logger.error(&format!("{} is not a valid regex.", input));
            logger.debug(&source.to_string());
            Err(FinderError::InvalidPattern {
                pattern: input.to_string(),
                source,
            })
        }
    }
}

/// 校验最小字节数，负数按 0 处理
pub fn validate_byte_size(input: &str, logger: &dyn LoggerTrait) -> Result<u64, FinderError> {
    let trimmed = input.trim();

    let size = match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => {
            logger.debug(&format!("Negative byte size {} treated as 0", value));
            0
        }
        Ok(value) => value as u64,
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => {
                logger.debug(&format!("Negative byte size {} treated as 0", trimmed));
                0
            }
            IntErrorKind::PosOverflow => trimmed.parse::<u64>().unwrap_or(u64::MAX),
            _ => {
                logger.error(&format!("{} is not an integer byte size.", input));
                return Err(FinderError::InvalidFormat(input.to_string()));
            }
        },
    };

    logger.info(&format!(
        "Minimum byte size: {} ({})",
        size,
        format_size(size, BINARY)
    ));
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::{Level, MemoryLogger};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_directory_good_path() {
        let temp_dir = tempdir().unwrap();
        let logger = MemoryLogger::default();
        let path = temp_dir.path().to_str().unwrap();

        assert_eq!(validate_directory(path, &logger).unwrap(), path);
        assert!(logger.has(Level::Info, "Searching for files in directory"));
    }

    #[test]
    fn test_directory_bad_paths() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("foo.txt");
        fs::write(&file_path, "foo").unwrap();
        let missing = temp_dir.path().join("bar");
        let logger = MemoryLogger::default();

        for input in ["", missing.to_str().unwrap(), file_path.to_str().unwrap()] {
            match validate_directory(input, &logger) {
                Err(FinderError::NotADirectory(path)) => assert_eq!(path, input),
                other => panic!("Expected NotADirectory, got {:?}", other),
            }
        }
        assert_eq!(logger.entries().len(), 3);
        assert!(logger.entries().iter().all(|(level, _)| *level == Level::Error));
    }

    #[test]
    fn test_search_mode() {
        let logger = MemoryLogger::default();
        assert_eq!(validate_search_mode("1", &logger).unwrap(), SearchMode::ByName);
        assert_eq!(validate_search_mode(" 2 ", &logger).unwrap(), SearchMode::ByMinSize);
        assert!(logger.has(Level::Info, "Search criteria: 1 (filename regex)"));
        assert!(logger.has(Level::Info, "Search criteria: 2 (byte size)"));
    }

    #[test]
    fn test_search_mode_not_integer() {
        let logger = MemoryLogger::default();
        for input in ["a", "", "1.0"] {
            assert!(matches!(
                validate_search_mode(input, &logger),
                Err(FinderError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_search_mode_not_implemented() {
        let logger = MemoryLogger::default();
        for input in ["0", "3", "-1", "99999999999999999999"] {
            assert!(matches!(
                validate_search_mode(input, &logger),
                Err(FinderError::UnsupportedMode(_))
            ));
        }
        assert!(logger.has(Level::Error, "0 is not an implemented search criteria."));
    }

    #[test]
    fn test_pattern_invalid() {
        let logger = MemoryLogger::default();
        for input in ["(foo", ")(", "[a-"] {
            assert!(matches!(
                validate_pattern(input, &logger),
                Err(FinderError::InvalidPattern { .. })
            ));
        }
        assert!(logger.has(Level::Error, "(foo is not a valid regex."));
    }

    #[test]
    fn test_pattern_valid() {
        let logger = MemoryLogger::default();
        let pattern = validate_pattern("fo+", &logger).unwrap();
        assert_eq!(pattern.as_str(), "fo+");
        assert_eq!(pattern, NamePattern::new("fo+").unwrap());
    }

    #[test]
    fn test_pattern_anchored_at_start() {
        let pattern = NamePattern::new("foo").unwrap();
        assert!(pattern.is_match("foo.txt").unwrap());
        assert!(pattern.is_match("foo").unwrap());
        assert!(!pattern.is_match("barfoo.txt").unwrap());

        let alternation = NamePattern::new("bar|foo").unwrap();
        assert!(alternation.is_match("foo.txt").unwrap());
        assert!(!alternation.is_match("xfoo.txt").unwrap());

        let anywhere = NamePattern::new(".*foo").unwrap();
        assert!(anywhere.is_match("barfoo.txt").unwrap());
    }

    #[test]
    fn test_pattern_lookahead() {
        let logger = MemoryLogger::default();
        let pattern = validate_pattern("(?=.*foo)", &logger).unwrap();
        assert_eq!(pattern.as_str(), "(?=.*foo)");

        assert!(pattern.is_match("foo.txt").unwrap());
        assert!(pattern.is_match("barfoo.txt").unwrap());
        assert!(!pattern.is_match("bar.txt").unwrap());

        let backreference = NamePattern::new(r"(\w)\1").unwrap();
        assert!(backreference.is_match("aab").unwrap());
        assert!(!backreference.is_match("abb").unwrap());
    }

    #[test]
    fn test_pattern_verbose_comment() {
        let pattern = NamePattern::new("(?x)foo # comment").unwrap();
        assert_eq!(pattern.as_str(), "(?x)foo # comment");
        assert!(pattern.is_match("foo.txt").unwrap());
        assert!(!pattern.is_match("xfoo.txt").unwrap());
    }

    #[test]
    fn test_byte_size() {
        let logger = MemoryLogger::default();
        assert_eq!(validate_byte_size("0", &logger).unwrap(), 0);
        assert_eq!(validate_byte_size("1200", &logger).unwrap(), 1200);
        assert_eq!(validate_byte_size("+7", &logger).unwrap(), 7);
        assert_eq!(
            validate_byte_size("18446744073709551615", &logger).unwrap(),
            u64::MAX
        );
        assert!(logger.has(Level::Info, "Minimum byte size: 1200 ("));
    }

    #[test]
    fn test_byte_size_negative() {
        let logger = MemoryLogger::default();
        for input in ["-1", "-1000", "-99999999999999999999"] {
            assert_eq!(validate_byte_size(input, &logger).unwrap(), 0);
        }
    }

    #[test]
    fn test_byte_size_not_integer() {
        let logger = MemoryLogger::default();
        for input in ["a", "1K", ""] {
            assert!(matches!(
                validate_byte_size(input, &logger),
                Err(FinderError::InvalidFormat(_))
            ));
        }
        assert!(logger.has(Level::Error, "a is not an integer byte size."));
    }
}
