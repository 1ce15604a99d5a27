use std::time::Duration;

use crate::domain::FileMatch;

/// 未找到匹配文件时的提示
const NO_MATCHES: &str = "No files matched the search criteria.";

/// 格式化遍历耗时
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Search time elapsed: {} microseconds", elapsed.as_micros())
}

/// 生成搜索报告: 匹配数量及每个 `<文件名> - <目录>`
pub fn render_matches(matches: &[FileMatch]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let lines: Vec<String> = matches
        .iter()
        .map(|m| format!("{} - {}", m.name, m.directory.display()))
        .collect();

    format!(
        "Found the following {} file(s):\n{}",
        matches.len(),
        lines.join("\n")
    )
}
