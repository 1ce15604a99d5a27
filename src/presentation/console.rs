use std::io::{BufRead, Write};

use crate::domain::FinderError;

/// 交互式控制台: 输出提示并读取一行回答
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出提示并读取一行，去掉行尾换行符
    pub fn ask(&mut self, prompt: &str) -> Result<String, FinderError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FinderError::InputClosed);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// 输出一行消息
    pub fn say(&mut self, message: &str) -> Result<(), FinderError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
