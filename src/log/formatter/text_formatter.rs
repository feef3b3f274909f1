use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use crate::log::state::{SharedLogState, DEFAULT_DATE_FORMAT};
use anyhow::{anyhow, Result};
use colored::Colorize;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::fmt::Write;
use std::sync::Arc;

/// TextFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct TextFormatterConfig {
    /// 是否为级别名称着色
    #[default = false]
    pub colored: bool,
}

/// 文本格式化器
///
/// 输出格式：`<level>: <timestamp> [<caller>] (<code>) <message>`，
/// 没有错误码时省略 `(<code>) ` 段。时间格式从共享状态中读取。
pub struct TextFormatter {
    config: TextFormatterConfig,
    state: Arc<SharedLogState>,
}

impl TextFormatter {
    pub fn new(config: TextFormatterConfig, state: Arc<SharedLogState>) -> Self {
        Self { config, state }
    }

    pub fn is_colored(&self) -> bool {
        self.config.colored
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let capacity = 48
            + record.caller.len()
            + record.message.len()
            + record.code.as_ref().map_or(0, |c| c.len() + 3);
        let mut result = String::with_capacity(capacity);

        if self.config.colored {
            write!(
                result,
                "{}",
                record.level.as_str().color(record.level.color())
            )?;
        } else {
            result.push_str(record.level.as_str());
        }
        result.push_str(": ");

        let date_format = self.state.date_format();
        let pattern = date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
        write!(result, "{}", record.timestamp.format(pattern))
            .map_err(|_| anyhow!("failed to render timestamp with format '{}'", pattern))?;

        result.push_str(" [");
        result.push_str(&record.caller);
        result.push_str("] ");

        if let Some(code) = &record.code {
            result.push('(');
            result.push_str(code);
            result.push_str(") ");
        }

        result.push_str(&record.message);

        Ok(result)
    }
}
