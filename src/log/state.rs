use crate::log::error::{LogError, Result};
use crate::log::level::LogLevel;
use chrono::format::{Item, StrftimeItems};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// 默认时间格式：带时区偏移的 ISO 8601 本地时间
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// 共享日志状态
///
/// 同一个 LoggerFactory 创建的所有 Logger 共享同一份状态，
/// 任意 Logger 的修改对其它 Logger 立即可见
#[derive(Debug)]
pub struct SharedLogState {
    level: RwLock<LogLevel>,
    date_format: RwLock<Option<String>>,
    console_muted: AtomicBool,
}

impl SharedLogState {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            date_format: RwLock::new(None),
            console_muted: AtomicBool::new(false),
        }
    }

    /// 当前最低输出级别
    pub fn level(&self) -> LogLevel {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    /// 自定义时间格式，None 表示使用默认格式
    pub fn date_format(&self) -> Option<String> {
        self.date_format
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 设置时间格式
    ///
    /// 格式为 chrono strftime 语法，无法解析时返回 `InvalidDateFormat`
    pub fn set_date_format(&self, format: Option<&str>) -> Result<()> {
        if let Some(format) = format {
            validate_date_format(format)?;
        }
        *self
            .date_format
            .write()
            .unwrap_or_else(PoisonError::into_inner) = format.map(str::to_string);
        Ok(())
    }

    pub fn is_console_muted(&self) -> bool {
        self.console_muted.load(Ordering::SeqCst)
    }

    pub fn set_console_muted(&self, muted: bool) {
        self.console_muted.store(muted, Ordering::SeqCst);
    }
}

impl Default for SharedLogState {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

/// 校验 strftime 格式串
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LogError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}
