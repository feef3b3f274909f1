use crate::log::error::LogError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
///
/// 严重程度从高到低：error > warn > info > trace > debug。
/// 枚举的 `Ord` 与严重程度一致，越严重越大。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 调试信息，最详细
    Debug = 0,
    /// 跟踪信息，介于 debug 与 info 之间
    Trace = 1,
    /// 一般信息
    Info = 2,
    /// 警告信息
    Warn = 3,
    /// 错误信息
    Error = 4,
}

impl LogLevel {
    /// 所有级别，按严重程度从高到低排列
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Trace,
        LogLevel::Debug,
    ];

    /// 级别名称（小写，输出中使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
        }
    }

    /// 优先级序号，数值越小越严重（error = 0, debug = 4）
    pub fn rank(&self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Trace => 3,
            LogLevel::Debug => 4,
        }
    }

    /// 终端输出时使用的颜色
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Error => Color::Red,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Info => Color::Cyan,
            LogLevel::Trace => Color::Magenta,
            LogLevel::Debug => Color::White,
        }
    }

    /// 判断当前级别在阈值 `threshold` 下是否应被输出
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self >= threshold
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}
