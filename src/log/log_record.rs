use crate::log::level::LogLevel;
use chrono::{DateTime, Local};
use thiserror::Error;

/// 日志记录
///
/// 每次调用时构造，交给 Sink 后即被消费
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 调用时刻（格式化在写入时进行）
    pub timestamp: DateTime<Local>,
    /// 调用方显示名称
    pub caller: String,
    /// 机器可读的错误码
    pub code: Option<String>,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取当前时间
    pub fn new(level: LogLevel, caller: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            caller: caller.into(),
            code: None,
        }
    }

    /// 设置错误码
    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    /// 设置时间戳
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// 带错误码的错误值
///
/// ```
/// use modlog::log::CodedError;
///
/// let err = CodedError::new("E42", "boom");
/// assert_eq!(err.to_string(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CodedError {
    pub code: String,
    pub message: String,
}

impl CodedError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// `error` 方法接受的消息
///
/// 纯文本不会携带错误码；只有真正的错误值才会尝试提取错误码
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    /// 纯文本
    Text(String),
    /// 错误值：可读文本 + 可选错误码
    Structured {
        message: String,
        code: Option<String>,
    },
}

impl ErrorMessage {
    /// 显式构造结构化错误消息
    pub fn structured(message: impl Into<String>, code: Option<String>) -> Self {
        ErrorMessage::Structured {
            message: message.into(),
            code,
        }
    }

    /// 从任意错误值构造，不提取错误码
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        ErrorMessage::Structured {
            message: err.to_string(),
            code: None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorMessage::Text(message) => message,
            ErrorMessage::Structured { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorMessage::Text(_) => None,
            ErrorMessage::Structured { code, .. } => code.as_deref(),
        }
    }

    /// 拆分为 (消息, 错误码)
    pub fn into_parts(self) -> (String, Option<String>) {
        match self {
            ErrorMessage::Text(message) => (message, None),
            ErrorMessage::Structured { message, code } => (message, code),
        }
    }
}

fn io_error_code(err: &std::io::Error) -> String {
    format!("{:?}", err.kind())
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        ErrorMessage::Text(message.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        ErrorMessage::Text(message)
    }
}

impl From<&String> for ErrorMessage {
    fn from(message: &String) -> Self {
        ErrorMessage::Text(message.clone())
    }
}

impl From<CodedError> for ErrorMessage {
    fn from(err: CodedError) -> Self {
        ErrorMessage::Structured {
            message: err.message,
            code: Some(err.code),
        }
    }
}

impl From<&CodedError> for ErrorMessage {
    fn from(err: &CodedError) -> Self {
        ErrorMessage::from(err.clone())
    }
}

impl From<&std::io::Error> for ErrorMessage {
    fn from(err: &std::io::Error) -> Self {
        ErrorMessage::Structured {
            message: err.to_string(),
            code: Some(io_error_code(err)),
        }
    }
}

impl From<std::io::Error> for ErrorMessage {
    fn from(err: std::io::Error) -> Self {
        ErrorMessage::from(&err)
    }
}

impl From<&anyhow::Error> for ErrorMessage {
    fn from(err: &anyhow::Error) -> Self {
        let code = if let Some(coded) = err.downcast_ref::<CodedError>() {
            Some(coded.code.clone())
        } else {
            err.downcast_ref::<std::io::Error>().map(io_error_code)
        };
        ErrorMessage::Structured {
            message: err.to_string(),
            code,
        }
    }
}

impl From<anyhow::Error> for ErrorMessage {
    fn from(err: anyhow::Error) -> Self {
        ErrorMessage::from(&err)
    }
}
