use thiserror::Error;

/// 日志模块错误
#[derive(Debug, Error)]
pub enum LogError {
    /// 无法识别的日志级别名称
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// 无法解析的时间格式
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// 全局 LoggerFactory 已初始化
    #[error("global logger factory already initialized")]
    AlreadyInitialized,

    /// 配置错误
    #[error("invalid logger config: {0}")]
    Config(String),

    /// `log` crate 的全局 logger 已被设置
    #[error("failed to install log bridge: {0}")]
    Bridge(#[from] log::SetLoggerError),

    #[error("log io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogError>;
