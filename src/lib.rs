//! modlog - 按模块创建日志器的日志门面
//!
//! 给定调用方标识（通常是源文件路径），返回绑定到该调用方的分级日志器，
//! 输出带时间戳的文本行到终端、通用日志文件和错误日志文件。
//!
//! ## 模块
//!
//! - **log**: 日志器、工厂、目的地、格式化与配置
//!
//! ```rust,no_run
//! let logger = modlog::module_logger!();
//! logger.info("hello");
//! logger.level();
//! ```

pub mod log;

// 重新导出主要的公共 API
pub use crate::log::{
    create_logger, init, CodedError, ErrorMessage, LogError, LogLevel, LogStream, Logger,
    LoggerFactory, LoggerFactoryConfig,
};
