//! 日志模块
//!
//! 按调用方创建日志器：每个 Logger 绑定一个显示名称，共享同一个 Sink
//! 与同一份级别 / 静音 / 时间格式状态。
//!
//! # 特性
//!
//! - 五个级别：error > warn > info > trace > debug
//! - 三个目的地：终端（可静音、着色）、通用文件、错误文件（固定 error 级别）
//! - 运行时修改全局级别与时间格式，对所有 Logger 立即生效
//! - `io::Write` 写入流，便于接入第三方组件
//! - `log` crate 桥接
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use modlog::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoggerFactoryConfig::from_json(r#"
//!         {
//!             level: "info",
//!             general_file: "logs/out.log",
//!             error_file: "logs/error.log",
//!             console: { colored: true },
//!         }
//!     "#)?;
//!
//!     let factory = LoggerFactory::new(config)?;
//!     let logger = factory.create_logger(file!());
//!
//!     logger.info("application started");
//!     logger.error(CodedError::new("E42", "connection failed"));
//!
//!     logger.set_level(LogLevel::Warn);
//!     logger.set_date_format(Some("%H:%M:%S"))?;
//!     logger.mute();
//!
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod bridge;
pub mod config;
pub mod environment;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod global;
pub mod level;
pub mod log_record;
pub mod logger;
pub mod macros;
pub mod sink;
pub mod state;
pub mod stream;

pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig, LogAppender,
    MemoryAppender, Target,
};
pub use config::LoggerFactoryConfig;
pub use environment::Environment;
pub use error::LogError;
pub use factory::{LoggerFactory, LoggerFactoryBuilder};
pub use formatter::{LogFormatter, TextFormatter, TextFormatterConfig};
pub use global::{create_logger, global_logger_factory, init, is_initialized};
pub use level::LogLevel;
pub use log_record::{CodedError, ErrorMessage, LogRecord};
pub use logger::{caller_name, Logger};
pub use sink::{Destination, DestinationKind, LevelFilter, Sink};
pub use state::{SharedLogState, DEFAULT_DATE_FORMAT};
pub use stream::LogStream;
