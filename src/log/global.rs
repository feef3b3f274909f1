use crate::log::appender::{ConsoleAppender, ConsoleAppenderConfig};
use crate::log::config::LoggerFactoryConfig;
use crate::log::error::{LogError, Result};
use crate::log::factory::LoggerFactory;
use crate::log::logger::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// 全局 LoggerFactory 单例
static GLOBAL_LOGGER_FACTORY: OnceCell<LoggerFactory> = OnceCell::new();

/// 使用指定配置初始化全局 LoggerFactory
///
/// 必须在第一次调用 `create_logger` 之前执行，重复初始化返回 `AlreadyInitialized`
///
/// ```no_run
/// use modlog::log::LoggerFactoryConfig;
///
/// modlog::init(LoggerFactoryConfig::from_json(r#"{ level: "info" }"#)?)?;
/// let logger = modlog::create_logger(file!());
/// logger.info("ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init(config: LoggerFactoryConfig) -> Result<()> {
    if is_initialized() {
        return Err(LogError::AlreadyInitialized);
    }
    let factory = LoggerFactory::new(config)?;
    GLOBAL_LOGGER_FACTORY
        .set(factory)
        .map_err(|_| LogError::AlreadyInitialized)
}

/// 获取全局 LoggerFactory，未初始化时按环境变量创建
///
/// 日志文件无法打开时退化为仅输出到终端，不会 panic
pub fn global_logger_factory() -> &'static LoggerFactory {
    GLOBAL_LOGGER_FACTORY.get_or_init(|| {
        LoggerFactory::new(LoggerFactoryConfig::from_env()).unwrap_or_else(|err| {
            eprintln!("modlog: {}; falling back to console-only logging", err);
            LoggerFactory::builder()
                .console(Arc::new(ConsoleAppender::new(ConsoleAppenderConfig::default())))
                .build()
        })
    })
}

/// 使用全局 LoggerFactory 创建 Logger
pub fn create_logger(caller_id: &str) -> Logger {
    global_logger_factory().create_logger(caller_id)
}

/// 全局 LoggerFactory 是否已经创建
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER_FACTORY.get().is_some()
}
