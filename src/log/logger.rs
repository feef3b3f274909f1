use crate::log::error::Result;
use crate::log::level::LogLevel;
use crate::log::log_record::{ErrorMessage, LogRecord};
use crate::log::sink::Sink;
use crate::log::state::SharedLogState;
use crate::log::stream::LogStream;
use std::sync::Arc;

/// 从调用方标识中提取显示名称：最后一个 `/` 之后的部分
///
/// ```
/// use modlog::log::caller_name;
///
/// assert_eq!(caller_name("modules/a.js"), "a.js");
/// assert_eq!(caller_name("main.rs"), "main.rs");
/// ```
pub fn caller_name(caller_id: &str) -> &str {
    caller_id.rsplit('/').next().unwrap_or(caller_id)
}

/// 按调用方绑定的日志器
///
/// 级别、静音开关与时间格式保存在共享状态中，同一 LoggerFactory
/// 创建的所有 Logger 相互可见。克隆开销很小。
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    sink: Arc<Sink>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<Arc<str>>, sink: Arc<Sink>) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }

    /// 调用方显示名称
    pub fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &SharedLogState {
        self.sink.state()
    }

    /// 记录一条日志，写入失败时输出到 stderr
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(&LogRecord::new(level, &*self.name, message));
    }

    /// 记录一条日志，写入失败时将错误返回给调用方
    pub fn try_log(&self, record: LogRecord) -> anyhow::Result<()> {
        self.sink.dispatch(&record)
    }

    /// 记录 DEBUG 级别日志
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message)
    }

    /// 记录 TRACE 级别日志
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message)
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message)
    }

    /// 记录 WARN 级别日志
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message)
    }

    /// 记录 ERROR 级别日志
    ///
    /// 可以传入纯文本，也可以传入错误值；错误值会尝试提取错误码
    ///
    /// ```ignore
    /// logger.error("connection failed");
    /// logger.error(CodedError::new("E42", "boom")); // ... (E42) boom
    /// logger.error(&io_err);                        // ... (NotFound) ...
    /// ```
    pub fn error(&self, message: impl Into<ErrorMessage>) {
        let (message, code) = message.into().into_parts();
        let record = LogRecord::new(LogLevel::Error, &*self.name, message).with_code(code);
        self.sink.emit(&record);
    }

    /// 获取当前全局级别
    pub fn level(&self) -> LogLevel {
        self.state().level()
    }

    /// 设置全局级别，对终端与通用文件生效，错误文件始终为 error
    pub fn set_level(&self, level: LogLevel) {
        self.state().set_level(level);
    }

    /// 按名称设置全局级别，无法识别时返回 `InvalidLevel`
    pub fn set_level_name(&self, name: &str) -> Result<()> {
        let level = name.parse::<LogLevel>()?;
        self.set_level(level);
        Ok(())
    }

    /// 关闭终端输出（对所有 Logger 生效，文件输出不受影响）
    pub fn mute(&self) {
        self.state().set_console_muted(true);
    }

    /// 恢复终端输出
    pub fn unmute(&self) {
        self.state().set_console_muted(false);
    }

    pub fn is_muted(&self) -> bool {
        self.state().is_console_muted()
    }

    /// 设置时间格式（chrono strftime），None 恢复默认格式
    pub fn set_date_format(&self, format: Option<&str>) -> Result<()> {
        self.state().set_date_format(format)
    }

    /// 当前自定义时间格式
    pub fn date_format(&self) -> Option<String> {
        self.state().date_format()
    }

    /// 创建绑定到指定级别的写入流，供需要 `io::Write` 的第三方组件使用
    pub fn stream(&self, level: LogLevel) -> LogStream {
        LogStream::new(self.clone(), level)
    }

    /// 刷新所有目的地
    pub fn flush(&self) -> anyhow::Result<()> {
        self.sink.flush()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::appender::MemoryAppender;
    use crate::log::error::LogError;
    use crate::log::formatter::{LogFormatter, TextFormatter, TextFormatterConfig};
    use crate::log::log_record::CodedError;
    use crate::log::sink::{Destination, DestinationKind, LevelFilter};

    /// 辅助函数：创建写入内存的 Logger
    fn create_test_logger(name: &str) -> (Logger, Arc<MemoryAppender>, Arc<MemoryAppender>) {
        let state = Arc::new(SharedLogState::default());
        let formatter: Arc<dyn LogFormatter> = Arc::new(TextFormatter::new(
            TextFormatterConfig::default(),
            Arc::clone(&state),
        ));
        let general = Arc::new(MemoryAppender::new());
        let error = Arc::new(MemoryAppender::new());
        let sink = Sink::new(state)
            .with_destination(Destination::new(
                DestinationKind::ErrorFile,
                LevelFilter::Fixed(LogLevel::Error),
                Arc::clone(&formatter),
                error.clone(),
            ))
            .with_destination(Destination::new(
                DestinationKind::GeneralFile,
                LevelFilter::Shared,
                formatter,
                general.clone(),
            ));
        (Logger::new(name, Arc::new(sink)), general, error)
    }

    #[test]
    fn test_caller_name() {
        assert_eq!(caller_name("modules/a.js"), "a.js");
        assert_eq!(caller_name("/abs/path/to/main.rs"), "main.rs");
        assert_eq!(caller_name("plain"), "plain");
        assert_eq!(caller_name(""), "");
        assert_eq!(caller_name("dir/"), "");
        assert_eq!(caller_name("src\\win.rs"), "src\\win.rs");
    }

    #[test]
    fn test_logger_emission_methods() {
        let (logger, general, _) = create_test_logger("a.rs");

        logger.debug("d");
        logger.trace("t");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        let lines = general.lines();
        assert_eq!(lines.len(), 5);
        for (line, level) in lines.iter().zip(["debug", "trace", "info", "warn", "error"]) {
            assert!(line.starts_with(&format!("{}: ", level)), "{}", line);
            assert!(line.contains("[a.rs]"));
        }
    }

    #[test]
    fn test_logger_level_round_trip() -> Result<()> {
        let (logger, _, _) = create_test_logger("a.rs");
        for level in LogLevel::ALL {
            logger.set_level_name(level.as_str())?;
            assert_eq!(logger.level().as_str(), level.as_str());
        }
        Ok(())
    }

    #[test]
    fn test_logger_invalid_level() {
        let (logger, _, _) = create_test_logger("a.rs");
        logger.set_level(LogLevel::Warn);

        let err = logger.set_level_name("verbose").unwrap_err();
        assert!(matches!(err, LogError::InvalidLevel(_)));
        assert_eq!(logger.level(), LogLevel::Warn);
    }

    #[test]
    fn test_logger_level_filtering() {
        let (logger, general, error) = create_test_logger("a.rs");
        logger.set_level(LogLevel::Warn);

        logger.info("hidden");
        logger.warn("shown");
        logger.error("failed");

        assert_eq!(general.len(), 2);
        assert_eq!(error.len(), 1);
    }

    #[test]
    fn test_logger_error_with_code() {
        let (logger, general, error) = create_test_logger("a.rs");

        logger.error(CodedError::new("E42", "boom"));
        logger.error("boom");

        let lines = error.lines();
        assert!(lines[0].contains("boom"));
        assert!(lines[0].contains("(E42)"));
        assert!(lines[1].ends_with("[a.rs] boom"));
        assert!(!lines[1].contains('('));
        assert_eq!(general.len(), 2);
    }

    #[test]
    fn test_logger_try_log() -> anyhow::Result<()> {
        let (logger, general, _) = create_test_logger("a.rs");
        logger.try_log(LogRecord::new(LogLevel::Info, logger.name(), "direct"))?;
        assert!(general.lines()[0].ends_with("[a.rs] direct"));
        Ok(())
    }

    #[test]
    fn test_logger_clone_shares_state() {
        let (logger, _, _) = create_test_logger("a.rs");
        let other = logger.clone();

        logger.mute();
        assert!(other.is_muted());
        other.unmute();
        assert!(!logger.is_muted());

        logger.set_date_format(Some("%Y")).unwrap();
        assert_eq!(other.date_format().as_deref(), Some("%Y"));
    }

    #[test]
    fn test_logger_debug_impl() {
        let (logger, _, _) = create_test_logger("a.rs");
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("a.rs"));
        assert!(rendered.contains("Debug"));
    }
}
