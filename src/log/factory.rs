use crate::log::appender::{ConsoleAppender, FileAppender, FileAppenderConfig, LogAppender};
use crate::log::config::LoggerFactoryConfig;
use crate::log::environment::Environment;
use crate::log::error::Result;
use crate::log::formatter::{LogFormatter, TextFormatter, TextFormatterConfig};
use crate::log::level::LogLevel;
use crate::log::logger::{caller_name, Logger};
use crate::log::sink::{Destination, DestinationKind, LevelFilter, Sink};
use crate::log::state::SharedLogState;
use std::sync::Arc;

/// Logger 工厂
///
/// 持有共享的 Sink（终端、通用文件、错误文件三个目的地）与共享状态，
/// 按调用方标识创建 Logger。Sink 只在工厂创建时初始化一次。
///
/// ```no_run
/// use modlog::log::{LoggerFactory, LoggerFactoryConfig};
///
/// let factory = LoggerFactory::new(LoggerFactoryConfig::default())?;
/// let logger = factory.create_logger("src/server/handler.rs");
/// logger.info("listening");
/// # Ok::<(), modlog::log::LogError>(())
/// ```
pub struct LoggerFactory {
    sink: Arc<Sink>,
    environment: Environment,
}

impl LoggerFactory {
    /// 从配置创建，打开日志文件并按运行环境决定是否挂载终端输出
    pub fn new(config: LoggerFactoryConfig) -> Result<Self> {
        config.validate()?;
        let environment = config.resolved_environment();

        let general = FileAppender::new(FileAppenderConfig {
            file_path: config.general_file.clone(),
        })?;
        let error = FileAppender::new(FileAppenderConfig {
            file_path: config.error_file.clone(),
        })?;

        let mut builder = LoggerFactory::builder()
            .level(config.parsed_level()?)
            .environment(environment)
            .general(Arc::new(general))
            .error(Arc::new(error));

        if environment.attaches_console() {
            builder = builder
                .console(Arc::new(ConsoleAppender::new(config.console.clone())))
                .console_colored(config.console.colored)
                .muted(environment.starts_muted());
        }

        let factory = builder.build();
        factory
            .state()
            .set_date_format(config.date_format.as_deref())?;

        Ok(factory)
    }

    pub fn builder() -> LoggerFactoryBuilder {
        LoggerFactoryBuilder::default()
    }

    /// 创建绑定到调用方的 Logger，显示名称为标识中最后一个 `/` 之后的部分
    pub fn create_logger(&self, caller_id: &str) -> Logger {
        Logger::new(caller_name(caller_id), Arc::clone(&self.sink))
    }

    /// 共享状态
    pub fn state(&self) -> &Arc<SharedLogState> {
        self.sink.state()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// 是否挂载了终端输出
    pub fn has_console(&self) -> bool {
        self.sink.has_destination(DestinationKind::Console)
    }

    pub(crate) fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }
}

/// LoggerFactory 构建器
///
/// 用于自定义各个目的地的输出器，未设置的目的地不会挂载
pub struct LoggerFactoryBuilder {
    level: LogLevel,
    environment: Environment,
    muted: bool,
    console_colored: bool,
    console: Option<Arc<dyn LogAppender>>,
    general: Option<Arc<dyn LogAppender>>,
    error: Option<Arc<dyn LogAppender>>,
}

impl Default for LoggerFactoryBuilder {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            environment: Environment::default(),
            muted: false,
            console_colored: false,
            console: None,
            general: None,
            error: None,
        }
    }
}

impl LoggerFactoryBuilder {
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// 终端输出初始是否静音
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// 终端输出是否为级别名称着色
    pub fn console_colored(mut self, colored: bool) -> Self {
        self.console_colored = colored;
        self
    }

    pub fn console(mut self, appender: Arc<dyn LogAppender>) -> Self {
        self.console = Some(appender);
        self
    }

    pub fn general(mut self, appender: Arc<dyn LogAppender>) -> Self {
        self.general = Some(appender);
        self
    }

    pub fn error(mut self, appender: Arc<dyn LogAppender>) -> Self {
        self.error = Some(appender);
        self
    }

    pub fn build(self) -> LoggerFactory {
        let state = Arc::new(SharedLogState::new(self.level));
        state.set_console_muted(self.muted);

        let plain: Arc<dyn LogFormatter> = Arc::new(TextFormatter::new(
            TextFormatterConfig { colored: false },
            Arc::clone(&state),
        ));

        let mut sink = Sink::new(Arc::clone(&state));
        if let Some(error) = self.error {
            sink = sink.with_destination(Destination::new(
                DestinationKind::ErrorFile,
                LevelFilter::Fixed(LogLevel::Error),
                Arc::clone(&plain),
                error,
            ));
        }
        if let Some(general) = self.general {
            sink = sink.with_destination(Destination::new(
                DestinationKind::GeneralFile,
                LevelFilter::Shared,
                Arc::clone(&plain),
                general,
            ));
        }
        if let Some(console) = self.console {
            let formatter: Arc<dyn LogFormatter> = Arc::new(TextFormatter::new(
                TextFormatterConfig {
                    colored: self.console_colored,
                },
                Arc::clone(&state),
            ));
            sink = sink.with_destination(Destination::new(
                DestinationKind::Console,
                LevelFilter::Shared,
                formatter,
                console,
            ));
        }

        LoggerFactory {
            sink: Arc::new(sink),
            environment: self.environment,
        }
    }
}
