use crate::log::appender::LogAppender;
use crate::log::formatter::LogFormatter;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use crate::log::state::SharedLogState;
use anyhow::{anyhow, Result};
use std::fmt;
use std::sync::Arc;

/// 输出目的地类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    /// 终端，受静音开关控制
    Console,
    /// 通用日志文件
    GeneralFile,
    /// 错误日志文件
    ErrorFile,
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationKind::Console => f.write_str("console"),
            DestinationKind::GeneralFile => f.write_str("general file"),
            DestinationKind::ErrorFile => f.write_str("error file"),
        }
    }
}

/// 目的地的级别过滤方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    /// 跟随共享状态中的级别
    Shared,
    /// 固定级别，不受全局级别影响
    Fixed(LogLevel),
}

/// 单个输出目的地：过滤 + 格式化 + 输出
pub struct Destination {
    kind: DestinationKind,
    filter: LevelFilter,
    formatter: Arc<dyn LogFormatter>,
    appender: Arc<dyn LogAppender>,
}

impl Destination {
    pub fn new(
        kind: DestinationKind,
        filter: LevelFilter,
        formatter: Arc<dyn LogFormatter>,
        appender: Arc<dyn LogAppender>,
    ) -> Self {
        Self {
            kind,
            filter,
            formatter,
            appender,
        }
    }

    pub fn kind(&self) -> DestinationKind {
        self.kind
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    fn threshold(&self, shared_level: LogLevel) -> LogLevel {
        match self.filter {
            LevelFilter::Shared => shared_level,
            LevelFilter::Fixed(level) => level,
        }
    }

    fn write(&self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.format(record)?;
        self.appender.append(&line)
    }
}

/// 多目的地日志 Sink
///
/// 所有 Logger 共享同一个 Sink；每条记录按目的地各自的过滤规则分发
pub struct Sink {
    state: Arc<SharedLogState>,
    destinations: Vec<Destination>,
}

impl Sink {
    pub fn new(state: Arc<SharedLogState>) -> Self {
        Self {
            state,
            destinations: Vec::new(),
        }
    }

    /// 添加一个目的地
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destinations.push(destination);
        self
    }

    pub fn state(&self) -> &Arc<SharedLogState> {
        &self.state
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn has_destination(&self, kind: DestinationKind) -> bool {
        self.destinations.iter().any(|d| d.kind == kind)
    }

    /// 判断指定目的地当前是否接收该级别的记录
    pub fn accepts(&self, destination: &Destination, level: LogLevel) -> bool {
        self.accepts_at(destination, level, self.state.level())
    }

    fn accepts_at(
        &self,
        destination: &Destination,
        level: LogLevel,
        shared_level: LogLevel,
    ) -> bool {
        if destination.kind == DestinationKind::Console && self.state.is_console_muted() {
            return false;
        }
        level.passes(destination.threshold(shared_level))
    }

    /// 分发记录到所有接收它的目的地
    ///
    /// 共享级别在分发开始时读取一次，同一条记录的所有目的地使用同一个阈值；
    /// 某个目的地失败时仍会尝试其余目的地，最后汇总返回错误
    pub fn dispatch(&self, record: &LogRecord) -> Result<()> {
        let shared_level = self.state.level();
        let mut failures = Vec::new();

        for destination in &self.destinations {
            if !self.accepts_at(destination, record.level, shared_level) {
                continue;
            }
            if let Err(err) = destination.write(record) {
                failures.push(format!("{}: {:#}", destination.kind, err));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("failed to write log record ({})", failures.join("; ")))
        }
    }

    /// 分发记录，失败时写入 stderr，永不向调用方返回错误
    pub fn emit(&self, record: &LogRecord) {
        if let Err(err) = self.dispatch(record) {
            eprintln!(
                "modlog: {:#}; dropped {} record from [{}]: {}",
                err, record.level, record.caller, record.message
            );
        }
    }

    /// 刷新所有目的地
    pub fn flush(&self) -> Result<()> {
        for destination in &self.destinations {
            destination.appender.flush()?;
        }
        Ok(())
    }
}
