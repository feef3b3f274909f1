//! `log` crate 桥接
//!
//! 第三方库通过 `log::info!` 等宏输出的日志会被转发到 LoggerFactory 的共享 Sink，
//! 调用方名称取 target 中最后一个 `::` 之后的部分。

use crate::log::error::Result;
use crate::log::factory::LoggerFactory;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use crate::log::sink::Sink;
use std::sync::Arc;

/// 实现 `log::Log` 的桥接器
pub struct LogBridge {
    sink: Arc<Sink>,
}

impl LogBridge {
    pub fn new(factory: &LoggerFactory) -> Self {
        Self {
            sink: Arc::clone(factory.sink()),
        }
    }
}

fn target_caller(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from(metadata.level()) >= self.sink.state().level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let record = LogRecord::new(
            record.level().into(),
            target_caller(record.target()),
            record.args().to_string(),
        );
        self.sink.emit(&record);
    }

    fn flush(&self) {
        if let Err(err) = self.sink.flush() {
            eprintln!("modlog: failed to flush log destinations: {:#}", err);
        }
    }
}

/// 将 LoggerFactory 安装为 `log` crate 的全局 logger（每个进程只能安装一次）
pub fn install(factory: &LoggerFactory) -> Result<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(factory)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
