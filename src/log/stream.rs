use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use std::io;

/// 日志写入流
///
/// 每次 `write` 都会去掉其中的换行符，并以绑定的级别同步写出一条日志，
/// 不做缓冲。适用于 HTTP 访问日志中间件等只接受 `io::Write` 的组件。
///
/// ```ignore
/// use std::io::Write;
///
/// let mut stream = logger.stream(LogLevel::Info);
/// writeln!(stream, "GET /index.html 200")?;
/// ```
#[derive(Debug, Clone)]
pub struct LogStream {
    logger: Logger,
    level: LogLevel,
}

impl LogStream {
    pub fn new(logger: Logger, level: LogLevel) -> Self {
        Self { logger, level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 写入一段文本
    pub fn write_chunk(&self, chunk: &str) {
        self.logger.log(self.level, chunk.replace('\n', ""));
    }
}

impl io::Write for LogStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_chunk(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    /// 先格式化为完整文本再写出，保证一次 `write!` 只产生一条日志
    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.write_chunk(&args.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Write for LogStream {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.write_chunk(s);
        Ok(())
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> std::fmt::Result {
        self.write_chunk(&args.to_string());
        Ok(())
    }
}
