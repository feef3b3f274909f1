/// 为当前源文件创建 Logger
///
/// 显示名称取 `file!()` 的文件名部分，例如 `src/server/handler.rs` 得到 `handler.rs`。
/// 也可以传入自定义标识。
///
/// # 示例
///
/// ```no_run
/// let logger = modlog::module_logger!();
/// logger.info("application started");
///
/// let access = modlog::module_logger!("http/access");
/// access.info("GET /");
/// ```
#[macro_export]
macro_rules! module_logger {
    () => {
        $crate::log::create_logger(file!())
    };
    ($caller_id:expr) => {
        $crate::log::create_logger($caller_id)
    };
}
