mod core;
mod text_formatter;

pub use core::LogFormatter;
pub use text_formatter::{TextFormatter, TextFormatterConfig};
