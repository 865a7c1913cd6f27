//! 工具模块

mod request_logger;

pub use request_logger::{LogEntry, RequestLogger};
