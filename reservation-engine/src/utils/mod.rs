//! 工具模块 - 日志、输入校验、时间窗口

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
