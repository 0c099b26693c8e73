//! 核心模块 - 配置与时钟
//!
//! - [`Config`] - 引擎配置
//! - [`Clock`] - 时间来源 ([`SystemClock`] / [`FixedClock`])

pub mod clock;
pub mod config;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
