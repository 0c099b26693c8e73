//! Reservation Engine - 餐桌占用与预订状态引擎
//!
//! # 架构概述
//!
//! 一个会话持有一个 [`Registry`]，表现层 (表单、按钮、页面) 只调用它的方法：
//!
//! - **桌台** (`add_table` / `delete_table` / `take_table` / `release_table`)
//! - **预订** (`create_reservation` / `reserve_for_period` / `cancel_booking`)
//! - **过期清理** (`release_expired_bookings`)，读取任何状态前调用
//! - **查询** (`current_status` / `table_statuses` / `occupancy_summary`)
//!
//! 不变量: 桌台被占用 ⇔ 恰有一个预订指向它。
//!
//! # 模块结构
//!
//! ```text
//! reservation-engine/src/
//! ├── core/          # 配置、时钟
//! ├── registry.rs    # 桌台与预订
//! └── utils/         # 日志、校验、时间窗口
//! ```

pub mod core;
pub mod registry;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Clock, Config, FixedClock, SystemClock};
pub use registry::Registry;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_from_config, init_logger_with_level};
