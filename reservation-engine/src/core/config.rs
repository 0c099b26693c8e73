use chrono::Duration;

/// 预订引擎配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WALK_IN_MINUTES | 60 | 直接占桌时临时预订的时长(分钟) |
/// | WALK_IN_CLIENT_NAME | Temporary | 临时预订的客人名 |
/// | WALK_IN_PHONE | N/A | 临时预订的电话 |
/// | DEFAULT_TABLE_SEATS | 4 | 新建桌台的默认座位数 |
/// | LOG_LEVEL | info | 日志级别 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 临时预订时长(分钟)，必须为正
    pub walk_in_minutes: u32,
    /// 临时预订的客人名
    pub walk_in_client_name: String,
    /// 临时预订的电话
    pub walk_in_phone: String,
    /// 新建桌台的建议座位数
    pub default_table_seats: u32,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试时无需修改进程环境)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            walk_in_minutes: lookup("WALK_IN_MINUTES")
                .and_then(|v| v.parse().ok())
                .filter(|m| *m > 0)
                .unwrap_or(60),
            walk_in_client_name: lookup("WALK_IN_CLIENT_NAME")
                .unwrap_or_else(|| "Temporary".into()),
            walk_in_phone: lookup("WALK_IN_PHONE").unwrap_or_else(|| "N/A".into()),
            default_table_seats: lookup("DEFAULT_TABLE_SEATS")
                .and_then(|v| v.parse().ok())
                .filter(|s| *s > 0)
                .unwrap_or(4),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
        }
    }

    /// 覆盖临时预订配置
    ///
    /// 与环境变量一致，`minutes == 0` 被忽略，保留原时长
    pub fn with_walk_in(
        mut self,
        minutes: u32,
        client_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        if minutes > 0 {
            self.walk_in_minutes = minutes;
        }
        self.walk_in_client_name = client_name.into();
        self.walk_in_phone = phone.into();
        self
    }

    /// 临时预订时长
    pub fn walk_in_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.walk_in_minutes))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
