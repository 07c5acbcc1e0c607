use std::time::Duration;

/// 配置 - 工单引擎的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | /var/lib/shop-floor | 本地数据目录 |
/// | BACKEND_URL | (未设置 = 离线模式) | 共享后端地址 |
/// | REQUEST_TIMEOUT_MS | 10000 | 后端请求超时(毫秒) |
/// | PROBE_TIMEOUT_MS | 1500 | 连通性探测超时(毫秒) |
/// | SUMMARY_URL | (未设置 = 关闭) | AI 摘要服务地址 |
/// | SUMMARY_TIMEOUT_MS | 8000 | 摘要请求超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 本地数据目录（离线兜底存储、日志）
    pub data_dir: String,
    /// 共享后端地址；None 表示纯离线运行
    pub backend_url: Option<String>,
    /// 后端请求超时（毫秒）
    pub request_timeout_ms: u64,
    /// 连通性探测超时（毫秒）
    pub probe_timeout_ms: u64,
    /// AI 摘要服务地址；None 表示关闭
    pub summary_url: Option<String>,
    /// 摘要请求超时（毫秒）
    pub summary_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 加载 .env 后从环境变量读取配置
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// 从环境变量加载配置；未设置的项使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/var/lib/shop-floor".into()),
            backend_url: std::env::var("BACKEND_URL").ok().filter(|v| !v.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10_000),
            probe_timeout_ms: std::env::var("PROBE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1_500),
            summary_url: std::env::var("SUMMARY_URL").ok().filter(|v| !v.is_empty()),
            summary_timeout_ms: std::env::var("SUMMARY_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, backend_url: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.backend_url = backend_url;
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn summary_timeout(&self) -> Duration {
        Duration::from_millis(self.summary_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
