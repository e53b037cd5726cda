use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | . | 工作目录（菜单文件与图片目录的根） |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ADMIN_PASSWORD | admin12 | 管理口令（启动时即刻 argon2 哈希） |
/// | ADMIN_PASSWORD_HASH | (无) | 管理口令的 argon2 PHC 串，设置后优先于 ADMIN_PASSWORD |
/// | SESSION_TTL_MINUTES | 720 | 管理会话有效期（分钟） |
/// | ENVIRONMENT | development | 运行环境 |
/// | RUST_LOG | info | 日志级别 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/bakehouse HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，菜单文件和上传图片都在其下
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 管理口令（明文，仅当未提供哈希时在启动期使用一次）
    pub admin_password: String,
    /// 管理口令的 argon2 PHC 哈希（优先）
    pub admin_password_hash: Option<String>,
    /// 管理会话有效期（分钟）
    pub session_ttl_minutes: i64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin12".into()),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").ok(),
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(720),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 菜单 JSON 文件路径: `{work_dir}/data/menu.json`
    pub fn menu_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("data").join("menu.json")
    }

    /// 上传图片目录: `{work_dir}/assets/images/items`
    ///
    /// 目录里的文件按裸文件名引用，由 `/assets/images/items/{filename}`
    /// 约定路径对外提供。
    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
            .join("assets")
            .join("images")
            .join("items")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    crate::utils::init_logger();
    Ok(())
}
