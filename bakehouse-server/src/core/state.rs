use std::sync::Arc;

use crate::auth::AdminSessions;
use crate::core::Config;
use crate::media::MediaStore;
use crate::store::CatalogStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器 clone 的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<CatalogStore> | 单文件 JSON 目录存储 |
/// | media | Arc<MediaStore> | 上传图片目录 |
/// | sessions | Arc<AdminSessions> | 管理会话表 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<CatalogStore>,
    pub media: Arc<MediaStore>,
    pub sessions: Arc<AdminSessions>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 菜单文件缺失不视为启动错误（GET 会返回读取错误，与既有
    /// 管理端的预期一致），但会记录一条警告。
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let menu_path = config.menu_path();
        if !menu_path.exists() {
            tracing::warn!(path = %menu_path.display(), "menu file does not exist yet; GET /api/menu will fail until it is created");
        }

        let password_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => AdminSessions::hash_password(&config.admin_password)
                .map_err(|e| anyhow::anyhow!("failed to hash admin password: {e}"))?,
        };

        Ok(Self {
            config: config.clone(),
            catalog: Arc::new(CatalogStore::new(menu_path)),
            media: Arc::new(MediaStore::new(config.images_dir())),
            sessions: Arc::new(AdminSessions::new(password_hash, config.session_ttl_minutes)),
        })
    }
}
