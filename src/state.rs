//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。服务在启动时构造一次，
//! 通过 Arc 注入各处理器，之后只读。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::DiagnosisService;

/// 应用共享状态
pub struct AppState {
    /// 启动时加载的配置快照
    pub config: AppConfig,
    /// 诊断服务（持有 Gemini 客户端）
    pub diagnosis: DiagnosisService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: AppConfig) -> Self {
        let diagnosis = DiagnosisService::new(&config);
        Self { config, diagnosis }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}
