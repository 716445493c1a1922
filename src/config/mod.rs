// ==========================================
// 钢结构 ERP - 配置层
// ==========================================
// 职责: Store 行为配置（严格模式、历史容量）
// ==========================================

pub mod store_config;

// 重导出
pub use store_config::{
    config_keys, default_config_path, env_keys, StoreConfig, DEFAULT_HISTORY_CAPACITY,
};
