// ==========================================
// 钢结构 ERP - Store 配置
// ==========================================
// 职责: 配置加载、查询、快照
// 来源（后者覆盖前者）: 默认值 → JSON 配置文件 → 环境变量
// 存储: key-value（键见 config_keys）
// ==========================================

use crate::error::{ErpError, ErpResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 默认历史记录容量
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

// ==========================================
// StoreConfig - Store 配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 严格引用模式: 动作引用不存在的 id 时拒绝分发（默认关闭,保持静默忽略）
    pub strict_references: bool,
    /// 拒绝负数/非有限数量的动作
    pub validate_quantities: bool,
    /// 分发历史保留条数（0 表示不记录）
    pub history_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            strict_references: false,
            validate_quantities: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// 加载配置: 默认路径的配置文件（若存在）+ 环境变量覆写
    pub fn load() -> ErpResult<Self> {
        Self::load_from(default_config_path().as_deref(), &env_overrides())
    }

    fn load_from(path: Option<&Path>, overrides: &HashMap<String, String>) -> ErpResult<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 配置文件读取
    ///
    /// 文件格式: {"strict_references": true, "history_capacity": 500}
    /// 值允许为 JSON 标量或字符串形式
    pub fn from_file(path: &Path) -> ErpResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        tracing::info!("加载 Store 配置: {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ErpResult<Self> {
        let parsed: HashMap<String, JsonValue> = serde_json::from_str(raw)?;
        let kv: HashMap<String, String> = parsed
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    JsonValue::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        let mut config = Self::default();
        config.apply_overrides(&kv);
        config.validate()?;
        Ok(config)
    }

    /// 按 key-value 覆写配置; 无法解析的值保留原值
    pub fn apply_overrides(&mut self, kv: &HashMap<String, String>) {
        for (key, value) in kv {
            match key.as_str() {
                config_keys::STRICT_REFERENCES => {
                    match parse_flag(value) {
                        Some(flag) => self.strict_references = flag,
                        None => tracing::warn!("配置值无法解析, 保留原值: {}={}", key, value),
                    }
                }
                config_keys::VALIDATE_QUANTITIES => {
                    match parse_flag(value) {
                        Some(flag) => self.validate_quantities = flag,
                        None => tracing::warn!("配置值无法解析, 保留原值: {}={}", key, value),
                    }
                }
                config_keys::HISTORY_CAPACITY => match value.trim().parse::<usize>() {
                    Ok(capacity) => self.history_capacity = capacity,
                    Err(_) => tracing::warn!("配置值无法解析, 保留原值: {}={}", key, value),
                },
                _ => tracing::debug!("忽略未知配置项: {}", key),
            }
        }
    }

    fn validate(&self) -> ErpResult<()> {
        if self.history_capacity > 100_000 {
            return Err(ErpError::Config(format!(
                "history_capacity 过大: {}",
                self.history_capacity
            )));
        }
        Ok(())
    }

    /// 配置快照（JSON）, 供日志与诊断使用
    pub fn snapshot(&self) -> ErpResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 默认配置文件路径: <config_dir>/steel-erp/store.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("steel-erp").join("store.json"))
}

/// 读取环境变量覆写
fn env_overrides() -> HashMap<String, String> {
    let mut kv = HashMap::new();
    for (env_key, config_key) in [
        (env_keys::STRICT_REFERENCES, config_keys::STRICT_REFERENCES),
        (env_keys::VALIDATE_QUANTITIES, config_keys::VALIDATE_QUANTITIES),
        (env_keys::HISTORY_CAPACITY, config_keys::HISTORY_CAPACITY),
    ] {
        if let Ok(value) = std::env::var(env_key) {
            kv.insert(config_key.to_string(), value);
        }
    }
    kv
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const STRICT_REFERENCES: &str = "strict_references";
    pub const VALIDATE_QUANTITIES: &str = "validate_quantities";
    pub const HISTORY_CAPACITY: &str = "history_capacity";
}

/// 环境变量名
pub mod env_keys {
    pub const STRICT_REFERENCES: &str = "STEEL_ERP_STRICT_REFS";
    pub const VALIDATE_QUANTITIES: &str = "STEEL_ERP_VALIDATE_QTY";
    pub const HISTORY_CAPACITY: &str = "STEEL_ERP_HISTORY_CAPACITY";
}
