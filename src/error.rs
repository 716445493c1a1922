// ==========================================
// 钢结构 ERP - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: reducer 本身从不返回错误（缺失引用静默忽略）;
//       严格模式下由 store 在归约前校验并返回以下错误
// ==========================================

use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum ErpError {
    // ===== 引用校验 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    // ===== 载荷校验 =====
    #[error("数量非法 (field={field}): {value}")]
    InvalidQuantity { field: &'static str, value: f64 },

    // ===== 协议解析 =====
    #[error("动作解析失败: {0}")]
    ActionDecode(#[from] serde_json::Error),

    // ===== 配置 =====
    #[error("配置错误: {0}")]
    Config(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ErpError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ErpError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result 类型别名
pub type ErpResult<T> = Result<T, ErpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ErpError::not_found("obra", "B9");
        assert_eq!(err.to_string(), "记录未找到: obra with id=B9");
    }

    #[test]
    fn test_decode_error_conversion() {
        let raw: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ErpError = raw.unwrap_err().into();
        assert!(matches!(err, ErpError::ActionDecode(_)));
    }
}
