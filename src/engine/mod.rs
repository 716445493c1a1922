// ==========================================
// 钢结构 ERP - 归约引擎层
// ==========================================
// 职责: 纯函数状态迁移 (state, action) -> new state
// 红线: 不访问存储,不访问 UI,不抛错（缺失引用静默忽略）
// ==========================================

pub mod collection;
pub mod combinator;
pub mod env;
pub mod reducers;
pub mod validation;

// 重导出核心接口
pub use combinator::{apply_slice, erp_reducer, reduce_in_order, SliceKind, REDUCER_ORDER};
pub use env::{FixedEnv, ReducerEnv, SystemEnv};
pub use validation::{check_quantities, check_references};
