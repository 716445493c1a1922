// ==========================================
// 钢结构 ERP - 核心库
// ==========================================
// 系统定位: 工程/预算/库存/生产/发运/采购/计量/财务/人力/界面
//           十个业务切片的不可变状态归约
// 形式: 纯函数 (state, action) -> new state
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体、状态树、动作协议
pub mod domain;

// 引擎层 - 切片 reducer 与组合
pub mod engine;

// 状态容器 - 分发、订阅、历史
pub mod store;

// 派生视图
pub mod selectors;

// 配置层
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::StoreConfig;
pub use domain::{ErpAction, ErpState, StateSnapshot};
pub use engine::{erp_reducer, FixedEnv, ReducerEnv, SliceKind, SystemEnv, REDUCER_ORDER};
pub use error::{ErpError, ErpResult};
pub use store::{DispatchOutcome, DispatchRecord, ErpStore};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
