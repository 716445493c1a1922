// ==========================================
// 钢结构 ERP - 状态容器层
// ==========================================
// 职责: 持有状态、分发动作、广播快照、分发历史
// ==========================================

pub mod erp_store;
pub mod history;

pub use erp_store::ErpStore;
pub use history::{DispatchHistory, DispatchOutcome, DispatchRecord};
