// ==========================================
// 钢结构 ERP - 各业务切片 reducer
// ==========================================
// 约定: 签名统一为 (切片, 动作, 环境) -> 切片
//       未识别的动作原样返回切片（Arc 指针相等）
// ==========================================

pub mod budgets;
pub mod finance;
pub mod hr;
pub mod inventory;
pub mod measurements;
pub mod production;
pub mod projects;
pub mod purchasing;
pub mod shipping;
pub mod ui;
