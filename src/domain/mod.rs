// ==========================================
// 钢结构 ERP - 领域模型层
// ==========================================
// 职责: 定义实体、状态树、动作协议
// 红线: 不含归约逻辑,不含存储逻辑
// ==========================================

pub mod action;
pub mod finance;
pub mod hr;
pub mod inventory;
pub mod measurement;
pub mod notification;
pub mod patch;
pub mod production;
pub mod project;
pub mod purchasing;
pub mod shipping;
pub mod state;
pub mod types;

/// 带字符串 id 的实体
pub trait Identified {
    fn id(&self) -> &str;
}

// 重导出核心类型
pub use action::{ErpAction, UpdateById};
pub use finance::FinanceEntry;
pub use hr::{Employee, Machine, Team};
pub use inventory::{Delivery, DeliveryMaterial, NewDelivery, StockItem};
pub use measurement::{Measurement, MeasurementRule};
pub use notification::{NewNotification, Notification};
pub use production::{Piece, StageAudit};
pub use project::{Budget, Project, ProjectProgress};
pub use purchasing::{PurchaseLine, PurchaseOrder};
pub use shipping::Shipment;
pub use state::{ErpState, StateSnapshot};
pub use types::{
    BudgetStatus, CutStatus, EntryKind, EntryStatus, MachineStatus, MaterialStatus,
    MeasurementStatus, NotificationKind, ProjectStatus, PurchaseStatus, ShipmentStatus, Stage,
};
