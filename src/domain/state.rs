// ==========================================
// 钢结构 ERP - 状态树
// ==========================================
// 职责: 定义十个业务切片与整体状态树
// 红线: 状态树不可变; 每次分发产生新快照
//       未变化的切片/实体通过 Arc 共享（指针相等）
// ==========================================

use crate::domain::finance::FinanceEntry;
use crate::domain::hr::{Employee, Machine, Team};
use crate::domain::inventory::{DeliveryMaterial, StockItem};
use crate::domain::measurement::{Measurement, MeasurementRule};
use crate::domain::notification::Notification;
use crate::domain::production::Piece;
use crate::domain::project::{Budget, Project};
use crate::domain::purchasing::PurchaseOrder;
use crate::domain::shipping::Shipment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 实体集合: 持久化向量, 快照之间结构共享; 每个元素独立共享
pub type Collection<T> = im::Vector<Arc<T>>;

// ==========================================
// 业务切片
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsState {
    pub obras: Collection<Project>,
    pub obra_atual: Option<String>, // 当前选中的工程
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetsState {
    pub orcamentos: Collection<Budget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryState {
    pub itens: Collection<StockItem>,
    pub materiais: Collection<DeliveryMaterial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionState {
    pub pecas: Collection<Piece>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingState {
    pub expedicoes: Collection<Shipment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchasingState {
    pub compras: Collection<PurchaseOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementsState {
    pub medicoes: Collection<Measurement>,
    pub config_medicao: BTreeMap<String, MeasurementRule>, // 阶段类型 → 计量规则
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceState {
    pub lancamentos: Collection<FinanceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HrState {
    pub funcionarios: Collection<Employee>,
    pub equipes: Collection<Team>,
    pub maquinas: Collection<Machine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    pub filtros: BTreeMap<String, String>,
    pub loading: bool,
    pub notificacoes: Collection<Notification>,
    pub listas: BTreeMap<String, Vec<String>>, // 下拉选项等查找表
}

// ==========================================
// ErpState - 整体状态树
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErpState {
    pub obras: Arc<ProjectsState>,
    pub orcamentos: Arc<BudgetsState>,
    pub estoque: Arc<InventoryState>,
    pub producao: Arc<ProductionState>,
    pub expedicao: Arc<ShippingState>,
    pub compras: Arc<PurchasingState>,
    pub medicoes: Arc<MeasurementsState>,
    pub financeiro: Arc<FinanceState>,
    pub rh: Arc<HrState>,
    pub ui: Arc<UiState>,
}

impl ErpState {
    /// 初始状态: 集合为空,loading=true（等待外部快照加载）
    pub fn initial() -> Self {
        Self {
            ui: Arc::new(UiState {
                loading: true,
                ..UiState::default()
            }),
            ..Self::default()
        }
    }

    /// 十个切片是否全部与另一状态指针相等（即归约未产生任何变化）
    pub fn shares_slices(&self, other: &ErpState) -> bool {
        Arc::ptr_eq(&self.obras, &other.obras)
            && Arc::ptr_eq(&self.orcamentos, &other.orcamentos)
            && Arc::ptr_eq(&self.estoque, &other.estoque)
            && Arc::ptr_eq(&self.producao, &other.producao)
            && Arc::ptr_eq(&self.expedicao, &other.expedicao)
            && Arc::ptr_eq(&self.compras, &other.compras)
            && Arc::ptr_eq(&self.medicoes, &other.medicoes)
            && Arc::ptr_eq(&self.financeiro, &other.financeiro)
            && Arc::ptr_eq(&self.rh, &other.rh)
            && Arc::ptr_eq(&self.ui, &other.ui)
    }
}

// ==========================================
// StateSnapshot - 外部数据快照
// ==========================================
// 用途: INIT_FROM_SUPABASE 批量载入
// 规则: 给出的集合整体替换,未给出的保持原值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSnapshot {
    pub obras: Option<Vec<Project>>,
    pub orcamentos: Option<Vec<Budget>>,
    pub estoque: Option<Vec<StockItem>>,
    pub materiais_estoque: Option<Vec<DeliveryMaterial>>,
    pub pecas: Option<Vec<Piece>>,
    pub expedicoes: Option<Vec<Shipment>>,
    pub compras: Option<Vec<PurchaseOrder>>,
    pub medicoes: Option<Vec<Measurement>>,
    pub config_medicao: Option<BTreeMap<String, MeasurementRule>>,
    pub lancamentos: Option<Vec<FinanceEntry>>,
    pub funcionarios: Option<Vec<Employee>>,
    pub equipes: Option<Vec<Team>>,
    pub maquinas: Option<Vec<Machine>>,
}

/// 将快照中的集合转换为共享集合
pub fn share_all<T: Clone>(items: &[T]) -> Collection<T> {
    items.iter().cloned().map(Arc::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = ErpState::initial();
        assert!(state.ui.loading);
        assert!(state.obras.obras.is_empty());
        assert!(state.obras.obra_atual.is_none());
    }

    #[test]
    fn test_snapshot_accepts_partial_json() {
        let snapshot: StateSnapshot =
            serde_json::from_str(r#"{"obras": [], "configMedicao": {}}"#).unwrap();
        assert_eq!(snapshot.obras, Some(Vec::new()));
        assert!(snapshot.pecas.is_none());
        assert!(snapshot.config_medicao.is_some());
    }

    #[test]
    fn test_shares_slices_detects_any_replaced_slice() {
        let state = ErpState::initial();
        assert!(state.clone().shares_slices(&state));

        let selecionado = ErpState {
            obras: Arc::new(ProjectsState {
                obra_atual: Some("B1".to_string()),
                ..(*state.obras).clone()
            }),
            ..state.clone()
        };
        assert!(!selecionado.shares_slices(&state));

        // 内容相同但切片被重新分配, 仍视为变化
        let realocado = ErpState {
            ui: Arc::new((*state.ui).clone()),
            ..state.clone()
        };
        assert_eq!(realocado, state);
        assert!(!realocado.shares_slices(&state));
    }
}
