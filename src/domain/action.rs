// ==========================================
// 钢结构 ERP - 动作协议
// ==========================================
// 职责: 定义 reducer 接受的全部动作（带标签的联合类型）
// 线上格式: {"type": "ADD_OBRA", "payload": {...}}
// 红线: 新增动作必须同时补充 type_tag() 与各切片 reducer 的匹配
// ==========================================

use crate::domain::finance::{FinanceEntry, FinanceEntryPatch};
use crate::domain::hr::{Employee, EmployeePatch, MachinePatch, TeamPatch};
use crate::domain::inventory::{DeliveryMaterial, NewDelivery, StockItem, StockItemPatch};
use crate::domain::measurement::{Measurement, MeasurementPatch, MeasurementRule};
use crate::domain::notification::NewNotification;
use crate::domain::production::{Piece, PiecePatch};
use crate::domain::project::{Budget, BudgetPatch, ProgressPatch, Project, ProjectPatch};
use crate::domain::purchasing::{PurchaseOrder, PurchaseOrderPatch};
use crate::domain::shipping::{Shipment, ShipmentPatch};
use crate::domain::state::StateSnapshot;
use crate::domain::types::{CutStatus, Stage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 按 id 局部更新的通用载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateById<P> {
    pub id: String,
    pub data: P,
}

impl<P> UpdateById<P> {
    pub fn new(id: impl Into<String>, data: P) -> Self {
        Self { id: id.into(), data }
    }
}

// ==========================================
// 领域动作载荷
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgress {
    pub obra_id: String,
    pub progresso: ProgressPatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBudget {
    pub orcamento_id: String,
    pub obra_id: String,
}

/// 库存数量变动（消耗/预留）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub item_id: String,
    pub quantidade: f64,
    pub obra_id: String,
}

/// 库存入库（采购到货）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReceipt {
    pub item_id: String,
    pub quantidade: f64,
    pub compra_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDelivery {
    pub material_id: String,
    pub entrega: NewDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePiece {
    pub peca_id: String,
    pub nova_etapa: Stage,
    pub funcionario_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCutStatus {
    pub peca_id: String,
    pub novo_status: CutStatus,
    pub maquina_id: Option<String>,
    pub funcionario_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivePurchase {
    pub compra_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleEntry {
    pub lancamento_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateTeam {
    pub equipe_id: String,
    pub obra_id: String,
}

// ==========================================
// ErpAction - 动作联合类型
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ErpAction {
    // ===== 工程 =====
    #[serde(rename = "ADD_OBRA")]
    AddProject(Project),
    #[serde(rename = "UPDATE_OBRA")]
    UpdateProject(UpdateById<ProjectPatch>),
    #[serde(rename = "SET_OBRA_ATUAL")]
    SetCurrentProject(String),
    #[serde(rename = "UPDATE_PROGRESSO_OBRA")]
    UpdateProjectProgress(UpdateProgress),

    // ===== 预算 =====
    #[serde(rename = "ADD_ORCAMENTO")]
    AddBudget(Budget),
    #[serde(rename = "UPDATE_ORCAMENTO")]
    UpdateBudget(UpdateById<BudgetPatch>),
    #[serde(rename = "APROVAR_ORCAMENTO")]
    ApproveBudget(ApproveBudget),

    // ===== 库存 =====
    #[serde(rename = "ADD_ITEM_ESTOQUE")]
    AddStockItem(StockItem),
    #[serde(rename = "UPDATE_ITEM_ESTOQUE")]
    UpdateStockItem(UpdateById<StockItemPatch>),
    #[serde(rename = "CONSUMIR_ESTOQUE")]
    ConsumeStock(StockMovement),
    #[serde(rename = "ADICIONAR_ESTOQUE")]
    AddStock(StockReceipt),
    #[serde(rename = "RESERVAR_ESTOQUE")]
    ReserveStock(StockMovement),
    #[serde(rename = "ADD_MATERIAL_ESTOQUE")]
    AddDeliveryMaterial(DeliveryMaterial),
    #[serde(rename = "REGISTRAR_ENTREGA_MATERIAL")]
    RegisterDelivery(RegisterDelivery),

    // ===== 生产 =====
    #[serde(rename = "SET_PECAS")]
    SetPieces(Vec<Piece>),
    #[serde(rename = "ADD_PECAS")]
    AddPieces(Vec<Piece>),
    #[serde(rename = "UPDATE_PECA")]
    UpdatePiece(UpdateById<PiecePatch>),
    #[serde(rename = "MOVER_PECA_ETAPA")]
    MovePiece(MovePiece),
    #[serde(rename = "UPDATE_STATUS_CORTE")]
    UpdateCutStatus(UpdateCutStatus),

    // ===== 发运 =====
    #[serde(rename = "ADD_EXPEDICAO")]
    AddShipment(Shipment),
    #[serde(rename = "UPDATE_EXPEDICAO")]
    UpdateShipment(UpdateById<ShipmentPatch>),

    // ===== 采购 =====
    #[serde(rename = "ADD_COMPRA")]
    AddPurchase(PurchaseOrder),
    #[serde(rename = "UPDATE_COMPRA")]
    UpdatePurchase(UpdateById<PurchaseOrderPatch>),
    #[serde(rename = "RECEBER_COMPRA")]
    ReceivePurchase(ReceivePurchase),

    // ===== 计量 =====
    #[serde(rename = "ADD_MEDICAO")]
    AddMeasurement(Measurement),
    #[serde(rename = "UPDATE_MEDICAO")]
    UpdateMeasurement(UpdateById<MeasurementPatch>),
    #[serde(rename = "UPDATE_CONFIG_MEDICAO")]
    UpdateMeasurementConfig(BTreeMap<String, MeasurementRule>),

    // ===== 财务 =====
    #[serde(rename = "ADD_LANCAMENTO")]
    AddFinanceEntry(FinanceEntry),
    #[serde(rename = "UPDATE_LANCAMENTO")]
    UpdateFinanceEntry(UpdateById<FinanceEntryPatch>),
    #[serde(rename = "BAIXAR_LANCAMENTO")]
    SettleFinanceEntry(SettleEntry),

    // ===== 人力与设备 =====
    #[serde(rename = "ADD_FUNCIONARIO")]
    AddEmployee(Employee),
    #[serde(rename = "UPDATE_FUNCIONARIO")]
    UpdateEmployee(UpdateById<EmployeePatch>),
    #[serde(rename = "UPDATE_EQUIPE")]
    UpdateTeam(UpdateById<TeamPatch>),
    #[serde(rename = "UPDATE_MAQUINA")]
    UpdateMachine(UpdateById<MachinePatch>),
    #[serde(rename = "ALOCAR_EQUIPE")]
    AllocateTeam(AllocateTeam),

    // ===== 界面 =====
    #[serde(rename = "SET_FILTROS")]
    SetFilters(BTreeMap<String, String>),
    #[serde(rename = "SET_LOADING")]
    SetLoading(bool),
    #[serde(rename = "ADD_NOTIFICACAO")]
    AddNotification(NewNotification),
    #[serde(rename = "REMOVE_NOTIFICACAO")]
    RemoveNotification(String),
    #[serde(rename = "SET_LISTAS")]
    SetLists(BTreeMap<String, Vec<String>>),

    // ===== 全局 =====
    #[serde(rename = "INIT_FROM_SUPABASE")]
    InitFromSnapshot(StateSnapshot),
}

impl ErpAction {
    /// 动作类型标签（与线上 type 字段一致，用于日志与审计）
    pub fn type_tag(&self) -> &'static str {
        match self {
            ErpAction::AddProject(_) => "ADD_OBRA",
            ErpAction::UpdateProject(_) => "UPDATE_OBRA",
            ErpAction::SetCurrentProject(_) => "SET_OBRA_ATUAL",
            ErpAction::UpdateProjectProgress(_) => "UPDATE_PROGRESSO_OBRA",
            ErpAction::AddBudget(_) => "ADD_ORCAMENTO",
            ErpAction::UpdateBudget(_) => "UPDATE_ORCAMENTO",
            ErpAction::ApproveBudget(_) => "APROVAR_ORCAMENTO",
            ErpAction::AddStockItem(_) => "ADD_ITEM_ESTOQUE",
            ErpAction::UpdateStockItem(_) => "UPDATE_ITEM_ESTOQUE",
            ErpAction::ConsumeStock(_) => "CONSUMIR_ESTOQUE",
            ErpAction::AddStock(_) => "ADICIONAR_ESTOQUE",
            ErpAction::ReserveStock(_) => "RESERVAR_ESTOQUE",
            ErpAction::AddDeliveryMaterial(_) => "ADD_MATERIAL_ESTOQUE",
            ErpAction::RegisterDelivery(_) => "REGISTRAR_ENTREGA_MATERIAL",
            ErpAction::SetPieces(_) => "SET_PECAS",
            ErpAction::AddPieces(_) => "ADD_PECAS",
            ErpAction::UpdatePiece(_) => "UPDATE_PECA",
            ErpAction::MovePiece(_) => "MOVER_PECA_ETAPA",
            ErpAction::UpdateCutStatus(_) => "UPDATE_STATUS_CORTE",
            ErpAction::AddShipment(_) => "ADD_EXPEDICAO",
            ErpAction::UpdateShipment(_) => "UPDATE_EXPEDICAO",
            ErpAction::AddPurchase(_) => "ADD_COMPRA",
            ErpAction::UpdatePurchase(_) => "UPDATE_COMPRA",
            ErpAction::ReceivePurchase(_) => "RECEBER_COMPRA",
            ErpAction::AddMeasurement(_) => "ADD_MEDICAO",
            ErpAction::UpdateMeasurement(_) => "UPDATE_MEDICAO",
            ErpAction::UpdateMeasurementConfig(_) => "UPDATE_CONFIG_MEDICAO",
            ErpAction::AddFinanceEntry(_) => "ADD_LANCAMENTO",
            ErpAction::UpdateFinanceEntry(_) => "UPDATE_LANCAMENTO",
            ErpAction::SettleFinanceEntry(_) => "BAIXAR_LANCAMENTO",
            ErpAction::AddEmployee(_) => "ADD_FUNCIONARIO",
            ErpAction::UpdateEmployee(_) => "UPDATE_FUNCIONARIO",
            ErpAction::UpdateTeam(_) => "UPDATE_EQUIPE",
            ErpAction::UpdateMachine(_) => "UPDATE_MAQUINA",
            ErpAction::AllocateTeam(_) => "ALOCAR_EQUIPE",
            ErpAction::SetFilters(_) => "SET_FILTROS",
            ErpAction::SetLoading(_) => "SET_LOADING",
            ErpAction::AddNotification(_) => "ADD_NOTIFICACAO",
            ErpAction::RemoveNotification(_) => "REMOVE_NOTIFICACAO",
            ErpAction::SetLists(_) => "SET_LISTAS",
            ErpAction::InitFromSnapshot(_) => "INIT_FROM_SUPABASE",
        }
    }

    /// 从线上 JSON 解析动作
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_approve_budget() {
        let raw = r#"{"type": "APROVAR_ORCAMENTO", "payload": {"orcamentoId": "O1", "obraId": "B1"}}"#;
        let action = ErpAction::from_json(raw).unwrap();
        assert_eq!(
            action,
            ErpAction::ApproveBudget(ApproveBudget {
                orcamento_id: "O1".to_string(),
                obra_id: "B1".to_string(),
            })
        );
        assert_eq!(action.type_tag(), "APROVAR_ORCAMENTO");
    }

    #[test]
    fn test_decode_scalar_payloads() {
        let action = ErpAction::from_json(r#"{"type": "SET_LOADING", "payload": false}"#).unwrap();
        assert_eq!(action, ErpAction::SetLoading(false));

        let action =
            ErpAction::from_json(r#"{"type": "SET_OBRA_ATUAL", "payload": "B7"}"#).unwrap();
        assert_eq!(action, ErpAction::SetCurrentProject("B7".to_string()));
    }

    #[test]
    fn test_decode_partial_update() {
        let raw = r#"{"type": "UPDATE_OBRA", "payload": {"id": "B1", "data": {"nome": "Ponte"}}}"#;
        match ErpAction::from_json(raw).unwrap() {
            ErpAction::UpdateProject(update) => {
                assert_eq!(update.id, "B1");
                assert_eq!(update.data.nome.as_deref(), Some("Ponte"));
                assert!(update.data.status.is_none());
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let raw = r#"{"type": "DELETE_EVERYTHING", "payload": null}"#;
        assert!(ErpAction::from_json(raw).is_err());
    }

    #[test]
    fn test_type_tag_matches_wire_tag() {
        let action = ErpAction::MovePiece(MovePiece {
            peca_id: "P1".to_string(),
            nova_etapa: Stage::Solda,
            funcionario_id: "F1".to_string(),
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.type_tag());
        assert_eq!(json["payload"]["novaEtapa"], "solda");
    }
}
