// ==========================================
// 钢结构 ERP - 采购 (Compra) 领域模型
// ==========================================

use crate::domain::types::PurchaseStatus;
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// PurchaseOrder - 采购单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub numero: String,
    pub fornecedor: String,
    pub obra_id: Option<String>,
    #[serde(default)]
    pub itens: Vec<PurchaseLine>,
    #[serde(default)]
    pub valor_total: f64,
    pub status: PurchaseStatus,
    pub data_pedido: Option<DateTime<Utc>>,
    pub data_recebimento: Option<DateTime<Utc>>, // 收货动作写入
}

impl Identified for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 采购明细行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    pub item_id: Option<String>, // 对应库存物料（可为空: 非库存采购）
    pub descricao: String,
    pub quantidade: f64,
    pub valor_unitario: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrderPatch {
    pub numero: Option<String>,
    pub fornecedor: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub obra_id: Option<Option<String>>,
    pub itens: Option<Vec<PurchaseLine>>,
    pub valor_total: Option<f64>,
    pub status: Option<PurchaseStatus>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_pedido: Option<Option<DateTime<Utc>>>,
}

impl PurchaseOrderPatch {
    pub fn apply(&self, base: &PurchaseOrder) -> PurchaseOrder {
        PurchaseOrder {
            id: base.id.clone(),
            numero: self.numero.clone().unwrap_or_else(|| base.numero.clone()),
            fornecedor: self
                .fornecedor
                .clone()
                .unwrap_or_else(|| base.fornecedor.clone()),
            obra_id: merge_nullable(&self.obra_id, &base.obra_id),
            itens: self.itens.clone().unwrap_or_else(|| base.itens.clone()),
            valor_total: self.valor_total.unwrap_or(base.valor_total),
            status: self.status.unwrap_or(base.status),
            data_pedido: merge_nullable(&self.data_pedido, &base.data_pedido),
            data_recebimento: base.data_recebimento,
        }
    }
}
