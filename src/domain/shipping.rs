// ==========================================
// 钢结构 ERP - 发运 (Expedição) 领域模型
// ==========================================

use crate::domain::types::ShipmentStatus;
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Shipment - 发运单（装车清单）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub obra_id: String,
    pub romaneio: String,          // 装箱单号
    #[serde(default)]
    pub pecas: Vec<String>,        // 构件 id 列表
    #[serde(default)]
    pub peso_total_kg: f64,
    pub transportadora: Option<String>,
    pub placa_veiculo: Option<String>,
    pub status: ShipmentStatus,
    pub data_saida: Option<DateTime<Utc>>,
    pub data_entrega: Option<DateTime<Utc>>,
}

impl Identified for Shipment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentPatch {
    pub romaneio: Option<String>,
    pub pecas: Option<Vec<String>>,
    pub peso_total_kg: Option<f64>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub transportadora: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub placa_veiculo: Option<Option<String>>,
    pub status: Option<ShipmentStatus>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_saida: Option<Option<DateTime<Utc>>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_entrega: Option<Option<DateTime<Utc>>>,
}

impl ShipmentPatch {
    pub fn apply(&self, base: &Shipment) -> Shipment {
        Shipment {
            id: base.id.clone(),
            obra_id: base.obra_id.clone(),
            romaneio: self.romaneio.clone().unwrap_or_else(|| base.romaneio.clone()),
            pecas: self.pecas.clone().unwrap_or_else(|| base.pecas.clone()),
            peso_total_kg: self.peso_total_kg.unwrap_or(base.peso_total_kg),
            transportadora: merge_nullable(&self.transportadora, &base.transportadora),
            placa_veiculo: merge_nullable(&self.placa_veiculo, &base.placa_veiculo),
            status: self.status.unwrap_or(base.status),
            data_saida: merge_nullable(&self.data_saida, &base.data_saida),
            data_entrega: merge_nullable(&self.data_entrega, &base.data_entrega),
        }
    }
}
