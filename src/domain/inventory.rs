// ==========================================
// 钢结构 ERP - 库存领域模型
// ==========================================
// 职责: 库存物料（按数量管理）与到货物料（按重量管理）
// 红线: reservado 不可为负; 到货明细只追加不修改
// ==========================================

use crate::domain::types::MaterialStatus;
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// StockItem - 库存物料
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    pub codigo: String,     // 物料编码
    pub descricao: String,  // 规格描述（如 W200x26.6 A572）
    pub categoria: String,  // 型材/板材/紧固件/涂料...
    pub unidade: String,    // 计量单位
    #[serde(default)]
    pub quantidade: f64,    // 账面数量
    #[serde(default)]
    pub reservado: f64,     // 已预留数量
    #[serde(default)]
    pub quantidade_minima: f64, // 安全库存
    pub obra_reservada: Option<String>, // 最近一次预留所属工程
}

impl Identified for StockItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StockItem {
    /// 可用数量 = 账面数量 - 预留数量
    pub fn disponivel(&self) -> f64 {
        self.quantidade - self.reservado
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockItemPatch {
    pub codigo: Option<String>,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub unidade: Option<String>,
    pub quantidade: Option<f64>,
    pub reservado: Option<f64>,
    pub quantidade_minima: Option<f64>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub obra_reservada: Option<Option<String>>,
}

impl StockItemPatch {
    pub fn apply(&self, base: &StockItem) -> StockItem {
        StockItem {
            id: base.id.clone(),
            codigo: self.codigo.clone().unwrap_or_else(|| base.codigo.clone()),
            descricao: self.descricao.clone().unwrap_or_else(|| base.descricao.clone()),
            categoria: self.categoria.clone().unwrap_or_else(|| base.categoria.clone()),
            unidade: self.unidade.clone().unwrap_or_else(|| base.unidade.clone()),
            quantidade: self.quantidade.unwrap_or(base.quantidade),
            reservado: self.reservado.unwrap_or(base.reservado),
            quantidade_minima: self.quantidade_minima.unwrap_or(base.quantidade_minima),
            obra_reservada: merge_nullable(&self.obra_reservada, &base.obra_reservada),
        }
    }
}

// ==========================================
// DeliveryMaterial - 按重量跟踪到货的物料批次
// ==========================================
// 派生字段: peso_falta / percentual_recebido / status
// 派生规则见 DeliveryMaterial::with_delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryMaterial {
    pub id: String,
    pub descricao: String,
    pub obra_id: Option<String>,
    pub fornecedor: Option<String>,
    pub peso_pedido: f64,          // 订货重量（kg）
    #[serde(default)]
    pub peso_recebido: f64,        // 累计到货重量（kg）
    #[serde(default)]
    pub peso_falta: f64,           // 欠交重量（kg, ≥0）
    #[serde(default)]
    pub percentual_recebido: f64,  // 到货百分比 [0,100]
    pub status: MaterialStatus,
    #[serde(default)]
    pub entregas: Vec<Delivery>,   // 到货明细（只追加）
}

impl Identified for DeliveryMaterial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl DeliveryMaterial {
    /// 登记一次到货，重新计算派生字段并追加明细
    pub fn with_delivery(&self, entrega: Delivery) -> DeliveryMaterial {
        let peso_recebido = self.peso_recebido + entrega.peso_kg;
        let peso_falta = (self.peso_pedido - peso_recebido).max(0.0);
        let percentual_recebido = received_percentage(peso_recebido, self.peso_pedido);

        let mut entregas = self.entregas.clone();
        entregas.push(entrega);

        DeliveryMaterial {
            peso_recebido,
            peso_falta,
            percentual_recebido,
            status: MaterialStatus::derive(peso_recebido, self.peso_pedido),
            entregas,
            ..self.clone()
        }
    }
}

/// 到货百分比，限制在 [0,100]
///
/// 订货重量 ≤ 0 时无法求比例: 已到货重量不低于订货重量视为 100，否则为 0
fn received_percentage(peso_recebido: f64, peso_pedido: f64) -> f64 {
    if peso_pedido <= 0.0 {
        return if peso_recebido >= peso_pedido { 100.0 } else { 0.0 };
    }
    (peso_recebido / peso_pedido * 100.0).clamp(0.0, 100.0)
}

// ==========================================
// Delivery - 到货明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,            // 系统生成
    pub data: DateTime<Utc>,   // 登记时间（系统生成）
    pub peso_kg: f64,
    pub nota_fiscal: Option<String>,
    pub recebido_por: Option<String>,
    pub observacao: Option<String>,
}

/// 到货登记载荷（id 与时间由 reducer 生成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDelivery {
    pub peso_kg: f64,
    #[serde(default)]
    pub nota_fiscal: Option<String>,
    #[serde(default)]
    pub recebido_por: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
}

impl NewDelivery {
    pub fn into_delivery(self, id: String, data: DateTime<Utc>) -> Delivery {
        Delivery {
            id,
            data,
            peso_kg: self.peso_kg,
            nota_fiscal: self.nota_fiscal,
            recebido_por: self.recebido_por,
            observacao: self.observacao,
        }
    }
}
