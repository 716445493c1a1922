// ==========================================
// 钢结构 ERP - 计量 (Medição) 领域模型
// ==========================================
// 职责: 按进度向业主计量请款
// 计量规则按阶段类型（如 "fabricacao"/"montagem"）配置
// ==========================================

use crate::domain::types::MeasurementStatus;
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: String,
    pub obra_id: String,
    pub numero: u32,               // 第 N 期计量
    pub tipo: String,              // 阶段类型（configMedicao 的键）
    #[serde(default)]
    pub percentual_executado: f64,
    #[serde(default)]
    pub valor: f64,
    pub data_medicao: Option<NaiveDate>,
    pub status: MeasurementStatus,
}

impl Identified for Measurement {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementPatch {
    pub tipo: Option<String>,
    pub percentual_executado: Option<f64>,
    pub valor: Option<f64>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_medicao: Option<Option<NaiveDate>>,
    pub status: Option<MeasurementStatus>,
}

impl MeasurementPatch {
    pub fn apply(&self, base: &Measurement) -> Measurement {
        Measurement {
            tipo: self.tipo.clone().unwrap_or_else(|| base.tipo.clone()),
            percentual_executado: self
                .percentual_executado
                .unwrap_or(base.percentual_executado),
            valor: self.valor.unwrap_or(base.valor),
            data_medicao: merge_nullable(&self.data_medicao, &base.data_medicao),
            status: self.status.unwrap_or(base.status),
            ..base.clone()
        }
    }
}

// ==========================================
// MeasurementRule - 阶段计量规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRule {
    pub percentual_contrato: f64, // 该阶段占合同额比例（%）
    #[serde(default)]
    pub descricao: Option<String>,
}
