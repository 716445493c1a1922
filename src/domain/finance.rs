// ==========================================
// 钢结构 ERP - 财务流水 (Lançamento) 领域模型
// ==========================================

use crate::domain::types::{EntryKind, EntryStatus};
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FinanceEntry - 应收/应付流水
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    pub id: String,
    pub tipo: EntryKind,
    pub descricao: String,
    pub categoria: Option<String>,
    pub obra_id: Option<String>,
    pub valor: f64,
    pub vencimento: NaiveDate,
    pub status: EntryStatus,
    pub data_pagamento: Option<DateTime<Utc>>, // 结算动作写入
}

impl Identified for FinanceEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FinanceEntry {
    /// 带符号金额: 收入为正,支出为负
    pub fn signed_value(&self) -> f64 {
        match self.tipo {
            EntryKind::Receita => self.valor,
            EntryKind::Despesa => -self.valor,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceEntryPatch {
    pub tipo: Option<EntryKind>,
    pub descricao: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub categoria: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub obra_id: Option<Option<String>>,
    pub valor: Option<f64>,
    pub vencimento: Option<NaiveDate>,
    pub status: Option<EntryStatus>,
}

impl FinanceEntryPatch {
    pub fn apply(&self, base: &FinanceEntry) -> FinanceEntry {
        FinanceEntry {
            id: base.id.clone(),
            tipo: self.tipo.unwrap_or(base.tipo),
            descricao: self.descricao.clone().unwrap_or_else(|| base.descricao.clone()),
            categoria: merge_nullable(&self.categoria, &base.categoria),
            obra_id: merge_nullable(&self.obra_id, &base.obra_id),
            valor: self.valor.unwrap_or(base.valor),
            vencimento: self.vencimento.unwrap_or(base.vencimento),
            status: self.status.unwrap_or(base.status),
            data_pagamento: base.data_pagamento,
        }
    }
}
