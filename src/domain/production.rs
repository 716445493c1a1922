// ==========================================
// 钢结构 ERP - 生产构件 (Peça) 领域模型
// ==========================================
// 职责: 构件在工序看板中的流转与审计信息
// 红线: 工序审计按 Stage 枚举键存储,不拼接字段名
// ==========================================

use crate::domain::types::{CutStatus, Stage};
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Piece - 构件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: String,
    pub obra_id: String,
    pub marca: String,          // 构件编号（图纸标记）
    pub descricao: String,
    #[serde(default)]
    pub peso_kg: f64,
    #[serde(default = "default_quantidade")]
    pub quantidade: u32,
    pub etapa: Stage,
    pub status_corte: CutStatus,
    pub maquina_corte_id: Option<String>,
    pub funcionario_corte_id: Option<String>,
    pub data_corte: Option<DateTime<Utc>>, // 仅在状态变为 cortado 时写入
    #[serde(default)]
    pub audit_by_stage: BTreeMap<Stage, StageAudit>,
}

fn default_quantidade() -> u32 {
    1
}

impl Identified for Piece {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Piece {
    /// 进入指定工序的审计记录
    pub fn audit(&self, stage: Stage) -> Option<&StageAudit> {
        self.audit_by_stage.get(&stage)
    }
}

// ==========================================
// StageAudit - 工序审计
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageAudit {
    pub timestamp: DateTime<Utc>,
    pub operator_id: String, // 执行移动的员工
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PiecePatch {
    pub obra_id: Option<String>,
    pub marca: Option<String>,
    pub descricao: Option<String>,
    pub peso_kg: Option<f64>,
    pub quantidade: Option<u32>,
    pub etapa: Option<Stage>,
    pub status_corte: Option<CutStatus>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub maquina_corte_id: Option<Option<String>>,
}

impl PiecePatch {
    pub fn apply(&self, base: &Piece) -> Piece {
        Piece {
            obra_id: self.obra_id.clone().unwrap_or_else(|| base.obra_id.clone()),
            marca: self.marca.clone().unwrap_or_else(|| base.marca.clone()),
            descricao: self.descricao.clone().unwrap_or_else(|| base.descricao.clone()),
            peso_kg: self.peso_kg.unwrap_or(base.peso_kg),
            quantidade: self.quantidade.unwrap_or(base.quantidade),
            etapa: self.etapa.unwrap_or(base.etapa),
            status_corte: self.status_corte.unwrap_or(base.status_corte),
            maquina_corte_id: merge_nullable(&self.maquina_corte_id, &base.maquina_corte_id),
            ..base.clone()
        }
    }
}
