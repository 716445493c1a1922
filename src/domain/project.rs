// ==========================================
// 钢结构 ERP - 工程 (Obra) 与预算 (Orçamento) 领域模型
// ==========================================
// 职责: 定义工程、工序进度、预算实体及其局部更新结构
// 对齐: 字段名与前端动作协议一致（camelCase 葡语字段）
// ==========================================

use crate::domain::types::{BudgetStatus, ProjectStatus};
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Project - 工程
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub nome: String,                       // 工程名称
    pub cliente: String,                    // 业主
    pub status: ProjectStatus,
    #[serde(default)]
    pub valor_contrato: f64,                // 合同金额
    #[serde(default)]
    pub peso_total_kg: f64,                 // 钢结构总重
    pub data_inicio: Option<NaiveDate>,
    pub previsao_entrega: Option<NaiveDate>, // 计划交付日期
    #[serde(default)]
    pub progresso: ProjectProgress,
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

// ==========================================
// ProjectProgress - 分工序完成百分比
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectProgress {
    pub projeto: f64,    // 深化设计
    pub corte: f64,      // 下料
    pub fabricacao: f64, // 组立
    pub solda: f64,      // 焊接
    pub pintura: f64,    // 涂装
    pub expedicao: f64,  // 发运
    pub montagem: f64,   // 现场安装
}

/// 工序进度的局部更新（未给出的字段保持原值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressPatch {
    pub projeto: Option<f64>,
    pub corte: Option<f64>,
    pub fabricacao: Option<f64>,
    pub solda: Option<f64>,
    pub pintura: Option<f64>,
    pub expedicao: Option<f64>,
    pub montagem: Option<f64>,
}

impl ProgressPatch {
    pub fn apply(&self, base: &ProjectProgress) -> ProjectProgress {
        ProjectProgress {
            projeto: self.projeto.unwrap_or(base.projeto),
            corte: self.corte.unwrap_or(base.corte),
            fabricacao: self.fabricacao.unwrap_or(base.fabricacao),
            solda: self.solda.unwrap_or(base.solda),
            pintura: self.pintura.unwrap_or(base.pintura),
            expedicao: self.expedicao.unwrap_or(base.expedicao),
            montagem: self.montagem.unwrap_or(base.montagem),
        }
    }
}

/// 工程的局部更新（浅合并）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub nome: Option<String>,
    pub cliente: Option<String>,
    pub status: Option<ProjectStatus>,
    pub valor_contrato: Option<f64>,
    pub peso_total_kg: Option<f64>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub previsao_entrega: Option<Option<NaiveDate>>,
    pub progresso: Option<ProjectProgress>,
}

impl ProjectPatch {
    pub fn apply(&self, base: &Project) -> Project {
        Project {
            id: base.id.clone(),
            nome: self.nome.clone().unwrap_or_else(|| base.nome.clone()),
            cliente: self.cliente.clone().unwrap_or_else(|| base.cliente.clone()),
            status: self.status.unwrap_or(base.status),
            valor_contrato: self.valor_contrato.unwrap_or(base.valor_contrato),
            peso_total_kg: self.peso_total_kg.unwrap_or(base.peso_total_kg),
            data_inicio: merge_nullable(&self.data_inicio, &base.data_inicio),
            previsao_entrega: merge_nullable(&self.previsao_entrega, &base.previsao_entrega),
            progresso: self
                .progresso
                .clone()
                .unwrap_or_else(|| base.progresso.clone()),
        }
    }
}

// ==========================================
// Budget - 预算/报价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub obra_id: String,          // 关联工程
    pub numero: String,           // 报价单号
    pub cliente: String,
    #[serde(default)]
    pub valor_total: f64,
    pub status: BudgetStatus,
    pub data_criacao: Option<DateTime<Utc>>,
    pub data_aprovacao: Option<DateTime<Utc>>, // 审批时间（仅审批动作写入）
}

impl Identified for Budget {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetPatch {
    pub obra_id: Option<String>,
    pub numero: Option<String>,
    pub cliente: Option<String>,
    pub valor_total: Option<f64>,
    pub status: Option<BudgetStatus>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub data_aprovacao: Option<Option<DateTime<Utc>>>,
}

impl BudgetPatch {
    pub fn apply(&self, base: &Budget) -> Budget {
        Budget {
            id: base.id.clone(),
            obra_id: self.obra_id.clone().unwrap_or_else(|| base.obra_id.clone()),
            numero: self.numero.clone().unwrap_or_else(|| base.numero.clone()),
            cliente: self.cliente.clone().unwrap_or_else(|| base.cliente.clone()),
            valor_total: self.valor_total.unwrap_or(base.valor_total),
            status: self.status.unwrap_or(base.status),
            data_criacao: base.data_criacao,
            data_aprovacao: merge_nullable(&self.data_aprovacao, &base.data_aprovacao),
        }
    }
}
