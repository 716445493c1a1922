// ==========================================
// 钢结构 ERP - 人力与设备 (RH) 领域模型
// ==========================================
// 职责: 员工、班组、设备档案; 班组按工程分配
// ==========================================

use crate::domain::types::MachineStatus;
use crate::domain::patch::{merge_nullable, nullable};
use crate::domain::Identified;
use serde::{Deserialize, Serialize};

// ==========================================
// Employee - 员工
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub nome: String,
    pub funcao: String,            // 岗位（焊工/铆工/涂装工...）
    pub equipe_id: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Identified for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    pub nome: Option<String>,
    pub funcao: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub equipe_id: Option<Option<String>>,
    pub ativo: Option<bool>,
}

impl EmployeePatch {
    pub fn apply(&self, base: &Employee) -> Employee {
        Employee {
            id: base.id.clone(),
            nome: self.nome.clone().unwrap_or_else(|| base.nome.clone()),
            funcao: self.funcao.clone().unwrap_or_else(|| base.funcao.clone()),
            equipe_id: merge_nullable(&self.equipe_id, &base.equipe_id),
            ativo: self.ativo.unwrap_or(base.ativo),
        }
    }
}

// ==========================================
// Team - 班组
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub nome: String,
    pub lider_id: Option<String>,
    #[serde(default)]
    pub membros: Vec<String>,
    pub obra_atual: Option<String>, // 当前分配的工程
}

impl Identified for Team {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamPatch {
    pub nome: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub lider_id: Option<Option<String>>,
    pub membros: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub obra_atual: Option<Option<String>>,
}

impl TeamPatch {
    pub fn apply(&self, base: &Team) -> Team {
        Team {
            id: base.id.clone(),
            nome: self.nome.clone().unwrap_or_else(|| base.nome.clone()),
            lider_id: merge_nullable(&self.lider_id, &base.lider_id),
            membros: self.membros.clone().unwrap_or_else(|| base.membros.clone()),
            obra_atual: merge_nullable(&self.obra_atual, &base.obra_atual),
        }
    }
}

// ==========================================
// Machine - 设备
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub nome: String,
    pub tipo: String,              // 等离子切割机/锯床/钻床...
    pub status: MachineStatus,
    pub obra_atual: Option<String>,
}

impl Identified for Machine {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachinePatch {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub status: Option<MachineStatus>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub obra_atual: Option<Option<String>>,
}

impl MachinePatch {
    pub fn apply(&self, base: &Machine) -> Machine {
        Machine {
            id: base.id.clone(),
            nome: self.nome.clone().unwrap_or_else(|| base.nome.clone()),
            tipo: self.tipo.clone().unwrap_or_else(|| base.tipo.clone()),
            status: self.status.unwrap_or(base.status),
            obra_atual: merge_nullable(&self.obra_atual, &base.obra_atual),
        }
    }
}
