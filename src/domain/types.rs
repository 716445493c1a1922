// ==========================================
// 钢结构 ERP - 领域类型定义
// ==========================================
// 职责: 各业务域共用的状态枚举
// 序列化格式: snake_case (与前端动作协议一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工程状态 (Obra Status)
// ==========================================
// 预算审批通过时由 EmProjeto 等状态推进到 Aprovado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Orcamento,  // 报价中
    EmProjeto,  // 设计中
    Aprovado,   // 已审批
    EmProducao, // 生产中
    EmMontagem, // 安装中
    Concluido,  // 已完工
    Cancelado,  // 已取消
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Orcamento => write!(f, "orcamento"),
            ProjectStatus::EmProjeto => write!(f, "em_projeto"),
            ProjectStatus::Aprovado => write!(f, "aprovado"),
            ProjectStatus::EmProducao => write!(f, "em_producao"),
            ProjectStatus::EmMontagem => write!(f, "em_montagem"),
            ProjectStatus::Concluido => write!(f, "concluido"),
            ProjectStatus::Cancelado => write!(f, "cancelado"),
        }
    }
}

// ==========================================
// 预算状态 (Orçamento Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Rascunho,  // 草稿
    Pendente,  // 待审批
    Aprovado,  // 已审批
    Rejeitado, // 已驳回
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::Rascunho => write!(f, "rascunho"),
            BudgetStatus::Pendente => write!(f, "pendente"),
            BudgetStatus::Aprovado => write!(f, "aprovado"),
            BudgetStatus::Rejeitado => write!(f, "rejeitado"),
        }
    }
}

// ==========================================
// 生产工序 (Etapa)
// ==========================================
// 顺序即看板列顺序: Aguardando < Corte < ... < Expedido
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Aguardando, // 待排
    Corte,      // 下料
    Fabricacao, // 组立
    Solda,      // 焊接
    Pintura,    // 涂装
    Expedido,   // 已发运
}

impl Stage {
    /// 全部工序（看板列顺序）
    pub const ALL: [Stage; 6] = [
        Stage::Aguardando,
        Stage::Corte,
        Stage::Fabricacao,
        Stage::Solda,
        Stage::Pintura,
        Stage::Expedido,
    ];

    /// 转换为动作协议中的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Aguardando => "aguardando",
            Stage::Corte => "corte",
            Stage::Fabricacao => "fabricacao",
            Stage::Solda => "solda",
            Stage::Pintura => "pintura",
            Stage::Expedido => "expedido",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 下料状态 (Status de Corte)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutStatus {
    Pendente,   // 未排
    Programado, // 已排程
    EmCorte,    // 切割中
    Cortado,    // 已切割
}

impl fmt::Display for CutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutStatus::Pendente => write!(f, "pendente"),
            CutStatus::Programado => write!(f, "programado"),
            CutStatus::EmCorte => write!(f, "em_corte"),
            CutStatus::Cortado => write!(f, "cortado"),
        }
    }
}

// ==========================================
// 到货状态 (Material Status)
// ==========================================
// 红线: 纯粹由累计到货重量与订货重量派生,不可人工指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    Pendente, // 未到货
    Parcial,  // 部分到货
    Completo, // 全部到货
}

impl MaterialStatus {
    /// 根据累计到货重量派生状态
    pub fn derive(peso_recebido: f64, peso_pedido: f64) -> Self {
        if peso_recebido >= peso_pedido {
            MaterialStatus::Completo
        } else if peso_recebido > 0.0 {
            MaterialStatus::Parcial
        } else {
            MaterialStatus::Pendente
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialStatus::Pendente => write!(f, "pendente"),
            MaterialStatus::Parcial => write!(f, "parcial"),
            MaterialStatus::Completo => write!(f, "completo"),
        }
    }
}

// ==========================================
// 发运状态 (Expedição Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Preparando, // 备货
    Carregando, // 装车
    EmTransito, // 运输中
    Entregue,   // 已签收
}

// ==========================================
// 采购单状态 (Compra Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Solicitada, // 请购
    Cotacao,    // 询价
    Aprovada,   // 已批准
    Enviada,    // 已下单
    Recebida,   // 已收货
    Cancelada,  // 已取消
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseStatus::Solicitada => write!(f, "solicitada"),
            PurchaseStatus::Cotacao => write!(f, "cotacao"),
            PurchaseStatus::Aprovada => write!(f, "aprovada"),
            PurchaseStatus::Enviada => write!(f, "enviada"),
            PurchaseStatus::Recebida => write!(f, "recebida"),
            PurchaseStatus::Cancelada => write!(f, "cancelada"),
        }
    }
}

// ==========================================
// 计量状态 (Medição Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementStatus {
    Rascunho, // 草稿
    Enviada,  // 已提交业主
    Aprovada, // 业主已确认
    Faturada, // 已开票
}

// ==========================================
// 财务流水 (Lançamento)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Receita, // 收入
    Despesa, // 支出
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Pendente,  // 待结算
    Pago,      // 已结算
    Atrasado,  // 已逾期
    Cancelado, // 已作废
}

// ==========================================
// 设备状态 (Máquina Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Operando,   // 运行
    Parada,     // 停机
    Manutencao, // 检修
}

// ==========================================
// 通知类型 (Notificação)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Sucesso,
    Alerta,
    Erro,
}
