// ==========================================
// 钢结构 ERP - 状态查询（派生视图）
// ==========================================
// 职责: 从状态树计算驾驶舱/看板所需的只读视图
// 红线: 只读,不修改状态
// ==========================================

use crate::domain::inventory::{DeliveryMaterial, StockItem};
use crate::domain::production::Piece;
use crate::domain::project::{Budget, Project};
use crate::domain::state::ErpState;
use crate::domain::types::{MaterialStatus, Stage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 当前选中的工程
pub fn current_project(state: &ErpState) -> Option<Arc<Project>> {
    let id = state.obras.obra_atual.as_deref()?;
    state.obras.obras.iter().find(|obra| obra.id == id).cloned()
}

/// 某工程的全部预算
pub fn budgets_for_project(state: &ErpState, obra_id: &str) -> Vec<Arc<Budget>> {
    state
        .orcamentos
        .orcamentos
        .iter()
        .filter(|orcamento| orcamento.obra_id == obra_id)
        .cloned()
        .collect()
}

/// 可用数量（账面 - 预留）
pub fn available_quantity(state: &ErpState, item_id: &str) -> Option<f64> {
    state
        .estoque
        .itens
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| item.disponivel())
}

/// 低于安全库存的物料
pub fn low_stock_items(state: &ErpState) -> Vec<Arc<StockItem>> {
    state
        .estoque
        .itens
        .iter()
        .filter(|item| item.quantidade <= item.quantidade_minima)
        .cloned()
        .collect()
}

/// 尚未全部到货的物料
pub fn outstanding_materials(state: &ErpState) -> Vec<Arc<DeliveryMaterial>> {
    state
        .estoque
        .materiais
        .iter()
        .filter(|material| material.status != MaterialStatus::Completo)
        .cloned()
        .collect()
}

/// 工序看板: 按工序分组（每个工序都有一列,可为空）
///
/// # 参数
/// - obra_id: Some 时只统计该工程的构件
pub fn pieces_by_stage(state: &ErpState, obra_id: Option<&str>) -> BTreeMap<Stage, Vec<Arc<Piece>>> {
    let mut board: BTreeMap<Stage, Vec<Arc<Piece>>> =
        Stage::ALL.iter().map(|stage| (*stage, Vec::new())).collect();

    for peca in state.producao.pecas.iter() {
        if obra_id.map_or(true, |id| peca.obra_id == id) {
            board.entry(peca.etapa).or_default().push(Arc::clone(peca));
        }
    }
    board
}

// ==========================================
// StageSummary - 工序汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    pub pecas: usize,
    pub peso_kg: f64, // 构件重量 × 数量
}

/// 生产汇总: 每个工序的构件数与重量
pub fn production_summary(state: &ErpState, obra_id: Option<&str>) -> BTreeMap<Stage, StageSummary> {
    pieces_by_stage(state, obra_id)
        .into_iter()
        .map(|(stage, pecas)| {
            let summary = StageSummary {
                pecas: pecas.len(),
                peso_kg: pecas
                    .iter()
                    .map(|peca| peca.peso_kg * f64::from(peca.quantidade))
                    .sum(),
            };
            (stage, summary)
        })
        .collect()
}

/// 未读通知数
pub fn unread_notifications(state: &ErpState) -> usize {
    state.ui.notificacoes.iter().filter(|n| !n.lida).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;
    use crate::domain::state::ProductionState;
    use crate::domain::types::CutStatus;

    fn piece(id: &str, obra_id: &str, etapa: Stage, peso_kg: f64, quantidade: u32) -> Piece {
        Piece {
            id: id.to_string(),
            obra_id: obra_id.to_string(),
            marca: id.to_string(),
            descricao: String::new(),
            peso_kg,
            quantidade,
            etapa,
            status_corte: CutStatus::Pendente,
            maquina_corte_id: None,
            funcionario_corte_id: None,
            data_corte: None,
            audit_by_stage: BTreeMap::new(),
        }
    }

    fn state() -> ErpState {
        ErpState {
            producao: Arc::new(ProductionState {
                pecas: vector![
                    Arc::new(piece("P1", "B1", Stage::Corte, 100.0, 2)),
                    Arc::new(piece("P2", "B1", Stage::Solda, 250.0, 1)),
                    Arc::new(piece("P3", "B2", Stage::Corte, 80.0, 1)),
                ],
            }),
            ..ErpState::default()
        }
    }

    #[test]
    fn test_board_has_every_column() {
        let board = pieces_by_stage(&state(), None);
        assert_eq!(board.len(), Stage::ALL.len());
        assert_eq!(board[&Stage::Corte].len(), 2);
        assert!(board[&Stage::Pintura].is_empty());
    }

    #[test]
    fn test_summary_filtered_by_project() {
        let summary = production_summary(&state(), Some("B1"));
        assert_eq!(summary[&Stage::Corte].pecas, 1);
        assert_eq!(summary[&Stage::Corte].peso_kg, 200.0);
        assert_eq!(summary[&Stage::Solda].peso_kg, 250.0);
    }

    #[test]
    fn test_current_project_none_when_unselected() {
        assert!(current_project(&state()).is_none());
    }
}
