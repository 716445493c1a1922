// ==========================================
// 钢结构 ERP - 顶层组合 reducer
// ==========================================
// 职责: 将同一动作按固定顺序依次交给十个切片 reducer
// 顺序: 工程 → 预算 → 库存 → 生产 → 发运 → 采购 → 计量 → 财务 → 人力 → 界面
// 说明: 仅被多个切片处理的动作（APROVAR_ORCAMENTO、INIT_FROM_SUPABASE）依赖此顺序
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::state::ErpState;
use crate::engine::env::ReducerEnv;
use crate::engine::reducers;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SliceKind - 切片标识
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceKind {
    Obras,
    Orcamentos,
    Estoque,
    Producao,
    Expedicao,
    Compras,
    Medicoes,
    Financeiro,
    Rh,
    Ui,
}

impl fmt::Display for SliceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SliceKind::Obras => "obras",
            SliceKind::Orcamentos => "orcamentos",
            SliceKind::Estoque => "estoque",
            SliceKind::Producao => "producao",
            SliceKind::Expedicao => "expedicao",
            SliceKind::Compras => "compras",
            SliceKind::Medicoes => "medicoes",
            SliceKind::Financeiro => "financeiro",
            SliceKind::Rh => "rh",
            SliceKind::Ui => "ui",
        };
        write!(f, "{}", name)
    }
}

/// 固定归约顺序
pub const REDUCER_ORDER: [SliceKind; 10] = [
    SliceKind::Obras,
    SliceKind::Orcamentos,
    SliceKind::Estoque,
    SliceKind::Producao,
    SliceKind::Expedicao,
    SliceKind::Compras,
    SliceKind::Medicoes,
    SliceKind::Financeiro,
    SliceKind::Rh,
    SliceKind::Ui,
];

/// 顶层 reducer: (状态, 动作) -> 新状态
pub fn erp_reducer(state: &ErpState, action: &ErpAction, env: &dyn ReducerEnv) -> ErpState {
    reduce_in_order(state, action, env, &REDUCER_ORDER)
}

/// 按给定顺序归约
///
/// 顺序中未出现的切片保持不变
pub fn reduce_in_order(
    state: &ErpState,
    action: &ErpAction,
    env: &dyn ReducerEnv,
    order: &[SliceKind],
) -> ErpState {
    order
        .iter()
        .fold(state.clone(), |acc, kind| apply_slice(acc, *kind, action, env))
}

/// 将动作交给单个切片 reducer
pub fn apply_slice(
    mut state: ErpState,
    kind: SliceKind,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> ErpState {
    match kind {
        SliceKind::Obras => state.obras = reducers::projects::reduce(&state.obras, action, env),
        SliceKind::Orcamentos => {
            state.orcamentos = reducers::budgets::reduce(&state.orcamentos, action, env)
        }
        SliceKind::Estoque => {
            state.estoque = reducers::inventory::reduce(&state.estoque, action, env)
        }
        SliceKind::Producao => {
            state.producao = reducers::production::reduce(&state.producao, action, env)
        }
        SliceKind::Expedicao => {
            state.expedicao = reducers::shipping::reduce(&state.expedicao, action, env)
        }
        SliceKind::Compras => {
            state.compras = reducers::purchasing::reduce(&state.compras, action, env)
        }
        SliceKind::Medicoes => {
            state.medicoes = reducers::measurements::reduce(&state.medicoes, action, env)
        }
        SliceKind::Financeiro => {
            state.financeiro = reducers::finance::reduce(&state.financeiro, action, env)
        }
        SliceKind::Rh => state.rh = reducers::hr::reduce(&state.rh, action, env),
        SliceKind::Ui => state.ui = reducers::ui::reduce(&state.ui, action, env),
    }
    state
}
