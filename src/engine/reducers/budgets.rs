// ==========================================
// 钢结构 ERP - 预算切片 reducer
// ==========================================
// 处理: ADD_ORCAMENTO / UPDATE_ORCAMENTO / APROVAR_ORCAMENTO / INIT_FROM_SUPABASE
// 红线: 审批只标记载荷指定的那一张预算,同时写入审批时间
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::project::Budget;
use crate::domain::state::{share_all, BudgetsState};
use crate::domain::types::BudgetStatus;
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<BudgetsState>,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> Arc<BudgetsState> {
    match action {
        ErpAction::AddBudget(orcamento) => Arc::new(BudgetsState {
            orcamentos: append(&state.orcamentos, orcamento.clone()),
        }),

        ErpAction::UpdateBudget(update) => {
            with_budget(state, &update.id, |orcamento| update.data.apply(orcamento))
        }

        ErpAction::ApproveBudget(approval) => {
            let approved_at = env.now();
            with_budget(state, &approval.orcamento_id, |orcamento| Budget {
                status: BudgetStatus::Aprovado,
                data_aprovacao: Some(approved_at),
                ..orcamento.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.orcamentos {
            Some(orcamentos) => Arc::new(BudgetsState {
                orcamentos: share_all(orcamentos),
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}

fn with_budget<F>(state: &Arc<BudgetsState>, id: &str, update: F) -> Arc<BudgetsState>
where
    F: Fn(&Budget) -> Budget,
{
    match update_by_id(&state.orcamentos, id, update) {
        Some(orcamentos) => Arc::new(BudgetsState { orcamentos }),
        None => {
            tracing::debug!("预算不存在, 忽略动作: orcamento_id={}", id);
            Arc::clone(state)
        }
    }
}
