// ==========================================
// 钢结构 ERP - 人力与设备切片 reducer
// ==========================================
// 处理: ADD_FUNCIONARIO / UPDATE_FUNCIONARIO / UPDATE_EQUIPE / UPDATE_MAQUINA
//       ALOCAR_EQUIPE / INIT_FROM_SUPABASE
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::hr::Team;
use crate::domain::state::{share_all, HrState};
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(state: &Arc<HrState>, action: &ErpAction, _env: &dyn ReducerEnv) -> Arc<HrState> {
    match action {
        ErpAction::AddEmployee(funcionario) => Arc::new(HrState {
            funcionarios: append(&state.funcionarios, funcionario.clone()),
            ..(**state).clone()
        }),

        ErpAction::UpdateEmployee(update) => {
            match update_by_id(&state.funcionarios, &update.id, |f| update.data.apply(f)) {
                Some(funcionarios) => Arc::new(HrState {
                    funcionarios,
                    ..(**state).clone()
                }),
                None => Arc::clone(state),
            }
        }

        ErpAction::UpdateTeam(update) => {
            with_team(state, &update.id, |equipe| update.data.apply(equipe))
        }

        ErpAction::UpdateMachine(update) => {
            match update_by_id(&state.maquinas, &update.id, |m| update.data.apply(m)) {
                Some(maquinas) => Arc::new(HrState {
                    maquinas,
                    ..(**state).clone()
                }),
                None => Arc::clone(state),
            }
        }

        ErpAction::AllocateTeam(allocation) => {
            tracing::debug!(
                "班组分配: equipe_id={}, obra_id={}",
                allocation.equipe_id,
                allocation.obra_id
            );
            with_team(state, &allocation.equipe_id, |equipe| Team {
                obra_atual: Some(allocation.obra_id.clone()),
                ..equipe.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => {
            if snapshot.funcionarios.is_none()
                && snapshot.equipes.is_none()
                && snapshot.maquinas.is_none()
            {
                return Arc::clone(state);
            }
            Arc::new(HrState {
                funcionarios: snapshot
                    .funcionarios
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.funcionarios.clone()),
                equipes: snapshot
                    .equipes
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.equipes.clone()),
                maquinas: snapshot
                    .maquinas
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.maquinas.clone()),
            })
        }

        _ => Arc::clone(state),
    }
}

fn with_team<F>(state: &Arc<HrState>, id: &str, update: F) -> Arc<HrState>
where
    F: Fn(&Team) -> Team,
{
    match update_by_id(&state.equipes, id, update) {
        Some(equipes) => Arc::new(HrState {
            equipes,
            ..(**state).clone()
        }),
        None => Arc::clone(state),
    }
}
