// ==========================================
// 钢结构 ERP - 工程切片 reducer
// ==========================================
// 处理: ADD_OBRA / UPDATE_OBRA / SET_OBRA_ATUAL / UPDATE_PROGRESSO_OBRA
//       APROVAR_ORCAMENTO（跨域: 工程状态推进为 aprovado）
//       INIT_FROM_SUPABASE
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::project::Project;
use crate::domain::state::{share_all, ProjectsState};
use crate::domain::types::ProjectStatus;
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<ProjectsState>,
    action: &ErpAction,
    _env: &dyn ReducerEnv,
) -> Arc<ProjectsState> {
    match action {
        ErpAction::AddProject(obra) => Arc::new(ProjectsState {
            obras: append(&state.obras, obra.clone()),
            ..(**state).clone()
        }),

        ErpAction::UpdateProject(update) => {
            with_project(state, &update.id, |obra| update.data.apply(obra))
        }

        ErpAction::SetCurrentProject(id) => Arc::new(ProjectsState {
            obra_atual: Some(id.clone()),
            ..(**state).clone()
        }),

        ErpAction::UpdateProjectProgress(update) => {
            with_project(state, &update.obra_id, |obra| Project {
                progresso: update.progresso.apply(&obra.progresso),
                ..obra.clone()
            })
        }

        ErpAction::ApproveBudget(approval) => {
            with_project(state, &approval.obra_id, |obra| Project {
                status: ProjectStatus::Aprovado,
                ..obra.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.obras {
            Some(obras) => Arc::new(ProjectsState {
                obras: share_all(obras),
                ..(**state).clone()
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}

/// 更新单个工程; 未命中时原样返回切片
fn with_project<F>(state: &Arc<ProjectsState>, id: &str, update: F) -> Arc<ProjectsState>
where
    F: Fn(&Project) -> Project,
{
    match update_by_id(&state.obras, id, update) {
        Some(obras) => Arc::new(ProjectsState {
            obras,
            obra_atual: state.obra_atual.clone(),
        }),
        None => {
            tracing::debug!("工程不存在, 忽略动作: obra_id={}", id);
            Arc::clone(state)
        }
    }
}
