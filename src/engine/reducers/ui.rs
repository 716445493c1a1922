// ==========================================
// 钢结构 ERP - 界面切片 reducer
// ==========================================
// 处理: SET_FILTROS / SET_LOADING / ADD_NOTIFICACAO / REMOVE_NOTIFICACAO
//       SET_LISTAS / INIT_FROM_SUPABASE（结束加载状态）
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::state::UiState;
use crate::engine::collection::{append, remove_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(state: &Arc<UiState>, action: &ErpAction, env: &dyn ReducerEnv) -> Arc<UiState> {
    match action {
        ErpAction::SetFilters(filtros) => {
            let mut merged = state.filtros.clone();
            merged.extend(filtros.iter().map(|(k, v)| (k.clone(), v.clone())));
            Arc::new(UiState {
                filtros: merged,
                ..(**state).clone()
            })
        }

        ErpAction::SetLoading(loading) => Arc::new(UiState {
            loading: *loading,
            ..(**state).clone()
        }),

        ErpAction::AddNotification(nova) => {
            let notificacao = nova.clone().into_notification(env.new_id(), env.now());
            Arc::new(UiState {
                notificacoes: append(&state.notificacoes, notificacao),
                ..(**state).clone()
            })
        }

        ErpAction::RemoveNotification(id) => match remove_by_id(&state.notificacoes, id) {
            Some(notificacoes) => Arc::new(UiState {
                notificacoes,
                ..(**state).clone()
            }),
            None => Arc::clone(state),
        },

        ErpAction::SetLists(listas) => {
            let mut merged = state.listas.clone();
            merged.extend(listas.iter().map(|(k, v)| (k.clone(), v.clone())));
            Arc::new(UiState {
                listas: merged,
                ..(**state).clone()
            })
        }

        ErpAction::InitFromSnapshot(_) => Arc::new(UiState {
            loading: false,
            ..(**state).clone()
        }),

        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NewNotification;
    use crate::domain::types::NotificationKind;
    use crate::engine::env::FixedEnv;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    #[test]
    fn test_notification_lifecycle() {
        let now = Utc.with_ymd_and_hms(2026, 1, 20, 10, 0, 0).unwrap();
        let env = FixedEnv::with_prefix(now, "notif");
        let before = Arc::new(UiState::default());
        let action = ErpAction::AddNotification(NewNotification {
            tipo: NotificationKind::Alerta,
            titulo: "Estoque baixo".to_string(),
            mensagem: "Chapa 6,3mm abaixo do mínimo".to_string(),
        });

        let after = reduce(&before, &action, &env);
        assert_eq!(after.notificacoes.len(), 1);
        assert_eq!(after.notificacoes[0].id, "notif-1");
        assert_eq!(after.notificacoes[0].criada_em, now);
        assert!(!after.notificacoes[0].lida);

        let removed = reduce(
            &after,
            &ErpAction::RemoveNotification("notif-1".to_string()),
            &env,
        );
        assert!(removed.notificacoes.is_empty());
    }

    #[test]
    fn test_filters_merge() {
        let env = FixedEnv::new(Utc::now());
        let mut first = BTreeMap::new();
        first.insert("status".to_string(), "em_producao".to_string());
        first.insert("busca".to_string(), "galpão".to_string());
        let state = reduce(&Arc::new(UiState::default()), &ErpAction::SetFilters(first), &env);

        let mut second = BTreeMap::new();
        second.insert("busca".to_string(), "ponte".to_string());
        let state = reduce(&state, &ErpAction::SetFilters(second), &env);

        assert_eq!(state.filtros["status"], "em_producao");
        assert_eq!(state.filtros["busca"], "ponte");
    }
}
