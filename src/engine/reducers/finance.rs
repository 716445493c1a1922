// ==========================================
// 钢结构 ERP - 财务切片 reducer
// ==========================================
// 处理: ADD_LANCAMENTO / UPDATE_LANCAMENTO / BAIXAR_LANCAMENTO / INIT_FROM_SUPABASE
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::finance::FinanceEntry;
use crate::domain::state::{share_all, FinanceState};
use crate::domain::types::EntryStatus;
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<FinanceState>,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> Arc<FinanceState> {
    match action {
        ErpAction::AddFinanceEntry(lancamento) => Arc::new(FinanceState {
            lancamentos: append(&state.lancamentos, lancamento.clone()),
        }),

        ErpAction::UpdateFinanceEntry(update) => {
            with_entry(state, &update.id, |lancamento| update.data.apply(lancamento))
        }

        ErpAction::SettleFinanceEntry(settle) => {
            let paid_at = env.now();
            with_entry(state, &settle.lancamento_id, |lancamento| FinanceEntry {
                status: EntryStatus::Pago,
                data_pagamento: Some(paid_at),
                ..lancamento.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.lancamentos {
            Some(lancamentos) => Arc::new(FinanceState {
                lancamentos: share_all(lancamentos),
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}

fn with_entry<F>(state: &Arc<FinanceState>, id: &str, update: F) -> Arc<FinanceState>
where
    F: Fn(&FinanceEntry) -> FinanceEntry,
{
    match update_by_id(&state.lancamentos, id, update) {
        Some(lancamentos) => Arc::new(FinanceState { lancamentos }),
        None => {
            tracing::debug!("财务流水不存在, 忽略动作: lancamento_id={}", id);
            Arc::clone(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;
    use crate::domain::action::{SettleEntry, UpdateById};
    use crate::domain::finance::FinanceEntryPatch;
    use crate::domain::types::EntryKind;
    use crate::engine::env::FixedEnv;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(id: &str) -> FinanceEntry {
        FinanceEntry {
            id: id.to_string(),
            tipo: EntryKind::Despesa,
            descricao: "Compra de chapas".to_string(),
            categoria: Some("materia_prima".to_string()),
            obra_id: Some("B1".to_string()),
            valor: 12_500.0,
            vencimento: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            status: EntryStatus::Pendente,
            data_pagamento: None,
        }
    }

    #[test]
    fn test_settle_entry() {
        let now = Utc.with_ymd_and_hms(2026, 7, 14, 11, 0, 0).unwrap();
        let env = FixedEnv::new(now);
        let before = Arc::new(FinanceState {
            lancamentos: vector![Arc::new(entry("L1"))],
        });
        let action = ErpAction::SettleFinanceEntry(SettleEntry {
            lancamento_id: "L1".to_string(),
        });

        let after = reduce(&before, &action, &env);
        assert_eq!(after.lancamentos[0].status, EntryStatus::Pago);
        assert_eq!(after.lancamentos[0].data_pagamento, Some(now));
        assert_eq!(after.lancamentos[0].signed_value(), -12_500.0);
    }

    #[test]
    fn test_update_entry_keeps_payment_date() {
        let env = FixedEnv::new(Utc::now());
        let before = Arc::new(FinanceState {
            lancamentos: vector![Arc::new(entry("L1"))],
        });
        let patch = FinanceEntryPatch {
            valor: Some(13_000.0),
            ..Default::default()
        };
        let after = reduce(
            &before,
            &ErpAction::UpdateFinanceEntry(UpdateById::new("L1", patch)),
            &env,
        );
        assert_eq!(after.lancamentos[0].valor, 13_000.0);
        assert_eq!(after.lancamentos[0].descricao, "Compra de chapas");
        assert!(after.lancamentos[0].data_pagamento.is_none());
    }
}
