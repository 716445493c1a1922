// ==========================================
// 钢结构 ERP - 发运切片 reducer
// ==========================================
// 处理: ADD_EXPEDICAO / UPDATE_EXPEDICAO / INIT_FROM_SUPABASE
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::state::{share_all, ShippingState};
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<ShippingState>,
    action: &ErpAction,
    _env: &dyn ReducerEnv,
) -> Arc<ShippingState> {
    match action {
        ErpAction::AddShipment(expedicao) => Arc::new(ShippingState {
            expedicoes: append(&state.expedicoes, expedicao.clone()),
        }),

        ErpAction::UpdateShipment(update) => {
            match update_by_id(&state.expedicoes, &update.id, |e| update.data.apply(e)) {
                Some(expedicoes) => Arc::new(ShippingState { expedicoes }),
                None => Arc::clone(state),
            }
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.expedicoes {
            Some(expedicoes) => Arc::new(ShippingState {
                expedicoes: share_all(expedicoes),
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}
