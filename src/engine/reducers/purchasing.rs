// ==========================================
// 钢结构 ERP - 采购切片 reducer
// ==========================================
// 处理: ADD_COMPRA / UPDATE_COMPRA / RECEBER_COMPRA / INIT_FROM_SUPABASE
// 说明: 收货只改变采购单状态; 入库数量由 ADICIONAR_ESTOQUE 单独分发
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::purchasing::PurchaseOrder;
use crate::domain::state::{share_all, PurchasingState};
use crate::domain::types::PurchaseStatus;
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<PurchasingState>,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> Arc<PurchasingState> {
    match action {
        ErpAction::AddPurchase(compra) => Arc::new(PurchasingState {
            compras: append(&state.compras, compra.clone()),
        }),

        ErpAction::UpdatePurchase(update) => {
            with_purchase(state, &update.id, |compra| update.data.apply(compra))
        }

        ErpAction::ReceivePurchase(receive) => {
            let received_at = env.now();
            with_purchase(state, &receive.compra_id, |compra| PurchaseOrder {
                status: PurchaseStatus::Recebida,
                data_recebimento: Some(received_at),
                ..compra.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.compras {
            Some(compras) => Arc::new(PurchasingState {
                compras: share_all(compras),
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}

fn with_purchase<F>(state: &Arc<PurchasingState>, id: &str, update: F) -> Arc<PurchasingState>
where
    F: Fn(&PurchaseOrder) -> PurchaseOrder,
{
    match update_by_id(&state.compras, id, update) {
        Some(compras) => Arc::new(PurchasingState { compras }),
        None => Arc::clone(state),
    }
}
