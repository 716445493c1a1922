// ==========================================
// 钢结构 ERP - 库存切片 reducer
// ==========================================
// 处理: ADD_ITEM_ESTOQUE / UPDATE_ITEM_ESTOQUE
//       CONSUMIR_ESTOQUE / ADICIONAR_ESTOQUE / RESERVAR_ESTOQUE
//       ADD_MATERIAL_ESTOQUE / REGISTRAR_ENTREGA_MATERIAL
//       INIT_FROM_SUPABASE
// 红线: reservado 永不为负（max(0, …)）
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::inventory::{DeliveryMaterial, StockItem};
use crate::domain::state::{share_all, InventoryState};
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<InventoryState>,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> Arc<InventoryState> {
    match action {
        ErpAction::AddStockItem(item) => Arc::new(InventoryState {
            itens: append(&state.itens, item.clone()),
            materiais: state.materiais.clone(),
        }),

        ErpAction::UpdateStockItem(update) => {
            with_item(state, &update.id, |item| update.data.apply(item))
        }

        ErpAction::ConsumeStock(movement) => {
            tracing::debug!(
                "消耗库存: item_id={}, quantidade={}, obra_id={}",
                movement.item_id,
                movement.quantidade,
                movement.obra_id
            );
            with_item(state, &movement.item_id, |item| StockItem {
                quantidade: item.quantidade - movement.quantidade,
                reservado: (item.reservado - movement.quantidade).max(0.0),
                ..item.clone()
            })
        }

        ErpAction::AddStock(receipt) => {
            tracing::debug!(
                "采购入库: item_id={}, quantidade={}, compra_id={}",
                receipt.item_id,
                receipt.quantidade,
                receipt.compra_id
            );
            with_item(state, &receipt.item_id, |item| StockItem {
                quantidade: item.quantidade + receipt.quantidade,
                ..item.clone()
            })
        }

        ErpAction::ReserveStock(movement) => with_item(state, &movement.item_id, |item| StockItem {
            reservado: item.reservado + movement.quantidade,
            obra_reservada: Some(movement.obra_id.clone()),
            ..item.clone()
        }),

        ErpAction::AddDeliveryMaterial(material) => Arc::new(InventoryState {
            itens: state.itens.clone(),
            materiais: append(&state.materiais, material.clone()),
        }),

        ErpAction::RegisterDelivery(register) => {
            // id 与时间在归约前生成一次, 保证同一动作只产生一条明细
            let entrega = register
                .entrega
                .clone()
                .into_delivery(env.new_id(), env.now());
            with_material(state, &register.material_id, |material| {
                material.with_delivery(entrega.clone())
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => {
            if snapshot.estoque.is_none() && snapshot.materiais_estoque.is_none() {
                return Arc::clone(state);
            }
            Arc::new(InventoryState {
                itens: snapshot
                    .estoque
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.itens.clone()),
                materiais: snapshot
                    .materiais_estoque
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.materiais.clone()),
            })
        }

        _ => Arc::clone(state),
    }
}

fn with_item<F>(state: &Arc<InventoryState>, id: &str, update: F) -> Arc<InventoryState>
where
    F: Fn(&StockItem) -> StockItem,
{
    match update_by_id(&state.itens, id, update) {
        Some(itens) => Arc::new(InventoryState {
            itens,
            materiais: state.materiais.clone(),
        }),
        None => {
            tracing::debug!("库存物料不存在, 忽略动作: item_id={}", id);
            Arc::clone(state)
        }
    }
}

fn with_material<F>(state: &Arc<InventoryState>, id: &str, update: F) -> Arc<InventoryState>
where
    F: Fn(&DeliveryMaterial) -> DeliveryMaterial,
{
    match update_by_id(&state.materiais, id, update) {
        Some(materiais) => Arc::new(InventoryState {
            itens: state.itens.clone(),
            materiais,
        }),
        None => {
            tracing::debug!("到货物料不存在, 忽略动作: material_id={}", id);
            Arc::clone(state)
        }
    }
}
