// ==========================================
// 钢结构 ERP - 生产切片 reducer
// ==========================================
// 处理: SET_PECAS（整体重载）/ ADD_PECAS（批量）/ UPDATE_PECA
//       MOVER_PECA_ETAPA / UPDATE_STATUS_CORTE / INIT_FROM_SUPABASE
// 红线: 工序移动必须写入该工序的审计（时间 + 操作人）
//       下料时间仅在状态变为 cortado 时写入
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::production::{Piece, StageAudit};
use crate::domain::state::{share_all, ProductionState};
use crate::domain::types::CutStatus;
use crate::engine::collection::{append_all, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<ProductionState>,
    action: &ErpAction,
    env: &dyn ReducerEnv,
) -> Arc<ProductionState> {
    match action {
        ErpAction::SetPieces(pecas) => Arc::new(ProductionState {
            pecas: share_all(pecas),
        }),

        ErpAction::AddPieces(pecas) => Arc::new(ProductionState {
            pecas: append_all(&state.pecas, pecas),
        }),

        ErpAction::UpdatePiece(update) => {
            with_piece(state, &update.id, |peca| update.data.apply(peca))
        }

        ErpAction::MovePiece(movement) => {
            let audit = StageAudit {
                timestamp: env.now(),
                operator_id: movement.funcionario_id.clone(),
            };
            with_piece(state, &movement.peca_id, |peca| {
                let mut audit_by_stage = peca.audit_by_stage.clone();
                audit_by_stage.insert(movement.nova_etapa, audit.clone());
                Piece {
                    etapa: movement.nova_etapa,
                    audit_by_stage,
                    ..peca.clone()
                }
            })
        }

        ErpAction::UpdateCutStatus(update) => {
            let now = env.now();
            with_piece(state, &update.peca_id, |peca| Piece {
                status_corte: update.novo_status,
                maquina_corte_id: update.maquina_id.clone(),
                funcionario_corte_id: update.funcionario_id.clone(),
                data_corte: if update.novo_status == CutStatus::Cortado {
                    Some(now)
                } else {
                    peca.data_corte
                },
                ..peca.clone()
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => match &snapshot.pecas {
            Some(pecas) => Arc::new(ProductionState {
                pecas: share_all(pecas),
            }),
            None => Arc::clone(state),
        },

        _ => Arc::clone(state),
    }
}

fn with_piece<F>(state: &Arc<ProductionState>, id: &str, update: F) -> Arc<ProductionState>
where
    F: Fn(&Piece) -> Piece,
{
    match update_by_id(&state.pecas, id, update) {
        Some(pecas) => Arc::new(ProductionState { pecas }),
        None => {
            tracing::debug!("构件不存在, 忽略动作: peca_id={}", id);
            Arc::clone(state)
        }
    }
}
