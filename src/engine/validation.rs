// ==========================================
// 钢结构 ERP - 动作校验
// ==========================================
// 职责: 严格模式下在归约前检查动作引用的 id 是否存在、数量是否合法
// 说明: reducer 自身保持宽松语义（缺失引用静默忽略）,
//       是否启用校验由 store 的配置决定
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::state::{Collection, ErpState};
use crate::domain::Identified;
use crate::engine::collection::contains_id;
use crate::error::{ErpError, ErpResult};

/// 检查动作引用的实体是否存在
///
/// # 返回
/// - Ok(()): 所有引用均存在（新增类动作不引用已有实体）
/// - Err(NotFound): 第一个缺失的引用
pub fn check_references(state: &ErpState, action: &ErpAction) -> ErpResult<()> {
    match action {
        ErpAction::UpdateProject(u) => require(&state.obras.obras, "obra", &u.id),
        ErpAction::SetCurrentProject(id) => require(&state.obras.obras, "obra", id),
        ErpAction::UpdateProjectProgress(u) => require(&state.obras.obras, "obra", &u.obra_id),

        ErpAction::UpdateBudget(u) => require(&state.orcamentos.orcamentos, "orcamento", &u.id),
        ErpAction::ApproveBudget(a) => {
            require(&state.orcamentos.orcamentos, "orcamento", &a.orcamento_id)?;
            require(&state.obras.obras, "obra", &a.obra_id)
        }

        ErpAction::UpdateStockItem(u) => require(&state.estoque.itens, "item_estoque", &u.id),
        ErpAction::ConsumeStock(m) => require(&state.estoque.itens, "item_estoque", &m.item_id),
        ErpAction::AddStock(r) => require(&state.estoque.itens, "item_estoque", &r.item_id),
        ErpAction::ReserveStock(m) => {
            require(&state.estoque.itens, "item_estoque", &m.item_id)?;
            require(&state.obras.obras, "obra", &m.obra_id)
        }
        ErpAction::RegisterDelivery(r) => {
            require(&state.estoque.materiais, "material_estoque", &r.material_id)
        }

        ErpAction::UpdatePiece(u) => require(&state.producao.pecas, "peca", &u.id),
        ErpAction::MovePiece(m) => require(&state.producao.pecas, "peca", &m.peca_id),
        ErpAction::UpdateCutStatus(u) => require(&state.producao.pecas, "peca", &u.peca_id),

        ErpAction::UpdateShipment(u) => require(&state.expedicao.expedicoes, "expedicao", &u.id),

        ErpAction::UpdatePurchase(u) => require(&state.compras.compras, "compra", &u.id),
        ErpAction::ReceivePurchase(r) => require(&state.compras.compras, "compra", &r.compra_id),

        ErpAction::UpdateMeasurement(u) => require(&state.medicoes.medicoes, "medicao", &u.id),

        ErpAction::UpdateFinanceEntry(u) => {
            require(&state.financeiro.lancamentos, "lancamento", &u.id)
        }
        ErpAction::SettleFinanceEntry(s) => {
            require(&state.financeiro.lancamentos, "lancamento", &s.lancamento_id)
        }

        ErpAction::UpdateEmployee(u) => require(&state.rh.funcionarios, "funcionario", &u.id),
        ErpAction::UpdateTeam(u) => require(&state.rh.equipes, "equipe", &u.id),
        ErpAction::UpdateMachine(u) => require(&state.rh.maquinas, "maquina", &u.id),
        ErpAction::AllocateTeam(a) => {
            require(&state.rh.equipes, "equipe", &a.equipe_id)?;
            require(&state.obras.obras, "obra", &a.obra_id)
        }

        ErpAction::RemoveNotification(id) => require(&state.ui.notificacoes, "notificacao", id),

        _ => Ok(()),
    }
}

/// 检查数量/重量载荷: 必须为有限非负数
pub fn check_quantities(action: &ErpAction) -> ErpResult<()> {
    match action {
        ErpAction::ConsumeStock(m) | ErpAction::ReserveStock(m) => {
            require_amount("quantidade", m.quantidade)
        }
        ErpAction::AddStock(r) => require_amount("quantidade", r.quantidade),
        ErpAction::RegisterDelivery(r) => require_amount("pesoKg", r.entrega.peso_kg),
        _ => Ok(()),
    }
}

fn require<T: Identified>(items: &Collection<T>, entity: &'static str, id: &str) -> ErpResult<()> {
    if contains_id(items, id) {
        Ok(())
    } else {
        Err(ErpError::not_found(entity, id))
    }
}

fn require_amount(field: &'static str, value: f64) -> ErpResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ErpError::InvalidQuantity { field, value })
    }
}
