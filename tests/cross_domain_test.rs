// ==========================================
// 跨领域动作集成测试
// ==========================================
// 覆盖: 预算审批（预算 + 工程两个切片）、快照载入、到货登记、线上 JSON 协议
// ==========================================

mod helpers;

use std::sync::Arc;
use steel_erp_core::domain::action::{ApproveBudget, ErpAction, RegisterDelivery};
use steel_erp_core::domain::inventory::NewDelivery;
use steel_erp_core::domain::state::{ErpState, StateSnapshot};
use steel_erp_core::domain::types::{BudgetStatus, MaterialStatus, ProjectStatus, Stage};
use steel_erp_core::engine::erp_reducer;
use steel_erp_core::selectors;

use helpers::test_data_builder::{delivery_material, ProjectBuilder};
use helpers::fixtures::{fixed_env, fixed_now, seeded_state};

// ==========================================
// 预算审批
// ==========================================

#[test]
fn test_approve_budget_updates_budget_and_project() {
    let state = seeded_state();
    let action = ErpAction::ApproveBudget(ApproveBudget {
        orcamento_id: "O1".to_string(),
        obra_id: "B1".to_string(),
    });

    let next = erp_reducer(&state, &action, &fixed_env());

    let o1 = &next.orcamentos.orcamentos[0];
    assert_eq!(o1.status, BudgetStatus::Aprovado);
    assert_eq!(o1.data_aprovacao, Some(fixed_now()));
    assert_eq!(next.obras.obras[0].status, ProjectStatus::Aprovado);

    // 其他预算/工程保持原样
    assert!(Arc::ptr_eq(&state.orcamentos.orcamentos[1], &next.orcamentos.orcamentos[1]));
    assert!(Arc::ptr_eq(&state.obras.obras[1], &next.obras.obras[1]));
    // 不相关切片不变
    assert!(Arc::ptr_eq(&state.estoque, &next.estoque));
    assert!(Arc::ptr_eq(&state.producao, &next.producao));
}

#[test]
fn test_approve_budget_with_missing_project_still_approves_budget() {
    let state = seeded_state();
    let action = ErpAction::ApproveBudget(ApproveBudget {
        orcamento_id: "O1".to_string(),
        obra_id: "B404".to_string(),
    });

    let next = erp_reducer(&state, &action, &fixed_env());

    assert_eq!(next.orcamentos.orcamentos[0].status, BudgetStatus::Aprovado);
    assert!(Arc::ptr_eq(&state.obras, &next.obras));
}

// ==========================================
// 快照载入
// ==========================================

#[test]
fn test_init_from_snapshot_replaces_only_given_collections() {
    let state = seeded_state();
    let snapshot = StateSnapshot {
        obras: Some(vec![ProjectBuilder::new("B7").build()]),
        materiais_estoque: Some(vec![delivery_material("M9", 300.0, 300.0)]),
        ..Default::default()
    };

    let next = erp_reducer(&state, &ErpAction::InitFromSnapshot(snapshot), &fixed_env());

    assert_eq!(next.obras.obras.len(), 1);
    assert_eq!(next.obras.obras[0].id, "B7");
    assert_eq!(next.estoque.materiais.len(), 1);
    assert_eq!(next.estoque.materiais[0].status, MaterialStatus::Completo);
    // 快照未给出库存物料, 保持原值
    assert_eq!(next.estoque.itens, state.estoque.itens);
    assert!(Arc::ptr_eq(&state.producao, &next.producao));
    assert!(Arc::ptr_eq(&state.orcamentos, &next.orcamentos));
    assert!(!next.ui.loading);
}

#[test]
fn test_init_from_wire_snapshot() {
    let raw = r#"{
        "type": "INIT_FROM_SUPABASE",
        "payload": {
            "obras": [
                {"id": "B1", "nome": "Galpão Logístico", "cliente": "Atlas", "status": "em_producao"}
            ],
            "pecas": [
                {"id": "P1", "obraId": "B1", "marca": "V-101", "descricao": "Viga",
                 "pesoKg": 412.5, "etapa": "solda", "statusCorte": "cortado"}
            ]
        }
    }"#;

    let action = ErpAction::from_json(raw).expect("快照动作应可解析");
    let next = erp_reducer(&ErpState::initial(), &action, &fixed_env());

    assert_eq!(next.obras.obras[0].status, ProjectStatus::EmProducao);
    let peca = &next.producao.pecas[0];
    assert_eq!(peca.etapa, Stage::Solda);
    assert_eq!(peca.quantidade, 1);
    assert!(next.estoque.itens.is_empty());
    assert!(!next.ui.loading);
}

// ==========================================
// 到货登记
// ==========================================

#[test]
fn test_register_delivery_recomputes_derived_fields() {
    let state = seeded_state();
    let env = fixed_env();
    let action = ErpAction::RegisterDelivery(RegisterDelivery {
        material_id: "M1".to_string(),
        entrega: NewDelivery {
            peso_kg: 350.0,
            nota_fiscal: Some("NF-55120".to_string()),
            recebido_por: Some("Almoxarife".to_string()),
            observacao: None,
        },
    });

    let next = erp_reducer(&state, &action, &env);

    let m1 = &next.estoque.materiais[0];
    assert_eq!(m1.peso_recebido, 750.0);
    assert_eq!(m1.peso_falta, 250.0);
    assert_eq!(m1.percentual_recebido, 75.0);
    assert_eq!(m1.status, MaterialStatus::Parcial);
    assert_eq!(m1.entregas.len(), 1);
    assert_eq!(m1.entregas[0].id, "id-1");
    assert_eq!(m1.entregas[0].data, fixed_now());
    assert_eq!(env.issued(), 1);
    assert_eq!(selectors::outstanding_materials(&next).len(), 1);
}

#[test]
fn test_overdelivery_completes_material() {
    let state = seeded_state();
    let entregas_antes = state.estoque.materiais[0].entregas.len();
    let action = ErpAction::RegisterDelivery(RegisterDelivery {
        material_id: "M1".to_string(),
        entrega: NewDelivery {
            peso_kg: 700.0,
            nota_fiscal: Some("NF-77001".to_string()),
            recebido_por: None,
            observacao: None,
        },
    });

    let next = erp_reducer(&state, &action, &fixed_env());

    let m1 = &next.estoque.materiais[0];
    assert_eq!(m1.entregas.len(), entregas_antes + 1);
    let entrega = m1.entregas.last().unwrap();
    assert_eq!(entrega.nota_fiscal.as_deref(), Some("NF-77001"));
    assert_eq!(entrega.peso_kg, 700.0);
    assert_eq!(entrega.id, "id-1");
    assert_eq!(entrega.data, fixed_now());
    assert_eq!(m1.peso_recebido, 1100.0);
    assert_eq!(m1.peso_falta, 0.0);
    assert_eq!(m1.percentual_recebido, 100.0);
    assert_eq!(m1.status, MaterialStatus::Completo);
    assert!(selectors::outstanding_materials(&next).is_empty());
}

// ==========================================
// 线上协议
// ==========================================

#[test]
fn test_wire_actions_round_through_reducer() {
    let raws = [
        r#"{"type": "SET_OBRA_ATUAL", "payload": "B2"}"#,
        r#"{"type": "RESERVAR_ESTOQUE", "payload": {"itemId": "I1", "quantidade": 15, "obraId": "B2"}}"#,
        r#"{"type": "MOVER_PECA_ETAPA", "payload": {"pecaId": "P3", "novaEtapa": "pintura", "funcionarioId": "F2"}}"#,
    ];

    let env = fixed_env();
    let mut state = seeded_state();
    for raw in raws {
        let action = ErpAction::from_json(raw).expect("动作应可解析");
        state = erp_reducer(&state, &action, &env);
    }

    assert_eq!(
        selectors::current_project(&state).map(|obra| obra.id.clone()),
        Some("B2".to_string())
    );
    assert_eq!(state.estoque.itens[0].reservado, 25.0);
    assert_eq!(state.estoque.itens[0].obra_reservada.as_deref(), Some("B2"));
    assert_eq!(selectors::available_quantity(&state, "I1"), Some(75.0));

    let board = selectors::pieces_by_stage(&state, Some("B2"));
    assert_eq!(board[&Stage::Pintura].len(), 1);
    assert!(board[&Stage::Solda].is_empty());
}

#[test]
fn test_null_in_patch_clears_reservation() {
    let env = fixed_env();
    let reservado = erp_reducer(
        &seeded_state(),
        &ErpAction::from_json(
            r#"{"type": "RESERVAR_ESTOQUE", "payload": {"itemId": "I1", "quantidade": 5, "obraId": "B2"}}"#,
        )
        .expect("动作应可解析"),
        &env,
    );
    assert_eq!(reservado.estoque.itens[0].obra_reservada.as_deref(), Some("B2"));

    // 字段缺省: 保留原值
    let mantido = erp_reducer(
        &reservado,
        &ErpAction::from_json(
            r#"{"type": "UPDATE_ITEM_ESTOQUE", "payload": {"id": "I1", "data": {"quantidade": 90}}}"#,
        )
        .expect("动作应可解析"),
        &env,
    );
    assert_eq!(mantido.estoque.itens[0].quantidade, 90.0);
    assert_eq!(mantido.estoque.itens[0].obra_reservada.as_deref(), Some("B2"));

    // 字段为 null: 清空
    let liberado = erp_reducer(
        &mantido,
        &ErpAction::from_json(
            r#"{"type": "UPDATE_ITEM_ESTOQUE", "payload": {"id": "I1", "data": {"obraReservada": null}}}"#,
        )
        .expect("动作应可解析"),
        &env,
    );
    assert!(liberado.estoque.itens[0].obra_reservada.is_none());
    assert_eq!(liberado.estoque.itens[0].quantidade, 90.0);
    assert_eq!(liberado.estoque.itens[0].reservado, 15.0);
}

#[test]
fn test_unknown_wire_tag_is_decode_error() {
    let result = ErpAction::from_json(r#"{"type": "ZERAR_TUDO", "payload": {}}"#);
    assert!(result.is_err());
}
