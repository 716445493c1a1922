// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 固定时间环境、预置状态等测试夹具
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use im::vector;
use std::sync::Arc;
use steel_erp_core::domain::hr::Team;
use steel_erp_core::domain::state::{
    BudgetsState, ErpState, HrState, InventoryState, ProductionState, ProjectsState,
};
use steel_erp_core::domain::types::{BudgetStatus, ProjectStatus, Stage};
use steel_erp_core::engine::FixedEnv;

use super::test_data_builder::{
    delivery_material, BudgetBuilder, PieceBuilder, ProjectBuilder, StockItemBuilder,
};

/// 测试统一使用的固定时间
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 15, 9, 30, 0).unwrap()
}

pub fn fixed_env() -> FixedEnv {
    FixedEnv::new(fixed_now())
}

/// 预置状态
///
/// - 工程: B1(em_projeto), B2(em_producao)
/// - 预算: O1→B1(pendente), O2→B2(aprovado)
/// - 库存: I1(数量 100, 预留 10), I2(数量 5, 安全库存 8)
/// - 到货物料: M1(订货 1000kg, 已到 400kg)
/// - 构件: P1/P2 属于 B1, P3 属于 B2
/// - 班组: E1（未分配工程）
pub fn seeded_state() -> ErpState {
    ErpState {
        obras: Arc::new(ProjectsState {
            obras: vector![
                Arc::new(ProjectBuilder::new("B1").peso_total(42_000.0).build()),
                Arc::new(
                    ProjectBuilder::new("B2")
                        .status(ProjectStatus::EmProducao)
                        .build(),
                ),
            ],
            obra_atual: None,
        }),
        orcamentos: Arc::new(BudgetsState {
            orcamentos: vector![
                Arc::new(BudgetBuilder::new("O1", "B1").valor(480_000.0).build()),
                Arc::new(
                    BudgetBuilder::new("O2", "B2")
                        .status(BudgetStatus::Aprovado)
                        .build(),
                ),
            ],
        }),
        estoque: Arc::new(InventoryState {
            itens: vector![
                Arc::new(
                    StockItemBuilder::new("I1")
                        .quantidade(100.0)
                        .reservado(10.0)
                        .build(),
                ),
                Arc::new(StockItemBuilder::new("I2").quantidade(5.0).minimo(8.0).build()),
            ],
            materiais: vector![Arc::new(delivery_material("M1", 1000.0, 400.0))],
        }),
        producao: Arc::new(ProductionState {
            pecas: vector![
                Arc::new(PieceBuilder::new("P1", "B1").peso(320.0).build()),
                Arc::new(
                    PieceBuilder::new("P2", "B1")
                        .etapa(Stage::Corte)
                        .peso(180.0)
                        .quantidade(2)
                        .build(),
                ),
                Arc::new(
                    PieceBuilder::new("P3", "B2")
                        .etapa(Stage::Solda)
                        .peso(95.0)
                        .build(),
                ),
            ],
        }),
        rh: Arc::new(HrState {
            equipes: vector![Arc::new(Team {
                id: "E1".to_string(),
                nome: "Equipe de Montagem A".to_string(),
                lider_id: None,
                membros: vec!["F1".to_string(), "F2".to_string()],
                obra_atual: None,
            })],
            ..HrState::default()
        }),
        ..ErpState::initial()
    }
}
