// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use std::collections::BTreeMap;
use steel_erp_core::domain::inventory::{DeliveryMaterial, StockItem};
use steel_erp_core::domain::production::Piece;
use steel_erp_core::domain::project::{Budget, Project, ProjectProgress};
use steel_erp_core::domain::types::{
    BudgetStatus, CutStatus, MaterialStatus, ProjectStatus, Stage,
};

// ==========================================
// Project 构建器
// ==========================================

pub struct ProjectBuilder {
    id: String,
    nome: String,
    status: ProjectStatus,
    peso_total_kg: f64,
}

impl ProjectBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            nome: format!("Obra {}", id),
            status: ProjectStatus::EmProjeto,
            peso_total_kg: 0.0,
        }
    }

    pub fn nome(mut self, nome: &str) -> Self {
        self.nome = nome.to_string();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn peso_total(mut self, peso_kg: f64) -> Self {
        self.peso_total_kg = peso_kg;
        self
    }

    pub fn build(self) -> Project {
        Project {
            id: self.id,
            nome: self.nome,
            cliente: "Construtora Horizonte".to_string(),
            status: self.status,
            valor_contrato: 0.0,
            peso_total_kg: self.peso_total_kg,
            data_inicio: None,
            previsao_entrega: None,
            progresso: ProjectProgress::default(),
        }
    }
}

// ==========================================
// Budget 构建器
// ==========================================

pub struct BudgetBuilder {
    id: String,
    obra_id: String,
    status: BudgetStatus,
    valor_total: f64,
}

impl BudgetBuilder {
    pub fn new(id: &str, obra_id: &str) -> Self {
        Self {
            id: id.to_string(),
            obra_id: obra_id.to_string(),
            status: BudgetStatus::Pendente,
            valor_total: 0.0,
        }
    }

    pub fn status(mut self, status: BudgetStatus) -> Self {
        self.status = status;
        self
    }

    pub fn valor(mut self, valor: f64) -> Self {
        self.valor_total = valor;
        self
    }

    pub fn build(self) -> Budget {
        Budget {
            numero: format!("ORC-{}", self.id),
            id: self.id,
            obra_id: self.obra_id,
            cliente: "Construtora Horizonte".to_string(),
            valor_total: self.valor_total,
            status: self.status,
            data_criacao: None,
            data_aprovacao: None,
        }
    }
}

// ==========================================
// StockItem 构建器
// ==========================================

pub struct StockItemBuilder {
    id: String,
    quantidade: f64,
    reservado: f64,
    quantidade_minima: f64,
}

impl StockItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            quantidade: 0.0,
            reservado: 0.0,
            quantidade_minima: 0.0,
        }
    }

    pub fn quantidade(mut self, quantidade: f64) -> Self {
        self.quantidade = quantidade;
        self
    }

    pub fn reservado(mut self, reservado: f64) -> Self {
        self.reservado = reservado;
        self
    }

    pub fn minimo(mut self, minimo: f64) -> Self {
        self.quantidade_minima = minimo;
        self
    }

    pub fn build(self) -> StockItem {
        StockItem {
            codigo: format!("MAT-{}", self.id),
            id: self.id,
            descricao: "Perfil W250x32.7 A572 Gr50".to_string(),
            categoria: "perfis".to_string(),
            unidade: "barra".to_string(),
            quantidade: self.quantidade,
            reservado: self.reservado,
            quantidade_minima: self.quantidade_minima,
            obra_reservada: None,
        }
    }
}

/// 到货跟踪物料（派生字段按当前到货量预先算好）
pub fn delivery_material(id: &str, peso_pedido: f64, peso_recebido: f64) -> DeliveryMaterial {
    DeliveryMaterial {
        id: id.to_string(),
        descricao: "Chapa grossa 19mm".to_string(),
        obra_id: Some("B1".to_string()),
        fornecedor: Some("Usiminas".to_string()),
        peso_pedido,
        peso_recebido,
        peso_falta: (peso_pedido - peso_recebido).max(0.0),
        percentual_recebido: if peso_pedido > 0.0 {
            peso_recebido / peso_pedido * 100.0
        } else {
            0.0
        },
        status: MaterialStatus::derive(peso_recebido, peso_pedido),
        entregas: Vec::new(),
    }
}

// ==========================================
// Piece 构建器
// ==========================================

pub struct PieceBuilder {
    id: String,
    obra_id: String,
    etapa: Stage,
    peso_kg: f64,
    quantidade: u32,
}

impl PieceBuilder {
    pub fn new(id: &str, obra_id: &str) -> Self {
        Self {
            id: id.to_string(),
            obra_id: obra_id.to_string(),
            etapa: Stage::Aguardando,
            peso_kg: 0.0,
            quantidade: 1,
        }
    }

    pub fn etapa(mut self, etapa: Stage) -> Self {
        self.etapa = etapa;
        self
    }

    pub fn peso(mut self, peso_kg: f64) -> Self {
        self.peso_kg = peso_kg;
        self
    }

    pub fn quantidade(mut self, quantidade: u32) -> Self {
        self.quantidade = quantidade;
        self
    }

    pub fn build(self) -> Piece {
        Piece {
            marca: format!("V-{}", self.id),
            id: self.id,
            obra_id: self.obra_id,
            descricao: "Viga de cobertura".to_string(),
            peso_kg: self.peso_kg,
            quantidade: self.quantidade,
            etapa: self.etapa,
            status_corte: CutStatus::Pendente,
            maquina_corte_id: None,
            funcionario_corte_id: None,
            data_corte: None,
            audit_by_stage: BTreeMap::new(),
        }
    }
}
