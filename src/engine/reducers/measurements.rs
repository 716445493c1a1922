// ==========================================
// 钢结构 ERP - 计量切片 reducer
// ==========================================
// 处理: ADD_MEDICAO / UPDATE_MEDICAO / UPDATE_CONFIG_MEDICAO / INIT_FROM_SUPABASE
// 规则: 计量规则按键浅合并,载荷中的键覆盖原值
// ==========================================

use crate::domain::action::ErpAction;
use crate::domain::state::{share_all, MeasurementsState};
use crate::engine::collection::{append, update_by_id};
use crate::engine::env::ReducerEnv;
use std::sync::Arc;

pub fn reduce(
    state: &Arc<MeasurementsState>,
    action: &ErpAction,
    _env: &dyn ReducerEnv,
) -> Arc<MeasurementsState> {
    match action {
        ErpAction::AddMeasurement(medicao) => Arc::new(MeasurementsState {
            medicoes: append(&state.medicoes, medicao.clone()),
            config_medicao: state.config_medicao.clone(),
        }),

        ErpAction::UpdateMeasurement(update) => {
            match update_by_id(&state.medicoes, &update.id, |m| update.data.apply(m)) {
                Some(medicoes) => Arc::new(MeasurementsState {
                    medicoes,
                    config_medicao: state.config_medicao.clone(),
                }),
                None => Arc::clone(state),
            }
        }

        ErpAction::UpdateMeasurementConfig(rules) => {
            let mut config_medicao = state.config_medicao.clone();
            config_medicao.extend(rules.iter().map(|(k, v)| (k.clone(), v.clone())));
            Arc::new(MeasurementsState {
                medicoes: state.medicoes.clone(),
                config_medicao,
            })
        }

        ErpAction::InitFromSnapshot(snapshot) => {
            if snapshot.medicoes.is_none() && snapshot.config_medicao.is_none() {
                return Arc::clone(state);
            }
            Arc::new(MeasurementsState {
                medicoes: snapshot
                    .medicoes
                    .as_deref()
                    .map(share_all)
                    .unwrap_or_else(|| state.medicoes.clone()),
                config_medicao: snapshot
                    .config_medicao
                    .clone()
                    .unwrap_or_else(|| state.config_medicao.clone()),
            })
        }

        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measurement::MeasurementRule;
    use crate::domain::state::Collection;
    use crate::engine::env::FixedEnv;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn rule(pct: f64) -> MeasurementRule {
        MeasurementRule {
            percentual_contrato: pct,
            descricao: None,
        }
    }

    #[test]
    fn test_config_merge_overrides_keys() {
        let env = FixedEnv::new(Utc::now());
        let mut initial = BTreeMap::new();
        initial.insert("fabricacao".to_string(), rule(60.0));
        initial.insert("montagem".to_string(), rule(40.0));
        let before = Arc::new(MeasurementsState {
            medicoes: Collection::new(),
            config_medicao: initial,
        });

        let mut update = BTreeMap::new();
        update.insert("montagem".to_string(), rule(30.0));
        update.insert("projeto".to_string(), rule(10.0));

        let after = reduce(&before, &ErpAction::UpdateMeasurementConfig(update), &env);
        assert_eq!(after.config_medicao.len(), 3);
        assert_eq!(after.config_medicao["fabricacao"].percentual_contrato, 60.0);
        assert_eq!(after.config_medicao["montagem"].percentual_contrato, 30.0);
        assert_eq!(after.config_medicao["projeto"].percentual_contrato, 10.0);
    }
}
