// ==========================================
// 钢结构 ERP - 状态容器
// ==========================================
// 职责: 持有当前状态快照,分发动作,广播新快照,记录分发历史
// 生命周期: 由组装应用的一方创建并持有（非全局单例）
// ==========================================

use crate::config::StoreConfig;
use crate::domain::action::ErpAction;
use crate::domain::state::ErpState;
use crate::engine::{check_quantities, check_references, erp_reducer, ReducerEnv, SystemEnv};
use crate::error::{ErpError, ErpResult};
use crate::store::history::{DispatchHistory, DispatchOutcome, DispatchRecord};
use std::sync::Arc;
use tokio::sync::watch;

// ==========================================
// ErpStore
// ==========================================
pub struct ErpStore {
    state: Arc<ErpState>,
    env: Arc<dyn ReducerEnv>,
    config: StoreConfig,
    history: DispatchHistory,
    publisher: watch::Sender<Arc<ErpState>>,
}

impl ErpStore {
    /// 以初始状态（loading=true）和系统环境创建
    pub fn new(config: StoreConfig) -> Self {
        Self::with_state(ErpState::initial(), config, Arc::new(SystemEnv))
    }

    /// 以指定状态与环境创建
    pub fn with_state(state: ErpState, config: StoreConfig, env: Arc<dyn ReducerEnv>) -> Self {
        let state = Arc::new(state);
        let (publisher, _) = watch::channel(Arc::clone(&state));
        tracing::info!(
            "ErpStore 初始化: strict_references={}, validate_quantities={}, history_capacity={}",
            config.strict_references,
            config.validate_quantities,
            config.history_capacity
        );
        Self {
            state,
            env,
            history: DispatchHistory::new(config.history_capacity),
            config,
            publisher,
        }
    }

    /// 当前状态快照
    pub fn state(&self) -> Arc<ErpState> {
        Arc::clone(&self.state)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// 订阅状态快照（每次分发后推送最新快照）
    pub fn subscribe(&self) -> watch::Receiver<Arc<ErpState>> {
        self.publisher.subscribe()
    }

    /// 分发历史（从旧到新）
    pub fn history(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.history.iter()
    }

    /// 分发动作
    ///
    /// # 返回
    /// - Ok(新快照): 已归约（宽松模式下缺失引用也返回 Ok）
    /// - Err: 严格模式下引用缺失或数量非法,状态未变
    pub fn dispatch(&mut self, action: ErpAction) -> ErpResult<Arc<ErpState>> {
        let action_type = action.type_tag();
        let now = self.env.now();

        if self.config.validate_quantities {
            if let Err(err) = check_quantities(&action) {
                return Err(self.reject(action_type, err));
            }
        }

        let missing = match check_references(&self.state, &action) {
            Ok(()) => None,
            Err(err) if self.config.strict_references => {
                return Err(self.reject(action_type, err));
            }
            Err(ErpError::NotFound { entity, id }) => Some((entity, id)),
            Err(err) => return Err(err),
        };

        let next = Arc::new(erp_reducer(&self.state, &action, self.env.as_ref()));

        // 宽松模式: 按归约结果区分"无操作"与"部分生效"
        let outcome = match missing {
            None => DispatchOutcome::Applied,
            Some((entity, id)) if next.shares_slices(&self.state) => {
                tracing::warn!(
                    "引用不存在, 动作未产生变化: type={}, entity={}, id={}",
                    action_type,
                    entity,
                    id
                );
                DispatchOutcome::Absorbed {
                    entity: entity.to_string(),
                    id,
                }
            }
            Some((entity, id)) => {
                tracing::warn!(
                    "引用不存在, 动作已部分生效: type={}, entity={}, id={}",
                    action_type,
                    entity,
                    id
                );
                DispatchOutcome::Dangling {
                    entity: entity.to_string(),
                    id,
                }
            }
        };

        self.state = Arc::clone(&next);
        let seq = self.history.record(action_type, now, outcome);
        tracing::debug!("动作已归约: seq={}, type={}", seq, action_type);

        // 没有订阅者时 send_replace 仍会更新通道中的值
        self.publisher.send_replace(Arc::clone(&next));
        Ok(next)
    }

    /// 解析线上 JSON 动作并分发
    pub fn dispatch_json(&mut self, raw: &str) -> ErpResult<Arc<ErpState>> {
        let action = ErpAction::from_json(raw)?;
        self.dispatch(action)
    }

    /// 依次分发多个动作; 遇到第一个错误即停止
    pub fn dispatch_all<I>(&mut self, actions: I) -> ErpResult<Arc<ErpState>>
    where
        I: IntoIterator<Item = ErpAction>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(self.state())
    }

    fn reject(&mut self, action_type: &str, err: ErpError) -> ErpError {
        tracing::warn!("动作被拒绝: type={}, reason={}", action_type, err);
        self.history.record(
            action_type,
            self.env.now(),
            DispatchOutcome::Rejected {
                reason: err.to_string(),
            },
        );
        err
    }
}

impl Default for ErpStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
