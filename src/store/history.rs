// ==========================================
// 钢结构 ERP - 分发历史
// ==========================================
// 用途: 审计追踪（每次分发一条记录）
// 容量: 有界,超出后丢弃最旧记录
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

// ==========================================
// DispatchRecord - 分发记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRecord {
    pub seq: u64,                     // 单调递增序号（从 1 开始）
    pub action_type: String,          // 动作类型标签
    pub dispatched_at: DateTime<Utc>,
    pub outcome: DispatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DispatchOutcome {
    /// 已归约（可能为无变化）
    Applied,
    /// 引用缺失, 宽松语义下归约无任何变化
    Absorbed { entity: String, id: String },
    /// 引用缺失, 但归约仍改变了状态（如预算已审批而工程不存在）
    Dangling { entity: String, id: String },
    /// 严格模式下被拒绝,状态未变
    Rejected { reason: String },
}

// ==========================================
// DispatchHistory - 有界历史
// ==========================================
#[derive(Debug, Clone)]
pub struct DispatchHistory {
    capacity: usize,
    next_seq: u64,
    records: VecDeque<DispatchRecord>,
}

impl DispatchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_seq: 1,
            records: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// 记录一次分发, 返回其序号
    pub fn record(
        &mut self,
        action_type: &str,
        dispatched_at: DateTime<Utc>,
        outcome: DispatchOutcome,
    ) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.capacity == 0 {
            return seq;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(DispatchRecord {
            seq,
            action_type: action_type.to_string(),
            dispatched_at,
            outcome,
        });
        seq
    }

    pub fn iter(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&DispatchRecord> {
        self.records.back()
    }
}
