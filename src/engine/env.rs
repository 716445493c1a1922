// ==========================================
// 钢结构 ERP - 归约环境
// ==========================================
// 职责: 为 reducer 注入当前时间与 id 生成器
// 说明: 时间与 id 通过 trait 注入后, reducer 对相同输入产出相同结果
// ==========================================

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// 归约环境 Trait
///
/// reducer 中所有"系统生成"的值（到货明细 id、通知 id、审批时间、工序时间戳）
/// 都从此处获取
pub trait ReducerEnv: Send + Sync {
    /// 当前时间
    fn now(&self) -> DateTime<Utc>;

    /// 生成新的实体 id
    fn new_id(&self) -> String;
}

// ==========================================
// SystemEnv - 生产环境
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SystemEnv;

impl ReducerEnv for SystemEnv {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ==========================================
// FixedEnv - 固定时间 + 顺序 id
// ==========================================
// 用途: 测试与回放
#[derive(Debug)]
pub struct FixedEnv {
    now: DateTime<Utc>,
    prefix: String,
    counter: AtomicU64,
}

impl FixedEnv {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_prefix(now, "id")
    }

    pub fn with_prefix(now: DateTime<Utc>, prefix: &str) -> Self {
        Self {
            now,
            prefix: prefix.to_string(),
            counter: AtomicU64::new(0),
        }
    }

    /// 已生成的 id 数量
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl ReducerEnv for FixedEnv {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn new_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
