// ==========================================
// 钢结构 ERP - 集合操作工具
// ==========================================
// 职责: 不可变集合的追加/按 id 更新/按 id 删除
// 红线: 未命中的元素原样共享（Arc 指针相等）
//       无任何命中时返回 None, 调用方保留原切片
// ==========================================

use crate::domain::state::Collection;
use crate::domain::Identified;
use std::sync::Arc;

/// 追加一个元素
pub fn append<T>(items: &Collection<T>, item: T) -> Collection<T> {
    let mut next = items.clone();
    next.push_back(Arc::new(item));
    next
}

/// 批量追加
pub fn append_all<T: Clone>(items: &Collection<T>, new_items: &[T]) -> Collection<T> {
    let mut next = items.clone();
    next.extend(new_items.iter().cloned().map(Arc::new));
    next
}

/// 按 id 更新
///
/// 不做唯一性校验: 若存在重复 id, 所有命中元素都会被更新
pub fn update_by_id<T, F>(items: &Collection<T>, id: &str, update: F) -> Option<Collection<T>>
where
    T: Identified,
    F: Fn(&T) -> T,
{
    let mut next: Option<Collection<T>> = None;
    for (index, item) in items.iter().enumerate() {
        if item.id() == id {
            let target = next.get_or_insert_with(|| items.clone());
            target.set(index, Arc::new(update(item)));
        }
    }
    next
}

/// 按 id 删除
pub fn remove_by_id<T: Identified>(items: &Collection<T>, id: &str) -> Option<Collection<T>> {
    if !contains_id(items, id) {
        return None;
    }

    let mut next = items.clone();
    next.retain(|item| item.id() != id);
    Some(next)
}

pub fn contains_id<T: Identified>(items: &Collection<T>, id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}
