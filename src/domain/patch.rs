// ==========================================
// 钢结构 ERP - 局部更新（浅合并）工具
// ==========================================
// 可空字段的三种载荷:
//   字段缺省      → None           保留原值
//   字段为 null   → Some(None)     清空
//   字段有值      → Some(Some(v))  覆盖
// ==========================================

use serde::{Deserialize, Deserializer};

/// 可空补丁字段的反序列化
///
/// 与 `#[serde(default)]` 配合: 缺省字段走 default（None）,
/// 出现的字段（含 null）一律包一层 Some
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 合并可空字段
pub fn merge_nullable<T: Clone>(patch: &Option<Option<T>>, base: &Option<T>) -> Option<T> {
    match patch {
        Some(value) => value.clone(),
        None => base.clone(),
    }
}
