// ==========================================
// 钢结构 ERP - 界面通知领域模型
// ==========================================

use crate::domain::types::NotificationKind;
use crate::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,              // 系统生成
    pub tipo: NotificationKind,
    pub titulo: String,
    pub mensagem: String,
    #[serde(default)]
    pub lida: bool,
    pub criada_em: DateTime<Utc>, // 系统生成
}

impl Identified for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 新通知载荷（id 与时间由 reducer 生成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub tipo: NotificationKind,
    pub titulo: String,
    pub mensagem: String,
}

impl NewNotification {
    pub fn into_notification(self, id: String, criada_em: DateTime<Utc>) -> Notification {
        Notification {
            id,
            tipo: self.tipo,
            titulo: self.titulo,
            mensagem: self.mensagem,
            lida: false,
            criada_em,
        }
    }
}
