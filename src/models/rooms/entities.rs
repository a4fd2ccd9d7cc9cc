use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教室（物理或线上）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct Room {
    pub id: i64,
    pub name: String,
    // 容纳人数，线上教室可为空
    pub capacity: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
