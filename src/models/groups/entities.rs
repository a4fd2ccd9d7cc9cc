use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教学班：上同一门课的一组学生，课表条目占用教室的主体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub course_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
