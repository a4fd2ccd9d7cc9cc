use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课表条目：每周固定的一节课，占用某教室某天的 `[start_time, end_time)`
///
/// `room_name`、`group_name`、`course_name` 为展示用的冗余字段，
/// 由存储层在读取时填充。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleEntry {
    // 尚未创建的条目没有 id
    pub id: Option<i64>,
    pub room_id: i64,
    pub room_name: String,
    pub group_id: i64,
    pub group_name: String,
    pub course_name: String,
    // 1 = 周一 … 7 = 周日
    pub day: i32,
    pub start_time: i32,
    pub end_time: i32,
}

/// 表单当前填写的候选条目，字段可能尚未填全
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleCandidate {
    pub room_id: Option<i64>,
    pub day: Option<i32>,
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
}
