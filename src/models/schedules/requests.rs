use serde::Deserialize;
use ts_rs::TS;

use super::entities::ScheduleCandidate;

// 创建课表条目请求，也是存储层写入的完整字段集
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleRequest {
    pub room_id: i64,
    pub group_id: i64,
    pub day: i32,
    pub start_time: i32,
    pub end_time: i32,
}

// 更新课表条目请求，未提供的字段保持原值
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct UpdateScheduleRequest {
    pub room_id: Option<i64>,
    pub group_id: Option<i64>,
    pub day: Option<i32>,
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
}

// 课表列表筛选
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListQuery {
    pub room_id: Option<i64>,
    pub group_id: Option<i64>,
    pub day: Option<i32>,
}

// 冲突预检请求：表单每次改动时提交，编辑时带上自身 id 以排除自己
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ConflictCheckRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub candidate: ScheduleCandidate,
    pub exclude_id: Option<i64>,
}
