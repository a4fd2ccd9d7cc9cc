use serde::Serialize;
use ts_rs::TS;

use super::entities::ScheduleEntry;

// 冲突预检结果
//
// `complete == false` 表示字段未填全或取值非法，此时 `conflict` 恒为 false，
// 调用方不能据此放行提交。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ConflictCheckResponse {
    pub conflict: bool,
    pub complete: bool,
    pub description: Option<String>,
    pub conflicting_entry: Option<ScheduleEntry>,
}

// 课表列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListResponse {
    pub items: Vec<ScheduleEntry>,
}
