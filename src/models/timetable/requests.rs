use serde::Deserialize;
use ts_rs::TS;

use crate::scheduling::Viewport;

// 课表网格查询参数，未提供的小时窗口使用配置中的默认值
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableQuery {
    pub day: i32,
    pub start_hour: Option<i32>,
    pub end_hour: Option<i32>,
    pub viewport: Option<Viewport>,
}
