use super::entities::ClassGroup;
use serde::Serialize;
use ts_rs::TS;

// 教学班列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupListResponse {
    pub items: Vec<ClassGroup>,
}
