use serde::Deserialize;
use ts_rs::TS;

// 创建教学班请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct CreateGroupRequest {
    pub name: String,
    pub course_name: String,
}

// 更新教学班请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub course_name: Option<String>,
}

// 教学班列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupListQuery {
    pub search: Option<String>,
}
