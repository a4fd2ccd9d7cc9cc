use serde::Deserialize;
use ts_rs::TS;

// 创建教室请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: Option<i32>,
}

// 更新教室请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
}

// 教室列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct RoomListQuery {
    pub search: Option<String>,
}
