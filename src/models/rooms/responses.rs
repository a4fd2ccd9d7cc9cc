use super::entities::Room;
use serde::Serialize;
use ts_rs::TS;

// 教室列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct RoomListResponse {
    pub items: Vec<Room>,
}
