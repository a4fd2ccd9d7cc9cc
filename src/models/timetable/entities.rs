use serde::Serialize;
use ts_rs::TS;

use crate::scheduling::Viewport;

/// 网格列头
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct RoomColumn {
    pub id: i64,
    pub name: String,
}

impl From<&crate::models::rooms::entities::Room> for RoomColumn {
    fn from(room: &crate::models::rooms::entities::Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
        }
    }
}

/// 网格单元格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub enum GridCell {
    /// 一节课的起始格，向下跨 `row_span` 行
    #[serde(rename_all = "camelCase")]
    Block {
        entry_id: Option<i64>,
        room_id: i64,
        group_id: i64,
        label: String,
        start_time: i32,
        end_time: i32,
        row_span: i32,
        color_index: usize,
        color: String,
    },
    /// 被上方课块覆盖的格子，渲染时跳过
    #[serde(rename_all = "camelCase")]
    Continuation { room_id: i64, hour: i32 },
    /// 空闲格子，可点击新建
    #[serde(rename_all = "camelCase")]
    Empty { room_id: i64, hour: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct GridRow {
    pub hour: i32,
    // 与 `TimetableGrid::rooms` 一一对应
    pub cells: Vec<GridCell>,
}

/// 某一天的 教室 × 小时 课表网格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableGrid {
    pub day: i32,
    pub day_name: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub viewport: Viewport,
    pub rooms: Vec<RoomColumn>,
    pub rows: Vec<GridRow>,
}
