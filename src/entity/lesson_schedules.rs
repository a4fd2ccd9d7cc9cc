//! 课表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub room_id: i64,
    pub group_id: i64,
    pub day: i32,
    pub start_time: i32,
    pub end_time: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::GroupId",
        to = "super::class_groups::Column::Id"
    )]
    ClassGroup,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 转换为业务模型，教室与教学班的展示字段由调用方提供
    pub fn into_schedule_entry(
        self,
        room: Option<&super::rooms::Model>,
        group: Option<&super::class_groups::Model>,
    ) -> crate::models::schedules::entities::ScheduleEntry {
        use crate::models::schedules::entities::ScheduleEntry;

        ScheduleEntry {
            id: Some(self.id),
            room_id: self.room_id,
            room_name: room.map(|r| r.name.clone()).unwrap_or_default(),
            group_id: self.group_id,
            group_name: group.map(|g| g.name.clone()).unwrap_or_default(),
            course_name: group.map(|g| g.course_name.clone()).unwrap_or_default(),
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
