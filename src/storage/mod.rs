use std::sync::Arc;

use crate::models::{
    groups::{
        entities::ClassGroup,
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
    },
    rooms::{
        entities::Room,
        requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
    },
    schedules::{
        entities::ScheduleEntry,
        requests::{CreateScheduleRequest, ScheduleListQuery},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教室管理方法
    // 创建教室
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room>;
    // 通过ID获取教室
    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>>;
    // 通过名称获取教室
    async fn get_room_by_name(&self, name: &str) -> Result<Option<Room>>;
    // 列出教室（按 ID 排序）
    async fn list_rooms(&self, query: RoomListQuery) -> Result<Vec<Room>>;
    // 更新教室
    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>>;
    // 删除教室
    async fn delete_room(&self, id: i64) -> Result<bool>;

    /// 教学班管理方法
    async fn create_group(&self, group: CreateGroupRequest) -> Result<ClassGroup>;
    async fn get_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>>;
    async fn get_group_by_name(&self, name: &str) -> Result<Option<ClassGroup>>;
    async fn list_groups(&self, query: GroupListQuery) -> Result<Vec<ClassGroup>>;
    async fn update_group(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<ClassGroup>>;
    async fn delete_group(&self, id: i64) -> Result<bool>;

    /// 课表管理方法
    // 创建课表条目，冲突检查由服务层负责
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<ScheduleEntry>;
    // 通过ID获取课表条目
    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ScheduleEntry>>;
    // 列出课表条目（按 星期、开始时间、教室 排序）
    async fn list_schedules(&self, query: ScheduleListQuery) -> Result<Vec<ScheduleEntry>>;
    // 用完整字段覆盖课表条目
    async fn update_schedule(
        &self,
        id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>>;
    // 删除课表条目
    async fn delete_schedule(&self, id: i64) -> Result<bool>;
    // 引用某教室的课表条目数
    async fn count_schedules_by_room(&self, room_id: i64) -> Result<u64>;
    // 引用某教学班的课表条目数
    async fn count_schedules_by_group(&self, group_id: i64) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
