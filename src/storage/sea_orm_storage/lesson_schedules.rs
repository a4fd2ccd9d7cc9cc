//! 课表条目存储操作

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, map_write_err};
use crate::entity::class_groups::{self, Entity as ClassGroups};
use crate::entity::lesson_schedules::{ActiveModel, Column, Entity as LessonSchedules, Model};
use crate::entity::rooms::{self, Entity as Rooms};
use crate::errors::{Result, TimetableError};
use crate::models::schedules::{
    entities::ScheduleEntry,
    requests::{CreateScheduleRequest, ScheduleListQuery},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 为课表行补齐教室名、班名和课程名
    async fn denormalize_schedules(&self, models: Vec<Model>) -> Result<Vec<ScheduleEntry>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: HashSet<i64> = models.iter().map(|m| m.room_id).collect();
        let group_ids: HashSet<i64> = models.iter().map(|m| m.group_id).collect();

        let rooms: HashMap<i64, rooms::Model> = Rooms::find()
            .filter(rooms::Column::Id.is_in(room_ids))
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室失败: {e}")))?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let groups: HashMap<i64, class_groups::Model> = ClassGroups::find()
            .filter(class_groups::Column::Id.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教学班失败: {e}")))?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let room = rooms.get(&m.room_id);
                let group = groups.get(&m.group_id);
                m.into_schedule_entry(room, group)
            })
            .collect())
    }

    /// 创建课表条目
    pub async fn create_schedule_impl(&self, req: CreateScheduleRequest) -> Result<ScheduleEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            room_id: Set(req.room_id),
            group_id: Set(req.group_id),
            day: Set(req.day),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建课表条目失败", e))?;

        let mut entries = self.denormalize_schedules(vec![result]).await?;
        entries
            .pop()
            .ok_or_else(|| TimetableError::database_operation("创建课表条目后读取失败"))
    }

    /// 通过 ID 获取课表条目
    pub async fn get_schedule_by_id_impl(&self, schedule_id: i64) -> Result<Option<ScheduleEntry>> {
        let result = LessonSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表条目失败: {e}")))?;

        match result {
            Some(model) => Ok(self.denormalize_schedules(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 列出课表条目
    pub async fn list_schedules_impl(&self, query: ScheduleListQuery) -> Result<Vec<ScheduleEntry>> {
        let mut select = LessonSchedules::find();

        if let Some(room_id) = query.room_id {
            select = select.filter(Column::RoomId.eq(room_id));
        }

        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        if let Some(day) = query.day {
            select = select.filter(Column::Day.eq(day));
        }

        let models = select
            .order_by_asc(Column::Day)
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::RoomId)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表列表失败: {e}")))?;

        self.denormalize_schedules(models).await
    }

    /// 覆盖课表条目
    pub async fn update_schedule_impl(
        &self,
        schedule_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>> {
        let existing = LessonSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表条目失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(schedule_id),
            room_id: Set(req.room_id),
            group_id: Set(req.group_id),
            day: Set(req.day),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新课表条目失败", e))?;

        self.get_schedule_by_id_impl(schedule_id).await
    }

    /// 删除课表条目
    pub async fn delete_schedule_impl(&self, schedule_id: i64) -> Result<bool> {
        let result = LessonSchedules::delete_by_id(schedule_id)
            .exec(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("删除课表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_schedules_by_room_impl(&self, room_id: i64) -> Result<u64> {
        LessonSchedules::find()
            .filter(Column::RoomId.eq(room_id))
            .count(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("统计教室课表失败: {e}")))
    }

    pub async fn count_schedules_by_group_impl(&self, group_id: i64) -> Result<u64> {
        LessonSchedules::find()
            .filter(Column::GroupId.eq(group_id))
            .count(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("统计教学班课表失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::models::rooms::requests::CreateRoomRequest;
    use crate::models::schedules::requests::{CreateScheduleRequest, ScheduleListQuery};
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::connect("sqlite::memory:", 1, 5)
            .await
            .expect("内存数据库初始化失败")
    }

    #[actix_web::test]
    async fn test_schedule_lifecycle_is_denormalized_and_ordered() {
        let storage = memory_storage().await;

        let room = storage
            .create_room_impl(CreateRoomRequest {
                name: "Room 101".to_string(),
                capacity: Some(40),
            })
            .await
            .unwrap();
        let other_room = storage
            .create_room_impl(CreateRoomRequest {
                name: "Lab A".to_string(),
                capacity: None,
            })
            .await
            .unwrap();
        let group = storage
            .create_group_impl(CreateGroupRequest {
                name: "G1".to_string(),
                course_name: "Math".to_string(),
            })
            .await
            .unwrap();

        let later = storage
            .create_schedule_impl(CreateScheduleRequest {
                room_id: room.id,
                group_id: group.id,
                day: 1,
                start_time: 14,
                end_time: 16,
            })
            .await
            .unwrap();
        assert_eq!(later.room_name, "Room 101");
        assert_eq!(later.group_name, "G1");
        assert_eq!(later.course_name, "Math");

        storage
            .create_schedule_impl(CreateScheduleRequest {
                room_id: other_room.id,
                group_id: group.id,
                day: 1,
                start_time: 9,
                end_time: 10,
            })
            .await
            .unwrap();

        let all = storage
            .list_schedules_impl(ScheduleListQuery::default())
            .await
            .unwrap();
        let starts: Vec<i32> = all.iter().map(|e| e.start_time).collect();
        assert_eq!(starts, vec![9, 14]);

        let by_room = storage
            .list_schedules_impl(ScheduleListQuery {
                room_id: Some(room.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_room.len(), 1);

        assert_eq!(storage.count_schedules_by_room_impl(room.id).await.unwrap(), 1);
        assert_eq!(storage.count_schedules_by_group_impl(group.id).await.unwrap(), 2);

        let id = later.id.unwrap();
        let moved = storage
            .update_schedule_impl(
                id,
                CreateScheduleRequest {
                    room_id: other_room.id,
                    group_id: group.id,
                    day: 2,
                    start_time: 8,
                    end_time: 9,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(moved.room_name, "Lab A");
        assert_eq!(moved.day, 2);

        assert!(storage.delete_schedule_impl(id).await.unwrap());
        assert!(storage.get_schedule_by_id_impl(id).await.unwrap().is_none());
        assert!(!storage.delete_schedule_impl(id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_update_missing_schedule_returns_none() {
        let storage = memory_storage().await;
        let result = storage
            .update_schedule_impl(
                42,
                CreateScheduleRequest {
                    room_id: 1,
                    group_id: 1,
                    day: 1,
                    start_time: 8,
                    end_time: 9,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
