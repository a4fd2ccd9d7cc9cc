//! 教室存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::rooms::{ActiveModel, Column, Entity as Rooms};
use crate::errors::{Result, TimetableError};
use crate::models::rooms::{
    entities::Room,
    requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教室
    pub async fn create_room_impl(&self, req: CreateRoomRequest) -> Result<Room> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            capacity: Set(req.capacity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建教室失败", e))?;

        Ok(result.into_room())
    }

    /// 通过 ID 获取教室
    pub async fn get_room_by_id_impl(&self, room_id: i64) -> Result<Option<Room>> {
        let result = Rooms::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室失败: {e}")))?;

        Ok(result.map(|m| m.into_room()))
    }

    /// 通过名称获取教室
    pub async fn get_room_by_name_impl(&self, name: &str) -> Result<Option<Room>> {
        let result = Rooms::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室失败: {e}")))?;

        Ok(result.map(|m| m.into_room()))
    }

    /// 列出教室
    pub async fn list_rooms_impl(&self, query: RoomListQuery) -> Result<Vec<Room>> {
        let mut select = Rooms::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::Name.contains(search.trim()));
        }

        let rooms = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室列表失败: {e}")))?;

        Ok(rooms.into_iter().map(|m| m.into_room()).collect())
    }

    /// 更新教室信息
    pub async fn update_room_impl(
        &self,
        room_id: i64,
        update: UpdateRoomRequest,
    ) -> Result<Option<Room>> {
        if self.get_room_by_id_impl(room_id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(room_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(Some(capacity));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新教室失败", e))?;

        self.get_room_by_id_impl(room_id).await
    }

    /// 删除教室
    pub async fn delete_room_impl(&self, room_id: i64) -> Result<bool> {
        let result = Rooms::delete_by_id(room_id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err("删除教室失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
