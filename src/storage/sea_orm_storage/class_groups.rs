//! 教学班存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::class_groups::{ActiveModel, Column, Entity as ClassGroups};
use crate::errors::{Result, TimetableError};
use crate::models::groups::{
    entities::ClassGroup,
    requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教学班
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<ClassGroup> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            course_name: Set(req.course_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建教学班失败", e))?;

        Ok(result.into_group())
    }

    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教学班失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    pub async fn get_group_by_name_impl(&self, name: &str) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教学班失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 列出教学班，搜索同时匹配班名和课程名
    pub async fn list_groups_impl(&self, query: GroupListQuery) -> Result<Vec<ClassGroup>> {
        let mut select = ClassGroups::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::CourseName.contains(search)),
            );
        }

        let groups = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教学班列表失败: {e}")))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }

    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        if self.get_group_by_id_impl(group_id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(group_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(course_name) = update.course_name {
            model.course_name = Set(course_name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新教学班失败", e))?;

        self.get_group_by_id_impl(group_id).await
    }

    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = ClassGroups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err("删除教学班失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
