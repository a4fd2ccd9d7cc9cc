pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::groups::requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest};
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_groups(
        &self,
        request: &HttpRequest,
        query: GroupListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_groups(self, request, query).await
    }

    pub async fn create_group(
        &self,
        request: &HttpRequest,
        group_data: CreateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, request, group_data).await
    }

    pub async fn get_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_group(self, request, group_id).await
    }

    pub async fn update_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
        update_data: UpdateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_group(self, request, group_id, update_data).await
    }

    // 删除教学班，仍被课表引用时拒绝
    pub async fn delete_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_group(self, request, group_id).await
    }
}
