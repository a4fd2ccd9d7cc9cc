pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rooms::requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest};
use crate::storage::Storage;

pub struct RoomService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取教室列表
    pub async fn list_rooms(
        &self,
        request: &HttpRequest,
        query: RoomListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_rooms(self, request, query).await
    }

    pub async fn create_room(
        &self,
        request: &HttpRequest,
        room_data: CreateRoomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_room(self, request, room_data).await
    }

    pub async fn get_room(&self, request: &HttpRequest, room_id: i64) -> ActixResult<HttpResponse> {
        get::get_room(self, request, room_id).await
    }

    pub async fn update_room(
        &self,
        request: &HttpRequest,
        room_id: i64,
        update_data: UpdateRoomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_room(self, request, room_id, update_data).await
    }

    // 删除教室，仍被课表引用时拒绝
    pub async fn delete_room(
        &self,
        request: &HttpRequest,
        room_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_room(self, request, room_id).await
    }
}

/// 容量为空表示线上教室，否则必须为正数
pub(crate) fn validate_capacity(capacity: Option<i32>) -> Result<(), &'static str> {
    match capacity {
        Some(c) if c <= 0 => Err("Capacity must be a positive number"),
        _ => Ok(()),
    }
}
