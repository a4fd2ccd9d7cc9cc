use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoomService;
use crate::errors::TimetableError;
use crate::models::options::OptionResource;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};

pub async fn delete_room(
    service: &RoomService,
    request: &HttpRequest,
    room_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教室被课表引用而非拥有，不级联删除
    match storage.count_schedules_by_room(room_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RoomInUse,
                format!("Room is still used by {count} schedule entries"),
            )));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal("Failed to check room usage", &e)));
        }
    }

    match storage.delete_room(room_id).await {
        Ok(true) => {
            info!("Room {} deleted", room_id);
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Rooms).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Room deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(TimetableError::ReferenceInUse(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RoomInUse,
                "Room is still used by schedule entries",
            )))
        }
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Room deletion failed", &e))),
    }
}
