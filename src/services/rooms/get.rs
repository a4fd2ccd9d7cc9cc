use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_room(
    service: &RoomService,
    request: &HttpRequest,
    room_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_room_by_id(room_id).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            room,
            "Room retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Failed to get room information", &e))),
    }
}
