use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{RoomService, validate_capacity};
use crate::errors::TimetableError;
use crate::models::options::OptionResource;
use crate::models::rooms::requests::CreateRoomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};
use crate::utils::validate::validate_resource_name;

pub async fn create_room(
    service: &RoomService,
    request: &HttpRequest,
    mut room_data: CreateRoomRequest,
) -> ActixResult<HttpResponse> {
    room_data.name = room_data.name.trim().to_string();

    if let Err(msg) = validate_resource_name(&room_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RoomNameInvalid, msg)));
    }
    if let Err(msg) = validate_capacity(room_data.capacity) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.get_room_by_name(&room_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RoomAlreadyExists,
                "Room name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check room name: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal("Failed to check room name", &e)));
        }
    }

    match storage.create_room(room_data).await {
        Ok(room) => {
            info!("Room {} created with id {}", room.name, room.id);
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Rooms).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(room, "Room created successfully")))
        }
        Err(e) => Ok(handle_room_write_error(&e)),
    }
}

/// 并发写入时唯一约束仍可能触发
pub(super) fn handle_room_write_error(e: &TimetableError) -> HttpResponse {
    error!("Room write failed: {}", e);
    match e {
        TimetableError::AlreadyExists(_) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::RoomAlreadyExists,
            "Room name already exists",
        )),
        _ => HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Room write failed", e)),
    }
}
