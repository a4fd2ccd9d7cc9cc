use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{RoomService, create::handle_room_write_error, validate_capacity};
use crate::models::options::OptionResource;
use crate::models::rooms::requests::UpdateRoomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};
use crate::utils::validate::validate_resource_name;

pub async fn update_room(
    service: &RoomService,
    request: &HttpRequest,
    room_id: i64,
    mut update_data: UpdateRoomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(name) = update_data.name.as_mut() {
        *name = name.trim().to_string();
        if let Err(msg) = validate_resource_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::RoomNameInvalid, msg)));
        }

        // 改名不能与其他教室重名
        match storage.get_room_by_name(name).await {
            Ok(Some(other)) if other.id != room_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::RoomAlreadyExists,
                    "Room name already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => return Ok(handle_room_write_error(&e)),
        }
    }

    if let Err(msg) = validate_capacity(update_data.capacity) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    match storage.update_room(room_id, update_data).await {
        Ok(Some(room)) => {
            info!("Room {} updated", room.id);
            // 教室名变更会影响下拉选项
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Rooms).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(room, "Room updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(handle_room_write_error(&e)),
    }
}
