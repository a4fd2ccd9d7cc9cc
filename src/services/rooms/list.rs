use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::rooms::{requests::RoomListQuery, responses::RoomListResponse};
use crate::models::ApiResponse;

pub async fn list_rooms(
    service: &RoomService,
    request: &HttpRequest,
    query: RoomListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rooms(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RoomListResponse { items },
            "Rooms retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Failed to list rooms", &e))),
    }
}
