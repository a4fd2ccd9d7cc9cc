use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            group,
            "Group retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Failed to get group information", &e))),
    }
}
