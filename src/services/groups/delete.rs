use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GroupService;
use crate::errors::TimetableError;
use crate::models::options::OptionResource;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};

pub async fn delete_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_schedules_by_group(group_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupInUse,
                format!("Group is still used by {count} schedule entries"),
            )));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal("Failed to check group usage", &e)));
        }
    }

    match storage.delete_group(group_id).await {
        Ok(true) => {
            info!("Group {} deleted", group_id);
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Groups).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Group deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(TimetableError::ReferenceInUse(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupInUse,
                "Group is still used by schedule entries",
            )))
        }
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Group deletion failed", &e))),
    }
}
