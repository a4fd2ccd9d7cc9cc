use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GroupService;
use crate::errors::TimetableError;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::options::OptionResource;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};
use crate::utils::validate::{validate_course_name, validate_resource_name};

pub async fn create_group(
    service: &GroupService,
    request: &HttpRequest,
    mut group_data: CreateGroupRequest,
) -> ActixResult<HttpResponse> {
    group_data.name = group_data.name.trim().to_string();
    group_data.course_name = group_data.course_name.trim().to_string();

    if let Err(msg) = validate_resource_name(&group_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GroupNameInvalid, msg)));
    }
    if let Err(msg) = validate_course_name(&group_data.course_name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.get_group_by_name(&group_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupAlreadyExists,
                "Group name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(handle_group_write_error(&e)),
    }

    match storage.create_group(group_data).await {
        Ok(group) => {
            info!(
                "Group {} ({}) created with id {}",
                group.name, group.course_name, group.id
            );
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Groups).await;
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(group, "Group created successfully")))
        }
        Err(e) => Ok(handle_group_write_error(&e)),
    }
}

/// 并发写入时唯一约束仍可能触发
pub(super) fn handle_group_write_error(e: &TimetableError) -> HttpResponse {
    error!("Group write failed: {}", e);
    match e {
        TimetableError::AlreadyExists(_) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::GroupAlreadyExists,
            "Group name already exists",
        )),
        _ => HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Group write failed", e)),
    }
}
