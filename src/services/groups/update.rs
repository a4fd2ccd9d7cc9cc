use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{GroupService, create::handle_group_write_error};
use crate::models::groups::requests::UpdateGroupRequest;
use crate::models::options::OptionResource;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{cache_from_request, options::invalidate_options};
use crate::utils::validate::{validate_course_name, validate_resource_name};

pub async fn update_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
    mut update_data: UpdateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(course_name) = update_data.course_name.as_mut() {
        *course_name = course_name.trim().to_string();
        if let Err(msg) = validate_course_name(course_name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }

    if let Some(name) = update_data.name.as_mut() {
        *name = name.trim().to_string();
        if let Err(msg) = validate_resource_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::GroupNameInvalid, msg)));
        }

        match storage.get_group_by_name(name).await {
            Ok(Some(other)) if other.id != group_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GroupAlreadyExists,
                    "Group name already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => return Ok(handle_group_write_error(&e)),
        }
    }

    match storage.update_group(group_id, update_data).await {
        Ok(Some(group)) => {
            info!("Group {} updated", group.id);
            invalidate_options(cache_from_request(request).as_ref(), OptionResource::Groups).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(group, "Group updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Ok(handle_group_write_error(&e)),
    }
}
