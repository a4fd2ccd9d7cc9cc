use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScheduleService, internal_error};
use crate::models::schedules::{requests::ScheduleListQuery, responses::ScheduleListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_schedules(
    service: &ScheduleService,
    request: &HttpRequest,
    query: ScheduleListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_schedules(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduleListResponse { items },
            "Schedules retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list schedules", &e)),
    }
}

pub async fn get_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_schedule_by_id(schedule_id).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Schedule retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule not found",
        ))),
        Err(e) => Ok(internal_error("Failed to get schedule", &e)),
    }
}
