use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{
    SCHEDULE_WRITE_LOCK, ScheduleService, ensure_writable, internal_error, validate_write,
};
use crate::models::schedules::entities::ScheduleEntry;
use crate::models::schedules::requests::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 未提供的字段沿用原值
fn merge_update(existing: &ScheduleEntry, update: &UpdateScheduleRequest) -> CreateScheduleRequest {
    CreateScheduleRequest {
        room_id: update.room_id.unwrap_or(existing.room_id),
        group_id: update.group_id.unwrap_or(existing.group_id),
        day: update.day.unwrap_or(existing.day),
        start_time: update.start_time.unwrap_or(existing.start_time),
        end_time: update.end_time.unwrap_or(existing.end_time),
    }
}

pub async fn update_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_id: i64,
    update_data: UpdateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let _guard = SCHEDULE_WRITE_LOCK.lock().await;

    let existing = match storage.get_schedule_by_id(schedule_id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleNotFound,
                "Schedule not found",
            )));
        }
        Err(e) => return Ok(internal_error("Failed to get schedule", &e)),
    };

    let merged = merge_update(&existing, &update_data);
    if let Err(resp) = validate_write(&merged) {
        return Ok(resp);
    }

    // 编辑时排除自身
    if let Err(resp) = ensure_writable(&storage, &merged, Some(schedule_id)).await {
        return Ok(resp);
    }

    match storage.update_schedule(schedule_id, merged).await {
        Ok(Some(entry)) => {
            info!("Schedule {} updated", schedule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(entry, "Schedule updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule not found",
        ))),
        Err(e) => Ok(internal_error("Schedule update failed", &e)),
    }
}
