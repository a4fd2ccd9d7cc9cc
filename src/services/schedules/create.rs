use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{
    SCHEDULE_WRITE_LOCK, ScheduleService, ensure_writable, internal_error, validate_write,
};
use crate::models::ApiResponse;
use crate::models::schedules::requests::CreateScheduleRequest;

pub async fn create_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_data: CreateScheduleRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = validate_write(&schedule_data) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    let _guard = SCHEDULE_WRITE_LOCK.lock().await;

    if let Err(resp) = ensure_writable(&storage, &schedule_data, None).await {
        return Ok(resp);
    }

    match storage.create_schedule(schedule_data).await {
        Ok(entry) => {
            info!(
                "Schedule {:?} created: room {} day {} [{}, {})",
                entry.id, entry.room_id, entry.day, entry.start_time, entry.end_time
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(entry, "Schedule created successfully")))
        }
        Err(e) => Ok(internal_error("Schedule creation failed", &e)),
    }
}
