use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SCHEDULE_WRITE_LOCK, ScheduleService, internal_error};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let _guard = SCHEDULE_WRITE_LOCK.lock().await;

    match storage.delete_schedule(schedule_id).await {
        Ok(true) => {
            info!("Schedule {} deleted", schedule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Schedule deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule not found",
        ))),
        Err(e) => Ok(internal_error("Schedule deletion failed", &e)),
    }
}
