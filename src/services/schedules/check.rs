use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{ScheduleService, internal_error};
use crate::models::ApiResponse;
use crate::models::schedules::requests::{ConflictCheckRequest, ScheduleListQuery};
use crate::models::schedules::responses::ConflictCheckResponse;
use crate::scheduling::has_conflict;

pub async fn check_conflict(
    service: &ScheduleService,
    request: &HttpRequest,
    check_data: ConflictCheckRequest,
) -> ActixResult<HttpResponse> {
    let ConflictCheckRequest {
        candidate,
        exclude_id,
    } = check_data;

    // 不完整的候选条目无需查库
    let Some(slot) = candidate.complete() else {
        let response = ConflictCheckResponse::from(has_conflict(&candidate, &[], exclude_id));
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Candidate is incomplete",
        )));
    };

    let storage = service.get_storage(request);
    let snapshot = match storage
        .list_schedules(ScheduleListQuery {
            room_id: Some(slot.room_id),
            day: Some(slot.day),
            group_id: None,
        })
        .await
    {
        Ok(entries) => entries,
        Err(e) => return Ok(internal_error("Failed to load schedule snapshot", &e)),
    };

    let response = ConflictCheckResponse::from(has_conflict(&candidate, &snapshot, exclude_id));
    debug!(
        "Conflict check room {} day {} [{}, {}): conflict = {}",
        slot.room_id, slot.day, slot.start_time, slot.end_time, response.conflict
    );

    let message = if response.conflict {
        "Candidate conflicts with an existing schedule"
    } else {
        "No conflict"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
}
