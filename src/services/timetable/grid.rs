use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::TimetableService;
use crate::config::AppConfig;
use crate::errors::TimetableError;
use crate::models::rooms::requests::RoomListQuery;
use crate::models::schedules::requests::ScheduleListQuery;
use crate::models::timetable::{entities::RoomColumn, requests::TimetableQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::scheduling::{HourWindow, is_valid_day, project_grid};

pub async fn get_timetable(
    service: &TimetableService,
    request: &HttpRequest,
    query: TimetableQuery,
) -> ActixResult<HttpResponse> {
    if !is_valid_day(query.day) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("day must be between 1 and 7, got {}", query.day),
        )));
    }

    let defaults = &AppConfig::get().timetable;
    let start = query.start_hour.unwrap_or(defaults.default_start_hour);
    let end = query.end_hour.unwrap_or(defaults.default_end_hour);
    let window = match HourWindow::new(start, end) {
        Ok(window) => window,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TimetableWindowInvalid,
                e.message(),
            )));
        }
    };

    let storage = service.get_storage(request);

    let rooms = match storage.list_rooms(RoomListQuery::default()).await {
        Ok(rooms) => rooms,
        Err(e) => return Ok(load_failed("rooms", &e)),
    };
    let entries = match storage
        .list_schedules(ScheduleListQuery {
            day: Some(query.day),
            ..Default::default()
        })
        .await
    {
        Ok(entries) => entries,
        Err(e) => return Ok(load_failed("schedules", &e)),
    };

    let columns: Vec<RoomColumn> = rooms.iter().map(RoomColumn::from).collect();
    let grid = project_grid(
        &entries,
        query.day,
        &columns,
        window,
        query.viewport.unwrap_or_default(),
    );

    debug!(
        "Timetable projected for day {} [{}, {}): {} rooms, {} entries",
        query.day,
        window.start(),
        window.end(),
        columns.len(),
        entries.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(grid, "Timetable retrieved successfully")))
}

fn load_failed(what: &str, e: &TimetableError) -> HttpResponse {
    error!("Failed to load {} for timetable: {}", what, e);
    HttpResponse::InternalServerError()
        .json(ApiResponse::internal(&format!("Failed to load {what}"), e))
}
