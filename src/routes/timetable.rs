use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::timetable::requests::TimetableQuery;
use crate::services::TimetableService;

static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

pub async fn get_timetable(
    req: HttpRequest,
    query: web::Query<TimetableQuery>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .get_timetable(&req, query.into_inner())
        .await
}

pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetable").service(web::resource("").route(web::get().to(get_timetable))),
    );
}
