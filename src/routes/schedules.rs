use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::schedules::requests::{
    ConflictCheckRequest, CreateScheduleRequest, ScheduleListQuery, UpdateScheduleRequest,
};
use crate::services::ScheduleService;
use crate::utils::SafeScheduleId;

// 懒加载的全局 SCHEDULE_SERVICE 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

// HTTP处理程序
pub async fn list_schedules(
    req: HttpRequest,
    query: web::Query<ScheduleListQuery>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(&req, query.into_inner())
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    schedule_data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(&req, schedule_data.into_inner())
        .await
}

pub async fn check_conflict(
    req: HttpRequest,
    check_data: web::Json<ConflictCheckRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .check_conflict(&req, check_data.into_inner())
        .await
}

pub async fn get_schedule(
    req: HttpRequest,
    schedule_id: SafeScheduleId,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.get_schedule(&req, schedule_id.0).await
}

pub async fn update_schedule(
    req: HttpRequest,
    schedule_id: SafeScheduleId,
    update_data: web::Json<UpdateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule(&req, schedule_id.0, update_data.into_inner())
        .await
}

pub async fn delete_schedule(
    req: HttpRequest,
    schedule_id: SafeScheduleId,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule(&req, schedule_id.0).await
}

// 配置路由
pub fn configure_schedules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedules")
            .service(
                web::resource("")
                    .route(web::get().to(list_schedules))
                    .route(web::post().to(create_schedule)),
            )
            .service(
                // 表单每次改动都会调用，按 IP 限流
                web::resource("/check")
                    .wrap(RateLimit::conflict_check())
                    .route(web::post().to(check_conflict)),
            )
            .service(
                web::resource("/{schedule_id}")
                    .route(web::get().to(get_schedule))
                    .route(web::put().to(update_schedule))
                    .route(web::delete().to(delete_schedule)),
            ),
    );
}
