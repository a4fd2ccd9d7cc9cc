use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::rooms::requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest};
use crate::services::RoomService;
use crate::utils::SafeRoomId;

// 懒加载的全局 ROOM_SERVICE 实例
static ROOM_SERVICE: Lazy<RoomService> = Lazy::new(RoomService::new_lazy);

// HTTP处理程序
pub async fn list_rooms(
    req: HttpRequest,
    query: web::Query<RoomListQuery>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.list_rooms(&req, query.into_inner()).await
}

pub async fn create_room(
    req: HttpRequest,
    room_data: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.create_room(&req, room_data.into_inner()).await
}

pub async fn get_room(req: HttpRequest, room_id: SafeRoomId) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.get_room(&req, room_id.0).await
}

pub async fn update_room(
    req: HttpRequest,
    room_id: SafeRoomId,
    update_data: web::Json<UpdateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE
        .update_room(&req, room_id.0, update_data.into_inner())
        .await
}

pub async fn delete_room(req: HttpRequest, room_id: SafeRoomId) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.delete_room(&req, room_id.0).await
}

// 配置路由
pub fn configure_rooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rooms")
            .service(
                web::resource("")
                    .route(web::get().to(list_rooms))
                    .route(web::post().to(create_room)),
            )
            .service(
                web::resource("/{room_id}")
                    .route(web::get().to(get_room))
                    .route(web::put().to(update_room))
                    .route(web::delete().to(delete_room)),
            ),
    );
}
