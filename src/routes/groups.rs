use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::groups::requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest};
use crate::services::GroupService;
use crate::utils::SafeGroupId;

static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<GroupListQuery>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(&req, query.into_inner()).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .create_group(&req, group_data.into_inner())
        .await
}

pub async fn get_group(req: HttpRequest, group_id: SafeGroupId) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(&req, group_id.0).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeGroupId,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(&req, group_id.0, update_data.into_inner())
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeGroupId) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(&req, group_id.0).await
}

pub fn configure_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .service(
                web::resource("")
                    .route(web::get().to(list_groups))
                    .route(web::post().to(create_group)),
            )
            .service(
                web::resource("/{group_id}")
                    .route(web::get().to(get_group))
                    .route(web::put().to(update_group))
                    .route(web::delete().to(delete_group)),
            ),
    );
}
