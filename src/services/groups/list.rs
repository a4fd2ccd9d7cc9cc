use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::groups::{requests::GroupListQuery, responses::GroupListResponse};
use crate::models::ApiResponse;

pub async fn list_groups(
    service: &GroupService,
    request: &HttpRequest,
    query: GroupListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_groups(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupListResponse { items },
            "Groups retrieved successfully",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::internal("Failed to list groups", &e))),
    }
}
