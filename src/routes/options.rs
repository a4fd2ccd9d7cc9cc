use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::OptionService;

static OPTION_SERVICE: Lazy<OptionService> = Lazy::new(OptionService::new_lazy);

pub async fn list_options(
    req: HttpRequest,
    resource: web::Path<String>,
) -> ActixResult<HttpResponse> {
    OPTION_SERVICE
        .list_options(&req, resource.into_inner())
        .await
}

// 下拉选项：/api/v1/options/rooms、/api/v1/options/groups
pub fn configure_options_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/options")
            .service(web::resource("/{resource}").route(web::get().to(list_options))),
    );
}
