//! 路径参数提取器
//!
//! 只接受正整数 ID，非法值直接返回 400 与统一响应体，不进入服务层。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, String> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| format!("Missing path parameter: {name}"))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("Invalid {name}: '{raw}' is not a positive integer")),
    }
}

macro_rules! define_safe_id {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_id(req, $param).map($name).map_err(|msg| {
                    let response = HttpResponse::BadRequest()
                        .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg.clone()));
                    InternalError::from_response(msg, response).into()
                }))
            }
        }
    };
}

define_safe_id!(
    /// `{room_id}` 路径参数
    SafeRoomId,
    "room_id"
);
define_safe_id!(
    /// `{group_id}` 路径参数
    SafeGroupId,
    "group_id"
);
define_safe_id!(
    /// `{schedule_id}` 路径参数
    SafeScheduleId,
    "schedule_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};

    async fn echo(id: SafeRoomId) -> HttpResponse {
        HttpResponse::Ok().body(id.0.to_string())
    }

    #[actix_web::test]
    async fn test_safe_id_accepts_positive_integers() {
        let app =
            test::init_service(App::new().route("/rooms/{room_id}", web::get().to(echo))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/rooms/42").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "42");
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_invalid_values() {
        let app =
            test::init_service(App::new().route("/rooms/{room_id}", web::get().to(echo))).await;

        for uri in ["/rooms/0", "/rooms/-3", "/rooms/abc"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        }
    }
}
