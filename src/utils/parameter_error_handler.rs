//! 请求参数错误处理
//!
//! 将 actix 的 JSON / Query 反序列化错误转换为统一的 `ApiResponse`。

use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let (mut builder, message) = match &err {
        JsonPayloadError::ContentType => (
            HttpResponse::UnsupportedMediaType(),
            "Content-Type must be application/json".to_string(),
        ),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => (
            HttpResponse::PayloadTooLarge(),
            "Request body is too large".to_string(),
        ),
        _ => (HttpResponse::BadRequest(), format!("Invalid JSON body: {err}")),
    };

    let response = builder.json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query parameter error on {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
