/*!
 * 速率限制中间件
 *
 * 冲突预检接口会在表单每次改动时被调用，此中间件按客户端 IP 限制其频率。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::rate_limit::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::resource("/api/v1/schedules/check")
 *             .wrap(RateLimit::conflict_check())
 *             .route(web::post().to(check_conflict))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 以客户端 IP 作为限制键，按固定时间窗口计数
 * - 超过限制返回 429 Too Many Requests
 * - 放行的响应带有 `X-RateLimit-Limit` 与 `X-RateLimit-Remaining` 头
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 全局计数缓存
/// 键: 前缀:IP:窗口序号，值: 窗口内请求数
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(300))
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 冲突预检限制：按配置的每分钟次数/IP
    pub fn conflict_check() -> Self {
        let per_minute = AppConfig::get().server.limits.conflict_checks_per_minute;
        Self::new(per_minute, 60).with_prefix("conflict_check")
    }

    fn cache_key(&self, client: &str, now_secs: u64) -> String {
        let bucket = now_secs / self.window_secs;
        if self.key_prefix.is_empty() {
            format!("ip:{client}:{bucket}")
        } else {
            format!("{}:ip:{client}:{bucket}", self.key_prefix)
        }
    }

    /// 距离当前窗口结束的秒数
    fn retry_after(&self, now_secs: u64) -> u64 {
        self.window_secs - now_secs % self.window_secs
    }
}

/// 从请求中提取客户端 IP
///
/// 部署在反向代理后面时，需要代理正确设置 X-Forwarded-For / X-Real-IP。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn create_rate_limit_response(retry_after: u64, limit: u32) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Limit", limit.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please slow down",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let now = unix_now();
            let cache_key = limit.cache_key(&extract_client_ip(&req), now);

            let current_count = RATE_LIMIT_CACHE.get(&cache_key).await.unwrap_or(0);

            if current_count >= limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, limit.max_requests
                );
                let response =
                    create_rate_limit_response(limit.retry_after(now), limit.max_requests);
                return Ok(req.into_response(response.map_into_right_body()));
            }

            RATE_LIMIT_CACHE.insert(cache_key, current_count + 1).await;

            let remaining = limit.max_requests.saturating_sub(current_count + 1);

            let mut res = srv.call(req).await?.map_into_left_body();
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(limit.max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{App, HttpResponse, web};

    #[test]
    fn test_conflict_check_preset() {
        let check = RateLimit::conflict_check();
        assert_eq!(check.key_prefix, "conflict_check");
        assert_eq!(check.window_secs, 60);
        assert_eq!(
            check.max_requests,
            AppConfig::get().server.limits.conflict_checks_per_minute
        );
    }

    #[test]
    fn test_cache_key_changes_with_window() {
        let limit = RateLimit::new(5, 60).with_prefix("p");
        assert_eq!(limit.cache_key("1.2.3.4", 59), "p:ip:1.2.3.4:0");
        assert_eq!(limit.cache_key("1.2.3.4", 60), "p:ip:1.2.3.4:1");
        assert_eq!(limit.retry_after(59), 1);
        assert_eq!(limit.retry_after(60), 60);
    }

    #[actix_web::test]
    async fn test_requests_over_limit_are_rejected() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2, 3600).with_prefix("test_over_limit"))
                    .route(web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        for expected_remaining in ["1", "0"] {
            let req = actix_test::TestRequest::get().uri("/limited").to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get("x-ratelimit-remaining").unwrap(),
                expected_remaining
            );
        }

        let req = actix_test::TestRequest::get().uri("/limited").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key("retry-after"));
    }
}
