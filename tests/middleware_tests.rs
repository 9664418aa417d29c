//! Middleware chain tests: request IDs, session auth, inbound metrics.

use actix_web::{App, HttpResponse, http::StatusCode, http::header::HeaderMap, test, web};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use thread_gateway::{
    AppMetrics, MetricsMiddleware, RequestIdMiddleware, SessionAuth, SessionError, SessionService,
    SessionValidator,
};

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

struct RejectAll;

impl SessionValidator for RejectAll {
    fn check_session(&self, _headers: &HeaderMap) -> Result<(), SessionError> {
        Err(SessionError::Missing)
    }
}

#[actix_web::test]
async fn test_request_id_header_is_sixteen_random_bytes_hex() {
    let app = test::init_service(
        App::new().service(
            web::scope("/thread")
                .wrap(RequestIdMiddleware)
                .route("/{tid}", web::get().to(ok)),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/thread/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header missing")
        .to_str()
        .unwrap();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[actix_web::test]
async fn test_request_ids_differ_between_requests() {
    let app = test::init_service(
        App::new().service(
            web::scope("/thread")
                .wrap(RequestIdMiddleware)
                .route("/{tid}", web::get().to(ok)),
        ),
    )
    .await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/thread/a").to_request())
        .await
        .headers()
        .get("x-request-id")
        .unwrap()
        .clone();
    let second = test::call_service(&app, test::TestRequest::get().uri("/thread/a").to_request())
        .await
        .headers()
        .get("x-request-id")
        .unwrap()
        .clone();

    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_invalid_session_short_circuits_with_401() {
    let calls = Arc::new(AtomicUsize::new(0));
    let spy = calls.clone();

    let app = test::init_service(
        App::new().service(
            web::scope("/thread")
                .wrap(SessionAuth::new(Arc::new(RejectAll)))
                .route(
                    "/{tid}",
                    web::get().to(move || {
                        let spy = spy.clone();
                        async move {
                            spy.fetch_add(1, Ordering::SeqCst);
                            HttpResponse::Ok().body("handler ran")
                        }
                    }),
                ),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/thread/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "401 must carry no body");
    assert_eq!(calls.load(Ordering::SeqCst), 0, "handler must not run");
}

#[actix_web::test]
async fn test_valid_session_passes_through() {
    let calls = Arc::new(AtomicUsize::new(0));
    let spy = calls.clone();

    let app = test::init_service(
        App::new().service(
            web::scope("/thread")
                .wrap(SessionAuth::new(Arc::new(SessionService::new())))
                .route(
                    "/{tid}",
                    web::get().to(move || {
                        let spy = spy.clone();
                        async move {
                            spy.fetch_add(1, Ordering::SeqCst);
                            HttpResponse::Ok().body("handler ran")
                        }
                    }),
                ),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/thread/abc")
        .insert_header(("X-Session-ID", "deadbeef42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_metrics_middleware_records_by_route_pattern() {
    let metrics = AppMetrics::new().unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(metrics.clone()))
            .service(
                web::scope("/thread")
                    .wrap(MetricsMiddleware)
                    .route("/{tid}", web::get().to(ok)),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/thread/abc123").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Labeled with the route pattern, not the concrete path
    let count = metrics
        .http_requests_total
        .with_label_values(&["GET", "/thread/{tid}", "200"])
        .get();
    assert_eq!(count, 1.0);
}

#[actix_web::test]
async fn test_metrics_middleware_counts_unmatched_routes() {
    let metrics = AppMetrics::new().unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(metrics.clone()))
            .service(
                web::scope("/thread")
                    .wrap(MetricsMiddleware)
                    .route("/{tid}", web::get().to(ok)),
            ),
    )
    .await;

    // No route matches; the endpoint label falls back to the raw path
    let req = test::TestRequest::get()
        .uri("/thread/abc/unknown/xyz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let count = metrics
        .http_requests_total
        .with_label_values(&["GET", "/thread/abc/unknown/xyz", "404"])
        .get();
    assert_eq!(count, 1.0);
}
