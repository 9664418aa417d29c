use actix_web::{App, HttpServer, web};
use std::{sync::Arc, time::Duration};
use thread_gateway::{
    AccessLog, AppMetrics, CommentClient, ErrorLog, GatewayConfig, MetricsConfig,
    MetricsMiddleware, RequestIdMiddleware, SessionAuth, SessionService, SessionValidator,
    ThreadClient, create_comment, create_thread, get_metrics, get_thread, like_comment,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();
    let metrics_config = MetricsConfig::from_env();

    let metrics = AppMetrics::new().map_err(std::io::Error::other)?;

    // One shared outbound client with an explicit deadline; the original
    // deployment had none, which left requests hanging on a stuck upstream
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.request_timeout_seconds))
        .build()
        .map_err(std::io::Error::other)?;

    let thread_client = ThreadClient::new(
        http.clone(),
        &config.upstream.thread_service_url,
        metrics.clone(),
    )
    .map_err(std::io::Error::other)?;
    let comment_client = CommentClient::new(
        http,
        &config.upstream.comment_service_url,
        metrics.clone(),
    )
    .map_err(std::io::Error::other)?;

    let session: Arc<dyn SessionValidator> = Arc::new(SessionService::new());

    tracing::info!(addr = %config.listen_addr, "starting thread gateway");

    let listen_addr = config.listen_addr.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(metrics.clone()))
            .app_data(web::Data::new(metrics_config.clone()))
            .app_data(web::Data::new(thread_client.clone()))
            .app_data(web::Data::new(comment_client.clone()))
            .route("/metrics", web::get().to(get_metrics))
            .service(
                // Wraps apply in reverse registration order; outermost first:
                // request-ID, access log, error log, auth, metrics
                web::scope("/thread")
                    .wrap(MetricsMiddleware)
                    .wrap(SessionAuth::new(session.clone()))
                    .wrap(ErrorLog)
                    .wrap(AccessLog)
                    .wrap(RequestIdMiddleware)
                    .route("", web::post().to(create_thread))
                    .route("/{tid}", web::get().to(get_thread))
                    .route("/{tid}/comment", web::post().to(create_comment))
                    .route("/{tid}/comment/{cid}/like", web::post().to(like_comment)),
            )
    })
    .bind(&listen_addr)?
    .run()
    .await
}
