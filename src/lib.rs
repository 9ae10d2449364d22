//! # demo_app 라이브러리
//!
//! 세 개의 고정 JSON 엔드포인트를 제공하는 데모 웹 서비스입니다.
//!
//! | 경로 | 응답 |
//! |---|---|
//! | `GET /` | `{"message":"Hello from Flask!","status":"healthy"}` |
//! | `GET /health` | `{"status":"ok"}` |
//! | `GET /api/info` | `{"app":"Flask Demo App","version":"1.0.0","description":"..."}` |
//!
//! 애플리케이션은 전역 인스턴스로 두지 않고, [`create_app`] 팩토리가
//! 호출될 때마다 새 `Router`를 만들어 반환합니다.
//! 덕분에 테스트마다 독립된 인스턴스를 가질 수 있습니다.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use config::Config;
use error::ServerError;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer}, // CORS 설정
    trace::TraceLayer,      // HTTP 요청/응답 로깅 미들웨어
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG`가 없을 때 사용하는 기본 로그 필터
pub const DEFAULT_LOG_FILTER: &str = "demo_app=debug,tower_http=debug,axum=debug";

/// 새 애플리케이션 인스턴스(Router)를 생성합니다.
///
/// 정의되지 않은 경로는 404, 정의된 경로에 다른 메서드로 요청하면 405가
/// Axum의 기본 동작으로 반환됩니다. GET 라우트는 HEAD 요청도 함께 처리합니다.
///
/// `config.testing`이 켜져 있으면 `TraceLayer`를 붙이지 않아 테스트 출력이 조용합니다.
pub fn create_app(config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health_check))
        .route("/api/info", get(routes::app_info));

    // 개발용 데모 서비스이므로 모든 출처/메서드/헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // if-else를 표현식으로 사용해 최종 Router를 결정합니다.
    if config.testing {
        router.layer(cors)
    } else {
        router.layer(cors).layer(TraceLayer::new_for_http())
    }
}

/// 전역 tracing 구독자(subscriber)를 등록합니다.
///
/// 프로세스당 한 번만 호출해야 합니다 (`main()`에서 호출).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Ctrl+C 또는 SIGTERM을 받을 때까지 요청을 처리합니다.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// `shutdown` future가 끝나면 진행 중인 요청을 마무리하고 종료합니다.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, finishing in-flight requests");
}
