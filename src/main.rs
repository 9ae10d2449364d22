//! # demo_app 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 애플리케이션(Router) 생성
//! 5. HTTP 서버 시작 (종료 시그널까지)

use anyhow::Result; // 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use demo_app::{config::Config, create_app, init_tracing, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Starting demo_app on {}:{}", config.host, config.port);
    if config.testing {
        tracing::warn!("Testing mode is enabled, request tracing is off");
    }

    let app = create_app(&config);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}
