//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok" }`
//!
//! 주로 다음 용도로 사용됩니다:
//! - 로드밸런서/App Service의 서버 상태 확인
//! - 컨테이너 오케스트레이터의 liveness 검사

use crate::models::HealthStatus;
use axum::Json;

/// `GET /health` — 서버 상태를 확인합니다.
///
/// State, Path 등 Extractor가 하나도 없는 가장 단순한 형태의 핸들러입니다.
/// 반환 타입이 `Json<T>`이므로 Axum이 자동으로:
/// - Content-Type: application/json 헤더를 설정하고
/// - HTTP 200 OK 상태 코드를 반환합니다.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
