//! # 루트(Index) 핸들러
//!
//! ## 엔드포인트
//! - `GET /` → `{ "message": "Hello from Flask!", "status": "healthy" }`

use crate::models::Greeting;
use axum::Json;

/// `GET /` — 고정된 인사 메시지를 반환합니다.
pub async fn index() -> Json<Greeting> {
    Json(Greeting::new())
}
