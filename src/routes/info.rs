//! # 앱 정보 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/info` → `{ "app": ..., "version": ..., "description": ... }`

use crate::models::AppInfo;
use axum::Json;

/// `GET /api/info` — 앱 이름, 버전, 설명을 반환합니다.
pub async fn app_info() -> Json<AppInfo> {
    Json(AppInfo::current())
}
