//! # 상태 응답 모델
//!
//! - `Greeting`: `GET /` → `{"message":"Hello from Flask!","status":"healthy"}`
//! - `HealthStatus`: `GET /health` → `{"status":"ok"}`

use serde::Serialize;

/// 루트 경로 인사 응답
///
/// 필드 선언 순서가 곧 JSON 키 순서입니다 (serde는 선언 순서대로 직렬화).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub status: &'static str,
}

impl Greeting {
    pub const fn new() -> Self {
        Self {
            message: "Hello from Flask!",
            status: "healthy",
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

/// 헬스체크 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_serializes_in_wire_order() {
        let body = serde_json::to_string(&Greeting::new()).unwrap();
        assert_eq!(body, r#"{"message":"Hello from Flask!","status":"healthy"}"#);
    }

    #[test]
    fn health_serializes_ok() {
        let body = serde_json::to_string(&HealthStatus::ok()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
