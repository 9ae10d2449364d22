//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `index`: 루트 경로 인사 (`GET /`)
//! - `health`: 서버 상태 확인 (`GET /health`)
//! - `info`: 앱 메타데이터 (`GET /api/info`)

pub mod health;
pub mod index;
pub mod info;

// lib.rs에서 `routes::health_check`처럼 바로 접근 가능하게 재공개합니다.
pub use health::*;
pub use index::*;
pub use info::*;
