//! # 데이터 모델 모듈
//!
//! API 응답 본문으로 쓰이는 구조체들을 정의합니다.
//! 저장되는 데이터는 없고, 모두 고정된 문자열로 이루어진 응답입니다.
//! - `status`: 인사(`GET /`)와 헬스체크(`GET /health`) 응답
//! - `app_info`: 앱 메타데이터(`GET /api/info`) 응답

pub mod app_info;
pub mod status;

pub use app_info::*;
pub use status::*;
