//! # 에러 처리 모듈
//!
//! 서버를 띄우는 과정에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! HTTP 핸들러 자체는 실패하지 않습니다 (고정된 JSON만 반환).
//! 알 수 없는 경로(404)나 허용되지 않은 메서드(405)는
//! Axum의 기본 동작에 맡기므로 별도의 에러 응답 타입이 없습니다.

use thiserror::Error;

/// 설정 로딩 및 서버 실행 중 발생하는 에러
///
/// `main()`에서는 `anyhow::Result`로 감싸서 `?`로 전파합니다.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `PORT` 환경변수가 0~65535 범위의 숫자가 아님
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),

    /// 소켓 바인딩/서빙 중 입출력 오류
    /// #[from]: std::io::Error → ServerError::Io 자동 변환
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
