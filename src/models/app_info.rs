//! # 앱 메타데이터 모델
//!
//! `GET /api/info`가 돌려주는 이름/버전/설명입니다.

use serde::Serialize;

pub const APP_NAME: &str = "Flask Demo App";
pub const APP_VERSION: &str = "1.0.0";
pub const APP_DESCRIPTION: &str = "A simple Flask app with CI/CD to Azure";

/// 앱 정보 응답
///
/// 키 순서는 `app`, `version`, `description`으로 고정됩니다.
/// `serde_json::json!`(BTreeMap 기반)을 쓰면 키가 알파벳순으로 정렬되므로
/// 구조체로 정의합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub app: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl AppInfo {
    pub const fn current() -> Self {
        Self {
            app: APP_NAME,
            version: APP_VERSION,
            description: APP_DESCRIPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_serializes_in_wire_order() {
        let body = serde_json::to_string(&AppInfo::current()).unwrap();
        assert_eq!(
            body,
            r#"{"app":"Flask Demo App","version":"1.0.0","description":"A simple Flask app with CI/CD to Azure"}"#
        );
    }

    #[test]
    fn version_matches_crate_version() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
