//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 5000)
//! - `APP_ENV` / `TESTING`: 테스트 모드 여부

use crate::error::ServerError;
use std::env;

/// 기본 바인딩 주소
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// 기본 포트 번호
pub const DEFAULT_PORT: u16 = 5000;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// `create_app()`에 참조로 넘겨지며, 앱 인스턴스마다 따로 가질 수 있습니다.
/// 전역 변수가 아니므로 테스트끼리 설정이 섞이지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 테스트 모드. 켜져 있으면 요청 로깅(TraceLayer)을 붙이지 않습니다.
    pub testing: bool,
}

impl Config {
    /// 프로세스 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `PORT`가 숫자(u16)로 해석되지 않으면 `ServerError::InvalidPort`를 반환합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, ServerError> {
        // env::var는 Result를 돌려주므로 .ok()로 Option<String>으로 바꿉니다.
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 만듭니다.
    ///
    /// `from_env()`와 같은 규칙을 따르지만, 값을 어디서 가져올지는 호출자가 정합니다.
    /// 테스트에서는 프로세스 환경변수를 건드리지 않고 HashMap 등을 넘길 수 있습니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        // 포트 번호는 문자열 → 숫자 변환이 필요합니다.
        // 잘못된 값은 조용히 기본값으로 바꾸지 않고 에러로 알립니다.
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let testing = lookup("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("testing"))
            .unwrap_or(false)
            || lookup("TESTING").map(|v| is_truthy(&v)).unwrap_or(false);

        Ok(Self {
            host,
            port,
            testing,
        })
    }

    /// 테스트용 설정: 루프백 주소, 임의 포트(0), 테스트 모드 켬
    pub fn testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            testing: true,
        }
    }

    /// `TcpListener::bind()`에 넘길 "host:port" 문자열
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            testing: false,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:5000");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.testing);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "eighty"));

        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(_)));
    }

    #[test]
    fn testing_mode_flags() {
        assert!(Config::from_lookup(lookup_from(&[("APP_ENV", "Testing")])).unwrap().testing);
        assert!(Config::from_lookup(lookup_from(&[("TESTING", "1")])).unwrap().testing);
        assert!(Config::from_lookup(lookup_from(&[("TESTING", "TRUE")])).unwrap().testing);
        assert!(!Config::from_lookup(lookup_from(&[("TESTING", "0")])).unwrap().testing);
        assert!(!Config::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap().testing);
    }

    #[test]
    fn testing_config_binds_loopback_on_any_port() {
        let config = Config::testing();
        assert!(config.testing);
        assert_eq!(config.addr(), "127.0.0.1:0");
    }
}
