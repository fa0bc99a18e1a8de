//! GWANJE 핵심 에러 타입.
//!
//! 어댑터 crate는 이 타입으로 직접 매핑한다. 종료 실패 계열
//! (NotFound/PermissionDenied/Application)은 서버가 보낸 메시지를
//! 그대로 담아 운영자에게 원문 그대로 노출한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 네트워크, 디코딩, 종료 거부 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 응답 본문 디코딩 실패 (잘못된 JSON 등)
    #[error("응답 디코딩 에러: {0}")]
    Decode(String),

    /// 종료 시점에 PID가 더 이상 존재하지 않음 (서버 404)
    #[error("프로세스 미발견: {0}")]
    NotFound(String),

    /// 서버가 종료를 거부함 (서버 403)
    #[error("권한 거부: {0}")]
    PermissionDenied(String),

    /// 그 외 서버가 보고한 실패 문자열
    #[error("서버 에러: {0}")]
    Application(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// 서버가 보낸 에러 메시지 원문.
    ///
    /// 종료(terminate) 실패 시 운영자에게 가공 없이 노출해야 하는
    /// 문자열이다. 서버 응답에서 유래하지 않은 에러는 `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CoreError::NotFound(msg)
            | CoreError::PermissionDenied(msg)
            | CoreError::Application(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passthrough() {
        let err = CoreError::NotFound("Process not found.".to_string());
        assert_eq!(err.server_message(), Some("Process not found."));

        let err = CoreError::PermissionDenied("Permission denied to terminate the process.".to_string());
        assert_eq!(
            err.server_message(),
            Some("Permission denied to terminate the process.")
        );
    }

    #[test]
    fn non_server_errors_have_no_message() {
        let err = CoreError::Network("connection refused".to_string());
        assert_eq!(err.server_message(), None);

        let err = CoreError::Decode("unexpected EOF".to_string());
        assert_eq!(err.server_message(), None);
    }
}
