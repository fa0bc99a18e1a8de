//! 애플리케이션 설정 구조체.
//!
//! 서버 URL, 폴링 주기, 뷰 기본값 등 런타임 설정을 정의한다.
//! JSON 파일/CLI 인자에서 로드 ([`crate::config_manager`]).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::view::{DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 서버 연결 설정
    pub server: ServerConfig,
    /// 폴링 설정
    #[serde(default)]
    pub poll: PollConfig,
    /// 뷰 기본값 설정
    #[serde(default)]
    pub view: ViewConfig,
}

/// 서버 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API 서버 기본 origin (예: "http://127.0.0.1:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// 폴링 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// 시스템 요약 폴링 주기 (밀리초)
    #[serde(default = "default_summary_interval_ms")]
    pub summary_interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            summary_interval_ms: default_summary_interval_ms(),
        }
    }
}

/// 뷰 기본값 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// 시작 시 페이지 크기 ({5, 10, 25} 중 하나)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            poll: PollConfig::default(),
            view: ViewConfig::default(),
        }
    }

    /// 설정값 유효성 검증.
    ///
    /// 잘못된 페이지 크기나 0 주기는 로드 시점에 거부한다.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        if self.server.base_url.is_empty() {
            return Err(crate::error::CoreError::Config(
                "server.base_url이 비어 있습니다".to_string(),
            ));
        }
        if self.poll.summary_interval_ms == 0 {
            return Err(crate::error::CoreError::Config(
                "poll.summary_interval_ms는 0일 수 없습니다".to_string(),
            ));
        }
        if !PAGE_SIZES.contains(&self.view.default_page_size) {
            return Err(crate::error::CoreError::Config(format!(
                "view.default_page_size는 {PAGE_SIZES:?} 중 하나여야 합니다: {}",
                self.view.default_page_size
            )));
        }
        Ok(())
    }

    /// 서버 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.server.request_timeout_ms)
    }

    /// 요약 폴링 주기를 Duration으로 반환
    pub fn summary_interval(&self) -> Duration {
        Duration::from_millis(self.poll.summary_interval_ms)
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_summary_interval_ms() -> u64 {
    5_000
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
