//! 모니터링 API HTTP 클라이언트.
//!
//! `MonitorApi` 포트 구현. 호출마다 새로운 왕복이며 캐시/재시도는
//! 없다 — 실패는 그대로 호출자에게 전파되고, 재시도는 항상 별도의
//! 사용자 조작 또는 스케줄된 틱이다.

use async_trait::async_trait;
use gwanje_core::error::CoreError;
use gwanje_core::models::process::{ProcessListResponse, ProcessRecord, SystemSummary};
use gwanje_core::ports::api_client::MonitorApi;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// 비-2xx 응답의 에러 본문
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// 모니터링 API HTTP 클라이언트 — `MonitorApi` 포트 구현
pub struct HttpMonitorApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMonitorApi {
    /// 새 HTTP 클라이언트 생성
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET 요청 후 JSON 역직렬화
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("{path} 요청 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CoreError::Application(format!("{path} ({status}): {text}")));
        }

        resp.json::<T>()
            .await
            .map_err(|e| CoreError::Decode(format!("{path} 응답 파싱 실패: {e}")))
    }

    /// 종료 실패 응답의 상태 코드별 에러 매핑.
    ///
    /// 서버의 `{ "error": "..." }` 본문을 원문 그대로 담는다. 본문이
    /// 그 형태가 아니면 본문 텍스트 전체를 메시지로 사용한다.
    fn terminate_error(status: reqwest::StatusCode, body: &str) -> CoreError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string());

        match status.as_u16() {
            404 => CoreError::NotFound(message),
            403 => CoreError::PermissionDenied(message),
            _ => CoreError::Application(message),
        }
    }
}

#[async_trait]
impl MonitorApi for HttpMonitorApi {
    async fn fetch_processes(&self) -> Result<Vec<ProcessRecord>, CoreError> {
        let body: ProcessListResponse = self.get_json("/api/processes/").await?;
        debug!("프로세스 목록 수신: {}건", body.processes.len());
        Ok(body.processes)
    }

    async fn fetch_summary(&self) -> Result<SystemSummary, CoreError> {
        let summary: SystemSummary = self.get_json("/api/system-summary/").await?;
        debug!(
            "시스템 요약 수신: CPU {:.1}%, 메모리 {:.1}%",
            summary.total_cpu_usage, summary.total_memory_usage
        );
        Ok(summary)
    }

    async fn terminate_process(&self, pid: u32) -> Result<(), CoreError> {
        let path = format!("/api/processes/terminate/{pid}/");
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("종료 요청 실패 (pid={pid}): {e}")))?;

        let status = resp.status();
        if status.is_success() {
            debug!("프로세스 종료 성공: pid={pid}");
            return Ok(());
        }

        let text = resp.text().await.unwrap_or_default();
        Err(Self::terminate_error(status, &text))
    }
}
