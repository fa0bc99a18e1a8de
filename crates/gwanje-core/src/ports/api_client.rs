//! 모니터링 API 클라이언트 포트.
//!
//! 구현: `gwanje-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::process::{ProcessRecord, SystemSummary};

/// 원격 모니터링 API 클라이언트.
///
/// 호출마다 새로운 왕복이다 — 캐시 없음, 재시도 없음. 실패는 그대로
/// 호출자에게 전파된다.
#[async_trait]
pub trait MonitorApi: Send + Sync {
    /// 실행 중인 프로세스 전체 목록 조회
    async fn fetch_processes(&self) -> Result<Vec<ProcessRecord>, CoreError>;

    /// 시스템 리소스 요약 조회
    async fn fetch_summary(&self) -> Result<SystemSummary, CoreError>;

    /// 프로세스 종료 요청.
    ///
    /// 실패 시 서버가 보낸 사람이 읽을 수 있는 메시지를 에러에 담아
    /// 반환한다 (`CoreError::server_message`).
    async fn terminate_process(&self, pid: u32) -> Result<(), CoreError>;
}
