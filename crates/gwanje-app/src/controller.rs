//! 대시보드 컨트롤러.
//!
//! 정본 목록을 바꾸는 모든 경로(초기 로드, 수동 새로고침, 종료 후
//! 재동기화)를 한 곳에서 조율한다. 목록 변경은 항상 서버 재조회 후
//! 통째 교체이며, 로컬 추측 수정은 없다.

use std::sync::Arc;

use gwanje_core::error::CoreError;
use gwanje_core::ports::api_client::MonitorApi;
use tracing::{error, info, warn};

use crate::SharedState;

/// 대시보드 액션 코디네이터
pub struct DashboardController {
    api: Arc<dyn MonitorApi>,
    state: SharedState,
}

impl DashboardController {
    /// 새 컨트롤러 생성
    pub fn new(api: Arc<dyn MonitorApi>, state: SharedState) -> Self {
        Self { api, state }
    }

    /// 초기 로드.
    ///
    /// 성공하면 정본을 교체하고, 실패하면 지속 에러 상태를 남긴다.
    /// 어느 쪽이든 로딩 플래그는 반드시 해제된다 — 무한 로딩 방지.
    pub async fn initial_load(&self) {
        self.state.write().await.set_loading(true);

        let result = self.api.fetch_processes().await;
        let mut state = self.state.write().await;
        match result {
            Ok(processes) => {
                info!("초기 로드 완료: 프로세스 {}건", processes.len());
                state.replace_processes(processes);
            }
            Err(e) => {
                error!("초기 로드 실패: {e}");
                state.set_error(e.to_string());
            }
        }
        state.set_loading(false);
    }

    /// 수동 새로고침.
    ///
    /// 성공 시 정본 통째 교체. 실패는 호출자에게 전파하되 기존 정본은
    /// 그대로 둔다. 동시 새로고침은 나중에 끝난 쪽이 이긴다.
    pub async fn refresh(&self) -> Result<usize, CoreError> {
        self.state.write().await.set_loading(true);

        let result = self.api.fetch_processes().await;
        let mut state = self.state.write().await;
        state.set_loading(false);

        let processes = result?;
        let count = processes.len();
        state.replace_processes(processes);
        Ok(count)
    }

    /// 프로세스 종료 후 전체 재동기화.
    ///
    /// 종료가 성공해야만 재동기화를 시도한다. 종료 실패는 서버 메시지를
    /// 원문 그대로 담아 전파하며 정본은 건드리지 않는다. 재동기화 실패는
    /// 로그만 남긴다 — 종료 자체는 이미 성공했으므로 Ok를 반환하고,
    /// 다음 새로고침/폴링까지 목록이 오래된 상태로 남는 것을 허용한다.
    pub async fn terminate(&self, pid: u32) -> Result<(), CoreError> {
        self.api.terminate_process(pid).await?;
        info!("프로세스 종료 성공: pid={pid}, 목록 재동기화");

        // 로컬에서 해당 행을 지우지 않는다. 서버가 진실이므로 전체를
        // 다시 조회해 교체한다.
        if let Err(e) = self.refresh().await {
            warn!("종료 후 재동기화 실패 (pid={pid}): {e}");
        }
        Ok(())
    }
}
