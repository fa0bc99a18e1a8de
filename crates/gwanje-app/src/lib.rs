//! # gwanje-app
//!
//! GWANJE 대시보드 클라이언트 조립 레이어. 폴링 컨트롤러, 액션
//! 코디네이터, 라이프사이클을 제공하고 `main`에서 DI 와이어링한다.

use std::sync::Arc;

use gwanje_core::state::DashboardState;
use tokio::sync::RwLock;

pub mod controller;
pub mod lifecycle;
pub mod poller;

/// 태스크 간 공유되는 대시보드 상태
pub type SharedState = Arc<RwLock<DashboardState>>;

/// 빈 공유 상태 생성 (시작 페이지 크기 지정)
pub fn shared_state(page_size: usize) -> SharedState {
    Arc::new(RwLock::new(DashboardState::with_page_size(page_size)))
}
