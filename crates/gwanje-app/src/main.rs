//! # gwanje
//!
//! GWANJE 대시보드 클라이언트 바이너리 진입점.
//! DI 와이어링, 초기 로드, 요약 폴링, 라이프사이클 관리.

use anyhow::Result;
use clap::Parser;
use gwanje_app::controller::DashboardController;
use gwanje_app::lifecycle::Shutdown;
use gwanje_app::poller::SummaryPoller;
use gwanje_core::config_manager::ConfigManager;
use gwanje_network::HttpMonitorApi;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// GWANJE 프로세스 관제 대시보드 클라이언트
#[derive(Parser, Debug)]
#[command(name = "gwanje")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 서버 URL 지정 (기본: http://127.0.0.1:8000)
    #[arg(long, short = 's')]
    server: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 요약 폴링 주기 (밀리초)
    #[arg(long)]
    summary_interval: Option<u64>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "gwanje={},gwanje_app={},gwanje_core={},gwanje_network={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("GWANJE 클라이언트 시작");

    // 설정 로드
    let config_manager = match args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    let mut config = config_manager.get();

    // CLI 인자로 설정 오버라이드
    if let Some(server_url) = args.server {
        config.server.base_url = server_url;
    }
    if let Some(interval_ms) = args.summary_interval {
        config.poll.summary_interval_ms = interval_ms;
    }
    config.validate()?;

    info!("서버: {}", config.server.base_url);

    // ── 어댑터 생성 (DI 와이어링) ──
    let api: Arc<dyn gwanje_core::ports::api_client::MonitorApi> = Arc::new(HttpMonitorApi::new(
        &config.server.base_url,
        config.request_timeout(),
    )?);
    let state = gwanje_app::shared_state(config.view.default_page_size);
    let controller = DashboardController::new(api.clone(), state.clone());

    // 초기 로드
    controller.initial_load().await;
    {
        let state = state.read().await;
        match state.last_error() {
            Some(message) => warn!("초기 로드 에러 상태: {message}"),
            None => info!("정본 프로세스 목록: {}건", state.processes().len()),
        }
    }

    // 요약 폴링 시작
    let shutdown = Shutdown::new();
    let poller = SummaryPoller::new(api, state, config.summary_interval());
    let poller_handle = poller.start(shutdown.subscribe());

    // 종료 시그널 대기
    shutdown.wait_for_signal().await;
    poller_handle.stop().await;

    info!("GWANJE 클라이언트 종료");
    Ok(())
}
