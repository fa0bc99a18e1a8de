//! 라이프사이클 관리.
//!
//! 종료 신호 전파, OS 시그널 핸들링.

use tokio::sync::watch;
use tracing::info;

/// 종료 신호 전파자.
///
/// watch 채널 하나로 폴러 등 백그라운드 태스크에 종료를 알린다.
pub struct Shutdown {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// 새 종료 전파자 생성
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// 종료 수신기 복제
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// 종료 신호 발송
    pub fn trigger(&self) {
        info!("종료 신호 발송");
        let _ = self.tx.send(true);
    }

    /// OS 시그널 대기 (SIGINT, SIGTERM) 후 종료 신호 발송
    pub async fn wait_for_signal(&self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigint = signal(SignalKind::interrupt()).expect("SIGINT 핸들러 등록 실패");
            let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM 핸들러 등록 실패");

            tokio::select! {
                _ = sigint.recv() => info!("SIGINT 수신"),
                _ = sigterm.recv() => info!("SIGTERM 수신"),
            }
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.expect("Ctrl+C 핸들러 등록 실패");
            info!("Ctrl+C 수신");
        }

        self.trigger();
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
