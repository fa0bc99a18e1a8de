//! 시스템 요약 폴링 컨트롤러.
//!
//! Idle(타이머 없음) ↔ Polling(타이머 가동) 두 상태의 라이프사이클
//! 객체. 시작 즉시 한 번 요약을 가져오고 이후 고정 주기로 반복한다.
//! 틱은 서로 독립이다 — 실패한 틱은 로그만 남기고 다음 틱을 멈추지
//! 않으며, 정본 프로세스 목록을 건드리지 않고, 마지막 성공 요약을
//! 그대로 남긴다.

use std::sync::Arc;
use std::time::Duration;

use gwanje_core::ports::api_client::MonitorApi;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::SharedState;

/// 요약 폴러 (Idle 상태).
///
/// [`SummaryPoller::start`]가 Polling으로 전이하며 [`PollerHandle`]을
/// 반환한다.
pub struct SummaryPoller {
    api: Arc<dyn MonitorApi>,
    state: SharedState,
    interval: Duration,
}

impl SummaryPoller {
    /// 새 폴러 생성 (타이머는 아직 가동되지 않음)
    pub fn new(api: Arc<dyn MonitorApi>, state: SharedState, interval: Duration) -> Self {
        Self {
            api,
            state,
            interval,
        }
    }

    /// Polling 상태로 전이.
    ///
    /// 즉시 1회 fetch 후 고정 주기 타이머를 가동한다. 주기가 한 왕복보다
    /// 짧아지는 경우에도 틱이 겹쳐 경쟁하지 않도록 직렬화된다
    /// (`MissedTickBehavior::Delay` + 틱 내 await).
    pub fn start(self, mut shutdown_rx: watch::Receiver<bool>) -> PollerHandle {
        info!("요약 폴링 시작: 주기 {}ms", self.interval.as_millis());

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match self.api.fetch_summary().await {
                            Ok(summary) => {
                                self.state.write().await.apply_summary(summary);
                                debug!(
                                    "요약 갱신: CPU {:.1}%, 메모리 {:.2}%",
                                    summary.total_cpu_usage, summary.total_memory_usage
                                );
                            }
                            Err(e) => {
                                // 실패한 틱은 여기서 삼킨다 — 이전 요약 유지,
                                // 정본 목록 불변, 다음 틱 계속.
                                warn!("요약 폴링 실패: {e}");
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        info!("요약 폴링 종료");
                        break;
                    }
                }
            }
        });

        PollerHandle { task }
    }
}

/// 가동 중인 폴러의 핸들 (Polling 상태).
///
/// [`PollerHandle::stop`]이 Idle로 전이한다. `stop`은 핸들을 소비하므로
/// 취소는 타입 수준에서 정확히 한 번이다. stop 없이 드롭되어도 타이머는
/// 중단된다 — 백그라운드 fetch가 무기한 누수되지 않는다.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// 타이머 취소 및 태스크 종료 대기.
    ///
    /// 취소 시점에 비행 중이던 fetch는 폐기되며 상태에 반영되지 않는다.
    pub async fn stop(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gwanje_core::error::CoreError;
    use gwanje_core::models::process::{ProcessRecord, SystemSummary};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 틱마다 순서대로 응답을 소비하는 요약 스텁.
    /// 큐가 비면 마지막 항목의 동작을 반복한다.
    struct SummaryStub {
        responses: Mutex<Vec<Result<SystemSummary, ()>>>,
        calls: AtomicUsize,
    }

    impl SummaryStub {
        fn new(responses: Vec<Result<SystemSummary, ()>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MonitorApi for SummaryStub {
        async fn fetch_processes(&self) -> Result<Vec<ProcessRecord>, CoreError> {
            Ok(Vec::new())
        }

        async fn fetch_summary(&self) -> Result<SystemSummary, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            let next = if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0]
            };
            next.map_err(|_| CoreError::Network("connection refused".to_string()))
        }

        async fn terminate_process(&self, _pid: u32) -> Result<(), CoreError> {
            Ok(())
        }
    }

    fn summary(cpu: f64) -> SystemSummary {
        SystemSummary {
            total_cpu_usage: cpu,
            total_memory_usage: 50.0,
        }
    }

    #[tokio::test]
    async fn first_fetch_is_immediate() {
        let api = SummaryStub::new(vec![Ok(summary(10.0))]);
        let state = crate::shared_state(10);
        let (_tx, rx) = watch::channel(false);

        let handle =
            SummaryPoller::new(api.clone(), state.clone(), Duration::from_secs(60)).start(rx);

        // 주기(60초)가 오기 한참 전에 첫 fetch가 반영되어야 한다
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(api.calls(), 1);
        assert!(state.read().await.summary().is_some());

        handle.stop().await;
    }

    #[tokio::test]
    async fn failed_tick_keeps_previous_summary() {
        let api = SummaryStub::new(vec![Ok(summary(10.0)), Err(()), Err(())]);
        let state = crate::shared_state(10);
        let (_tx, rx) = watch::channel(false);

        let handle =
            SummaryPoller::new(api.clone(), state.clone(), Duration::from_millis(20)).start(rx);

        tokio::time::sleep(Duration::from_millis(120)).await;

        // 실패 틱 이후에도 폴링은 계속되고 마지막 성공 값이 유지된다
        assert!(api.calls() >= 3);
        let retained = state.read().await.summary().unwrap();
        assert!((retained.total_cpu_usage - 10.0).abs() < f64::EPSILON);

        handle.stop().await;
    }

    #[tokio::test]
    async fn stop_cancels_timer() {
        let api = SummaryStub::new(vec![Ok(summary(10.0))]);
        let state = crate::shared_state(10);
        let (_tx, rx) = watch::channel(false);

        let handle =
            SummaryPoller::new(api.clone(), state.clone(), Duration::from_millis(10)).start(rx);
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.stop().await;

        let calls_at_stop = api.calls();
        tokio::time::sleep(Duration::from_millis(60)).await;
        // 중단 후 fetch가 더 일어나지 않는다
        assert_eq!(api.calls(), calls_at_stop);
    }

    #[tokio::test]
    async fn shutdown_signal_stops_loop() {
        let api = SummaryStub::new(vec![Ok(summary(10.0))]);
        let state = crate::shared_state(10);
        let (tx, rx) = watch::channel(false);

        let handle =
            SummaryPoller::new(api.clone(), state.clone(), Duration::from_millis(10)).start(rx);
        tokio::time::sleep(Duration::from_millis(30)).await;

        tx.send(true).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let calls_after_signal = api.calls();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(api.calls(), calls_after_signal);

        handle.stop().await;
    }
}
