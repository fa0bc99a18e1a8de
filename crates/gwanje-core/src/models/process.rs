//! 프로세스/시스템 요약 모델.
//!
//! 모니터링 API가 반환하는 레코드 그대로의 스냅샷. 갱신 시 부분 패치
//! 없이 통째로 교체된다.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 실행 중인 프로세스 한 건의 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// 프로세스 ID (현재 살아있는 프로세스 중 유일)
    pub pid: u32,
    /// 프로세스 이름
    pub name: String,
    /// CPU 사용률 (0.0 이상)
    pub cpu_percent: f64,
    /// 메모리 사용률 (0.0 ~ 100.0), 서버가 보고하지 못하면 None
    #[serde(default)]
    pub memory_percent: Option<f64>,
    /// 시작 시각 (epoch 초)
    pub start_time: i64,
    /// 소유 사용자
    pub user: String,
}

impl ProcessRecord {
    /// 메모리 사용률 표시 문자열.
    ///
    /// 값이 있으면 소수점 2자리, 없으면 리터럴 `"N/A"` — 결측을 조용히
    /// 누락하지 않고 명시적 센티널로 드러내는 것이 데이터 계약이다.
    pub fn memory_display(&self) -> String {
        match self.memory_percent {
            Some(percent) => format!("{percent:.2}"),
            None => "N/A".to_string(),
        }
    }

    /// 시작 시각을 로컬 타임존으로 변환.
    ///
    /// 서버는 epoch 초를 전송하므로 밀리초로 스케일한 뒤 변환한다.
    pub fn start_time_local(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.start_time * 1000)
            .map(|utc| utc.with_timezone(&Local))
    }

    /// 시작 시각 표시 문자열 (로컬 시간, 변환 불가 시 epoch 초 원문)
    pub fn start_time_display(&self) -> String {
        match self.start_time_local() {
            Some(local) => local.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.start_time.to_string(),
        }
    }
}

/// `GET /api/processes/` 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessListResponse {
    /// 현재 실행 중인 프로세스 목록 (서버가 반환한 순서 유지)
    pub processes: Vec<ProcessRecord>,
}

/// 시스템 전체 리소스 요약.
///
/// 프로세스 목록과 무관하게 독립 주기로 갱신되며, 목록에서 파생되지
/// 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    /// 전체 CPU 사용률 (%)
    pub total_cpu_usage: f64,
    /// 전체 메모리 사용률 (0.0 ~ 100.0)
    pub total_memory_usage: f64,
}
