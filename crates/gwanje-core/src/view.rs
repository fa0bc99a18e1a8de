//! 뷰 상태 엔진.
//!
//! 정본 프로세스 목록(CanonicalProcessSet) 위에 검색/정렬/페이지네이션을
//! 순수 함수로 합성한다. 파생 뷰는 (정본, 쿼리)에서 언제든 동일하게
//! 재계산 가능하며 독립 수명을 갖지 않는다.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::process::ProcessRecord;

/// 허용되는 페이지 크기
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 정렬 컬럼.
///
/// 숫자 컬럼만 실제로 재정렬된다. 텍스트 컬럼(Name/User)은 활성
/// 정렬 키로는 받아들이지만 순서를 바꾸지 않는다 — UI 하이라이트용
/// 상태 추적과 파생 로직이 분리된 의도적 동작이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Pid,
    Name,
    CpuPercent,
    MemoryPercent,
    StartTime,
    User,
}

impl SortKey {
    /// 숫자 비교가 적용되는 컬럼인지
    pub fn is_numeric(self) -> bool {
        !matches!(self, SortKey::Name | SortKey::User)
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// 뷰 쿼리 — 검색어, 정렬 상태, 페이지 위치.
///
/// 로컬 전용이며 영속화하지 않는다. 사용자 입력으로 제자리 변경된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    /// 검색어 (이름 부분 일치 또는 PID 10진 문자열 부분 일치)
    pub search_text: String,
    /// 활성 정렬 컬럼 (None이면 서버 반환 순서 유지)
    pub sort_key: Option<SortKey>,
    /// 정렬 방향
    pub sort_direction: SortDirection,
    /// 페이지 번호 (0부터)
    pub page_index: usize,
    /// 페이지 크기 ([`PAGE_SIZES`] 중 하나)
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: None,
            sort_direction: SortDirection::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewQuery {
    /// 지정 페이지 크기로 쿼리 생성 (허용 외 값이면 기본값)
    pub fn with_page_size(page_size: usize) -> Self {
        let mut query = Self::default();
        if PAGE_SIZES.contains(&page_size) {
            query.page_size = page_size;
        }
        query
    }

    /// 검색어 변경.
    ///
    /// 검색으로 유효하지 않게 된 페이지에 사용자가 남지 않도록
    /// 페이지 번호를 항상 0으로 되돌린다.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page_index = 0;
    }

    /// 정렬 컬럼 토글.
    ///
    /// 이미 활성인 컬럼이면 방향만 뒤집고, 새 컬럼이면 오름차순으로
    /// 시작한다.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_direction = match self.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// 페이지 이동
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// 페이지 크기 변경.
    ///
    /// 허용 집합 {5, 10, 25} 외 값은 무시한다. 밀도 변경으로 사용자가
    /// 끝을 지나 좌초하지 않도록 페이지 번호를 0으로 되돌린다.
    pub fn set_page_size(&mut self, page_size: usize) {
        if !PAGE_SIZES.contains(&page_size) {
            debug!("허용되지 않는 페이지 크기 무시: {page_size}");
            return;
        }
        self.page_size = page_size;
        self.page_index = 0;
    }
}

/// 파생 뷰 계산 — (정본, 쿼리)의 순수 함수.
///
/// 필터 → 안정 정렬 → 페이지 슬라이스 순서로 합성한다. 입력이 같으면
/// 출력은 구조적으로 동일하다.
pub fn derive_view(canonical: &[ProcessRecord], query: &ViewQuery) -> Vec<ProcessRecord> {
    let mut filtered: Vec<ProcessRecord> = canonical
        .iter()
        .filter(|record| matches_search(record, &query.search_text))
        .cloned()
        .collect();

    if let Some(key) = query.sort_key {
        // 안정 정렬: 동순위는 원본 상대 순서 유지.
        // 텍스트 컬럼은 Equal을 반환하므로 순서가 바뀌지 않는다.
        filtered.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, key);
            match query.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    paginate(filtered, query.page_index, query.page_size)
}

/// 필터 통과 건수.
///
/// 페이지네이션 UI가 표시하는 전체 개수 — 정렬/슬라이스와 무관하게
/// 검색 필터만 적용한 수.
pub fn filtered_len(canonical: &[ProcessRecord], query: &ViewQuery) -> usize {
    canonical
        .iter()
        .filter(|record| matches_search(record, &query.search_text))
        .count()
}

/// 검색 일치 — 이름 대소문자 무시 부분 일치 OR PID 10진 문자열 부분
/// 일치. 빈 검색어는 전부 일치.
fn matches_search(record: &ProcessRecord, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    record
        .name
        .to_lowercase()
        .contains(&search_text.to_lowercase())
        || record.pid.to_string().contains(search_text)
}

/// 컬럼별 비교.
///
/// 숫자 컬럼은 수치 비교, 결측 memory_percent는 최솟값으로 취급.
/// 텍스트 컬럼은 재정렬하지 않는다 (콜레이션 미확정, 의도된 quirk).
fn compare_by_key(a: &ProcessRecord, b: &ProcessRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Pid => a.pid.cmp(&b.pid),
        SortKey::CpuPercent => a.cpu_percent.total_cmp(&b.cpu_percent),
        SortKey::MemoryPercent => {
            let a_mem = a.memory_percent.unwrap_or(f64::NEG_INFINITY);
            let b_mem = b.memory_percent.unwrap_or(f64::NEG_INFINITY);
            a_mem.total_cmp(&b_mem)
        }
        SortKey::StartTime => a.start_time.cmp(&b.start_time),
        SortKey::Name | SortKey::User => Ordering::Equal,
    }
}

/// 페이지 슬라이스 — 가용 길이에 클램프. 범위 밖 페이지는 빈 결과이며
/// 에러가 아니다.
fn paginate(records: Vec<ProcessRecord>, page_index: usize, page_size: usize) -> Vec<ProcessRecord> {
    let start = page_index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    records[start..end].to_vec()
}
