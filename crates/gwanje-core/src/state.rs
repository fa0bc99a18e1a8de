//! 대시보드 정본 상태 객체.
//!
//! 프로세스 목록, 요약, 뷰 쿼리를 UI 런타임과 무관한 명시적 상태로
//! 보관한다. 파생 뷰는 저장하지 않고 요청 시마다 재계산한다.

use crate::models::process::{ProcessRecord, SystemSummary};
use crate::view::{self, SortKey, ViewQuery};

/// 대시보드 상태.
///
/// `processes`가 단일 진실 공급원(정본)이다. 성공한 fetch마다 통째로
/// 교체되며 제자리 수정은 없다.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// 정본 프로세스 목록 (마지막 성공 fetch의 순서 그대로)
    processes: Vec<ProcessRecord>,
    /// 마지막으로 성공한 시스템 요약 (실패 시 이전 값 유지)
    summary: Option<SystemSummary>,
    /// 현재 뷰 쿼리
    query: ViewQuery,
    /// 초기 로드/수동 새로고침 진행 중 여부
    loading: bool,
    /// 초기 로드 실패 시 남는 지속 에러 상태
    last_error: Option<String>,
}

impl DashboardState {
    /// 빈 정본과 기본 쿼리로 시작하는 상태 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정 페이지 크기로 시작하는 상태 생성
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: ViewQuery::with_page_size(page_size),
            ..Self::default()
        }
    }

    // ============================================================
    // 정본 목록
    // ============================================================

    /// 정본 목록 원자적 교체.
    ///
    /// 초기 로드, 수동 새로고침, 종료 후 재동기화 모두 이 경로를
    /// 지난다. 부분 패치는 없다. 교체 성공은 지속 에러 상태를 지운다.
    pub fn replace_processes(&mut self, processes: Vec<ProcessRecord>) {
        self.processes = processes;
        self.last_error = None;
    }

    /// 정본 목록 참조
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// 현재 쿼리로 계산한 파생 뷰 (항상 재계산, 저장 안 함)
    pub fn derived_view(&self) -> Vec<ProcessRecord> {
        view::derive_view(&self.processes, &self.query)
    }

    /// 필터 통과 건수 — 페이지네이션 표시용 전체 개수
    pub fn filtered_len(&self) -> usize {
        view::filtered_len(&self.processes, &self.query)
    }

    // ============================================================
    // 요약
    // ============================================================

    /// 성공한 폴링 틱의 요약 반영
    pub fn apply_summary(&mut self, summary: SystemSummary) {
        self.summary = Some(summary);
    }

    /// 마지막으로 성공한 요약 (폴링 실패 시에도 유지된 값)
    pub fn summary(&self) -> Option<SystemSummary> {
        self.summary
    }

    // ============================================================
    // 쿼리 변경 (사용자 입력)
    // ============================================================

    /// 검색어 변경 (페이지 번호 0으로 리셋)
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
    }

    /// 정렬 컬럼 토글
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.query.toggle_sort(key);
    }

    /// 페이지 이동
    pub fn set_page_index(&mut self, page_index: usize) {
        self.query.set_page_index(page_index);
    }

    /// 페이지 크기 변경 (허용 외 값 무시, 페이지 번호 리셋)
    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.set_page_size(page_size);
    }

    /// 현재 쿼리 참조
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    // ============================================================
    // 로드 상태
    // ============================================================

    /// 로딩 플래그 설정
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// 로딩 중 여부
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 초기 로드 실패 기록 (지속 에러 상태)
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// 마지막 에러 메시지
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
