//! # gwanje-core
//!
//! GWANJE 도메인 모델, 포트(trait) 정의, 뷰 상태 엔진, 에러 타입.
//! 네트워크/앱 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`view`] — 순수 뷰 파생 로직 (검색/정렬/페이지네이션)
//! - [`state`] — 대시보드 정본 상태 객체
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
pub mod state;
pub mod view;
