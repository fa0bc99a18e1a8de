//! Hexagonal Architecture 포트 인터페이스.

pub mod api_client;
