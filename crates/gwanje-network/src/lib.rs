//! # gwanje-network
//!
//! 모니터링 API에 대한 HTTP 어댑터. `MonitorApi` 포트의 reqwest 구현을
//! 제공한다.

pub mod http_client;

pub use http_client::HttpMonitorApi;
