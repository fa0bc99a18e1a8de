//! 도메인 모델 정의.

pub mod process;
