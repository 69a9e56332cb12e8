//! Logging - tracing subscriber 초기화
//!
//! `RUST_LOG` 이 설정되어 있으면 우선하고, 없으면 주어진 레벨을 사용한다.

use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 기본 로그 레벨
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// 전역 subscriber 설치 (이미 설치되어 있으면 에러)
pub fn try_init_logging(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

/// 전역 subscriber 설치 (실패는 무시)
pub fn init_logging(level: &str) {
    if try_init_logging(level).is_err() {
        tracing::debug!("Logging already initialized");
    }
}
