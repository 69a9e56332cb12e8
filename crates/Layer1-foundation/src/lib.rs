//! # actionrole-foundation
//!
//! Foundation layer for ActionRole:
//! - Error: 설정 단계 에러 분류 (resolve / load / compose)
//! - Config: 애플리케이션 / 컨트롤러 설정 (`action_roles` 등)
//! - Storage: JSON / TOML 설정 파일 저장소
//! - Logging: tracing subscriber 초기화
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer2-core                                             │
//! │  ├── Name Resolver (+Full / ~App / Bare)                 │
//! │  ├── Extension Loader (catalog → registry)               │
//! │  ├── Action Type Composer (cache)                        │
//! │  └── Controller Adapter (create_action)                  │
//! ├─────────────────────────────────────────────────────────┤
//! │  Layer1-foundation (이 레이어)                            │
//! │  ├── Error / Result                                      │
//! │  ├── AppConfig / ControllerConfig                        │
//! │  └── ConfigStore, logging                                │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    AppConfig, ControllerConfig, ACTIONROLE_CONFIG_FILE, ACTIONROLE_TOML_FILE,
    DEFAULT_ACTION_CLASS, FRAMEWORK_ROLE_PREFIX,
};

// ============================================================================
// Storage / Logging
// ============================================================================
pub use logging::{init_logging, try_init_logging, DEFAULT_LOG_LEVEL};
pub use storage::ConfigStore;
