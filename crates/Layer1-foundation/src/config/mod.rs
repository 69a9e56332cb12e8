//! Config - 통합 설정 관리
//!
//! - `app.rs` - AppConfig / ControllerConfig

mod app;

pub use app::{
    AppConfig, ControllerConfig, ACTIONROLE_CONFIG_FILE, ACTIONROLE_TOML_FILE,
    DEFAULT_ACTION_CLASS, FRAMEWORK_ROLE_PREFIX,
};
