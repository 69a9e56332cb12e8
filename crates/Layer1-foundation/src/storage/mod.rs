//! Storage module for ActionRole
//!
//! - `config_store`: JSON / TOML 설정 파일 로드/저장

mod config_store;

pub use config_store::ConfigStore;
