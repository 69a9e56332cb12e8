//! App Config - 애플리케이션 / 컨트롤러 설정
//!
//! 컨트롤러별 `action_roles`, `action_role_prefix`, `action_class` 설정

use crate::storage::ConfigStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// JSON 설정 파일명
pub const ACTIONROLE_CONFIG_FILE: &str = "actionrole.json";

/// TOML 설정 파일명
pub const ACTIONROLE_TOML_FILE: &str = "actionrole.toml";

/// 프레임워크 기본 Action 클래스
pub const DEFAULT_ACTION_CLASS: &str = "Dispatch::Action";

/// 프레임워크 기본 Role prefix (fallback)
pub const FRAMEWORK_ROLE_PREFIX: &str = "Dispatch::ActionRole::";

// ============================================================================
// App Config
// ============================================================================

/// 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 애플리케이션 이름 (Role prefix `{name}::ActionRole::` 의 기준)
    #[serde(default)]
    pub name: String,

    /// 애플리케이션 전체 기본 Action 클래스
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action_class: Option<String>,

    /// 컨트롤러별 설정 (컨트롤러 이름 -> 설정)
    #[serde(default)]
    pub controllers: HashMap<String, ControllerConfig>,
}

impl AppConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        // 1. 글로벌 설정
        if let Ok(global) = ConfigStore::global() {
            if let Some(global_config) = global.load_app_config()? {
                config.merge(global_config);
            }
        }

        // 2. 프로젝트 설정
        let project = ConfigStore::project(project_root);
        if let Some(project_config) = project.load_app_config()? {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// 파일 확장자(.json / .toml)에 따라 로드
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(Error::Config(format!(
                "Unsupported config format: {}",
                path.display()
            ))),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 컨트롤러 설정 (없으면 기본값)
    pub fn controller(&self, name: &str) -> ControllerConfig {
        let mut config = self.controllers.get(name).cloned().unwrap_or_default();
        if config.action_class.is_none() {
            config.action_class = self.default_action_class.clone();
        }
        config
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: AppConfig) {
        if !other.name.is_empty() {
            self.name = other.name;
        }
        if other.default_action_class.is_some() {
            self.default_action_class = other.default_action_class;
        }
        for (name, controller) in other.controllers {
            self.controllers
                .entry(name)
                .or_default()
                .merge(controller);
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_controller(mut self, name: impl Into<String>, config: ControllerConfig) -> Self {
        self.controllers.insert(name.into(), config);
        self
    }

    pub fn default_action_class(mut self, class: impl Into<String>) -> Self {
        self.default_action_class = Some(class.into());
        self
    }
}

// ============================================================================
// Controller Config
// ============================================================================

/// 컨트롤러 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// 모든 Action에 적용할 Role 이름들 (짧은 이름 그대로)
    #[serde(default)]
    pub action_roles: Vec<String>,

    /// Role 이름 fallback prefix (선언 순서대로 시도)
    #[serde(default)]
    pub action_role_prefix: Vec<String>,

    /// 기본 Action 클래스
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_class: Option<String>,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// fallback prefix 목록 (설정이 없으면 프레임워크 기본값)
    pub fn fallback_prefixes(&self) -> Vec<String> {
        if self.action_role_prefix.is_empty() {
            vec![FRAMEWORK_ROLE_PREFIX.to_string()]
        } else {
            self.action_role_prefix.clone()
        }
    }

    /// 기본 Action 클래스
    pub fn action_class_or_default(&self) -> &str {
        self.action_class.as_deref().unwrap_or(DEFAULT_ACTION_CLASS)
    }

    /// 다른 설정과 병합 (비어있지 않은 other 값이 우선)
    pub fn merge(&mut self, other: ControllerConfig) {
        if !other.action_roles.is_empty() {
            self.action_roles = other.action_roles;
        }
        if !other.action_role_prefix.is_empty() {
            self.action_role_prefix = other.action_role_prefix;
        }
        if other.action_class.is_some() {
            self.action_class = other.action_class;
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn action_role(mut self, name: impl Into<String>) -> Self {
        self.action_roles.push(name.into());
        self
    }

    pub fn role_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.action_role_prefix.push(prefix.into());
        self
    }

    pub fn action_class(mut self, class: impl Into<String>) -> Self {
        self.action_class = Some(class.into());
        self
    }
}
