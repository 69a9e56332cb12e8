//! 설정 파일 저장소 (JSON / TOML)

use crate::config::{AppConfig, ACTIONROLE_CONFIG_FILE, ACTIONROLE_TOML_FILE};
use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// 설정 저장소 - 디렉토리 하나를 기준으로 설정 파일을 읽고 쓴다
#[derive(Debug, Clone)]
pub struct ConfigStore {
    base_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 설정 (~/.config/actionrole/)
    pub fn global() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))?
            .join("actionrole");
        Ok(Self::new(dir))
    }

    /// 프로젝트 설정 (.actionrole/)
    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(".actionrole"))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_dir.exists() {
            std::fs::create_dir_all(&self.base_dir)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }

    /// JSON 로드
    pub fn load_json<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let content = self.read(filename)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse {}: {}",
                self.file_path(filename).display(),
                e
            ))
        })
    }

    /// TOML 로드
    pub fn load_toml<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let content = self.read(filename)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse {}: {}",
                self.file_path(filename).display(),
                e
            ))
        })
    }

    /// AppConfig 로드 (actionrole.json 우선, 없으면 actionrole.toml)
    pub fn load_app_config(&self) -> Result<Option<AppConfig>> {
        if self.exists(ACTIONROLE_CONFIG_FILE) {
            return self.load_json(ACTIONROLE_CONFIG_FILE).map(Some);
        }
        if self.exists(ACTIONROLE_TOML_FILE) {
            return self.load_toml(ACTIONROLE_TOML_FILE).map(Some);
        }
        Ok(None)
    }

    /// JSON 저장
    pub fn save_json<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.file_path(filename);
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| Error::Config(format!("Failed to serialize: {}", e)))?;
        std::fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// 파일 존재 여부
    pub fn exists(&self, filename: &str) -> bool {
        self.file_path(filename).exists()
    }

    fn read(&self, filename: &str) -> Result<String> {
        let path = self.file_path(filename);
        std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::project(dir.path());
        assert!(store.load_app_config().unwrap().is_none());
    }

    #[test]
    fn test_json_round_trip_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::project(dir.path());

        let config = AppConfig::new("MyApp")
            .with_controller("Root", ControllerConfig::new().action_role("Logging"));
        store.save_json(ACTIONROLE_CONFIG_FILE, &config).unwrap();

        let loaded = store.load_app_config().unwrap().unwrap();
        assert_eq!(loaded.name, "MyApp");
        assert_eq!(loaded.controller("Root").action_roles, vec!["Logging"]);
    }

    #[test]
    fn test_toml_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::project(dir.path());
        std::fs::create_dir_all(store.base_dir()).unwrap();
        std::fs::write(
            store.file_path(ACTIONROLE_TOML_FILE),
            "name = \"TomlApp\"\n[controllers.Root]\naction_roles = [\"Audit\"]\n",
        )
        .unwrap();

        let loaded = store.load_app_config().unwrap().unwrap();
        assert_eq!(loaded.name, "TomlApp");
        assert_eq!(loaded.controller("Root").action_roles, vec!["Audit"]);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        std::fs::write(store.file_path(ACTIONROLE_CONFIG_FILE), "{ not json").unwrap();

        assert!(matches!(store.load_app_config(), Err(Error::Config(_))));
    }
}
