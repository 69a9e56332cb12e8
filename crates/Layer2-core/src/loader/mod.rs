//! # Extension Loader
//!
//! 카탈로그(로드 가능한 모듈)에서 식별자를 찾아 인스턴스화하고, 검증한 뒤
//! 레지스트리에 기록한다.
//!
//! ```text
//!   ModuleCatalog ──ensure_loaded(id)──▶ validate ──▶ ExtensionRegistry
//!   (factories)                          (contract)    (write-once)
//! ```
//!
//! - 같은 식별자를 두 번 로드하면 두 번째는 no-op
//! - 카탈로그에 없으면 `ModuleNotFound`
//! - Role 계약(hook 노출)을 만족하지 않으면 `InvalidModule`

mod catalog;
mod registry;

pub use catalog::{ModuleCatalog, ModuleDef, ModuleKind};
pub use registry::{ExtensionRegistry, LoadedActionClass, LoadedRole, RoleMetadata};

use crate::resolver::ModuleProbe;
use crate::role::{ActionRole, RoleCapability};
use actionrole_foundation::{Error, Result};
use tracing::trace;

/// 확장 로더
pub struct ExtensionLoader {
    catalog: ModuleCatalog,
    registry: ExtensionRegistry,
}

impl ExtensionLoader {
    pub fn new() -> Self {
        Self {
            catalog: ModuleCatalog::new(),
            registry: ExtensionRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Role 로드 보장
    pub fn ensure_loaded(&self, identifier: &str) -> Result<()> {
        if self.registry.contains_role(identifier) {
            trace!("Action role {} already loaded", identifier);
            return Ok(());
        }

        let factory = match self.catalog.get(identifier) {
            Some(ModuleDef::Role(factory)) => factory,
            Some(def) => {
                return Err(Error::invalid_module(
                    identifier,
                    format!("expected an action role, found an {}", def.kind()),
                ))
            }
            None => return Err(Error::ModuleNotFound(identifier.to_string())),
        };

        let role = factory();
        validate_role(identifier, role.as_ref())?;
        self.registry.register_role(identifier, role);
        Ok(())
    }

    /// Action 클래스 로드 보장
    pub fn ensure_action_class_loaded(&self, identifier: &str) -> Result<()> {
        if self.registry.contains_action_class(identifier) {
            return Ok(());
        }

        match self.catalog.get(identifier) {
            Some(ModuleDef::ActionClass(factory)) => {
                self.registry.register_action_class(identifier, factory);
                Ok(())
            }
            Some(def) => Err(Error::invalid_module(
                identifier,
                format!("expected an action class, found an {}", def.kind()),
            )),
            None => Err(Error::ModuleNotFound(identifier.to_string())),
        }
    }

    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.registry.contains_role(identifier) || self.registry.contains_action_class(identifier)
    }
}

impl ModuleProbe for ExtensionLoader {
    fn try_load(&self, identifier: &str) -> Result<bool> {
        match self.ensure_loaded(identifier) {
            Ok(()) => Ok(true),
            Err(Error::ModuleNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Default for ExtensionLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Role 계약 검사
///
/// - hook 을 하나 이상 노출해야 한다
/// - `provides()` 와 `ProvideMethods` 선언이 일치해야 한다
fn validate_role(identifier: &str, role: &dyn ActionRole) -> Result<()> {
    let capabilities = role.capabilities();
    if capabilities.is_empty() {
        return Err(Error::invalid_module(
            identifier,
            "action role exposes no lifecycle hooks",
        ));
    }

    let declares_methods = capabilities.contains(&RoleCapability::ProvideMethods);
    let provides = role.provides();
    if declares_methods && provides.is_empty() {
        return Err(Error::invalid_module(
            identifier,
            "declares ProvideMethods but provides no methods",
        ));
    }
    if !declares_methods && !provides.is_empty() {
        return Err(Error::invalid_module(
            identifier,
            format!("provides {} without declaring ProvideMethods", provides.join(", ")),
        ));
    }

    Ok(())
}
