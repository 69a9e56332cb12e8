//! Module Catalog - 로드 가능한 모듈 목록
//!
//! 애플리케이션이 부트 시 등록해 두는 "로드 가능한" Role / Action 클래스 생성자.
//! 실제 로드(인스턴스화 + 검증)는 `ExtensionLoader` 가 수행한다.

use crate::action::ActionFactory;
use crate::role::RoleFactory;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// 모듈 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Role,
    ActionClass,
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role => write!(f, "action role"),
            Self::ActionClass => write!(f, "action class"),
        }
    }
}

/// 모듈 정의
#[derive(Clone)]
pub enum ModuleDef {
    Role(RoleFactory),
    ActionClass(ActionFactory),
}

impl ModuleDef {
    pub fn kind(&self) -> ModuleKind {
        match self {
            Self::Role(_) => ModuleKind::Role,
            Self::ActionClass(_) => ModuleKind::ActionClass,
        }
    }
}

/// 모듈 카탈로그
pub struct ModuleCatalog {
    modules: RwLock<HashMap<String, ModuleDef>>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self {
            modules: RwLock::new(HashMap::new()),
        }
    }

    /// 모듈 등록 (이미 있으면 거부)
    pub fn register(&self, identifier: impl Into<String>, def: ModuleDef) -> bool {
        let identifier = identifier.into();
        let mut modules = self.modules.write();

        if modules.contains_key(&identifier) {
            warn!("Module {} is already registered", identifier);
            return false;
        }

        debug!("Registered {} module: {}", def.kind(), identifier);
        modules.insert(identifier, def);
        true
    }

    pub fn register_role(&self, identifier: impl Into<String>, factory: RoleFactory) -> bool {
        self.register(identifier, ModuleDef::Role(factory))
    }

    pub fn register_action_class(
        &self,
        identifier: impl Into<String>,
        factory: ActionFactory,
    ) -> bool {
        self.register(identifier, ModuleDef::ActionClass(factory))
    }

    pub fn get(&self, identifier: &str) -> Option<ModuleDef> {
        self.modules.read().get(identifier).cloned()
    }

    pub fn kind(&self, identifier: &str) -> Option<ModuleKind> {
        self.modules.read().get(identifier).map(ModuleDef::kind)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.modules.read().contains_key(identifier)
    }

    /// 등록된 식별자 (정렬)
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.modules.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::BaseAction;
    use crate::role::{role_factory, TraceExecution};

    #[test]
    fn test_duplicate_registration() {
        let catalog = ModuleCatalog::new();

        assert!(catalog.register_role("A::Role", role_factory(TraceExecution::new)));
        assert!(!catalog.register_action_class("A::Role", BaseAction::factory()));

        assert_eq!(catalog.kind("A::Role"), Some(ModuleKind::Role));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_identifiers_sorted() {
        let catalog = ModuleCatalog::new();
        catalog.register_action_class("Z::Action", BaseAction::factory());
        catalog.register_role("A::Role", role_factory(TraceExecution::new));

        assert_eq!(catalog.identifiers(), vec!["A::Role", "Z::Action"]);
        assert!(catalog.contains("Z::Action"));
        assert!(catalog.get("Missing").is_none());
    }
}
