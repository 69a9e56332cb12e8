//! Extension Registry - 로드된 Role / Action 클래스 저장소
//!
//! 식별자당 한 번만 기록된다 (write-once). 부트 이후에는 읽기 전용으로 쓰인다.

use crate::action::{ActionFactory, ClassData};
use crate::role::{ActionRole, RoleCapability};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// RoleMetadata - 로드된 Role 메타데이터
// ============================================================================

/// 로드된 Role 의 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMetadata {
    /// 완전한 식별자
    pub identifier: String,

    /// 구현한 hook 목록
    pub capabilities: Vec<RoleCapability>,

    /// 제공 메서드
    pub provides: Vec<String>,

    /// 로드 순서
    pub load_order: usize,

    /// 로드 시간
    pub loaded_at: DateTime<Utc>,
}

/// 로드된 Role
pub struct LoadedRole {
    pub role: Arc<dyn ActionRole>,
    pub metadata: RoleMetadata,
}

/// 로드된 Action 클래스
pub struct LoadedActionClass {
    pub factory: ActionFactory,

    /// 기본 클래스 인스턴스끼리 공유하는 상태
    pub class_data: Arc<ClassData>,

    pub load_order: usize,

    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// ExtensionRegistry
// ============================================================================

/// 프로세스 단위 확장 레지스트리
pub struct ExtensionRegistry {
    roles: RwLock<HashMap<String, LoadedRole>>,
    action_classes: RwLock<HashMap<String, LoadedActionClass>>,
    load_counter: AtomicUsize,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(HashMap::new()),
            action_classes: RwLock::new(HashMap::new()),
            load_counter: AtomicUsize::new(0),
        }
    }

    fn next_order(&self) -> usize {
        self.load_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    // ========================================================================
    // Role
    // ========================================================================

    /// Role 등록 (이미 있으면 거부)
    pub fn register_role(&self, identifier: impl Into<String>, role: Arc<dyn ActionRole>) -> bool {
        let identifier = identifier.into();
        let mut roles = self.roles.write();

        if roles.contains_key(&identifier) {
            warn!("Action role {} is already loaded", identifier);
            return false;
        }

        let metadata = RoleMetadata {
            identifier: identifier.clone(),
            capabilities: role.capabilities(),
            provides: role.provides(),
            load_order: self.next_order(),
            loaded_at: Utc::now(),
        };

        info!("Loaded action role: {}", identifier);
        roles.insert(identifier, LoadedRole { role, metadata });
        true
    }

    pub fn get_role(&self, identifier: &str) -> Option<Arc<dyn ActionRole>> {
        self.roles
            .read()
            .get(identifier)
            .map(|loaded| Arc::clone(&loaded.role))
    }

    pub fn role_metadata(&self, identifier: &str) -> Option<RoleMetadata> {
        self.roles
            .read()
            .get(identifier)
            .map(|loaded| loaded.metadata.clone())
    }

    pub fn contains_role(&self, identifier: &str) -> bool {
        self.roles.read().contains_key(identifier)
    }

    /// 로드 순서대로 정렬된 Role 식별자
    pub fn role_load_order(&self) -> Vec<String> {
        let roles = self.roles.read();
        let mut ordered: Vec<_> = roles.values().map(|r| &r.metadata).collect();
        ordered.sort_by_key(|m| m.load_order);
        ordered.into_iter().map(|m| m.identifier.clone()).collect()
    }

    // ========================================================================
    // Action 클래스
    // ========================================================================

    /// Action 클래스 등록 (이미 있으면 거부)
    pub fn register_action_class(&self, identifier: impl Into<String>, factory: ActionFactory) -> bool {
        let identifier = identifier.into();
        let mut classes = self.action_classes.write();

        if classes.contains_key(&identifier) {
            warn!("Action class {} is already loaded", identifier);
            return false;
        }

        let loaded = LoadedActionClass {
            factory,
            class_data: Arc::new(ClassData::new(identifier.as_str())),
            load_order: self.next_order(),
            loaded_at: Utc::now(),
        };

        info!("Loaded action class: {}", identifier);
        classes.insert(identifier, loaded);
        true
    }

    /// Action 클래스 생성자 + 공유 상태
    pub fn action_class(&self, identifier: &str) -> Option<(ActionFactory, Arc<ClassData>)> {
        self.action_classes
            .read()
            .get(identifier)
            .map(|c| (Arc::clone(&c.factory), Arc::clone(&c.class_data)))
    }

    pub fn contains_action_class(&self, identifier: &str) -> bool {
        self.action_classes.read().contains_key(identifier)
    }

    // ========================================================================
    // 통계
    // ========================================================================

    pub fn len(&self) -> usize {
        self.roles.read().len() + self.action_classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 모두 비우기 (테스트 / 재부팅용)
    pub fn clear(&self) {
        self.roles.write().clear();
        self.action_classes.write().clear();
        self.load_counter.store(0, Ordering::SeqCst);
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::BaseAction;
    use crate::role::{MatchRequestMethod, TraceExecution};

    #[test]
    fn test_register_role_once() {
        let registry = ExtensionRegistry::new();

        assert!(registry.register_role("A", Arc::new(TraceExecution::new())));
        assert!(!registry.register_role("A", Arc::new(TraceExecution::new())));

        let meta = registry.role_metadata("A").unwrap();
        assert_eq!(
            meta.capabilities,
            vec![RoleCapability::BeforeExecute, RoleCapability::AfterExecute]
        );
        assert_eq!(meta.load_order, 1);
    }

    #[test]
    fn test_load_order() {
        let registry = ExtensionRegistry::new();
        registry.register_role("Second", Arc::new(MatchRequestMethod::new()));
        registry.register_action_class("Base", BaseAction::factory());
        registry.register_role("Third", Arc::new(TraceExecution::new()));

        assert_eq!(registry.role_load_order(), vec!["Second", "Third"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_action_class_has_own_class_data() {
        let registry = ExtensionRegistry::new();
        registry.register_action_class("Base", BaseAction::factory());

        let (_, first) = registry.action_class("Base").unwrap();
        let (_, second) = registry.action_class("Base").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.owner(), "Base");

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.action_class("Base").is_none());
    }
}
