//! # Action Type Composer
//!
//! 기본 Action 타입 + 순서 있는 Role 목록으로 합성 타입을 만들고 캐시한다.
//!
//! - Role 목록이 비어 있으면 기본 타입을 그대로 반환
//! - 같은 (기본 타입, Role 목록) 요청은 같은 합성 타입 인스턴스를 공유
//! - 서로 다른 Role 이 같은 메서드를 제공하면 `RoleConflict`

mod action;
mod types;

pub use action::ComposedAction;
pub use types::{ActionType, ComposedActionType, CompositionKey};

use crate::action::{Action, ActionArgs};
use crate::loader::ExtensionRegistry;
use crate::resolver::ResolvedRole;
use actionrole_foundation::{Error, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// 합성 타입 캐시 + 생성기
pub struct ActionTypeComposer {
    cache: RwLock<HashMap<CompositionKey, Arc<ComposedActionType>>>,
    serial: AtomicU64,
}

impl ActionTypeComposer {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            serial: AtomicU64::new(0),
        }
    }

    /// 합성 타입 조회 또는 생성
    ///
    /// 모든 Role 은 이미 로드되어 있어야 한다.
    pub fn compose(
        &self,
        base: &str,
        roles: &[ResolvedRole],
        registry: &ExtensionRegistry,
    ) -> Result<ActionType> {
        if roles.is_empty() {
            return Ok(ActionType::Base(base.to_string()));
        }

        let key = CompositionKey::new(base, roles);
        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(ActionType::Composed(Arc::clone(hit)));
        }

        let mut cache = self.cache.write();
        if let Some(hit) = cache.get(&key) {
            return Ok(ActionType::Composed(Arc::clone(hit)));
        }

        let methods = method_table(base, roles, registry)?;
        let serial = self.serial.fetch_add(1, Ordering::SeqCst) + 1;
        let composed = Arc::new(ComposedActionType::new(serial, base, roles.to_vec(), methods));

        info!(
            "Composed {} = {} with [{}]",
            composed.name(),
            base,
            roles.iter().map(ResolvedRole::as_str).collect::<Vec<_>>().join(", ")
        );

        cache.insert(key, Arc::clone(&composed));
        Ok(ActionType::Composed(composed))
    }

    /// 타입 인스턴스화
    pub fn instantiate(
        &self,
        ty: &ActionType,
        args: ActionArgs,
        registry: &ExtensionRegistry,
    ) -> Result<Arc<dyn Action>> {
        let (factory, base_data) = registry
            .action_class(ty.base())
            .ok_or_else(|| Error::ModuleNotFound(ty.base().to_string()))?;

        match ty {
            ActionType::Base(base) => {
                let (meta, body) = args.into_parts(base.as_str(), base_data);
                factory(meta, body)
            }
            ActionType::Composed(composed) => {
                let roles = composed
                    .roles()
                    .iter()
                    .map(|id| {
                        registry
                            .get_role(id.as_str())
                            .ok_or_else(|| Error::ModuleNotFound(id.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?;

                let (meta, body) = args.into_parts(composed.name(), Arc::clone(composed.class_data()));
                let inner = factory(meta, body)?;
                Ok(Arc::new(ComposedAction::new(inner, Arc::clone(composed), roles)))
            }
        }
    }

    /// 특정 기본 타입의 합성 타입 캐시 제거
    pub fn invalidate(&self, base: &str) -> usize {
        let mut cache = self.cache.write();
        let before = cache.len();
        cache.retain(|key, _| key.base != base);
        let removed = before - cache.len();
        debug!("Invalidated {} composed types for {}", removed, base);
        removed
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl Default for ActionTypeComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// 메서드 -> 제공 Role 테이블 (충돌 검사 포함)
///
/// 목록 순서대로 검사하므로 같은 입력이면 항상 같은 충돌을 보고한다.
/// 같은 식별자가 두 번 나오는 것은 충돌이 아니다.
fn method_table(
    base: &str,
    roles: &[ResolvedRole],
    registry: &ExtensionRegistry,
) -> Result<BTreeMap<String, ResolvedRole>> {
    let mut methods: BTreeMap<String, ResolvedRole> = BTreeMap::new();

    for id in roles {
        let role = registry
            .get_role(id.as_str())
            .ok_or_else(|| Error::ModuleNotFound(id.to_string()))?;

        for method in role.provides() {
            match methods.get(&method) {
                Some(owner) if owner != id => {
                    return Err(Error::RoleConflict {
                        base: base.to_string(),
                        method,
                        roles: vec![owner.to_string(), id.to_string()],
                    });
                }
                Some(_) => {}
                None => {
                    methods.insert(method, id.clone());
                }
            }
        }
    }

    Ok(methods)
}
