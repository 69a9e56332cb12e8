//! ActionRole Runtime - 로더 / 해석기 / 합성기 묶음
//!
//! 애플리케이션 부트 시 하나 만들어 모든 컨트롤러가 `Arc` 로 공유한다.
//! 부트가 끝난 뒤에는 읽기만 일어난다.

use crate::action::{Action, ActionArgs, ActionFactory, BaseAction};
use crate::compose::{ActionType, ActionTypeComposer};
use crate::loader::{ExtensionLoader, ExtensionRegistry, ModuleCatalog};
use crate::resolver::{NameResolver, PrefixList, ResolvedRole};
use crate::role::{builtin_roles, RoleFactory};
use actionrole_foundation::{Result, DEFAULT_ACTION_CLASS};
use std::sync::{Arc, OnceLock};
use tracing::debug;

static GLOBAL_RUNTIME: OnceLock<Arc<ActionRoleRuntime>> = OnceLock::new();

/// 전역 런타임 (builtin Role 포함)
pub fn global_runtime() -> Arc<ActionRoleRuntime> {
    GLOBAL_RUNTIME
        .get_or_init(|| Arc::new(ActionRoleRuntime::with_builtins()))
        .clone()
}

pub struct ActionRoleRuntime {
    loader: ExtensionLoader,
    resolver: NameResolver,
    composer: ActionTypeComposer,
}

impl ActionRoleRuntime {
    /// 기본 Action 클래스(`Dispatch::Action`)만 등록된 런타임
    pub fn new() -> Self {
        let runtime = Self {
            loader: ExtensionLoader::new(),
            resolver: NameResolver::new(),
            composer: ActionTypeComposer::new(),
        };
        runtime.register_action_class(DEFAULT_ACTION_CLASS, BaseAction::factory());
        runtime
    }

    /// builtin Role 까지 등록된 런타임
    pub fn with_builtins() -> Self {
        let runtime = Self::new();
        for (identifier, factory) in builtin_roles() {
            runtime.register_role(identifier, factory);
        }
        debug!("Runtime ready with {} modules", runtime.catalog().len());
        runtime
    }

    // ========================================================================
    // 구성 요소
    // ========================================================================

    pub fn loader(&self) -> &ExtensionLoader {
        &self.loader
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        self.loader.catalog()
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        self.loader.registry()
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    pub fn composer(&self) -> &ActionTypeComposer {
        &self.composer
    }

    // ========================================================================
    // 모듈 등록
    // ========================================================================

    pub fn register_role(&self, identifier: impl Into<String>, factory: RoleFactory) -> bool {
        self.catalog().register_role(identifier, factory)
    }

    pub fn register_action_class(&self, identifier: impl Into<String>, factory: ActionFactory) -> bool {
        self.catalog().register_action_class(identifier, factory)
    }

    // ========================================================================
    // 파이프라인 단계
    // ========================================================================

    /// 이름 해석 (Bare 이름은 probe 과정에서 로드까지 수행)
    pub fn resolve(&self, name: &str, prefixes: &PrefixList) -> Result<ResolvedRole> {
        self.resolver.resolve(name, prefixes, &self.loader)
    }

    /// 이름 목록 해석 + 전부 로드
    pub fn resolve_and_load<S: AsRef<str>>(
        &self,
        names: &[S],
        prefixes: &PrefixList,
    ) -> Result<Vec<ResolvedRole>> {
        let roles = self.resolver.expand_all(names, prefixes, &self.loader)?;
        for role in &roles {
            self.loader.ensure_loaded(role.as_str())?;
        }
        Ok(roles)
    }

    pub fn compose(&self, base: &str, roles: &[ResolvedRole]) -> Result<ActionType> {
        self.composer.compose(base, roles, self.registry())
    }

    pub fn instantiate(&self, ty: &ActionType, args: ActionArgs) -> Result<Arc<dyn Action>> {
        self.composer.instantiate(ty, args, self.registry())
    }
}

impl Default for ActionRoleRuntime {
    fn default() -> Self {
        Self::new()
    }
}
