//! Controller Adapter - 컨트롤러 기본 Role + Action 별 Role 을 합쳐 Action 생성

use super::reserved::is_reserved_action_name;
use crate::action::{Action, ActionArgs, ActionAttributes, ATTR_DOES};
use crate::compose::ActionType;
use crate::resolver::{PrefixList, ResolvedRole};
use crate::runtime::ActionRoleRuntime;
use actionrole_foundation::{AppConfig, ControllerConfig, Result};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// 컨트롤러 이름에서 namespace 유도 (`Admin::Users` -> `admin/users`, `Root` -> ``)
pub fn namespace_from(controller: &str) -> String {
    if controller == "Root" {
        return String::new();
    }
    controller.replace("::", "/").to_lowercase()
}

pub struct ControllerAdapter {
    app: String,
    name: String,
    namespace: String,
    config: ControllerConfig,
    prefixes: PrefixList,
    runtime: Arc<ActionRoleRuntime>,
    /// 컨트롤러 기본 Role (최초 접근 시 한 번 계산)
    action_roles: OnceLock<Vec<ResolvedRole>>,
    actions: RwLock<Vec<Arc<dyn Action>>>,
}

impl ControllerAdapter {
    pub fn new(
        app: impl Into<String>,
        name: impl Into<String>,
        config: ControllerConfig,
        runtime: Arc<ActionRoleRuntime>,
    ) -> Self {
        let app = app.into();
        let name = name.into();
        let prefixes = PrefixList::new(&app, config.fallback_prefixes());

        Self {
            namespace: namespace_from(&name),
            app,
            name,
            config,
            prefixes,
            runtime,
            action_roles: OnceLock::new(),
            actions: RwLock::new(Vec::new()),
        }
    }

    /// 애플리케이션 설정에서 컨트롤러 설정을 꺼내 생성
    pub fn from_app_config(
        app: &AppConfig,
        name: impl Into<String>,
        runtime: Arc<ActionRoleRuntime>,
    ) -> Self {
        let name = name.into();
        let config = app.controller(&name);
        Self::new(app.name.as_str(), name, config, runtime)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    // ========================================================================
    // 조회
    // ========================================================================

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn prefix_list(&self) -> &PrefixList {
        &self.prefixes
    }

    pub fn runtime(&self) -> &Arc<ActionRoleRuntime> {
        &self.runtime
    }

    // ========================================================================
    // Role
    // ========================================================================

    /// 컨트롤러 기본 Role 계산 (Action 생성 전에 호출)
    pub fn build(&self) -> Result<()> {
        self.action_roles().map(|_| ())
    }

    /// 컨트롤러 기본 Role (memoized)
    pub fn action_roles(&self) -> Result<&[ResolvedRole]> {
        if let Some(roles) = self.action_roles.get() {
            return Ok(roles);
        }

        let roles = self
            .runtime
            .resolve_and_load(self.config.action_roles.as_slice(), &self.prefixes)?;
        debug!(
            "Controller {} default roles: [{}]",
            self.name,
            roles.iter().map(ResolvedRole::as_str).collect::<Vec<_>>().join(", ")
        );

        Ok(self.action_roles.get_or_init(|| roles))
    }

    /// 짧은 이름 목록 확장 + 로드
    pub fn expand_role_shortname<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ResolvedRole>> {
        self.runtime.resolve_and_load(names, &self.prefixes)
    }

    /// 속성 파싱 시점의 `Does` 확장
    ///
    /// 결과는 `+Identifier` 형태라서 다시 해석해도 같은 Role 이 된다.
    pub fn parse_does_attr(&self, value: &str) -> Result<(&'static str, String)> {
        let resolved = self.runtime.resolve(value, &self.prefixes)?;
        Ok((ATTR_DOES, resolved.to_declaration()))
    }

    // ========================================================================
    // Action 생성
    // ========================================================================

    /// 기본 Action 클래스 결정 (`ActionClass` 속성 > 컨트롤러 설정 > 프레임워크 기본)
    pub fn action_class_for<'a>(&'a self, attributes: &'a ActionAttributes) -> &'a str {
        attributes
            .action_class()
            .unwrap_or_else(|| self.config.action_class_or_default())
    }

    /// Action 생성 (dispatcher 에 등록되는 factory)
    pub fn create_action(&self, mut args: ActionArgs) -> Result<Arc<dyn Action>> {
        if args.namespace.is_empty() {
            args.namespace = self.namespace.clone();
        }

        let class = self.action_class_for(&args.attributes).to_string();
        self.runtime.loader().ensure_action_class_loaded(&class)?;
        let defaults = self.action_roles()?;

        if is_reserved_action_name(&args.name) {
            debug!("{} is an internal action slot, not composing roles", args.name);
            return self.runtime.instantiate(&ActionType::Base(class), args);
        }

        let mut roles = defaults.to_vec();
        roles.extend(self.expand_role_shortname(args.attributes.does())?);

        let ty = self.runtime.compose(&class, &roles)?;
        debug!("Creating {}::{} as {}", self.name, args.name, ty.name());
        self.runtime.instantiate(&ty, args)
    }

    /// Action 생성 후 컨트롤러에 기록
    pub fn register_action(&self, args: ActionArgs) -> Result<Arc<dyn Action>> {
        let action = self.create_action(args)?;
        info!("Registered action {} ({})", action.meta().reverse, action.class());
        self.actions.write().push(Arc::clone(&action));
        Ok(action)
    }

    /// 등록된 Action (등록 순서)
    pub fn actions(&self) -> Vec<Arc<dyn Action>> {
        self.actions.read().clone()
    }

    pub fn action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions
            .read()
            .iter()
            .find(|a| a.name() == name)
            .cloned()
    }
}
