//! actionrole-core: Action Role 합성 런타임
//!
//! Layer2 - 컨트롤러 Action 에 Role 을 선언적으로 붙이는 레이어
//!
//! # 주요 모듈
//!
//! - `resolver`: Role 이름 확장 (`+Full::Name`, `~AppRelative`, `Bare`)
//! - `loader`: 카탈로그 → 레지스트리 로드 / 검증
//! - `role`: `ActionRole` trait 및 builtin Role
//! - `action`: `Action` trait, 기본 Action 클래스, 호출 컨텍스트
//! - `compose`: 합성 Action 타입 생성 / 캐시
//! - `controller`: 컨트롤러 어댑터 (`create_action`)
//! - `runtime`: 위 구성 요소 묶음 (전역 인스턴스 포함)
//!
//! # 사용 예시
//!
//! ```ignore
//! use actionrole_core::{ActionArgs, ActionRoleRuntime, ControllerAdapter, role_factory};
//! use actionrole_foundation::ControllerConfig;
//!
//! let runtime = Arc::new(ActionRoleRuntime::with_builtins());
//! runtime.register_role("MyApp::ActionRole::Logging", role_factory(|| Logging));
//!
//! let config = ControllerConfig::new().action_role("Logging");
//! let books = ControllerAdapter::new("MyApp", "Books", config, runtime);
//!
//! // Logging 은 컨트롤러 기본 Role, TraceExecution 은 이 Action 에만
//! let action = books.register_action(
//!     ActionArgs::new("list", body).attribute("Does", "TraceExecution"),
//! )?;
//!
//! let mut ctx = InvocationContext::new("Books", "list", RequestContext::new("GET", "/books"));
//! action.execute(&mut ctx).await?;
//! ```

pub mod action;
pub mod compose;
pub mod controller;
pub mod loader;
pub mod resolver;
pub mod role;
pub mod runtime;

// Re-exports: Action
pub use action::{
    body_fn, Action, ActionArgs, ActionAttributes, ActionBody, ActionFactory, ActionMeta,
    BaseAction, ClassData, FnBody, InvocationContext, NoopBody, RequestContext, ResponseContext,
    ATTR_ACTION_CLASS, ATTR_ARGS, ATTR_DOES, ATTR_METHOD,
};

// Re-exports: Compose
pub use compose::{ActionType, ActionTypeComposer, ComposedAction, ComposedActionType, CompositionKey};

// Re-exports: Controller
pub use controller::{
    is_reserved_action_name, namespace_from, ControllerAdapter, RESERVED_ACTION_NAMES,
};

// Re-exports: Loader
pub use loader::{
    ExtensionLoader, ExtensionRegistry, LoadedActionClass, LoadedRole, ModuleCatalog, ModuleDef,
    ModuleKind, RoleMetadata,
};

// Re-exports: Resolver
pub use resolver::{
    app_role_prefix, resolve_role_name, ModuleProbe, NameResolver, PrefixList, ResolvedRole,
    RoleName, APP_RELATIVE_MARKER, APP_ROLE_NAMESPACE, QUALIFIED_MARKER,
};

// Re-exports: Role
pub use role::builtin::{MATCH_REQUEST_METHOD, TRACE_EXECUTION};
pub use role::{builtin_roles, role_factory, ActionRole, MatchRequestMethod, RoleCapability, RoleFactory, TraceExecution};

// Re-exports: Runtime
pub use runtime::{global_runtime, ActionRoleRuntime};
