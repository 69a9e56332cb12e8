//! 컨트롤러 어댑터 통합 테스트
//!
//! 설정 → 이름 해석 → 로드 → 합성 → 실행 전체 흐름을 확인한다.

use actionrole_core::{
    body_fn, role_factory, Action, ActionArgs, ActionMeta, ActionRole, ActionRoleRuntime,
    ControllerAdapter, InvocationContext, RequestContext, RoleCapability, ATTR_DOES, ATTR_METHOD,
    TRACE_EXECUTION,
};
use actionrole_foundation::{
    init_logging, AppConfig, ConfigStore, ControllerConfig, Error, Result, DEFAULT_ACTION_CLASS,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// 실행 순서를 stash 에 기록하는 Role
struct Recorder(&'static str);

#[async_trait]
impl ActionRole for Recorder {
    fn capabilities(&self) -> Vec<RoleCapability> {
        vec![RoleCapability::BeforeExecute, RoleCapability::AfterExecute]
    }

    async fn before_execute(&self, _action: &ActionMeta, ctx: &mut InvocationContext) -> Result<()> {
        ctx.stash_push("trace", json!(format!("{}.before", self.0)));
        Ok(())
    }

    async fn after_execute(&self, _action: &ActionMeta, ctx: &mut InvocationContext) -> Result<()> {
        ctx.stash_push("trace", json!(format!("{}.after", self.0)));
        Ok(())
    }
}

fn runtime() -> Arc<ActionRoleRuntime> {
    init_logging("debug");

    let runtime = ActionRoleRuntime::with_builtins();
    runtime.register_role("MyApp::ActionRole::Logging", role_factory(|| Recorder("Logging")));
    runtime.register_role("MyApp::ActionRole::Audit", role_factory(|| Recorder("Audit")));
    runtime.register_role("Shared::Role::Audit", role_factory(|| Recorder("SharedAudit")));
    runtime.register_role("Shared::Role::Cache", role_factory(|| Recorder("Cache")));
    Arc::new(runtime)
}

fn args(name: &str) -> ActionArgs {
    ActionArgs::new(
        name,
        body_fn(|ctx| {
            ctx.stash_push("trace", json!("body"));
            Ok(())
        }),
    )
}

async fn run(action: &Arc<dyn Action>) -> Vec<String> {
    let mut ctx = InvocationContext::new("Books", action.name(), RequestContext::new("GET", "/books"));
    action.execute(&mut ctx).await.unwrap();

    match ctx.stash_get("trace") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[tokio::test]
async fn test_controller_roles_wrap_plain_action() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().action_role("Logging"),
        runtime(),
    );

    let foo = ctrl.create_action(args("foo")).unwrap();
    assert!(foo.does("MyApp::ActionRole::Logging"));
    assert_eq!(run(&foo).await, vec!["Logging.before", "body", "Logging.after"]);
}

#[tokio::test]
async fn test_controller_roles_outside_action_roles() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().action_role("Logging"),
        runtime(),
    );

    let bar = ctrl.create_action(args("bar").attribute(ATTR_DOES, "Audit")).unwrap();
    assert_eq!(
        run(&bar).await,
        vec!["Logging.before", "Audit.before", "body", "Audit.after", "Logging.after"]
    );
}

#[tokio::test]
async fn test_reserved_action_skips_roles() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().action_role("Logging"),
        runtime(),
    );

    let begin = ctrl
        .create_action(args("_BEGIN").attribute(ATTR_DOES, "Audit"))
        .unwrap();
    assert_eq!(begin.class(), DEFAULT_ACTION_CLASS);
    assert!(begin.roles().is_empty());
    assert_eq!(run(&begin).await, vec!["body"]);
}

#[tokio::test]
async fn test_same_declaration_shares_composed_type() {
    let ctrl = ControllerAdapter::new("MyApp", "Books", ControllerConfig::new(), runtime());

    let a = ctrl.create_action(args("a").attribute(ATTR_DOES, "Audit")).unwrap();
    let b = ctrl.create_action(args("b").attribute(ATTR_DOES, "~Audit")).unwrap();
    let c = ctrl.create_action(args("c")).unwrap();

    assert_eq!(a.class(), b.class());
    assert!(a.class().starts_with(&format!("{}::__ANON__::SERIAL::", DEFAULT_ACTION_CLASS)));
    assert_eq!(c.class(), DEFAULT_ACTION_CLASS);
}

#[test]
fn test_app_prefix_wins_over_fallback() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().role_prefix("Shared::Role::"),
        runtime(),
    );

    let roles = ctrl.expand_role_shortname(&["Audit", "Cache"]).unwrap();
    assert_eq!(roles[0].as_str(), "MyApp::ActionRole::Audit");
    assert_eq!(roles[1].as_str(), "Shared::Role::Cache");
}

#[test]
fn test_unknown_role_lists_candidates() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().role_prefix("Shared::Role::"),
        runtime(),
    );

    let err = ctrl
        .create_action(args("foo").attribute(ATTR_DOES, "Missing"))
        .err()
        .unwrap();
    match err {
        Error::RoleNotFound { name, tried } => {
            assert_eq!(name, "Missing");
            assert_eq!(tried, vec!["MyApp::ActionRole::Missing", "Shared::Role::Missing"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_controller_role_fails_build() {
    let ctrl = ControllerAdapter::new(
        "MyApp",
        "Books",
        ControllerConfig::new().action_role("+No::Such::Role"),
        runtime(),
    );

    assert!(matches!(ctrl.build(), Err(Error::ModuleNotFound(id)) if id == "No::Such::Role"));
}

#[tokio::test]
async fn test_builtin_roles_through_attributes() {
    let ctrl = ControllerAdapter::new("MyApp", "Books", ControllerConfig::new(), runtime());

    let action = ctrl
        .register_action(
            args("create")
                .attribute(ATTR_DOES, "MatchRequestMethod")
                .attribute(ATTR_DOES, "TraceExecution")
                .attribute(ATTR_METHOD, "POST"),
        )
        .unwrap();

    let get = InvocationContext::new("Books", "create", RequestContext::new("GET", "/books"));
    let post = InvocationContext::new("Books", "create", RequestContext::new("post", "/books"));
    assert!(!action.matches(&get));
    assert!(action.matches(&post));

    let mut ctx = post;
    action.execute(&mut ctx).await.unwrap();
    assert!(action.does(TRACE_EXECUTION));
    assert!(ctx.stash_get("trace_execution.elapsed_us").is_some());
}

#[test]
fn test_controller_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    store
        .save_json(
            "actionrole.json",
            &json!({
                "name": "MyApp",
                "controllers": {
                    "Books": { "action_roles": ["Logging"] }
                }
            }),
        )
        .unwrap();

    let config = AppConfig::load_file(&dir.path().join("actionrole.json")).unwrap();
    let ctrl = ControllerAdapter::from_app_config(&config, "Books", runtime());

    ctrl.build().unwrap();
    assert_eq!(ctrl.action_roles().unwrap()[0].as_str(), "MyApp::ActionRole::Logging");
    assert_eq!(ctrl.namespace(), "books");
}
