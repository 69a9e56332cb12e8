//! Base Action - 프레임워크 기본 Action 클래스 (`Dispatch::Action`)

use super::attributes::ATTR_ARGS;
use super::context::InvocationContext;
use super::traits::{Action, ActionBody, ActionFactory, ActionMeta};
use actionrole_foundation::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

/// 기본 Action - 본문만 실행한다
pub struct BaseAction {
    meta: ActionMeta,
    body: Arc<dyn ActionBody>,
}

impl BaseAction {
    pub fn new(meta: ActionMeta, body: Arc<dyn ActionBody>) -> Self {
        Self { meta, body }
    }

    /// `Dispatch::Action` 생성자
    pub fn factory() -> ActionFactory {
        Arc::new(|meta: ActionMeta, body: Arc<dyn ActionBody>| {
            Ok(Arc::new(BaseAction::new(meta, body)) as Arc<dyn Action>)
        })
    }

    /// `Args` 속성에 선언된 인자 개수 (없거나 숫자가 아니면 제한 없음)
    fn expected_args(&self) -> Option<usize> {
        self.meta
            .attributes
            .first(ATTR_ARGS)
            .and_then(|v| v.trim().parse().ok())
    }
}

#[async_trait]
impl Action for BaseAction {
    fn meta(&self) -> &ActionMeta {
        &self.meta
    }

    fn matches(&self, ctx: &InvocationContext) -> bool {
        match self.expected_args() {
            Some(n) => ctx.request.args.len() == n,
            None => true,
        }
    }

    async fn execute(&self, ctx: &mut InvocationContext) -> Result<()> {
        trace!("Executing {} ({})", self.meta.reverse, self.meta.class);
        self.body.call(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{body_fn, ActionArgs, ClassData, RequestContext};

    fn action(args: ActionArgs) -> Arc<dyn Action> {
        let (meta, body) = args.into_parts("Dispatch::Action", Arc::new(ClassData::new("Dispatch::Action")));
        (BaseAction::factory())(meta, body).unwrap()
    }

    #[test]
    fn test_args_attribute_limits_match() {
        let a = action(
            ActionArgs::new("view", body_fn(|_| Ok(()))).attribute(ATTR_ARGS, "1"),
        );

        let one = InvocationContext::new("Root", "view", RequestContext::new("GET", "/view/1").with_arg("1"));
        let none = InvocationContext::new("Root", "view", RequestContext::new("GET", "/view"));
        assert!(a.matches(&one));
        assert!(!a.matches(&none));
    }

    #[tokio::test]
    async fn test_execute_runs_body() {
        let a = action(ActionArgs::new("index", body_fn(|ctx| {
            ctx.write("index");
            Ok(())
        })));

        let mut ctx = InvocationContext::default();
        a.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.response.body, "index");
        assert!(a.roles().is_empty());
        assert!(!a.can("anything"));
    }
}
