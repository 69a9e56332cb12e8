//! Composed Action - Role 들을 기본 Action 위에 겹겹이 감싼 인스턴스
//!
//! Role `[e1, e2]` + 기본 `b` 의 실행 순서:
//!
//! ```text
//! e1.before → e2.before → b.execute → e2.after → e1.after
//! ```
//!
//! 어느 단계에서든 에러가 나면 즉시 중단하고 전파한다 (남은 hook 은 실행하지 않음).

use super::types::ComposedActionType;
use crate::action::{Action, ActionMeta, InvocationContext};
use crate::resolver::ResolvedRole;
use crate::role::{ActionRole, RoleCapability};
use actionrole_foundation::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct ComposedAction {
    inner: Arc<dyn Action>,
    ty: Arc<ComposedActionType>,
    /// `ty.roles()` 와 같은 순서
    roles: Vec<Arc<dyn ActionRole>>,
}

impl ComposedAction {
    pub(crate) fn new(
        inner: Arc<dyn Action>,
        ty: Arc<ComposedActionType>,
        roles: Vec<Arc<dyn ActionRole>>,
    ) -> Self {
        Self { inner, ty, roles }
    }

    pub fn composed_type(&self) -> &Arc<ComposedActionType> {
        &self.ty
    }

    fn role_for(&self, identifier: &ResolvedRole) -> Option<&Arc<dyn ActionRole>> {
        self.ty
            .roles()
            .iter()
            .position(|r| r == identifier)
            .and_then(|i| self.roles.get(i))
    }
}

#[async_trait]
impl Action for ComposedAction {
    fn meta(&self) -> &ActionMeta {
        self.inner.meta()
    }

    fn roles(&self) -> &[ResolvedRole] {
        self.ty.roles()
    }

    fn matches(&self, ctx: &InvocationContext) -> bool {
        let meta = self.inner.meta();
        self.roles
            .iter()
            .rev()
            .filter(|role| role.has(RoleCapability::RefineMatch))
            .fold(self.inner.matches(ctx), |matched, role| {
                role.refine_match(meta, ctx, matched)
            })
    }

    fn can(&self, method: &str) -> bool {
        self.ty.method_owner(method).is_some()
    }

    async fn call_method(&self, method: &str, ctx: &mut InvocationContext) -> Result<Value> {
        let role = self
            .ty
            .method_owner(method)
            .and_then(|owner| self.role_for(owner))
            .ok_or_else(|| Error::MethodNotFound {
                class: self.ty.name().to_string(),
                method: method.to_string(),
            })?;

        role.call(method, self.inner.meta(), ctx).await
    }

    async fn execute(&self, ctx: &mut InvocationContext) -> Result<()> {
        let meta = self.inner.meta();

        for role in &self.roles {
            if role.has(RoleCapability::BeforeExecute) {
                role.before_execute(meta, ctx).await?;
            }
        }

        self.inner.execute(ctx).await?;

        for role in self.roles.iter().rev() {
            if role.has(RoleCapability::AfterExecute) {
                role.after_execute(meta, ctx).await?;
            }
        }

        Ok(())
    }
}
