//! MatchRequestMethod - 요청 메서드로 매칭 제한
//!
//! Action 의 `Method` 속성에 나열된 메서드만 매칭한다.
//! `Method` 속성이 없으면 기본 매칭 결과를 그대로 둔다.

use crate::action::{ActionMeta, InvocationContext, ATTR_METHOD};
use crate::role::{ActionRole, RoleCapability};
use async_trait::async_trait;
use tracing::trace;

pub const MATCH_REQUEST_METHOD: &str = "Dispatch::ActionRole::MatchRequestMethod";

pub struct MatchRequestMethod;

impl MatchRequestMethod {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatchRequestMethod {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionRole for MatchRequestMethod {
    fn capabilities(&self) -> Vec<RoleCapability> {
        vec![RoleCapability::RefineMatch]
    }

    fn refine_match(&self, action: &ActionMeta, ctx: &InvocationContext, matched: bool) -> bool {
        if !matched {
            return false;
        }

        let allowed = action.attributes.get(ATTR_METHOD);
        if allowed.is_empty() {
            return true;
        }

        let ok = allowed
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&ctx.request.method));
        if !ok {
            trace!(
                "{} rejects {} (allowed: {})",
                action.reverse,
                ctx.request.method,
                allowed.join(", ")
            );
        }
        ok
    }
}
