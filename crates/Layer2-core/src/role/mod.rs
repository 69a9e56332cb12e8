//! # Action Role
//!
//! 기본 Action 위에 before / after hook, 매칭 보정, 메서드를 얹는 확장 단위.
//!
//! ```ignore
//! struct Audit;
//!
//! #[async_trait]
//! impl ActionRole for Audit {
//!     fn capabilities(&self) -> Vec<RoleCapability> {
//!         vec![RoleCapability::BeforeExecute]
//!     }
//!
//!     async fn before_execute(&self, action: &ActionMeta, ctx: &mut InvocationContext) -> Result<()> {
//!         ctx.stash_push("audit", json!(action.reverse));
//!         Ok(())
//!     }
//! }
//!
//! runtime.register_role("MyApp::ActionRole::Audit", role_factory(|| Audit));
//! ```

pub mod builtin;
mod traits;

pub use builtin::{builtin_roles, MatchRequestMethod, TraceExecution};
pub use traits::{role_factory, ActionRole, RoleCapability, RoleFactory};
