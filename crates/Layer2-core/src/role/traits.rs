//! Role traits - Action Role 확장 인터페이스

use crate::action::{ActionMeta, InvocationContext};
use actionrole_foundation::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// RoleCapability - Role 이 제공하는 hook 종류
// ============================================================================

/// Role 이 기본 Action 위에 얹을 수 있는 기능
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCapability {
    /// 기본 Action 실행 전
    BeforeExecute,

    /// 기본 Action 실행 후
    AfterExecute,

    /// 요청 매칭 결과 보정
    RefineMatch,

    /// 이름 있는 메서드 제공 (`provides()`)
    ProvideMethods,
}

impl std::fmt::Display for RoleCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeExecute => write!(f, "before_execute"),
            Self::AfterExecute => write!(f, "after_execute"),
            Self::RefineMatch => write!(f, "refine_match"),
            Self::ProvideMethods => write!(f, "provide_methods"),
        }
    }
}

// ============================================================================
// ActionRole Trait
// ============================================================================

/// Action Role 트레이트
///
/// 합성된 Action 은 Role 목록의 첫 번째를 가장 바깥쪽으로 감싼다.
/// `before_execute` 는 바깥 → 안쪽, `after_execute` 는 안쪽 → 바깥 순서로 실행된다.
#[async_trait]
pub trait ActionRole: Send + Sync {
    /// 구현한 hook 목록. 비어 있으면 로드 시 Invalid 로 거부된다.
    fn capabilities(&self) -> Vec<RoleCapability>;

    /// 제공하는 메서드 이름. 서로 다른 Role 이 같은 이름을 제공하면 합성 충돌.
    fn provides(&self) -> Vec<String> {
        vec![]
    }

    fn has(&self, capability: RoleCapability) -> bool {
        self.capabilities().contains(&capability)
    }

    async fn before_execute(&self, _action: &ActionMeta, _ctx: &mut InvocationContext) -> Result<()> {
        Ok(())
    }

    async fn after_execute(&self, _action: &ActionMeta, _ctx: &mut InvocationContext) -> Result<()> {
        Ok(())
    }

    fn refine_match(&self, _action: &ActionMeta, _ctx: &InvocationContext, matched: bool) -> bool {
        matched
    }

    /// `provides()` 에 선언한 메서드 호출
    async fn call(
        &self,
        method: &str,
        action: &ActionMeta,
        _ctx: &mut InvocationContext,
    ) -> Result<Value> {
        Err(Error::MethodNotFound {
            class: action.class.clone(),
            method: method.to_string(),
        })
    }
}

/// Role 생성자 (로드 시 한 번 호출)
pub type RoleFactory = Arc<dyn Fn() -> Arc<dyn ActionRole> + Send + Sync>;

/// 클로저를 RoleFactory 로 감싸기
pub fn role_factory<R, F>(f: F) -> RoleFactory
where
    R: ActionRole + 'static,
    F: Fn() -> R + Send + Sync + 'static,
{
    Arc::new(move || Arc::new(f()) as Arc<dyn ActionRole>)
}
