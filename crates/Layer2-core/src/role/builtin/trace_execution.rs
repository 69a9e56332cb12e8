//! TraceExecution - 실행 시간 기록
//!
//! 실행 전후로 tracing 이벤트를 남기고, 경과 시간(µs)을 stash 에 기록한다.
//! 호출 횟수는 합성 타입의 ClassData 에 누적된다.

use crate::action::{ActionMeta, InvocationContext};
use crate::role::{ActionRole, RoleCapability};
use actionrole_foundation::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

pub const TRACE_EXECUTION: &str = "Dispatch::ActionRole::TraceExecution";

/// stash 키: 시작 시각 (epoch µs)
pub const STASH_STARTED_AT: &str = "trace_execution.started_at";

/// stash 키: 경과 시간 (µs)
pub const STASH_ELAPSED_US: &str = "trace_execution.elapsed_us";

/// ClassData 키: 호출 횟수
pub const CLASS_INVOCATIONS: &str = "trace_execution.invocations";

pub struct TraceExecution;

impl TraceExecution {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TraceExecution {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionRole for TraceExecution {
    fn capabilities(&self) -> Vec<RoleCapability> {
        vec![RoleCapability::BeforeExecute, RoleCapability::AfterExecute]
    }

    async fn before_execute(&self, action: &ActionMeta, ctx: &mut InvocationContext) -> Result<()> {
        let count = action.class_data.increment(CLASS_INVOCATIONS);
        debug!("→ {} (#{} for {})", action.reverse, count, action.class);
        ctx.stash_set(STASH_STARTED_AT, Value::from(Utc::now().timestamp_micros()));
        Ok(())
    }

    async fn after_execute(&self, action: &ActionMeta, ctx: &mut InvocationContext) -> Result<()> {
        let started = ctx.stash_get(STASH_STARTED_AT).and_then(Value::as_i64);
        if let Some(started) = started {
            let elapsed = (Utc::now().timestamp_micros() - started).max(0);
            ctx.stash_set(STASH_ELAPSED_US, Value::from(elapsed));
            info!(
                "← {} status={} elapsed={}µs",
                action.reverse, ctx.response.status, elapsed
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionArgs, ClassData, NoopBody};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_records_elapsed_and_count() {
        let data = Arc::new(ClassData::new("Composed"));
        let (meta, _) = ActionArgs::new("index", Arc::new(NoopBody)).into_parts("Composed", data.clone());
        let role = TraceExecution::new();
        let mut ctx = InvocationContext::default();

        role.before_execute(&meta, &mut ctx).await.unwrap();
        role.after_execute(&meta, &mut ctx).await.unwrap();
        role.before_execute(&meta, &mut ctx).await.unwrap();

        assert!(ctx.stash_get(STASH_ELAPSED_US).and_then(Value::as_i64).is_some());
        assert_eq!(data.get(CLASS_INVOCATIONS), Some(Value::from(2u64)));
    }

    #[tokio::test]
    async fn test_after_without_before_is_noop() {
        let (meta, _) = ActionArgs::new("index", Arc::new(NoopBody))
            .into_parts("Composed", Arc::new(ClassData::new("Composed")));
        let mut ctx = InvocationContext::default();

        TraceExecution::new().after_execute(&meta, &mut ctx).await.unwrap();
        assert!(ctx.stash_get(STASH_ELAPSED_US).is_none());
    }
}
