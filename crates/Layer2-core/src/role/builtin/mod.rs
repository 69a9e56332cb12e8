//! Builtin Roles - 프레임워크 내장 Role
//!
//! 모두 `Dispatch::ActionRole::` 아래에 등록되므로, 컨트롤러가 fallback prefix 를
//! 따로 설정하지 않으면 짧은 이름(`MatchRequestMethod`)으로 찾을 수 있다.
//!
//! - `MatchRequestMethod` - `Method` 속성으로 요청 메서드 제한
//! - `TraceExecution` - 실행 시간 tracing / stash 기록

pub mod match_request_method;
pub mod trace_execution;

pub use match_request_method::{MatchRequestMethod, MATCH_REQUEST_METHOD};
pub use trace_execution::{TraceExecution, TRACE_EXECUTION};

use super::traits::{role_factory, RoleFactory};

/// 모든 builtin Role (식별자, 생성자)
pub fn builtin_roles() -> Vec<(&'static str, RoleFactory)> {
    vec![
        (MATCH_REQUEST_METHOD, role_factory(MatchRequestMethod::new)),
        (TRACE_EXECUTION, role_factory(TraceExecution::new)),
    ]
}
