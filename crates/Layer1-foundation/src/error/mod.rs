//! Error types for ActionRole
//!
//! 모든 에러를 중앙에서 관리
//!
//! 설정 단계(resolve / load / compose)에서 발생하는 에러는 모두 복구 불가능하며,
//! 호출자(컨트롤러 / 애플리케이션 부트스트랩)로 그대로 전파되어 기동을 중단시킨다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ActionRole 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 이름 해석 (ResolutionError)
    // ========================================================================
    #[error("Cannot resolve action role '{name}' (tried: {})", .tried.join(", "))]
    RoleNotFound { name: String, tried: Vec<String> },

    // ========================================================================
    // 모듈 로드 (LoadError)
    // ========================================================================
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Invalid module {identifier}: {reason}")]
    InvalidModule { identifier: String, reason: String },

    // ========================================================================
    // 합성 (CompositionError)
    // ========================================================================
    #[error("Role conflict composing {base}: method '{method}' is provided by {}", .roles.join(" and "))]
    RoleConflict {
        base: String,
        method: String,
        roles: Vec<String>,
    },

    // ========================================================================
    // Action 실행 관련
    // ========================================================================
    #[error("Method not found on {class}: {method}")]
    MethodNotFound { class: String, method: String },

    #[error("Action failed: {action} - {message}")]
    ActionFailed { action: String, message: String },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 설정 단계 에러인지 확인 (resolve / load / compose)
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Error::RoleNotFound { .. }
                | Error::ModuleNotFound(_)
                | Error::InvalidModule { .. }
                | Error::RoleConflict { .. }
        )
    }

    /// 재시도 가능한 에러인지 확인
    ///
    /// 로드는 결정적이므로 설정 단계 에러는 재시도해도 결과가 같다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Role 해석 실패 에러 생성 헬퍼
    pub fn role_not_found(name: impl Into<String>, tried: Vec<String>) -> Self {
        Error::RoleNotFound {
            name: name.into(),
            tried,
        }
    }

    /// 잘못된 모듈 에러 생성 헬퍼
    pub fn invalid_module(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidModule {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Action 실행 에러 생성 헬퍼
    pub fn action_failed(action: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ActionFailed {
            action: action.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_not_found_lists_candidates() {
        let err = Error::role_not_found(
            "Audit",
            vec![
                "MyApp::ActionRole::Audit".into(),
                "Dispatch::ActionRole::Audit".into(),
            ],
        );

        let msg = err.to_string();
        assert!(msg.contains("'Audit'"));
        assert!(msg.contains("MyApp::ActionRole::Audit, Dispatch::ActionRole::Audit"));
        assert!(err.is_setup_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_conflict_names_both_roles() {
        let err = Error::RoleConflict {
            base: "Dispatch::Action".into(),
            method: "acl".into(),
            roles: vec!["A::ACL".into(), "B::ACL".into()],
        };

        assert_eq!(
            err.to_string(),
            "Role conflict composing Dispatch::Action: method 'acl' is provided by A::ACL and B::ACL"
        );
    }

    #[test]
    fn test_runtime_errors_are_not_setup_errors() {
        assert!(!Error::action_failed("foo", "boom").is_setup_error());
        assert!(!Error::from("oops").is_setup_error());
        assert!(Error::ModuleNotFound("X".into()).is_setup_error());
    }
}
