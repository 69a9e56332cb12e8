//! Invocation Context - Action / Role hook 이 공유하는 실행 컨텍스트

use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// RequestContext
// ============================================================================

/// 요청 정보 (호스트 프레임워크가 채운다)
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// HTTP 메서드 (GET, POST ...)
    pub method: String,

    /// 요청 경로
    pub path: String,

    /// 경로 인자
    pub args: Vec<String>,

    /// 쿼리 / 바디 파라미터
    pub params: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// ResponseContext
// ============================================================================

/// 응답 정보
#[derive(Debug, Clone)]
pub struct ResponseContext {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl Default for ResponseContext {
    fn default() -> Self {
        Self {
            status: 200,
            body: String::new(),
            headers: HashMap::new(),
        }
    }
}

// ============================================================================
// InvocationContext
// ============================================================================

/// Action 실행 컨텍스트
///
/// 기본 Action 과 모든 Role hook 은 같은 컨텍스트를 받는다.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// 컨트롤러 이름
    pub controller: String,

    /// 실행 중인 Action 이름
    pub action: String,

    pub request: RequestContext,

    pub response: ResponseContext,

    /// 요청 단위 임시 저장소
    pub stash: HashMap<String, Value>,
}

impl InvocationContext {
    pub fn new(
        controller: impl Into<String>,
        action: impl Into<String>,
        request: RequestContext,
    ) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            request,
            response: ResponseContext::default(),
            stash: HashMap::new(),
        }
    }

    pub fn stash_get(&self, key: &str) -> Option<&Value> {
        self.stash.get(key)
    }

    pub fn stash_set(&mut self, key: impl Into<String>, value: Value) {
        self.stash.insert(key.into(), value);
    }

    /// stash 배열에 값 추가 (없으면 생성, 배열이 아니면 교체)
    pub fn stash_push(&mut self, key: impl Into<String>, value: Value) {
        let slot = self
            .stash
            .entry(key.into())
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot {
            Value::Array(items) => items.push(value),
            other => *other = Value::Array(vec![value]),
        }
    }

    /// 응답 바디 뒤에 덧붙이기
    pub fn write(&mut self, body: &str) {
        self.response.body.push_str(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stash_push_creates_array() {
        let mut ctx = InvocationContext::new("Root", "index", RequestContext::new("GET", "/"));
        ctx.stash_push("trail", json!("a"));
        ctx.stash_push("trail", json!("b"));
        assert_eq!(ctx.stash_get("trail"), Some(&json!(["a", "b"])));

        ctx.stash_set("scalar", json!(1));
        ctx.stash_push("scalar", json!(2));
        assert_eq!(ctx.stash_get("scalar"), Some(&json!([2])));
    }

    #[test]
    fn test_defaults() {
        let ctx = InvocationContext::default();
        assert_eq!(ctx.response.status, 200);
        assert!(ctx.response.body.is_empty());
    }
}
