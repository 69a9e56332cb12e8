//! Action Traits - Action 실행 인터페이스

use super::attributes::ActionAttributes;
use super::context::InvocationContext;
use crate::resolver::ResolvedRole;
use actionrole_foundation::{Error, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// ClassData - 타입 단위 공유 상태
// ============================================================================

/// Action 타입(기본 클래스 또는 합성 타입) 단위로 공유되는 상태
///
/// 같은 합성 타입의 인스턴스끼리는 공유되고, 다른 합성 타입과는 분리된다.
#[derive(Debug, Default)]
pub struct ClassData {
    owner: String,
    values: RwLock<HashMap<String, Value>>,
}

impl ClassData {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// 소유 타입 이름
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.values.write().insert(key.into(), value);
    }

    /// 정수 카운터 증가 후 새 값 반환
    pub fn increment(&self, key: &str) -> u64 {
        let mut values = self.values.write();
        let next = values.get(key).and_then(Value::as_u64).unwrap_or(0) + 1;
        values.insert(key.to_string(), Value::from(next));
        next
    }
}

// ============================================================================
// ActionMeta - Action 메타데이터
// ============================================================================

/// Action 인스턴스 메타데이터
#[derive(Debug, Clone)]
pub struct ActionMeta {
    /// Action 이름 (메서드 이름)
    pub name: String,

    /// 컨트롤러 namespace
    pub namespace: String,

    /// private path (`namespace/name`)
    pub reverse: String,

    /// 인스턴스의 타입 이름 (기본 클래스 또는 합성 타입 이름)
    pub class: String,

    pub attributes: ActionAttributes,

    /// 타입 단위 공유 상태
    pub class_data: Arc<ClassData>,
}

// ============================================================================
// ActionBody - 기본 Action 의 요청 처리 로직
// ============================================================================

/// 컨트롤러 메서드 본문 (호스트 프레임워크 쪽 로직)
#[async_trait]
pub trait ActionBody: Send + Sync {
    async fn call(&self, ctx: &mut InvocationContext) -> Result<()>;
}

/// 동기 클로저 기반 ActionBody
pub struct FnBody<F>(pub F);

#[async_trait]
impl<F> ActionBody for FnBody<F>
where
    F: Fn(&mut InvocationContext) -> Result<()> + Send + Sync,
{
    async fn call(&self, ctx: &mut InvocationContext) -> Result<()> {
        (self.0)(ctx)
    }
}

/// 아무것도 하지 않는 본문 (내부 dispatch slot 등)
pub struct NoopBody;

#[async_trait]
impl ActionBody for NoopBody {
    async fn call(&self, _ctx: &mut InvocationContext) -> Result<()> {
        Ok(())
    }
}

/// 클로저를 ActionBody 로 감싸기
pub fn body_fn<F>(f: F) -> Arc<dyn ActionBody>
where
    F: Fn(&mut InvocationContext) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(FnBody(f))
}

// ============================================================================
// Action Trait
// ============================================================================

/// 호스트 프레임워크 dispatcher 가 호출하는 Action 인터페이스
#[async_trait]
pub trait Action: Send + Sync {
    fn meta(&self) -> &ActionMeta;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn class(&self) -> &str {
        &self.meta().class
    }

    /// 적용된 Role 목록 (바깥쪽부터)
    fn roles(&self) -> &[ResolvedRole] {
        &[]
    }

    /// 특정 Role 적용 여부
    fn does(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r.as_str() == role)
    }

    /// 요청이 이 Action 에 매칭되는지
    fn matches(&self, ctx: &InvocationContext) -> bool;

    /// Role 이 제공하는 메서드 존재 여부
    fn can(&self, _method: &str) -> bool {
        false
    }

    /// Role 이 제공하는 메서드 호출
    async fn call_method(&self, method: &str, _ctx: &mut InvocationContext) -> Result<Value> {
        Err(Error::MethodNotFound {
            class: self.class().to_string(),
            method: method.to_string(),
        })
    }

    /// Action 실행 (dispatcher 진입점)
    async fn execute(&self, ctx: &mut InvocationContext) -> Result<()>;
}

// ============================================================================
// ActionArgs / ActionFactory
// ============================================================================

/// Action 생성 인자
#[derive(Clone)]
pub struct ActionArgs {
    pub name: String,
    pub namespace: String,
    pub reverse: Option<String>,
    pub attributes: ActionAttributes,
    pub body: Arc<dyn ActionBody>,
}

impl ActionArgs {
    pub fn new(name: impl Into<String>, body: Arc<dyn ActionBody>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            reverse: None,
            attributes: ActionAttributes::new(),
            body,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn reverse(mut self, reverse: impl Into<String>) -> Self {
        self.reverse = Some(reverse.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(key, value);
        self
    }

    pub fn attributes(mut self, attributes: ActionAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// 타입 정보를 붙여 메타데이터 + 본문으로 분리
    pub fn into_parts(
        self,
        class: impl Into<String>,
        class_data: Arc<ClassData>,
    ) -> (ActionMeta, Arc<dyn ActionBody>) {
        let reverse = self.reverse.unwrap_or_else(|| {
            if self.namespace.is_empty() {
                self.name.clone()
            } else {
                format!("{}/{}", self.namespace, self.name)
            }
        });

        let meta = ActionMeta {
            name: self.name,
            namespace: self.namespace,
            reverse,
            class: class.into(),
            attributes: self.attributes,
            class_data,
        };

        (meta, self.body)
    }
}

/// Action 클래스 생성자
pub type ActionFactory =
    Arc<dyn Fn(ActionMeta, Arc<dyn ActionBody>) -> Result<Arc<dyn Action>> + Send + Sync>;
