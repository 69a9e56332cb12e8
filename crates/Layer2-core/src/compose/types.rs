//! Composed Action Type - 합성 타입 기술자

use crate::action::ClassData;
use crate::resolver::ResolvedRole;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 캐시 키 - (기본 타입, Role 목록) 순서 민감
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositionKey {
    pub base: String,
    pub roles: Vec<ResolvedRole>,
}

impl CompositionKey {
    pub fn new(base: impl Into<String>, roles: &[ResolvedRole]) -> Self {
        Self {
            base: base.into(),
            roles: roles.to_vec(),
        }
    }
}

/// 합성 타입 - 기본 Action 타입 + Role 목록
#[derive(Debug)]
pub struct ComposedActionType {
    serial: u64,
    name: String,
    base: String,
    roles: Vec<ResolvedRole>,
    methods: BTreeMap<String, ResolvedRole>,
    class_data: Arc<ClassData>,
    created_at: DateTime<Utc>,
}

impl ComposedActionType {
    pub(crate) fn new(
        serial: u64,
        base: &str,
        roles: Vec<ResolvedRole>,
        methods: BTreeMap<String, ResolvedRole>,
    ) -> Self {
        let name = format!("{}::__ANON__::SERIAL::{}", base, serial);
        Self {
            serial,
            class_data: Arc::new(ClassData::new(name.as_str())),
            name,
            base: base.to_string(),
            roles,
            methods,
            created_at: Utc::now(),
        }
    }

    /// 프로세스 내 고유 번호
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// 합성 타입 이름 (`{base}::__ANON__::SERIAL::{n}`)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// 적용 Role (바깥쪽부터)
    pub fn roles(&self) -> &[ResolvedRole] {
        &self.roles
    }

    /// 메서드를 제공하는 Role
    pub fn method_owner(&self, method: &str) -> Option<&ResolvedRole> {
        self.methods.get(method)
    }

    pub fn provided_methods(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn class_data(&self) -> &Arc<ClassData> {
        &self.class_data
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Action 타입 - 기본 클래스 그대로이거나 합성 타입
#[derive(Debug, Clone)]
pub enum ActionType {
    Base(String),
    Composed(Arc<ComposedActionType>),
}

impl ActionType {
    pub fn name(&self) -> &str {
        match self {
            Self::Base(base) => base,
            Self::Composed(composed) => composed.name(),
        }
    }

    pub fn base(&self) -> &str {
        match self {
            Self::Base(base) => base,
            Self::Composed(composed) => composed.base(),
        }
    }

    pub fn roles(&self) -> &[ResolvedRole] {
        match self {
            Self::Base(_) => &[],
            Self::Composed(composed) => composed.roles(),
        }
    }

    pub fn is_composed(&self) -> bool {
        matches!(self, Self::Composed(_))
    }

    /// 같은 타입 인스턴스인지 (합성 타입은 포인터 동일성)
    pub fn same_type(&self, other: &ActionType) -> bool {
        match (self, other) {
            (Self::Base(a), Self::Base(b)) => a == b,
            (Self::Composed(a), Self::Composed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_name() {
        let ty = ComposedActionType::new(
            7,
            "Dispatch::Action",
            vec![ResolvedRole::new("A")],
            BTreeMap::new(),
        );
        assert_eq!(ty.name(), "Dispatch::Action::__ANON__::SERIAL::7");
        assert_eq!(ty.class_data().owner(), ty.name());
    }

    #[test]
    fn test_key_is_order_sensitive() {
        let a = ResolvedRole::new("A");
        let b = ResolvedRole::new("B");
        assert_ne!(
            CompositionKey::new("Base", &[a.clone(), b.clone()]),
            CompositionKey::new("Base", &[b, a])
        );
    }
}
