//! Action Attributes - Action 선언부 속성
//!
//! 호스트 프레임워크의 속성 파서가 만들어 주는 다중 값 맵.
//! `Does('Audit')`, `ActionClass('REST')`, `Args(1)`, `Method('GET')` 등.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role 선언 속성
pub const ATTR_DOES: &str = "Does";

/// Action 클래스 override 속성
pub const ATTR_ACTION_CLASS: &str = "ActionClass";

/// 인자 개수 속성
pub const ATTR_ARGS: &str = "Args";

/// 요청 메서드 제한 속성 (MatchRequestMethod)
pub const ATTR_METHOD: &str = "Method";

/// Action 속성 맵 (이름 -> 값 목록, 선언 순서 유지)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAttributes {
    values: BTreeMap<String, Vec<String>>,
}

impl ActionAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// 속성 값 추가 (builder)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// 속성 값 추가
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// 속성 값 전체 교체
    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.values.insert(key.into(), values);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// 속성 값 목록 (없으면 빈 slice)
    pub fn get(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 첫 번째 값
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `ActionClass` override
    pub fn action_class(&self) -> Option<&str> {
        self.first(ATTR_ACTION_CLASS)
    }

    /// `Does` 에 선언된 Role 이름들
    pub fn does(&self) -> &[String] {
        self.get(ATTR_DOES)
    }
}
