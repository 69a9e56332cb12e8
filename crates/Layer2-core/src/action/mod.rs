//! # Action Model
//!
//! 호스트 프레임워크가 호출하는 Action 인터페이스와 기본 Action 클래스.
//!
//! - `traits`: `Action`, `ActionBody`, `ActionMeta`, `ClassData`, `ActionArgs`
//! - `context`: `InvocationContext` (request / response / stash)
//! - `attributes`: 선언부 속성 (`Does`, `ActionClass`, `Args`, `Method`)
//! - `base`: `Dispatch::Action` 기본 구현

mod attributes;
mod base;
mod context;
mod traits;

pub use attributes::{ActionAttributes, ATTR_ACTION_CLASS, ATTR_ARGS, ATTR_DOES, ATTR_METHOD};
pub use base::BaseAction;
pub use context::{InvocationContext, RequestContext, ResponseContext};
pub use traits::{
    body_fn, Action, ActionArgs, ActionBody, ActionFactory, ActionMeta, ClassData, FnBody,
    NoopBody,
};
