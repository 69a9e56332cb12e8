//! # Controller Adapter
//!
//! 컨트롤러 전체 기본 Role(`action_roles`)과 Action 별 `Does` Role 을 합쳐
//! 합성 타입을 만들고 인스턴스화한다.
//!
//! ```text
//! create_action(args)
//!   ├─ base type   : ActionClass 속성 > action_class 설정 > Dispatch::Action
//!   ├─ roles       : controller roles ++ Does roles (순서 유지, 컨트롤러가 바깥쪽)
//!   ├─ compose     : ActionTypeComposer (캐시)
//!   └─ instantiate
//! ```
//!
//! `_DISPATCH`, `_BEGIN`, `_AUTO`, `_ACTION`, `_END` 는 프레임워크 내부 slot 이므로
//! Role 없이 기본 타입으로 만든다.

mod adapter;
mod reserved;

pub use adapter::{namespace_from, ControllerAdapter};
pub use reserved::{is_reserved_action_name, RESERVED_ACTION_NAMES};
