//! 프레임워크 내부 Action slot

/// dispatch / lifecycle 내부 Action 이름 (Role 합성 대상 아님)
pub const RESERVED_ACTION_NAMES: [&str; 5] = ["_DISPATCH", "_BEGIN", "_AUTO", "_ACTION", "_END"];

pub fn is_reserved_action_name(name: &str) -> bool {
    RESERVED_ACTION_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names_are_exact() {
        for name in RESERVED_ACTION_NAMES {
            assert!(is_reserved_action_name(name));
        }
        assert!(!is_reserved_action_name("begin"));
        assert!(!is_reserved_action_name("_BEGIN_"));
        assert!(!is_reserved_action_name("index"));
    }
}
