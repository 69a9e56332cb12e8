//! Role Name - 선언부에 적힌 Role 이름과 해석 결과

use actionrole_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 완전한 이름 표시
pub const QUALIFIED_MARKER: char = '+';

/// 애플리케이션 상대 이름 표시
pub const APP_RELATIVE_MARKER: char = '~';

// ============================================================================
// RoleName
// ============================================================================

/// 사용자가 적은 Role 이름
///
/// - `+Fully::Qualified` - 그대로 사용 (존재 확인은 로더로 미룸)
/// - `~Relative` - `{app}::ActionRole::Relative`
/// - `Bare` - prefix 목록을 순서대로 시도
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleName {
    Qualified(String),
    AppRelative(String),
    Bare(String),
}

impl RoleName {
    /// 문자열 파싱
    ///
    /// 앞뒤 공백과 한 겹의 따옴표(`'Foo'`, `"Foo"`)는 제거한다.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = unquote(raw.trim());

        let parsed = if let Some(rest) = name.strip_prefix(QUALIFIED_MARKER) {
            RoleName::Qualified(rest.trim().to_string())
        } else if let Some(rest) = name.strip_prefix(APP_RELATIVE_MARKER) {
            RoleName::AppRelative(rest.trim().to_string())
        } else {
            RoleName::Bare(name.to_string())
        };

        if parsed.short().is_empty() {
            return Err(Error::InvalidInput(format!(
                "Empty action role name: {:?}",
                raw
            )));
        }

        Ok(parsed)
    }

    /// 표시를 뗀 이름
    pub fn short(&self) -> &str {
        match self {
            Self::Qualified(s) | Self::AppRelative(s) | Self::Bare(s) => s,
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified(_))
    }
}

impl FromStr for RoleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualified(s) => write!(f, "{}{}", QUALIFIED_MARKER, s),
            Self::AppRelative(s) => write!(f, "{}{}", APP_RELATIVE_MARKER, s),
            Self::Bare(s) => write!(f, "{}", s),
        }
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// ============================================================================
// ResolvedRole
// ============================================================================

/// 완전한 Role 식별자
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedRole(String);

impl ResolvedRole {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// 다시 선언부에 적을 수 있는 형태 (`+Identifier`)
    pub fn to_declaration(&self) -> String {
        format!("{}{}", QUALIFIED_MARKER, self.0)
    }
}

impl fmt::Display for ResolvedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedRole {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            RoleName::parse("+Other::Role").unwrap(),
            RoleName::Qualified("Other::Role".into())
        );
        assert_eq!(
            RoleName::parse("~Audit").unwrap(),
            RoleName::AppRelative("Audit".into())
        );
        assert_eq!(RoleName::parse(" 'Logging' ").unwrap(), RoleName::Bare("Logging".into()));
        assert_eq!(RoleName::parse("\"~Cache\"").unwrap().short(), "Cache");
    }

    #[test]
    fn test_empty_names_rejected() {
        for raw in ["", "  ", "+", "~", "''"] {
            assert!(
                matches!(RoleName::parse(raw), Err(Error::InvalidInput(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_display_keeps_marker() {
        let name: RoleName = "~Audit".parse().unwrap();
        assert_eq!(name.to_string(), "~Audit");
        assert_eq!(ResolvedRole::new("MyApp::ActionRole::Audit").to_declaration(), "+MyApp::ActionRole::Audit");
    }
}
