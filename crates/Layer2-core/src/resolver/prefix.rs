//! Prefix List - Role 이름 해석 시 시도할 prefix 목록

/// 애플리케이션 Role namespace
pub const APP_ROLE_NAMESPACE: &str = "::ActionRole::";

/// `{app}::ActionRole::`
pub fn app_role_prefix(app: &str) -> String {
    format!("{}{}", app, APP_ROLE_NAMESPACE)
}

/// 순서 있는 prefix 목록
///
/// 첫 번째는 항상 애플리케이션 prefix, 나머지는 컨트롤러 fallback (선언 순서).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixList {
    prefixes: Vec<String>,
}

impl PrefixList {
    pub fn new<I, S>(app: &str, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes = vec![app_role_prefix(app)];
        prefixes.extend(fallbacks.into_iter().map(Into::into));
        Self { prefixes }
    }

    /// 애플리케이션 prefix (`~Name` 해석용)
    pub fn app_prefix(&self) -> &str {
        &self.prefixes[0]
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.prefixes[1..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// 짧은 이름에 대한 후보 식별자 (시도 순서)
    pub fn candidates(&self, short: &str) -> Vec<String> {
        self.iter().map(|p| format!("{}{}", p, short)).collect()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_prefix_first() {
        let list = PrefixList::new("MyApp", ["Shared::ActionRole::", "Dispatch::ActionRole::"]);

        assert_eq!(list.app_prefix(), "MyApp::ActionRole::");
        assert_eq!(list.fallbacks(), ["Shared::ActionRole::", "Dispatch::ActionRole::"]);
        assert_eq!(
            list.candidates("Audit"),
            vec![
                "MyApp::ActionRole::Audit",
                "Shared::ActionRole::Audit",
                "Dispatch::ActionRole::Audit",
            ]
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_no_fallbacks() {
        let list = PrefixList::new("MyApp", Vec::<String>::new());
        assert!(list.fallbacks().is_empty());
        assert_eq!(list.candidates("X"), vec!["MyApp::ActionRole::X"]);
    }
}
