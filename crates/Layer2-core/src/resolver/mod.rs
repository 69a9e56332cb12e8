//! # Name Resolver
//!
//! 짧은 Role 이름을 완전한 식별자로 확장한다.
//!
//! | 선언          | 결과                                  | 존재 확인        |
//! |---------------|---------------------------------------|------------------|
//! | `+Full::Name` | `Full::Name`                          | 로더로 미룸      |
//! | `~Name`       | `{app}::ActionRole::Name`             | 로더로 미룸      |
//! | `Name`        | prefix 목록 중 처음 로드되는 후보     | probe (로드 포함)|
//!
//! Bare 이름은 prefix 목록 순서대로 시도하며, 처음 로드에 성공한 후보가 이긴다.
//! 더 긴/짧은 prefix 를 선호하지 않는다.

mod name;
mod prefix;

pub use name::{ResolvedRole, RoleName, APP_RELATIVE_MARKER, QUALIFIED_MARKER};
pub use prefix::{app_role_prefix, PrefixList, APP_ROLE_NAMESPACE};

use actionrole_foundation::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, trace};

// ============================================================================
// ModuleProbe - 존재 확인 + 로드
// ============================================================================

/// 후보 식별자의 로드 가능 여부 확인
///
/// 로드 가능하면 실제로 로드까지 수행한다 (이후 단계에서 다시 로드하지 않음).
pub trait ModuleProbe {
    /// - `Ok(true)`: 존재하고 로드됨
    /// - `Ok(false)`: 존재하지 않음
    /// - `Err(_)`: 존재하지만 사용할 수 없음
    fn try_load(&self, identifier: &str) -> Result<bool>;
}

/// 캐시 없는 단일 해석
pub fn resolve_role_name(
    name: &RoleName,
    prefixes: &PrefixList,
    probe: &dyn ModuleProbe,
) -> Result<ResolvedRole> {
    match name {
        RoleName::Qualified(full) => Ok(ResolvedRole::new(full.as_str())),
        RoleName::AppRelative(short) => {
            Ok(ResolvedRole::new(format!("{}{}", prefixes.app_prefix(), short)))
        }
        RoleName::Bare(short) => {
            let candidates = prefixes.candidates(short);
            for candidate in &candidates {
                trace!("Probing {}", candidate);
                if probe.try_load(candidate)? {
                    return Ok(ResolvedRole::new(candidate.as_str()));
                }
            }
            Err(Error::role_not_found(short.as_str(), candidates))
        }
    }
}

// ============================================================================
// NameResolver - 캐시 포함 해석기
// ============================================================================

/// Role 이름 해석기
///
/// 결과는 (원래 이름, prefix 목록) 단위로 캐시된다.
pub struct NameResolver {
    cache: RwLock<HashMap<(String, PrefixList), ResolvedRole>>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// 이름 하나 해석
    pub fn resolve(
        &self,
        raw: &str,
        prefixes: &PrefixList,
        probe: &dyn ModuleProbe,
    ) -> Result<ResolvedRole> {
        let key = (raw.to_string(), prefixes.clone());
        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(hit.clone());
        }

        let name = RoleName::parse(raw)?;
        let resolved = resolve_role_name(&name, prefixes, probe)?;
        debug!("Resolved action role {} -> {}", name, resolved);

        self.cache.write().insert(key, resolved.clone());
        Ok(resolved)
    }

    /// 이름 목록 해석 (순서 유지, 첫 에러에서 중단)
    pub fn expand_all<S: AsRef<str>>(
        &self,
        names: &[S],
        prefixes: &PrefixList,
        probe: &dyn ModuleProbe,
    ) -> Result<Vec<ResolvedRole>> {
        names
            .iter()
            .map(|n| self.resolve(n.as_ref(), prefixes, probe))
            .collect()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
