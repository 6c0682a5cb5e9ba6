use std::env;

/// Which data source a domain read should hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Mock,
    Remote,
}

impl SourceMode {
    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }
}

/// Parses a tri-state mock preference.
///
/// An absent value means "unset", which is distinct from an explicit
/// "false". Callers may only fall through to the next precedence tier on
/// "unset". The literals `"false"` and `"0"` mean remote, any other present
/// value means mock.
pub fn parse_mock_flag(value: Option<&str>) -> Option<bool> {
    value.map(|value| !matches!(value, "false" | "0"))
}

/// The process-wide mock preference, captured from the environment once at
/// the boundary and threaded into every mode resolution.
#[derive(Debug, Clone, Default)]
pub struct MockPreference {
    pub primary: Option<String>,
    pub fallback: Option<String>,
}

impl MockPreference {
    pub fn from_env() -> Self {
        Self {
            primary: env::var("HUBZZ_USE_MOCK").ok(),
            fallback: env::var("HUBZZ_PUBLIC_USE_MOCK").ok(),
        }
    }

    fn resolve(&self) -> Option<bool> {
        parse_mock_flag(self.primary.as_deref())
            .or_else(|| parse_mock_flag(self.fallback.as_deref()))
    }
}

/// Resolves the active source for a single request.
///
/// Precedence, highest first: the per-request flag, the primary environment
/// preference, the fallback environment preference, then mock-on.
pub fn resolve_source(request_flag: Option<&str>, preference: &MockPreference) -> SourceMode {
    let use_mock = parse_mock_flag(request_flag)
        .or_else(|| preference.resolve())
        .unwrap_or(true);

    if use_mock {
        SourceMode::Mock
    } else {
        SourceMode::Remote
    }
}

#[cfg(test)]
mod test {
    use super::{parse_mock_flag, resolve_source, MockPreference, SourceMode};

    fn preference(primary: Option<&str>, fallback: Option<&str>) -> MockPreference {
        MockPreference {
            primary: primary.map(str::to_string),
            fallback: fallback.map(str::to_string),
        }
    }

    #[test]
    fn test_tri_state_parse() {
        assert_eq!(parse_mock_flag(None), None);
        assert_eq!(parse_mock_flag(Some("false")), Some(false));
        assert_eq!(parse_mock_flag(Some("0")), Some(false));
        assert_eq!(parse_mock_flag(Some("true")), Some(true));
        assert_eq!(parse_mock_flag(Some("1")), Some(true));
        assert_eq!(parse_mock_flag(Some("")), Some(true));
    }

    #[test]
    fn test_request_flag_wins() {
        let env = preference(Some("true"), None);

        assert_eq!(resolve_source(Some("false"), &env), SourceMode::Remote);
        assert_eq!(resolve_source(Some("0"), &env), SourceMode::Remote);
        assert_eq!(resolve_source(Some("yes"), &preference(Some("false"), None)), SourceMode::Mock);
    }

    #[test]
    fn test_environment_tiers() {
        assert_eq!(
            resolve_source(None, &preference(Some("false"), Some("true"))),
            SourceMode::Remote
        );
        assert_eq!(
            resolve_source(None, &preference(None, Some("false"))),
            SourceMode::Remote
        );
        assert_eq!(
            resolve_source(None, &preference(None, Some("1"))),
            SourceMode::Mock
        );
    }

    #[test]
    fn test_defaults_to_mock() {
        assert_eq!(resolve_source(None, &preference(None, None)), SourceMode::Mock);
    }
}
