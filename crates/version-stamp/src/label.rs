use std::fmt;

/// Build-numbering variable consulted when nothing else is configured.
pub const DEFAULT_ENV_VAR: &str = "GITHUB_RUN_NUMBER";
/// Identifier used for local builds where no CI run number exists.
pub const DEFAULT_FALLBACK: &str = "dev";
pub const LABEL_PREFIX: &str = "v";

/// A version label of the form `v<identifier>`.
///
/// The identifier is kept exactly as it was obtained. Nothing is trimmed,
/// validated or escaped, so whatever the CI exports ends up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLabel {
    identifier: String,
}

impl VersionLabel {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Resolves the identifier through `lookup`, using `fallback` when the
    /// variable is unset. A variable that is set but empty is passed through.
    pub fn resolve<F>(lookup: F, env_var: &str, fallback: &str) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(env_var) {
            Some(identifier) => Self::new(identifier),
            None => Self::new(fallback),
        }
    }

    pub fn from_env(env_var: &str, fallback: &str) -> Self {
        Self::resolve(
            |name| std::env::var_os(name).map(|value| value.to_string_lossy().into_owned()),
            env_var,
            fallback,
        )
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LABEL_PREFIX}{}", self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::VersionLabel;

    #[test]
    fn falls_back_when_variable_is_unset() {
        let label = VersionLabel::resolve(|_| None, "BUILD_NUMBER", "dev");
        assert_eq!(label.identifier(), "dev");
        assert_eq!(label.to_string(), "vdev");
    }

    #[test]
    fn passes_identifier_through_untouched() {
        for raw in ["42", " 7 ", "1.2.3-rc1", "a\"b", ""] {
            let label = VersionLabel::resolve(|_| Some(raw.to_string()), "BUILD_NUMBER", "dev");
            assert_eq!(label.to_string(), format!("v{raw}"));
        }
    }

    #[test]
    fn looks_up_the_requested_variable() {
        let label = VersionLabel::resolve(
            |name| match name {
                "CI_PIPELINE_IID" => Some("118".to_string()),
                _ => None,
            },
            "CI_PIPELINE_IID",
            "dev",
        );
        assert_eq!(label.to_string(), "v118");
    }
}
