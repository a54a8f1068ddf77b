use std::env;

/// Path prefixes the gateway lets through without a token.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Clone, Debug)]
pub struct AllowlistConfig {
    pub public_paths: Vec<String>,
}

impl AllowlistConfig {
    pub fn from_env() -> Self {
        let public_paths = env::var("PUBLIC_PATHS")
            .unwrap_or_else(|_| "/api/v1/auth/authenticate,/api/v1/auth/register".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { public_paths }
    }

    /// Prefix match against the allowlist.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowlist() -> AllowlistConfig {
        AllowlistConfig {
            public_paths: vec![
                "/api/v1/auth/authenticate".to_string(),
                "/api/v1/auth/register".to_string(),
            ],
        }
    }

    #[test]
    fn test_exact_and_prefix_match() {
        let config = allowlist();
        assert!(config.is_public("/api/v1/auth/authenticate"));
        assert!(config.is_public("/api/v1/auth/register"));
        // prefix semantics: trailing segments still match
        assert!(config.is_public("/api/v1/auth/authenticate/extra"));
    }

    #[test]
    fn test_protected_paths_do_not_match() {
        let config = allowlist();
        assert!(!config.is_public("/api/v1/regions"));
        assert!(!config.is_public("/api/v1/auth"));
        assert!(!config.is_public("/"));
    }
}
