//! The per-request authenticated identity.

use crate::claims::Claims;

/// Identity established for exactly one request.
///
/// Built either by the gateway from verified claims (to write the outbound
/// trust headers) or by an interior service from inbound trust headers (to
/// install the request's security context). Never persisted; carried
/// through the handler chain in request extensions rather than any
/// process-global holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub username: String,
    pub authorities: Vec<String>,
}

impl AuthenticatedPrincipal {
    pub fn new(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            username: claims.sub.clone(),
            authorities: claims.roles.clone(),
        }
    }

    /// Check a single authority, e.g. `"ROLE_ADMIN"`.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_has_authority() {
        let principal = AuthenticatedPrincipal::new(
            "alice",
            vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()],
        );
        assert!(principal.has_authority("ROLE_USER"));
        assert!(principal.has_authority("ROLE_ADMIN"));
        assert!(!principal.has_authority("ROLE_SUPERVISOR"));
    }

    #[test]
    fn test_from_claims() {
        let claims = Claims::new("alice", vec!["ROLE_USER".to_string()], Utc::now(), 3600);
        let principal = AuthenticatedPrincipal::from_claims(&claims);
        assert_eq!(principal.username, "alice");
        assert_eq!(principal.authorities, vec!["ROLE_USER".to_string()]);
    }
}
