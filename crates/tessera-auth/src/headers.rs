//! The trust headers crossing the gateway boundary.
//!
//! A request is trusted downstream of the gateway if and only if it
//! carries these two headers set by the gateway on the current hop. The
//! gateway overwrites any client-supplied values of the same names, and
//! interior services read them without cryptographic re-checking.

use crate::principal::AuthenticatedPrincipal;

/// Verified subject of the forwarded request.
pub const X_AUTHENTICATED_USER: &str = "x-authenticated-user";

/// Comma-joined authorities of the forwarded request, no spaces.
pub const X_AUTHENTICATED_ROLES: &str = "x-authenticated-roles";

/// Encode authorities for the roles header: comma-joined, no spaces.
pub fn join_roles(roles: &[String]) -> String {
    roles.join(",")
}

/// Decode the roles header: split on `,`, no further escaping. Empty
/// segments are dropped.
pub fn split_roles(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Rebuild the principal an interior service sees from the header values.
pub fn principal_from_headers(username: &str, roles: &str) -> AuthenticatedPrincipal {
    AuthenticatedPrincipal::new(username, split_roles(roles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_split_roundtrip() {
        let roles = vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()];
        let joined = join_roles(&roles);
        assert_eq!(joined, "ROLE_USER,ROLE_ADMIN");
        assert_eq!(split_roles(&joined), roles);
    }

    #[test]
    fn test_split_single_role() {
        assert_eq!(split_roles("ROLE_USER"), vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(split_roles(""), Vec::<String>::new());
        assert_eq!(split_roles("ROLE_USER,"), vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn test_principal_from_headers() {
        let principal = principal_from_headers("alice", "ROLE_USER,ROLE_ADMIN");
        assert_eq!(principal.username, "alice");
        assert!(principal.has_authority("ROLE_ADMIN"));
    }
}
