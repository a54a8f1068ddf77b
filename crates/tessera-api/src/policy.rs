//! The role-based access policy: an explicit route table built at startup.
//!
//! Rules map path prefixes to an access requirement; the longest matching
//! prefix wins and unmatched paths fall back to the default rule. The
//! table is plain data and can be inspected or logged at startup.

use tessera_auth::AuthenticatedPrincipal;
use tessera_core::AuthError;

/// Access requirement for a group of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No identity required.
    Public,
    /// Any authenticated principal.
    Authenticated,
    /// Principal must hold the named authority.
    Authority(&'static str),
}

#[derive(Debug, Clone)]
pub struct PolicyRule {
    pub prefix: &'static str,
    pub access: Access,
}

/// Ordered route table. Immutable after startup; safe for concurrent reads.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<PolicyRule>,
    default_access: Access,
}

impl RoutePolicy {
    pub fn new(mut rules: Vec<PolicyRule>, default_access: Access) -> Self {
        // longest prefix first, so /api/v1/users beats /api
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.prefix.len()));
        Self {
            rules,
            default_access,
        }
    }

    /// The table this service ships with. Everything not named is
    /// authenticated-only.
    pub fn standard() -> Self {
        Self::new(
            vec![
                PolicyRule {
                    prefix: "/health",
                    access: Access::Public,
                },
                PolicyRule {
                    prefix: "/api-docs",
                    access: Access::Public,
                },
                PolicyRule {
                    prefix: "/api/v1/users",
                    access: Access::Authority("ROLE_ADMIN"),
                },
                PolicyRule {
                    prefix: "/api/v1/regions",
                    access: Access::Authenticated,
                },
            ],
            Access::Authenticated,
        )
    }

    pub fn required_access(&self, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| path.starts_with(rule.prefix))
            .map(|rule| &rule.access)
            .unwrap_or(&self.default_access)
    }

    /// Evaluate the table for one request.
    pub fn check(
        &self,
        path: &str,
        principal: Option<&AuthenticatedPrincipal>,
    ) -> Result<(), AuthError> {
        match self.required_access(path) {
            Access::Public => Ok(()),
            Access::Authenticated => match principal {
                Some(_) => Ok(()),
                None => Err(AuthError::Unauthenticated),
            },
            Access::Authority(authority) => {
                let principal = principal.ok_or(AuthError::Unauthenticated)?;
                if principal.has_authority(authority) {
                    Ok(())
                } else {
                    Err(AuthError::RoleInsufficient((*authority).to_string()))
                }
            }
        }
    }
}
