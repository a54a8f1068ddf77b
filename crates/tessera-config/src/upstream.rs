use std::env;

/// Interior services the gateway forwards to, selected by path prefix.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub auth_service_url: String,
    pub ticket_api_url: String,
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        Self {
            auth_service_url: env::var("AUTH_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            ticket_api_url: env::var("TICKET_API_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
        }
    }

    /// Base URL of the service responsible for `path`.
    pub fn upstream_for(&self, path: &str) -> &str {
        if path.starts_with("/api/v1/auth") {
            &self.auth_service_url
        } else {
            &self.ticket_api_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_by_prefix() {
        let config = UpstreamConfig {
            auth_service_url: "http://issuer:8081".to_string(),
            ticket_api_url: "http://api:8082".to_string(),
        };
        assert_eq!(
            config.upstream_for("/api/v1/auth/authenticate"),
            "http://issuer:8081"
        );
        assert_eq!(config.upstream_for("/api/v1/regions"), "http://api:8082");
        assert_eq!(config.upstream_for("/health"), "http://api:8082");
    }
}
