// config/mod.rs — runtime configuration, built once at startup.

pub const DEFAULT_PORT: u16 = 3002;

const DEFAULT_LOG_FILTER: &str = "info";

/// Static credential pair for HTTP Basic Authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Daemon configuration, shared read-only through `AppContext`.
#[derive(Debug, Clone)]
pub struct TaskdConfig {
    /// HTTP listen port (`PORT`, default 3002).
    pub port: u16,
    /// Basic auth credentials for all routes. `None` disables auth.
    pub auth: Option<BasicAuth>,
    /// tracing EnvFilter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl TaskdConfig {
    /// Apply defaults to whatever the CLI/environment provided. Auth is
    /// enabled only when both halves of the credential pair are set.
    pub fn new(
        port: Option<u16>,
        auth_user: Option<String>,
        auth_pass: Option<String>,
        log: Option<String>,
    ) -> Self {
        let auth = match (auth_user, auth_pass) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            _ => None,
        };
        Self {
            port: port.unwrap_or(DEFAULT_PORT),
            auth,
            log_filter: log.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_provided() {
        let config = TaskdConfig::new(None, None, None, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.auth.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn auth_requires_both_credential_halves() {
        let config = TaskdConfig::new(None, Some("admin".into()), None, None);
        assert!(config.auth.is_none());

        let config = TaskdConfig::new(None, Some("admin".into()), Some("secret".into()), None);
        let auth = config.auth.expect("auth should be enabled");
        assert_eq!(auth.username, "admin");
        assert_eq!(auth.password, "secret");
    }

    #[test]
    fn explicit_port_overrides_default() {
        let config = TaskdConfig::new(Some(8080), None, None, None);
        assert_eq!(config.port, 8080);
    }
}
