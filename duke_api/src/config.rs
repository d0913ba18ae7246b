//! Client configuration: credentials, host, and request timeout.

use std::fmt;
use std::time::Duration;

use crate::Error;

/// Environment variable holding the API username.
pub const USERNAME_VAR: &str = "DUKE_API_USERNAME";
/// Environment variable holding the API password.
pub const PASSWORD_VAR: &str = "DUKE_API_PASSWORD";
/// Environment variable overriding the API host.
pub const HOST_VAR: &str = "DUKE_API_HOST";

/// Host used when neither an explicit value nor `DUKE_API_HOST` is set.
pub const DEFAULT_HOST: &str = "https://sdoh-test.azurewebsites.net";

/// Request timeout applied to every call, including login.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to open an authenticated session.
///
/// Build one explicitly with [`Config::new`], or let [`Config::resolve`] fill
/// gaps from the environment. The client itself never reads the environment.
#[derive(Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub host: String,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Creates a configuration with explicit credentials and the default host.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolves each field as explicit value, then `lookup(VAR)`, then default.
    ///
    /// Empty strings are treated as absent. Username and password have no
    /// default, so a miss on both sources is a [`Error::Configuration`].
    pub fn resolve<F>(
        username: Option<String>,
        password: Option<String>,
        host: Option<String>,
        lookup: F,
    ) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: Option<String>, var: &str| {
            explicit
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(var).filter(|v| !v.is_empty()))
        };

        let username = pick(username, USERNAME_VAR);
        let password = pick(password, PASSWORD_VAR);
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            (None, _) => {
                return Err(Error::Configuration(format!(
                    "username is required (pass it explicitly or set {})",
                    USERNAME_VAR
                )))
            }
            (_, None) => {
                return Err(Error::Configuration(format!(
                    "password is required (pass it explicitly or set {})",
                    PASSWORD_VAR
                )))
            }
        };
        let host = pick(host, HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            username,
            password,
            host,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Resolves the configuration purely from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::resolve(None, None, None, |var| std::env::var(var).ok())
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn missing_everything_is_configuration_error() {
        let err = Config::resolve(None, None, None, env(&[])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn missing_password_is_configuration_error() {
        let err = Config::resolve(Some("alice".into()), None, None, env(&[])).unwrap_err();
        match err {
            Error::Configuration(msg) => assert!(msg.contains(PASSWORD_VAR)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_values_count_as_missing() {
        let result = Config::resolve(
            Some(String::new()),
            Some("secret".into()),
            None,
            env(&[(USERNAME_VAR, "")]),
        );
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn falls_back_to_environment() {
        let config = Config::resolve(
            None,
            None,
            None,
            env(&[(USERNAME_VAR, "env-user"), (PASSWORD_VAR, "env-pass")]),
        )
        .unwrap();
        assert_eq!(config.username, "env-user");
        assert_eq!(config.password, "env-pass");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_values_win_over_environment() {
        let config = Config::resolve(
            Some("arg-user".into()),
            Some("arg-pass".into()),
            Some("http://localhost:8000".into()),
            env(&[
                (USERNAME_VAR, "env-user"),
                (PASSWORD_VAR, "env-pass"),
                (HOST_VAR, "https://example.com"),
            ]),
        )
        .unwrap();
        assert_eq!(config.username, "arg-user");
        assert_eq!(config.password, "arg-pass");
        assert_eq!(config.host, "http://localhost:8000");
    }

    #[test]
    fn host_comes_from_environment_when_not_explicit() {
        let config = Config::resolve(
            Some("u".into()),
            Some("p".into()),
            None,
            env(&[(HOST_VAR, "https://example.com")]),
        )
        .unwrap();
        assert_eq!(config.host, "https://example.com");
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Config::new("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = Config::new("u", "p")
            .with_host("http://127.0.0.1:9000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.host, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
