//! Authenticated request context shared by every data call.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::{query::Query, Error};

/// Base URL, pooled HTTP client and the fixed header set sent on every call.
///
/// Built once after login and never mutated afterwards.
#[derive(Clone)]
pub(crate) struct Session {
    http: reqwest::Client,
    base_url: Url,
    headers: HeaderMap,
    token: String,
}

impl Session {
    pub(crate) fn new(http: reqwest::Client, base_url: Url, token: String) -> Result<Self, Error> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            tracing::error!("Access token is not a valid header value: {}", e);
            Error::Authentication("access token contains invalid characters".to_string())
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, bearer);

        Ok(Self {
            http,
            base_url,
            headers,
            token,
        })
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a query's path and parameters against the base URL.
    pub(crate) fn url_for(&self, query: &impl Query) -> Result<Url, Error> {
        let url = join_segments(&self.base_url, &query.path_segments())?;
        Ok(query.add_to_url(&url))
    }

    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        tracing::debug!("GET {}", url.path());
        self.http.get(url).headers(self.headers.clone())
    }

    pub(crate) fn post(&self, url: Url) -> reqwest::RequestBuilder {
        tracing::debug!("POST {}", url.path());
        self.http.post(url).headers(self.headers.clone())
    }
}

/// Appends `segments` to `base`, percent-encoding each one as a single segment.
pub(crate) fn join_segments<S: AsRef<str>>(base: &Url, segments: &[S]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            tracing::error!("Base URL cannot carry a path: {}", base);
            Error::Configuration(format!("host {} cannot be used as a base URL", base))
        })?
        .pop_if_empty()
        .extend(segments.iter().map(|s| s.as_ref()));
    Ok(url)
}

/// Parses a configured host into a base URL.
pub(crate) fn parse_base_url(host: &str) -> Result<Url, Error> {
    Url::parse(host).map_err(|e| {
        tracing::error!("Invalid host {}: {}", host, e);
        Error::Configuration(format!("invalid host {}: {}", host, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_onto_bare_host() {
        let base = parse_base_url("https://example.com").unwrap();
        let url = join_segments(&base, &["cube", "states"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/cube/states");
    }

    #[test]
    fn joins_onto_host_with_path_and_trailing_slash() {
        let base = parse_base_url("https://example.com/api/").unwrap();
        let url = join_segments(&base, &["auth", "login"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/auth/login");
    }

    #[test]
    fn segment_with_slash_stays_one_segment() {
        let base = parse_base_url("https://example.com").unwrap();
        let url = join_segments(&base, &["cube", "a/b"]).unwrap();
        assert_eq!(url.path(), "/cube/a%2Fb");
    }

    #[test]
    fn rejects_unparsable_host() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_cannot_be_a_base_host() {
        let base = parse_base_url("mailto:someone@example.com").unwrap();
        assert!(matches!(
            join_segments(&base, &["cube"]),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn session_headers_carry_bearer_token() {
        let base = parse_base_url("https://example.com").unwrap();
        let session = Session::new(reqwest::Client::new(), base, "abc".to_string()).unwrap();
        assert_eq!(session.token(), "abc");
        assert_eq!(session.headers[AUTHORIZATION], "Bearer abc");
        assert_eq!(session.headers[CONTENT_TYPE], "application/json");
        assert!(session.headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let base = parse_base_url("https://example.com").unwrap();
        let result = Session::new(reqwest::Client::new(), base, "abc\ndef".to_string());
        assert!(matches!(result, Err(Error::Authentication(_))));
    }
}
