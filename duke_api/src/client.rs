//! HTTP client for the Duke demographic data API.

use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    config::Config,
    query::{CubeQuery, MeasureYearsQuery},
    session::{join_segments, parse_base_url, Session},
    types::{DemographicData, MeasureCategory, MeasureLevel, State},
    Error,
};

#[derive(Deserialize)]
struct LoginResponse {
    access_token: Option<String>,
}

/// Authenticated client for the Duke API.
///
/// Logs in once during [`Client::connect`] and reuses the resulting bearer
/// token for every call. There is no refresh path: when the token expires,
/// connect again.
#[derive(Clone)]
pub struct Client {
    session: Session,
}

impl Client {
    /// Logs in with the configured credentials and returns a ready client.
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        let http = build_http_client(config)?;
        let base_url = parse_base_url(&config.host)?;
        let token = login(&http, &base_url, &config.username, &config.password).await?;
        tracing::debug!("Authenticated against {}", base_url);
        Ok(Self {
            session: Session::new(http, base_url, token)?,
        })
    }

    /// Builds a client around a token obtained elsewhere, skipping the login call.
    pub fn with_token(config: &Config, token: &str) -> Result<Self, Error> {
        let http = build_http_client(config)?;
        let base_url = parse_base_url(&config.host)?;
        Ok(Self {
            session: Session::new(http, base_url, token.to_string())?,
        })
    }

    /// Bearer token this client sends.
    pub fn token(&self) -> &str {
        self.session.token()
    }

    /// Posts the credentials to `/auth/login` and returns the issued access token.
    ///
    /// The client keeps the token it was built with; storing the returned one
    /// is up to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, Error> {
        login(
            self.session.http(),
            self.session.base_url(),
            username,
            password,
        )
        .await
    }

    /// Lists the measure names available for a category and level.
    pub async fn list_measures(
        &self,
        category: MeasureCategory,
        level: MeasureLevel,
    ) -> Result<Vec<String>, Error> {
        let url = join_segments(
            self.session.base_url(),
            &["cube", "measures", category.as_str(), level.as_str()],
        )?;
        self.fetch(self.session.get(url)).await
    }

    /// Lists the years for which `measure` has data.
    pub async fn list_measure_years(
        &self,
        category: MeasureCategory,
        level: MeasureLevel,
        measure: &str,
    ) -> Result<Vec<String>, Error> {
        let query = MeasureYearsQuery::new(category, level, measure);
        let url = self.session.url_for(&query)?;
        self.fetch(self.session.get(url)).await
    }

    /// Lists the states the service holds data for.
    pub async fn list_states(&self) -> Result<Vec<State>, Error> {
        let url = join_segments(self.session.base_url(), &["cube", "states"])?;
        self.fetch(self.session.get(url)).await
    }

    /// Runs a cube query and returns the matching rows.
    pub async fn query(&self, query: &CubeQuery) -> Result<Vec<DemographicData>, Error> {
        let url = self.session.url_for(query)?;
        self.fetch(self.session.post(url).json(query)).await
    }

    async fn fetch<T>(&self, request: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Mapping(e.to_string())
        })
    }
}

fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })
}

async fn login(
    http: &reqwest::Client,
    base_url: &Url,
    username: &str,
    password: &str,
) -> Result<String, Error> {
    let url = join_segments(base_url, &["auth", "login"])?;
    tracing::debug!("POST {}", url.path());

    let resp = http
        .post(url)
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send login request: {}", e);
            Error::Authentication(format!("login request failed: {}", e))
        })?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read login response: {}", e);
        Error::Authentication(format!("unreadable login response: {}", e))
    })?;

    if !status.is_success() {
        tracing::error!("Login failed with status {}", status);
        return Err(Error::Authentication(format!(
            "login returned status {}",
            status.as_u16()
        )));
    }

    let parsed = serde_json::from_str::<LoginResponse>(&body).map_err(|e| {
        tracing::error!("Failed to parse login response: {}", e);
        Error::Authentication("login response is not valid JSON".to_string())
    })?;

    parsed.access_token.ok_or_else(|| {
        tracing::error!("Login response did not include an access token");
        Error::Authentication("Invalid token".to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
