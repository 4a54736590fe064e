//! Typed HTTP client for the Recruit Intake API.

use chrono::{DateTime, Utc};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use recruit_entity::recruit::{NewRecruit, Recruit, RecruitPatch};

use crate::error::{ClientError, ClientResult};

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub access_token: String,
    /// Token scheme.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /recruits`
    pub async fn submit(&self, recruit: &NewRecruit) -> ClientResult<Recruit> {
        let response = self.request(Method::POST, "/recruits", None).json(recruit).send().await?;
        parse(response).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<TokenResponse> {
        let response = self
            .request(Method::POST, "/auth/login", None)
            .json(&Credentials { email, password })
            .send()
            .await?;
        parse(response).await
    }

    /// `GET /recruits`
    pub async fn list(&self, token: &str) -> ClientResult<Vec<Recruit>> {
        let response = self.request(Method::GET, "/recruits", Some(token)).send().await?;
        parse(response).await
    }

    /// `GET /recruits/{id}`
    pub async fn get(&self, token: &str, id: i64) -> ClientResult<Recruit> {
        let path = format!("/recruits/{id}");
        let response = self.request(Method::GET, &path, Some(token)).send().await?;
        parse(response).await
    }

    /// `PATCH /recruits/{id}`
    pub async fn update(&self, token: &str, id: i64, patch: &RecruitPatch) -> ClientResult<Recruit> {
        let path = format!("/recruits/{id}");
        let response = self
            .request(Method::PATCH, &path, Some(token))
            .json(patch)
            .send()
            .await?;
        parse(response).await
    }

    /// `DELETE /recruits/{id}`
    pub async fn delete(&self, token: &str, id: i64) -> ClientResult<()> {
        let path = format!("/recruits/{id}");
        let response = self.request(Method::DELETE, &path, Some(token)).send().await?;
        check(response).await.map(|_| ())
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        let response = self.request(Method::GET, "/health", None).send().await?;
        parse(response).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "API request");
        let builder = self.http.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Turn a non-success status into `ClientError::Http`, reading the
/// `message` field of the error body when there is one.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.is_empty());
    Err(ClientError::Http {
        status: status.as_u16(),
        message,
    })
}

async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}
