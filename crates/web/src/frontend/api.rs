//! HTTP bindings for the backend auth endpoints.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiClientError>;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_name: String,
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiClientError::Api(status, body))
    }
}

/// Exchange credentials for an access token.
pub async fn login(url: &str, request: &LoginRequest) -> ApiResult<LoginResponse> {
    let response = Request::post(url).json(request)?.send().await?;
    let response = ensure_success(response).await?;

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiClientError::Parse(e.to_string()))
}

/// End the server-side session.
pub async fn logout(url: &str, token: Option<&str>) -> ApiResult<()> {
    let response = with_bearer(Request::post(url), token).send().await?;
    ensure_success(response).await?;
    Ok(())
}
