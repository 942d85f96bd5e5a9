use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::{api::types::ApiError, config};

/// Bearer credentials handed to the client by whoever owns the session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn authorization_value(&self) -> Result<HeaderValue, ApiError> {
        format!("Bearer {}", self.token.trim())
            .parse()
            .map_err(|_| ApiError::unauthorized("Invalid token format"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    credentials: Option<Credentials>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            credentials: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| ApiError::unauthorized("No access token"))?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, credentials.authorization_value()?);
        Ok(headers)
    }

    /// Sends a request built by `build` with the bearer header attached.
    /// Fails before any network I/O when no credentials were injected.
    pub(crate) async fn send_authorized<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce() -> RequestBuilder,
    {
        let headers = self.auth_headers()?;
        build()
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(map_error_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(map_error_response(response).await)
    }
}

async fn map_error_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(error) => error.with_status_code(status),
        Err(_) => ApiError::http_status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_token() {
        let rendered = format!("{:?}", Credentials::bearer("secret-token"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn auth_headers_require_credentials() {
        let client = ApiClient::new_with_base_url("http://localhost/api");
        let err = client.auth_headers().expect_err("missing credentials");
        assert_eq!(err.code, "UNAUTHORIZED");

        let client = client.with_credentials(Credentials::bearer(" abc "));
        let headers = client.auth_headers().expect("headers");
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer abc")
        );
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        let client = ApiClient::new_with_base_url("http://localhost/api")
            .with_credentials(Credentials::bearer("bad\ntoken"));
        let err = client.auth_headers().expect_err("invalid header");
        assert_eq!(err.error, "Invalid token format");
    }
}
