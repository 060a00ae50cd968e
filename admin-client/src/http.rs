//! HTTP client for the dashboard REST API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, ErrorCode};
use shared::models::ImageUpload;

use crate::{ClientConfig, ClientError, ClientResult};

/// Query parameters of a GET request
pub type QueryParams = [(&'static str, String)];

/// HTTP client trait
///
/// Implemented by [`NetworkHttpClient`]; the entity APIs are generic over it
/// so tests can swap the transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartBody,
    ) -> ClientResult<T>;
    async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartBody,
    ) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
}

/// Transport-independent `multipart/form-data` body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, ImageUpload)>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a JSON-object payload into text fields.
    ///
    /// Nulls are skipped, strings are sent verbatim and everything else is
    /// sent as its JSON text.
    pub fn from_payload<P: Serialize>(payload: &P) -> ClientResult<Self> {
        let value = serde_json::to_value(payload)?;
        let serde_json::Value::Object(map) = value else {
            return Err(ClientError::Internal(
                "multipart payload must be a JSON object".to_string(),
            ));
        };

        let mut body = Self::new();
        for (name, value) in map {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => body.fields.push((name, s)),
                other => body.fields.push((name, other.to_string())),
            }
        }
        Ok(body)
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, upload: ImageUpload) -> Self {
        self.files.push((name.into(), upload));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn into_form(self) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, upload) in self.files {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.mime)?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Sending request");
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, %url, "Request failed");
            return Err(Self::error_from_body(status, text));
        }

        let body = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };

        match serde_json::from_str::<T>(body) {
            Ok(value) => Ok(value),
            // Some endpoints wrap their payload in the {code, message, data} envelope
            Err(direct) => match serde_json::from_str::<ApiResponse<T>>(body) {
                Ok(ApiResponse {
                    data: Some(data), ..
                }) => Ok(data),
                _ => Err(ClientError::InvalidResponse(direct.to_string())),
            },
        }
    }

    fn error_from_body(status: StatusCode, text: String) -> ClientError {
        if status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized;
        }

        // Structured {code, message} body
        if let Ok(body) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
            && let Some(raw) = body.code.filter(|c| *c != 0)
        {
            let code =
                ErrorCode::try_from(raw).unwrap_or_else(|_| ErrorCode::from_http_status(status));
            let message = if body.message.is_empty() {
                code.message().to_string()
            } else {
                body.message
            };
            return ClientError::Api { code, message };
        }

        match status {
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(text)
            }
            StatusCode::CONFLICT => ClientError::Conflict(text),
            _ => ClientError::Internal(format!("{}: {}", status, text)),
        }
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T> {
        let req = self.request(Method::GET, path).query(query);
        self.execute(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).json(body);
        self.execute(req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path);
        self.execute(req).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartBody,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).multipart(form.into_form()?);
        self.execute(req).await
    }

    async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartBody,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).multipart(form.into_form()?);
        self.execute(req).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
