//! API connection
//!
//! Turns a method, a resource path, query pairs and a body into an HTTP
//! request against the configured server, and turns the response into a
//! typed result. Requests are built and sent in two steps so paths, queries
//! and headers can be inspected without a network.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Request, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tms_core::{Error, Result, Server};
use url::Url;

const JSON: &str = "application/json";
const ANY: &str = "*/*";

/// Body of an outgoing request
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    /// Pre-serialized JSON
    Json(Vec<u8>),
    Multipart(Form),
}

impl RequestBody {
    /// Serialize a value as a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }
}

/// Connection to one translation-management server
#[derive(Debug, Clone)]
pub struct ApiConnection {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiConnection {
    /// Create a connection from a server profile
    pub fn new(server: &Server) -> Result<Self> {
        let timeouts = server.timeout_config();
        let http = Client::builder()
            .danger_accept_invalid_certs(server.insecure)
            .connect_timeout(Duration::from_millis(timeouts.connect_ms))
            .timeout(Duration::from_millis(timeouts.read_ms))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Self::with_client(http, &server.endpoint, server.token.clone())
    }

    /// Create a connection around an existing reqwest client
    pub fn with_client(http: Client, endpoint: &str, token: Option<String>) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(endpoint)?,
            token,
        })
    }

    /// Base URL, always ending with a slash
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path against the base URL
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Build a JSON request without sending it
    pub fn build(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<Request> {
        self.build_with_accept(method, path, query, body, JSON)
    }

    fn build_with_accept(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
        accept: &str,
    ) -> Result<Request> {
        let url = self.url(path)?;
        let mut builder = self.http.request(method, url).header(ACCEPT, accept);

        if !query.is_empty() {
            builder = builder.query(query);
        }

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.header(CONTENT_TYPE, JSON).body(bytes),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        builder
            .build()
            .map_err(|e| Error::General(format!("Failed to build request: {e}")))
    }

    /// Send a built request and reject non-success statuses
    pub async fn execute(&self, request: Request) -> Result<Response> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| Error::Network(format!("Request failed: {e}")))?;

        check_response(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
        accept: &str,
    ) -> Result<Response> {
        let request = self.build_with_accept(method, path, query, body, accept)?;
        self.execute(request).await
    }

    // ==================== Typed helpers ====================

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let response = self
            .send(Method::GET, path, query, RequestBody::Empty, JSON)
            .await?;
        read_json(response).await
    }

    /// GET a JSON document while asking the server for another representation
    pub async fn get_json_as<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        accept: &str,
    ) -> Result<T> {
        let response = self
            .send(Method::GET, path, query, RequestBody::Empty, accept)
            .await?;
        read_json(response).await
    }

    /// GET a JSON array; an empty body yields an empty list
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get_json(path, query).await?;
        Ok(items.unwrap_or_default())
    }

    /// GET a text body
    pub async fn get_text(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let response = self
            .send(Method::GET, path, query, RequestBody::Empty, ANY)
            .await?;
        read_text(response).await
    }

    /// GET a binary body
    pub async fn get_bytes(&self, path: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self
            .send(Method::GET, path, query, RequestBody::Empty, ANY)
            .await?;
        read_bytes(response).await
    }

    /// POST and decode a JSON response
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<T> {
        let response = self.send(Method::POST, path, query, body, JSON).await?;
        read_json(response).await
    }

    /// POST and return the response text
    pub async fn post_text(
        &self,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<String> {
        let response = self.send(Method::POST, path, query, body, ANY).await?;
        read_text(response).await
    }

    /// POST and return the binary response
    pub async fn post_bytes(
        &self,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<Vec<u8>> {
        let response = self.send(Method::POST, path, query, body, ANY).await?;
        read_bytes(response).await
    }

    /// POST a multipart form and return the response text
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<String> {
        self.post_text(path, &[], RequestBody::Multipart(form)).await
    }

    /// POST a new resource and return its id
    ///
    /// The id is the last segment of the `Location` header, or of the
    /// response text when the server sends no header.
    pub async fn post_created(&self, path: &str, body: RequestBody) -> Result<String> {
        let response = self.send(Method::POST, path, &[], body, ANY).await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let source = match location {
            Some(location) => location,
            None => read_text(response).await?,
        };

        let id = last_segment(&source);
        if id.is_empty() {
            return Err(Error::General(format!(
                "Server did not return an id for the created resource at {path}"
            )));
        }
        Ok(id)
    }

    /// PUT and return the response text
    pub async fn put_text(
        &self,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<String> {
        let response = self.send(Method::PUT, path, query, body, ANY).await?;
        read_text(response).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<()> {
        self.send(Method::DELETE, path, query, RequestBody::Empty, ANY)
            .await?;
        Ok(())
    }
}

/// Parse an endpoint so that relative paths join below it
fn parse_base_url(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Reject non-success responses with a typed error
pub async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::warn!(status = status.as_u16(), %url, "server rejected request");

    Err(map_error(status, message))
}

/// Map HTTP status codes to errors
pub fn map_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authorization {
            status: status.as_u16(),
            message,
        },
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}

async fn read_text(response: Response) -> Result<String> {
    response
        .text()
        .await
        .map_err(|e| Error::Network(format!("Failed to read response: {e}")))
}

async fn read_bytes(response: Response) -> Result<Vec<u8>> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Network(format!("Failed to read response: {e}")))?;
    Ok(bytes.to_vec())
}

/// Decode a JSON body; an empty body decodes as `null`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = read_text(response).await?;
    if text.trim().is_empty() {
        serde_json::from_str("null").map_err(Error::Json)
    } else {
        serde_json::from_str(&text).map_err(Error::Json)
    }
}

/// Last non-empty path segment of a URI or quoted id
fn last_segment(value: &str) -> String {
    value
        .trim()
        .trim_matches('"')
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
