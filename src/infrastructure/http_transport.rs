// HTTP transport implementation backed by reqwest
use crate::application::transport::{ApiRequest, HttpMethod, Transport};
use crate::domain::error::RouteResult;
use crate::infrastructure::config::ApiSettings;
use crate::infrastructure::error_mapper::{body_decode_error, request_error, status_errors};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, LOCATION, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::{Response, Url};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(base_url, access_token, client))
    }

    /// The client should not follow redirects itself, `perform` handles them
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
            client,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(user_agent) = &settings.user_agent {
            headers.insert(
                USER_AGENT,
                user_agent.parse::<HeaderValue>().context("Invalid user agent")?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(Policy::none())
            .timeout(settings.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(
            settings.base_url.clone(),
            settings.access_token.clone(),
            client,
        ))
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

impl HttpTransport {
    async fn send(&self, request: &ApiRequest, url: &str, authorize: bool) -> RouteResult<Response> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(ACCEPT, "application/json");
        // a redirect target already carries whatever query it needs
        if !request.query.is_empty() && !url.contains('?') {
            builder = builder.query(&request.query);
        }
        if authorize {
            if let Some(token) = &self.access_token {
                builder = builder.bearer_auth(token);
            }
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!("{} {}", request.method, url);
        builder.send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", request.method, url, e);
            request_error(e)
        })
    }

    /// Target of a redirect response, resolved against the URL that produced it
    fn redirect_target(response: &Response) -> Option<Url> {
        let location = response.headers().get(LOCATION)?.to_str().ok()?;
        response.url().join(location).ok()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: ApiRequest) -> RouteResult<Value> {
        let url = self.build_url(&request.path);
        let mut response = self.send(&request, &url, true).await?;

        // Follow a single redirect. Credentials only go to the same origin
        // unless the request asks for them to be carried over.
        if response.status().is_redirection() {
            if let Some(target) = Self::redirect_target(&response) {
                let authorize = request.authorize_redirect
                    || response.url().origin() == target.origin();
                tracing::debug!("{} redirected to {}", url, target);
                response = self.send(&request, target.as_str(), authorize).await?;
            }
        }

        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(request_error)?;
        tracing::debug!("{} {} -> {}", request.method, final_url, status);

        if !status.is_success() {
            tracing::warn!("{} {} returned {}: {}", request.method, final_url, status, body);
            return Err(status_errors(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(body_decode_error)
    }
}
