//
//  cloudfoundry-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Cloud Foundry API
//!
//! This module provides the core HTTP client shared by every resource client.
//! It builds URLs against the API root, applies credentials, executes exactly
//! one request per call, and maps the response.
//!
//! ## Features
//!
//! - Path segments are percent-encoded individually
//! - Authentication header injection
//! - JSON, multipart and streaming bodies
//! - Non-2xx responses parsed into [`PlatformError`]
//! - Custom User-Agent header
//!
//! ## Concurrency
//!
//! [`CloudFoundryClient`] is cheap to clone and holds no mutable state; the
//! same instance may serve overlapping calls from many tasks. Dropping an
//! in-flight future cancels the underlying request.

use reqwest::multipart::Form;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{Download, PlatformError, Result};
use crate::api::v2::domains::DomainsClient;
use crate::api::v3::applications::ApplicationsClient;
use crate::api::v3::packages::PackagesClient;
use crate::auth::Credential;
use crate::config::Config;

/// Query string parameters, in the order they are added.
///
/// Unset values are skipped, so optional request fields can be passed
/// straight through.
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::client::Query;
///
/// let query = Query::new()
///     .param("page", Some(2))
///     .param("per_page", None::<i32>);
///
/// assert_eq!(query.pairs(), &[("page".to_string(), "2".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` when `value` is set.
    pub fn param<T: ToString>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Appends `key=value` unconditionally. Keys may repeat.
    pub fn push(mut self, key: &str, value: impl Into<String>) -> Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// The collected pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns `true` when no pair has been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The HTTP client for the Cloud Foundry Cloud Controller API.
///
/// Resource operations are reached through [`packages`](Self::packages),
/// [`applications`](Self::applications) and [`domains`](Self::domains).
///
/// # Example
///
/// ```rust,no_run
/// use cloudfoundry_client::api::CloudFoundryClient;
/// use cloudfoundry_client::api::v3::packages::{GetPackageRequest, Packages};
/// use cloudfoundry_client::auth::Credential;
///
/// # async fn example() -> cloudfoundry_client::api::common::Result<()> {
/// let client = CloudFoundryClient::new("https://api.example.com")?
///     .with_auth(Credential::bearer("access-token"));
///
/// let package = client
///     .packages()
///     .get(&GetPackageRequest { id: Some("package-guid".to_string()) })
///     .await?;
///
/// println!("{:?}", package.state);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudFoundryClient {
    /// The underlying HTTP client
    http: Client,
    /// The API root, e.g. `https://api.example.com`
    root: Url,
    /// Optional authentication credentials
    auth: Option<Credential>,
}

impl CloudFoundryClient {
    /// Creates a client for the API at `root`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if `root` is not an absolute URL or the
    /// HTTP client cannot be built.
    pub fn new(root: &str) -> Result<Self> {
        let http = http_builder().build()?;
        Self::with_http_client(root, http)
    }

    /// Creates a client that issues requests through `http`.
    ///
    /// Use this to configure timeouts, proxies or TLS on the transport.
    pub fn with_http_client(root: &str, http: Client) -> Result<Self> {
        Ok(Self {
            http,
            root: Url::parse(root)?,
            auth: None,
        })
    }

    /// Creates a client from the CLI configuration.
    ///
    /// Applies `skip_ssl_validation` to the transport and picks the bearer
    /// token, falling back to basic credentials when both username and
    /// password are configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = http_builder()
            .danger_accept_invalid_certs(config.skip_ssl_validation)
            .build()?;

        let client = Self::with_http_client(&config.api, http)?;

        Ok(match config.credential() {
            Some(credential) => client.with_auth(credential),
            None => client,
        })
    }

    /// Sets the authentication credentials for this client.
    pub fn with_auth(mut self, auth: Credential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// The API root this client targets.
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// The v3 Packages resource.
    pub fn packages(&self) -> PackagesClient {
        PackagesClient::new(self.clone())
    }

    /// The v3 Applications resource.
    pub fn applications(&self) -> ApplicationsClient {
        ApplicationsClient::new(self.clone())
    }

    /// The v2 Domains resource.
    pub fn domains(&self) -> DomainsClient {
        DomainsClient::new(self.clone())
    }

    /// Builds `root/segment/segment?query`.
    ///
    /// Each segment is percent-encoded on its own. Identifiers that `url`
    /// would collapse (empty, `.`, `..`) are rejected earlier by
    /// [`ValidationResult::require_id`](crate::api::common::ValidationResult::require_id).
    pub fn url(&self, segments: &[&str], query: &Query) -> Result<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        Ok(url)
    }

    /// Makes a GET request and deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(self.request(Method::GET, url)).await?;
        decode(response).await
    }

    /// Makes a POST request with an optional JSON body and deserializes the
    /// JSON response.
    pub async fn post<T, B>(&self, url: Url, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.execute(request).await?;
        decode(response).await
    }

    /// Makes a POST request with a multipart body and deserializes the JSON
    /// response.
    pub async fn post_multipart<T: DeserializeOwned>(&self, url: Url, form: Form) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, url).multipart(form))
            .await?;
        decode(response).await
    }

    /// Makes a DELETE request.
    ///
    /// Returns `None` for an empty body (`204 No Content`) and the decoded
    /// body otherwise (e.g. the job of an asynchronous delete).
    pub async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let response = self.execute(self.request(Method::DELETE, url)).await?;
        let body = response.bytes().await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Makes a GET request and hands back the body as a chunk stream.
    pub async fn get_stream(&self, url: Url) -> Result<Download> {
        let response = self.execute(self.request(Method::GET, url)).await?;
        Ok(Download::new(response))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);

        let request = self.http.request(method, url);
        match &self.auth {
            Some(auth) => auth.apply_to_request(request),
            None => request,
        }
    }

    /// Sends `request` and maps a non-2xx status to a platform error.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            let text = response.text().await?;
            let error = PlatformError::from_response(status.as_u16(), &text);
            tracing::warn!("request rejected: {}", error);
            return Err(error.into());
        }

        Ok(response)
    }
}

/// The transport settings every client starts from.
fn http_builder() -> ClientBuilder {
    Client::builder().user_agent(format!("cf-rs/{}", crate::VERSION))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
