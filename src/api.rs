//! HTTP seam between the pages and the catalog backend
//!
//! Pages depend on the [`CatalogApi`] trait; [`HttpCatalogApi`] is the
//! reqwest implementation. Responses are returned as raw envelopes so each
//! page can apply its own notion of success and fallback.

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::models::{ApiEnvelope, ContactPayload, HouseType, Layout, SocialMediaLink};
use async_trait::async_trait;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Which slice of saved layouts the gallery shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutScope {
    #[default]
    Public,
    All,
}

impl LayoutScope {
    pub fn path(&self) -> &'static str {
        match self {
            LayoutScope::Public => "/api/layouts/public",
            LayoutScope::All => "/api/layouts",
        }
    }
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn submit_contact(&self, payload: &ContactPayload) -> Result<ApiEnvelope<Value>>;

    async fn list_layouts(&self, scope: LayoutScope) -> Result<ApiEnvelope<Vec<Layout>>>;

    async fn delete_layout(&self, id: i64) -> Result<ApiEnvelope<Value>>;

    async fn toggle_layout_public(&self, id: i64) -> Result<ApiEnvelope<Value>>;

    async fn active_social_links(&self) -> Result<ApiEnvelope<Vec<SocialMediaLink>>>;

    async fn house_types(&self, include_inactive: bool) -> Result<ApiEnvelope<Vec<HouseType>>>;

    async fn house_type(&self, id: i64) -> Result<ApiEnvelope<HouseType>>;

    async fn house_types_by_category(&self, category: &str)
        -> Result<ApiEnvelope<Vec<HouseType>>>;
}

#[derive(Clone, Debug)]
pub struct HttpCatalogApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogApi {
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StorefrontError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: crate::config::normalize_base_url(&config.api_base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and parses the body as an envelope.
    ///
    /// The backend reports failures inside the body, often alongside a 4xx
    /// or 5xx code, so the status code alone never decides the outcome.
    /// Like [`Self::send`] for list routes, decoding rows one at a time
    async fn send_list<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<ApiEnvelope<Vec<T>>> {
        let raw: ApiEnvelope<Vec<Value>> = self.send(request, what).await?;
        let (envelope, skipped) = raw.decode_rows();
        if skipped > 0 {
            warn!("[Api] {} skipped {} malformed rows", what, skipped);
        }
        Ok(envelope)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, what: &str) -> Result<ApiEnvelope<T>> {
        let response = request.send().await.map_err(|e| {
            error!("[Api] {} failed: {}", what, e);
            StorefrontError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("[Api] {} body unreadable: {}", what, e);
            StorefrontError::Transport(e.to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("[Api] {} returned unparsable body (HTTP {}): {}", what, status, e);
            StorefrontError::Parse(format!("HTTP {}: {}", status, e))
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn submit_contact(&self, payload: &ContactPayload) -> Result<ApiEnvelope<Value>> {
        info!("[Api] Submitting contact message: {}", payload.subject);
        let request = self.client.post(self.url("/api/contact")).json(payload);
        self.send(request, "submit contact").await
    }

    async fn list_layouts(&self, scope: LayoutScope) -> Result<ApiEnvelope<Vec<Layout>>> {
        let request = self.client.get(self.url(scope.path()));
        self.send_list(request, "list layouts").await
    }

    async fn delete_layout(&self, id: i64) -> Result<ApiEnvelope<Value>> {
        let request = self.client.delete(self.url(&format!("/api/layouts/{}", id)));
        self.send(request, "delete layout").await
    }

    async fn toggle_layout_public(&self, id: i64) -> Result<ApiEnvelope<Value>> {
        let request = self
            .client
            .put(self.url(&format!("/api/layouts/{}/toggle-public", id)));
        self.send(request, "toggle layout visibility").await
    }

    async fn active_social_links(&self) -> Result<ApiEnvelope<Vec<SocialMediaLink>>> {
        let request = self.client.get(self.url("/api/social-media/active"));
        self.send_list(request, "list social media").await
    }

    async fn house_types(&self, include_inactive: bool) -> Result<ApiEnvelope<Vec<HouseType>>> {
        let path = if include_inactive {
            "/api/house-types?include_inactive=true"
        } else {
            "/api/house-types"
        };
        let request = self.client.get(self.url(path));
        self.send_list(request, "list house types").await
    }

    async fn house_type(&self, id: i64) -> Result<ApiEnvelope<HouseType>> {
        let request = self.client.get(self.url(&format!("/api/house-types/{}", id)));
        self.send(request, "get house type").await
    }

    async fn house_types_by_category(
        &self,
        category: &str,
    ) -> Result<ApiEnvelope<Vec<HouseType>>> {
        let path = format!(
            "/api/house-types/category/{}",
            urlencoding::encode(category)
        );
        let request = self.client.get(self.url(&path));
        self.send_list(request, "list house types by category").await
    }
}
