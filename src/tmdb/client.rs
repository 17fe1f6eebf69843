use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::{build_auth_header, ApiConfig, CredentialStatus, SecureString};
use crate::tmdb::error::FetchError;
use crate::tmdb::model::SearchResultPage;

/// Anything that can answer a paged movie search.
///
/// Implementations perform exactly one request per call and never retry.
pub trait SearchClient: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchResultPage, FetchError>> + Send;
}

/// HTTP client for the TMDB `search/movie` endpoint.
pub struct TmdbClient {
    client: Client,
    endpoint: Url,
    token: Option<SecureString>,
}

impl TmdbClient {
    /// Build a client from API settings, resolving the bearer token once.
    pub fn new(api: &ApiConfig) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&api.search_url)?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()));
        if api.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(api.timeout_seconds.into()));
        }
        let client = builder.build()?;

        let token = match api.resolve_credential() {
            CredentialStatus::Configured(token) => Some(token),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(%reason, "No API token configured, requests will be rejected");
                None
            }
        };

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("page", &page.to_string());
        url
    }
}

impl SearchClient for TmdbClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
        let url = self.request_url(query, page);
        let mut builder = self.client.get(url);

        if let Some((name, value)) = build_auth_header(self.token.as_ref()) {
            builder = builder.header(name, value);
        }

        tracing::debug!(query = %query, page, "Searching movies");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Search request failed");
            FetchError::network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Search endpoint returned an error");
            return Err(FetchError::http(status.as_u16(), &body));
        }

        let body = response.bytes().await.map_err(FetchError::network)?;
        let page: SearchResultPage = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode search response");
            FetchError::decode(e)
        })?;

        tracing::debug!(
            page = page.page_number,
            results = page.items.len(),
            total_pages = page.total_pages,
            "Search response received"
        );

        Ok(page)
    }
}
