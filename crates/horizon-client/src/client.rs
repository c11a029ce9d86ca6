//! Async HTTP client for the Horizon API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use horizon_resources::{Account, DecodeError, Effect, Operation, Transaction};

use crate::error::HorizonError;
use crate::page::{Page, PageEnvelope};
use crate::types::{HorizonConfig, ListParams};

/// HTTP client for a Horizon server.
///
/// Cloning is cheap and shares the underlying connection pool; clones
/// share no mutable state.
#[derive(Debug, Clone)]
pub struct HorizonClient {
    /// Client configuration.
    config: HorizonConfig,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl HorizonClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HorizonConfig) -> Self {
        let http = reqwest::Client::new();
        Self { config, http }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Resolve an endpoint path against the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Get an account by id.
    pub async fn account(&self, account_id: &str) -> Result<Account, HorizonError> {
        let url = self.endpoint(&format!("accounts/{account_id}"));
        self.get_json(&url).await
    }

    /// Get a transaction by hash.
    pub async fn transaction(&self, hash: &str) -> Result<Transaction, HorizonError> {
        let url = self.endpoint(&format!("transactions/{hash}"));
        self.get_json(&url).await
    }

    /// List transactions.
    pub async fn transactions(&self, params: &ListParams) -> Result<Page<Transaction>, HorizonError> {
        self.get_page(&self.list_url("transactions", params)).await
    }

    /// List operations.
    pub async fn operations(&self, params: &ListParams) -> Result<Page<Operation>, HorizonError> {
        self.get_page(&self.list_url("operations", params)).await
    }

    /// List payment-like operations.
    pub async fn payments(&self, params: &ListParams) -> Result<Page<Operation>, HorizonError> {
        self.get_page(&self.list_url("payments", params)).await
    }

    /// List effects.
    pub async fn effects(&self, params: &ListParams) -> Result<Page<Effect>, HorizonError> {
        self.get_page(&self.list_url("effects", params)).await
    }

    /// Perform a GET and decode the response body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HorizonError> {
        debug!(url, "horizon GET");
        let resp = self
            .http
            .get(url)
            .headers(self.headers())
            .send()
            .await?;
        Self::decode_response(resp).await
    }

    /// Fetch one page of a listed collection from an absolute URL.
    ///
    /// Used both for the initial list call and for following a page's
    /// stored navigation links verbatim.
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, HorizonError> {
        let envelope: PageEnvelope<T> = self.get_json(url).await?;
        Ok(Page::new(envelope, self.clone()))
    }

    /// POST a form body and return the raw status and bytes.
    ///
    /// Classification of non-success statuses is left to the caller;
    /// only transport failures error here.
    pub async fn post_form_raw(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<(u16, Vec<u8>), HorizonError> {
        debug!(url, "horizon POST");
        let resp = self
            .http
            .post(url)
            .headers(self.headers())
            .form(form)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok((status, body.to_vec()))
    }

    /// Open a long-lived GET whose body will be consumed as a stream.
    ///
    /// Non-success statuses are classified before the response is
    /// handed back.
    pub async fn get_stream(&self, url: &str) -> Result<reqwest::Response, HorizonError> {
        let mut headers = self.headers();
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        let resp = self.http.get(url).headers(headers).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(HorizonError::from_status(status.as_u16(), &body));
        }
        Ok(resp)
    }

    fn list_url(&self, path: &str, params: &ListParams) -> String {
        let mut url = self.endpoint(path);
        let query = params.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    async fn decode_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, HorizonError> {
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(HorizonError::from_status(status.as_u16(), &body));
        }
        serde_json::from_slice(&body)
            .map_err(|e| HorizonError::Decode(DecodeError::Malformed(e)))
    }

    /// Build common headers from config.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.config.auth_token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }
}
