//! Low-level HTTP client: `PortalHttp`.
//!
//! One method per remote endpoint. Returns wire types; the domain sub-clients
//! wrap these into the create and trade flows. No request is ever retried:
//! every non-success status becomes the endpoint's own error variant carrying
//! the raw response body.

use crate::domain::relay::wire::{RelayRequest, RelayResponse};
use crate::domain::token::wire::{CreateTokenRequest, MetadataUploadResponse};
use crate::domain::trade::wire::TradeBuildRequest;
use crate::error::{PortalError, PortalResult};

use reqwest::multipart::Form;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Base URLs of the three services the pipeline talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Metadata storage (`/api/ipfs`).
    pub metadata_url: String,
    /// Transaction-build API (`/api/create/token/<platform>`, `/api/trading`).
    pub api_url: String,
    /// Block-engine relay (`/api/v1/transactions`).
    pub relay_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            metadata_url: crate::network::DEFAULT_METADATA_URL.to_string(),
            api_url: crate::network::DEFAULT_API_URL.to_string(),
            relay_url: crate::network::DEFAULT_RELAY_URL.to_string(),
        }
    }
}

/// Status and body of a completed HTTP exchange.
struct RawReply {
    status: u16,
    success: bool,
    body: String,
}

/// Low-level HTTP client for the metadata, build and relay endpoints.
#[derive(Clone)]
pub struct PortalHttp {
    endpoints: Endpoints,
    client: Client,
}

impl PortalHttp {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> PortalResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoints: Endpoints {
                metadata_url: endpoints.metadata_url.trim_end_matches('/').to_string(),
                api_url: endpoints.api_url.trim_end_matches('/').to_string(),
                relay_url: endpoints.relay_url.trim_end_matches('/').to_string(),
            },
            client,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Metadata ─────────────────────────────────────────────────────────

    /// `POST /api/ipfs` with the multipart metadata form.
    pub async fn upload_metadata(&self, form: Form) -> PortalResult<MetadataUploadResponse> {
        let url = format!("{}/api/ipfs", self.endpoints.metadata_url);
        tracing::debug!("POST {}", url);

        let resp = self.client.post(&url).multipart(form).send().await?;
        let reply = Self::read(resp).await?;
        if !reply.success {
            return Err(PortalError::Upload {
                status: reply.status,
                body: reply.body,
            });
        }

        serde_json::from_str(&reply.body).map_err(|e| {
            PortalError::Deserialize(format!(
                "unexpected metadata upload response ({}): {}",
                e, reply.body
            ))
        })
    }

    // ── Transaction build ────────────────────────────────────────────────

    /// `POST /api/create/token/<platform>`. Returns the base64 transaction.
    pub async fn build_create_transaction(
        &self,
        platform: &str,
        request: &CreateTokenRequest,
    ) -> PortalResult<String> {
        let url = format!("{}/api/create/token/{}", self.endpoints.api_url, platform);
        self.build(&url, request).await
    }

    /// `POST /api/trading`. Returns the base64 transaction.
    pub async fn build_trade_transaction(
        &self,
        request: &TradeBuildRequest,
    ) -> PortalResult<String> {
        let url = format!("{}/api/trading", self.endpoints.api_url);
        self.build(&url, request).await
    }

    // ── Relay ────────────────────────────────────────────────────────────

    /// `POST /api/v1/transactions` with a JSON-RPC `sendTransaction` envelope.
    ///
    /// A non-success status is a relay error regardless of the body. A
    /// success status still has to carry a `result` to count as accepted;
    /// that check lives in [`RelayResponse`].
    pub async fn send_transaction(&self, request: &RelayRequest) -> PortalResult<RelayResponse> {
        let url = format!("{}/api/v1/transactions", self.endpoints.relay_url);
        tracing::debug!("POST {}", url);

        let resp = self.client.post(&url).json(request).send().await?;
        let reply = Self::read(resp).await?;
        if !reply.success {
            return Err(PortalError::Relay {
                status: reply.status,
                body: reply.body,
            });
        }

        Ok(RelayResponse::parse(reply.status, &reply.body))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn build<B: Serialize>(&self, url: &str, body: &B) -> PortalResult<String> {
        tracing::debug!("POST {}", url);

        let resp = self.client.post(url).json(body).send().await?;
        let reply = Self::read(resp).await?;
        if !reply.success {
            return Err(PortalError::Build {
                status: reply.status,
                body: reply.body,
            });
        }

        Ok(reply.body.trim().to_string())
    }

    async fn read(resp: reqwest::Response) -> PortalResult<RawReply> {
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), len = body.len(), "Response received");

        Ok(RawReply {
            status: status.as_u16(),
            success: status.is_success(),
            body,
        })
    }
}
