//! Tokens sub-client, driving the create flow: upload, build, sign, submit.

use reqwest::multipart::{Form, Part};

use crate::client::PortalClient;
use crate::domain::relay::client::Relay;
use crate::domain::relay::Submission;
use crate::domain::token::wire::{
    metadata_form_fields, CreateTokenRequest, MetadataUploadResponse,
};
use crate::domain::token::TokenLaunch;
use crate::error::PortalError;
use crate::transaction::sign_transaction;
use crate::wallet::Wallet;

/// Result of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub name: String,
    pub symbol: String,
    pub metadata_uri: String,
    pub submission: Submission,
}

impl std::fmt::Display for LaunchReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transaction successful! {}", self.submission.url)
    }
}

pub struct Tokens<'a> {
    pub(crate) client: &'a PortalClient,
}

impl<'a> Tokens<'a> {
    /// Upload the image and descriptor fields to metadata storage.
    pub async fn upload_metadata(
        &self,
        launch: &TokenLaunch,
    ) -> Result<MetadataUploadResponse, PortalError> {
        let image = &launch.image;
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)?;

        let mut form = Form::new().part("file", part);
        for (key, value) in metadata_form_fields(&launch.descriptor) {
            form = form.text(key, value);
        }

        tracing::info!(file = %image.file_name, "Uploading metadata to IPFS");
        let uploaded = self.client.http.upload_metadata(form).await?;
        tracing::info!(
            metadata_uri = %uploaded.metadata_uri,
            name = %uploaded.metadata.name,
            symbol = %uploaded.metadata.symbol,
            "Metadata uploaded"
        );
        Ok(uploaded)
    }

    /// Request the unsigned create transaction (base64).
    pub async fn build(
        &self,
        wallet: &Wallet,
        launch: &TokenLaunch,
        uploaded: &MetadataUploadResponse,
    ) -> Result<String, PortalError> {
        let request = CreateTokenRequest::new(wallet.address().clone(), &launch.descriptor, uploaded);
        tracing::debug!(payload = ?request, "Create-token payload");

        let unsigned = self
            .client
            .http
            .build_create_transaction(&self.client.platform, &request)
            .await?;
        tracing::info!("Received unsigned create transaction");
        Ok(unsigned)
    }

    /// Run the whole create flow with `wallet` as the creator and signer.
    pub async fn create(
        &self,
        wallet: &Wallet,
        launch: &TokenLaunch,
    ) -> Result<LaunchReceipt, PortalError> {
        let uploaded = self.upload_metadata(launch).await?;
        let unsigned = self.build(wallet, launch, &uploaded).await?;
        let signed = sign_transaction(&unsigned, wallet)?;
        let submission = Relay { client: self.client }.submit(signed).await?;

        Ok(LaunchReceipt {
            name: uploaded.metadata.name,
            symbol: uploaded.metadata.symbol,
            metadata_uri: uploaded.metadata_uri,
            submission,
        })
    }
}
