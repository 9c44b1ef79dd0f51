//! Relay sub-client: one-shot submission of a signed transaction.

use crate::client::PortalClient;
use crate::domain::relay::{RelayRequest, Submission};
use crate::error::PortalError;
use crate::transaction::SignedTransaction;

pub struct Relay<'a> {
    pub(crate) client: &'a PortalClient,
}

impl<'a> Relay<'a> {
    /// Submit once. Takes the transaction by value so it cannot be resent
    /// from the same handle.
    pub async fn submit(&self, signed: SignedTransaction) -> Result<Submission, PortalError> {
        tracing::info!(signature = %signed.signature, "Sending signed transaction to relay");

        let request = RelayRequest::send_transaction(&signed.encoded);
        let signature = self
            .client
            .http
            .send_transaction(&request)
            .await?
            .into_signature()?;

        if signature != signed.signature.to_string() {
            tracing::warn!(
                expected = %signed.signature,
                returned = %signature,
                "Relay returned a different signature than the one signed"
            );
        }

        Ok(Submission::new(signature, &self.client.explorer_url))
    }
}
