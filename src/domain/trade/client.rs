//! Trades sub-client, driving the trade flow: build, sign, submit.

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::client::PortalClient;
use crate::domain::relay::client::Relay;
use crate::domain::relay::Submission;
use crate::domain::trade::wire::TradeBuildRequest;
use crate::domain::trade::{collect_trade, TradeRequest};
use crate::error::PortalError;
use crate::transaction::sign_transaction;
use crate::wallet::Wallet;

/// Result of a successful trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeReceipt {
    pub request: TradeRequest,
    pub submission: Submission,
}

impl std::fmt::Display for TradeReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transaction to {} {} for {} successful: {}",
            self.request.action, self.request.mint, self.request.amount, self.submission.url
        )
    }
}

pub struct Trades<'a> {
    pub(crate) client: &'a PortalClient,
}

impl<'a> Trades<'a> {
    /// Request the unsigned trade transaction (base64).
    pub async fn build(
        &self,
        wallet: &Wallet,
        request: &TradeRequest,
    ) -> Result<String, PortalError> {
        let body = TradeBuildRequest::new(wallet.address().clone(), &self.client.dex, request);
        tracing::info!(
            action = %request.action,
            mint = %request.mint,
            amount = %request.amount,
            slippage = request.slippage.percent(),
            tip = %request.tip,
            "Requesting trade transaction"
        );

        self.client.http.build_trade_transaction(&body).await
    }

    /// Run the whole trade flow with `wallet` as trader and signer.
    pub async fn execute(
        &self,
        wallet: &Wallet,
        request: &TradeRequest,
    ) -> Result<TradeReceipt, PortalError> {
        let unsigned = self.build(wallet, request).await?;
        let signed = sign_transaction(&unsigned, wallet)?;
        let submission = Relay { client: self.client }.submit(signed).await?;

        Ok(TradeReceipt {
            request: request.clone(),
            submission,
        })
    }

    /// Prompt for the trade on `reader`/`writer`, then execute it and write the
    /// receipt line. Nothing is sent unless every answer is valid.
    pub async fn collect_and_execute<R, W>(
        &self,
        wallet: &Wallet,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<TradeReceipt, PortalError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let request = collect_trade(reader, writer).await?;
        let receipt = self.execute(wallet, &request).await?;

        writer.write_all(format!("{}\n", receipt).as_bytes()).await?;
        writer.flush().await?;
        Ok(receipt)
    }
}
