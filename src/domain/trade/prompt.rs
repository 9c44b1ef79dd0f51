//! Interactive trade collection as an explicit state machine.
//!
//! ```text
//! AwaitingAction → AwaitingMint → AwaitingAmount → AwaitingSlippage → AwaitingTip → Complete
//! ```
//!
//! Each answer is validated before the transition. A rejected answer ends the
//! whole collection; there is no re-prompting and nothing is sent anywhere.

use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{parse_amount, parse_mint, parse_tip, TradeRequest};
use crate::error::{PortalError, PortalResult};
use crate::shared::{Slippage, TradeAction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TradePrompt {
    #[default]
    AwaitingAction,
    AwaitingMint {
        action: TradeAction,
    },
    AwaitingAmount {
        action: TradeAction,
        mint: String,
    },
    AwaitingSlippage {
        action: TradeAction,
        mint: String,
        amount: Decimal,
    },
    AwaitingTip {
        action: TradeAction,
        mint: String,
        amount: Decimal,
        slippage: Slippage,
    },
    Complete(TradeRequest),
}

impl TradePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Question for the current state, `None` once complete.
    pub fn question(&self) -> Option<&'static str> {
        match self {
            Self::AwaitingAction => Some("Do you want to buy or sell? (buy/sell): "),
            Self::AwaitingMint { action } => Some(match action {
                TradeAction::Buy => "Enter MINT CA of the token you want to buy: ",
                TradeAction::Sell => "Enter MINT CA of the token you want to sell: ",
            }),
            Self::AwaitingAmount { action, .. } => Some(match action {
                TradeAction::Buy => "Enter amount in SOL to spend: ",
                TradeAction::Sell => "Enter amount in tokens to sell: ",
            }),
            Self::AwaitingSlippage { .. } => Some("Provide slippage tolerance (1-100): "),
            Self::AwaitingTip { .. } => Some("Enter Jito TIP amount (e.g. 0.0001): "),
            Self::Complete(_) => None,
        }
    }

    /// Validate `answer` and move to the next state.
    pub fn advance(self, answer: &str) -> PortalResult<Self> {
        match self {
            Self::AwaitingAction => Ok(Self::AwaitingMint {
                action: answer.parse()?,
            }),
            Self::AwaitingMint { action } => Ok(Self::AwaitingAmount {
                action,
                mint: parse_mint(answer)?,
            }),
            Self::AwaitingAmount { action, mint } => Ok(Self::AwaitingSlippage {
                action,
                mint,
                amount: parse_amount(answer)?,
            }),
            Self::AwaitingSlippage {
                action,
                mint,
                amount,
            } => Ok(Self::AwaitingTip {
                action,
                mint,
                amount,
                slippage: answer.parse()?,
            }),
            Self::AwaitingTip {
                action,
                mint,
                amount,
                slippage,
            } => Ok(Self::Complete(TradeRequest {
                action,
                mint,
                amount,
                slippage,
                tip: parse_tip(answer)?,
            })),
            Self::Complete(_) => Err(PortalError::Validation(
                "Trade is already complete".to_string(),
            )),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn into_request(self) -> Option<TradeRequest> {
        match self {
            Self::Complete(request) => Some(request),
            _ => None,
        }
    }
}

/// Drive the state machine over a line-oriented reader, writing each question
/// to `writer` and awaiting one answer at a time.
pub async fn collect_trade<R, W>(reader: &mut R, writer: &mut W) -> PortalResult<TradeRequest>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = TradePrompt::new();

    loop {
        let question = match &state {
            TradePrompt::Complete(_) => break,
            other => other.question().unwrap_or_default(),
        };
        writer.write_all(question.as_bytes()).await?;
        writer.flush().await?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(PortalError::Validation(
                "Input closed before the trade was complete.".to_string(),
            ));
        }
        state = state.advance(&line)?;
    }

    state
        .into_request()
        .ok_or_else(|| PortalError::Validation("Trade is incomplete".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::str::FromStr;
    use std::task::{Context, Poll};

    struct ClosedOutput;

    impl AsyncWrite for ClosedOutput {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[test]
    fn test_transitions_in_order() {
        let s = TradePrompt::new();
        assert_eq!(s.question(), Some("Do you want to buy or sell? (buy/sell): "));

        let s = s.advance("Sell").unwrap();
        assert_eq!(s, TradePrompt::AwaitingMint { action: TradeAction::Sell });
        assert_eq!(s.question(), Some("Enter MINT CA of the token you want to sell: "));

        let s = s.advance(" Mint111 \n").unwrap();
        assert_eq!(s.question(), Some("Enter amount in tokens to sell: "));

        let s = s.advance("1000").unwrap();
        let s = s.advance("25").unwrap();
        assert!(!s.is_complete());

        let s = s.advance("0.002").unwrap();
        assert!(s.is_complete());
        assert_eq!(s.question(), None);

        let req = s.into_request().unwrap();
        assert_eq!(req.action, TradeAction::Sell);
        assert_eq!(req.mint, "Mint111");
        assert_eq!(req.amount, Decimal::from(1000));
        assert_eq!(req.slippage.percent(), 25);
        assert_eq!(req.tip, Decimal::from_str("0.002").unwrap());
    }

    #[test]
    fn test_invalid_answers_abort() {
        assert!(TradePrompt::new().advance("hold").is_err());

        let at_amount = TradePrompt::AwaitingAmount {
            action: TradeAction::Buy,
            mint: "m".to_string(),
        };
        assert!(at_amount.clone().advance("abc").is_err());

        let at_slippage = at_amount.advance("0.5").unwrap();
        assert!(at_slippage.clone().advance("0").is_err());
        assert!(at_slippage.clone().advance("101").is_err());

        let at_tip = at_slippage.advance("10").unwrap();
        assert!(at_tip.clone().advance("0").is_err());
        assert!(at_tip.advance("-0.0001").is_err());
    }

    #[test]
    fn test_complete_cannot_advance() {
        let req = TradeRequest::new(
            TradeAction::Buy,
            "m",
            Decimal::ONE,
            Slippage::new(1).unwrap(),
            Decimal::ONE,
        )
        .unwrap();
        assert!(TradePrompt::Complete(req).advance("again").is_err());
    }

    #[tokio::test]
    async fn test_collect_trade_from_reader() {
        let mut input: &[u8] = b"buy\nABC111\n0.5\n10\n0.0001\n";
        let mut output = Vec::new();

        let req = collect_trade(&mut input, &mut output).await.unwrap();
        assert_eq!(req.action, TradeAction::Buy);
        assert_eq!(req.mint, "ABC111");
        assert_eq!(req.amount, Decimal::from_str("0.5").unwrap());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Enter amount in SOL to spend: "));
        assert!(transcript.ends_with("Enter Jito TIP amount (e.g. 0.0001): "));
    }

    #[tokio::test]
    async fn test_collect_trade_stops_at_first_bad_answer() {
        let mut input: &[u8] = b"buy\nABC111\n0.5\n500\n0.0001\n";
        let mut output = Vec::new();

        let err = collect_trade(&mut input, &mut output).await.unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        // The tip question is never asked.
        assert!(!String::from_utf8(output).unwrap().contains("TIP"));
    }

    #[tokio::test]
    async fn test_collect_trade_eof() {
        let mut input: &[u8] = b"sell\n";
        let mut output = Vec::new();
        assert!(collect_trade(&mut input, &mut output).await.is_err());
    }

    #[tokio::test]
    async fn test_terminal_failure_is_io_error() {
        let mut input: &[u8] = b"buy\n";
        let err = collect_trade(&mut input, &mut ClosedOutput).await.unwrap_err();
        assert!(matches!(err, PortalError::Io(_)));
    }
}
