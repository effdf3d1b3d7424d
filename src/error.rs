use thiserror::Error;

/// Failures surfaced by the transaction feed.
///
/// Errors never escape the feed as panics; they end up in
/// [`crate::history::ViewMode::Failed`] so the dialog can show them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Failed to fetch transactions: {0}")]
    FetchFailure(String),
    #[error("Unsupported chain selection: {0}")]
    InvalidChainSelection(String),
    #[error("Malformed store response: {0}")]
    Decode(String),
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),
    #[error("Wallet connection failed: {0}")]
    WalletConnection(String),
}

impl HistoryError {
    /// Short text for the dialog body.
    pub fn user_message(&self) -> String {
        match self {
            HistoryError::FetchFailure(_) | HistoryError::Decode(_) => {
                "Unable to load your transactions.".to_string()
            }
            HistoryError::InvalidChainSelection(chain) => {
                format!("\"{}\" is not a supported chain.", chain)
            }
            HistoryError::HostUnavailable(_) => {
                "The wallet host is not available.".to_string()
            }
            HistoryError::WalletConnection(reason) => {
                format!("Could not connect your wallet: {}", reason)
            }
        }
    }
}

impl From<serde_wasm_bindgen::Error> for HistoryError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        HistoryError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for HistoryError {
    fn from(e: gloo_net::Error) -> Self {
        HistoryError::FetchFailure(e.to_string())
    }
}
