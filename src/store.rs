//! Read access to the transaction store.

use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, info};

use crate::config::StoreBackend;
use crate::error::HistoryError;
use crate::models::{BridgeTransaction, ErrorResponse, GetTransactionsArgs};
use crate::utils::safe_invoke;

pub trait TransactionStore {
    /// All known transactions for `account`, most recent first.
    fn fetch_transactions(&self, account: &str) -> LocalBoxFuture<'static, Result<Vec<BridgeTransaction>, HistoryError>>;
}

/// Store behind a command of the Tauri host.
pub struct TauriStore {
    command: String,
}

impl TauriStore {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

impl TransactionStore for TauriStore {
    fn fetch_transactions(&self, account: &str) -> LocalBoxFuture<'static, Result<Vec<BridgeTransaction>, HistoryError>> {
        let command = self.command.clone();
        let account = account.to_string();
        async move {
            debug!("Invoking {} for {}", command, account);
            let args = serde_wasm_bindgen::to_value(&GetTransactionsArgs { account })?;
            let result = safe_invoke(&command, args).await?;
            if let Ok(error_response) = serde_wasm_bindgen::from_value::<ErrorResponse>(result.clone()) {
                return Err(HistoryError::FetchFailure(error_response.error));
            }
            let txs = serde_wasm_bindgen::from_value::<Vec<BridgeTransaction>>(result)?;
            info!("{} returned {} transactions", command, txs.len());
            Ok(txs)
        }
        .boxed_local()
    }
}

/// Store served over HTTP as JSON.
pub struct HttpStore {
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, account: &str) -> String {
        format!("{}/accounts/{}/transactions", self.base_url, account)
    }
}

impl TransactionStore for HttpStore {
    fn fetch_transactions(&self, account: &str) -> LocalBoxFuture<'static, Result<Vec<BridgeTransaction>, HistoryError>> {
        let url = self.url_for(account);
        async move {
            debug!("GET {}", url);
            let response = Request::get(&url).send().await?;
            if !response.ok() {
                return Err(HistoryError::FetchFailure(format!(
                    "{} returned {} {}",
                    url,
                    response.status(),
                    response.status_text()
                )));
            }
            let txs = response
                .json::<Vec<BridgeTransaction>>()
                .await
                .map_err(|e| HistoryError::Decode(e.to_string()))?;
            info!("{} returned {} transactions", url, txs.len());
            Ok(txs)
        }
        .boxed_local()
    }
}

/// Shared store reference usable as a component prop.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn TransactionStore>);

impl StoreHandle {
    pub fn from_backend(backend: &StoreBackend) -> Self {
        match backend {
            StoreBackend::Tauri { command } => StoreHandle(Rc::new(TauriStore::new(command.clone()))),
            StoreBackend::Http { base_url } => StoreHandle(Rc::new(HttpStore::new(base_url.clone()))),
        }
    }

    pub fn fetch_transactions(&self, account: &str) -> LocalBoxFuture<'static, Result<Vec<BridgeTransaction>, HistoryError>> {
        self.0.fetch_transactions(account)
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_store_url() {
        let store = HttpStore::new("https://bridge.example/api/");
        assert_eq!(
            store.url_for("0xabc"),
            "https://bridge.example/api/accounts/0xabc/transactions"
        );
    }

    #[test]
    fn test_store_handle_compares_by_pointer() {
        let a = StoreHandle::from_backend(&StoreBackend::default());
        let b = a.clone();
        let c = StoreHandle::from_backend(&StoreBackend::default());
        assert!(a == b);
        assert!(a != c);
    }
}
