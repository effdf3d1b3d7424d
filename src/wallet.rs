//! Wallet provider: connection state and the connect flow.

use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::chains::BridgeChain;
use crate::error::HistoryError;
use crate::models::{ConnectWalletArgs, ErrorResponse, WalletSession};
use crate::utils::safe_invoke;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WalletBackend {
    #[default]
    Tauri,
    Http { base_url: String },
}

pub trait WalletProvider {
    fn session(&self) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>>;

    /// Opens the provider's wallet picker for `chain` and returns the new session.
    fn connect(&self, chain: BridgeChain) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>>;
}

fn connection_error(e: HistoryError) -> HistoryError {
    match e {
        HistoryError::FetchFailure(reason) | HistoryError::Decode(reason) => HistoryError::WalletConnection(reason),
        other => other,
    }
}

fn log_session(session: &WalletSession) {
    info!(
        "Wallet session: connected={} authenticated={}",
        session.connected, session.authenticated
    );
}

/// Wallet managed by the Tauri host.
pub struct TauriWallet;

impl WalletProvider for TauriWallet {
    fn session(&self) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        async {
            let result = safe_invoke("get_wallet_session", JsValue::NULL).await?;
            let session = serde_wasm_bindgen::from_value::<WalletSession>(result)?;
            log_session(&session);
            Ok(session)
        }
        .boxed_local()
    }

    fn connect(&self, chain: BridgeChain) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        async move {
            let args = serde_wasm_bindgen::to_value(&ConnectWalletArgs { chain: chain.key().to_string() })?;
            let result = safe_invoke("connect_wallet", args).await.map_err(connection_error)?;
            if let Ok(error_response) = serde_wasm_bindgen::from_value::<ErrorResponse>(result.clone()) {
                error!("connect_wallet failed: {}", error_response.error);
                return Err(HistoryError::WalletConnection(error_response.error));
            }
            TauriWallet.session().await
        }
        .boxed_local()
    }
}

/// Wallet bridge served over HTTP, for hosting in a plain web page.
pub struct HttpWallet {
    base_url: String,
}

impl HttpWallet {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn session_url(&self) -> String {
        format!("{}/wallet/session", self.base_url)
    }

    pub fn connect_url(&self) -> String {
        format!("{}/wallet/connect", self.base_url)
    }
}

impl WalletProvider for HttpWallet {
    fn session(&self) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        let url = self.session_url();
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| HistoryError::HostUnavailable(e.to_string()))?;
            if !response.ok() {
                return Err(HistoryError::HostUnavailable(format!("{} returned {}", url, response.status())));
            }
            let session = response
                .json::<WalletSession>()
                .await
                .map_err(|e| HistoryError::Decode(e.to_string()))?;
            log_session(&session);
            Ok(session)
        }
        .boxed_local()
    }

    fn connect(&self, chain: BridgeChain) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        let url = self.connect_url();
        async move {
            let body = ConnectWalletArgs { chain: chain.key().to_string() };
            let response = Request::post(&url)
                .json(&body)
                .map_err(|e| HistoryError::WalletConnection(e.to_string()))?
                .send()
                .await
                .map_err(|e| HistoryError::WalletConnection(e.to_string()))?;
            if !response.ok() {
                let reason = match response.json::<ErrorResponse>().await {
                    Ok(body) => body.error,
                    Err(_) => format!("{} {}", response.status(), response.status_text()),
                };
                error!("POST {} failed: {}", url, reason);
                return Err(HistoryError::WalletConnection(reason));
            }
            let session = response
                .json::<WalletSession>()
                .await
                .map_err(|e| HistoryError::Decode(e.to_string()))?;
            log_session(&session);
            Ok(session)
        }
        .boxed_local()
    }
}

/// Shared provider reference usable as a component prop.
#[derive(Clone)]
pub struct WalletHandle(pub Rc<dyn WalletProvider>);

impl WalletHandle {
    pub fn from_backend(backend: &WalletBackend) -> Self {
        match backend {
            WalletBackend::Tauri => WalletHandle(Rc::new(TauriWallet)),
            WalletBackend::Http { base_url } => WalletHandle(Rc::new(HttpWallet::new(base_url.clone()))),
        }
    }

    pub fn session(&self) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        self.0.session()
    }

    pub fn connect(&self, chain: BridgeChain) -> LocalBoxFuture<'static, Result<WalletSession, HistoryError>> {
        self.0.connect(chain)
    }
}

impl PartialEq for WalletHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_wallet_urls() {
        let wallet = HttpWallet::new("https://bridge.example/api/");
        assert_eq!(wallet.session_url(), "https://bridge.example/api/wallet/session");
        assert_eq!(wallet.connect_url(), "https://bridge.example/api/wallet/connect");
    }

    #[test]
    fn test_connect_rejection_is_wallet_error() {
        let err = connection_error(HistoryError::FetchFailure("User rejected the request".to_string()));
        assert_eq!(err, HistoryError::WalletConnection("User rejected the request".to_string()));
    }

    #[test]
    fn test_missing_host_stays_host_unavailable() {
        let err = connection_error(HistoryError::HostUnavailable("Tauri not found".to_string()));
        assert_eq!(err, HistoryError::HostUnavailable("Tauri not found".to_string()));
    }

    #[test]
    fn test_wallet_backend_deserialize_http() {
        let backend: WalletBackend =
            serde_json::from_str(r#"{"kind":"http","base_url":"https://bridge.example"}"#).unwrap();
        assert_eq!(backend, WalletBackend::Http { base_url: "https://bridge.example".to_string() });
    }
}
