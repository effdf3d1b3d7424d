use gloo::storage::{LocalStorage, Storage};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::chains::BridgeChain;
use crate::history::PAGE_SIZE;
use crate::wallet::WalletBackend;

pub const CONFIG_KEY: &str = "bridge-history.config";
pub const PREFERENCES_KEY: &str = "bridge-history.preferences";
pub const DEFAULT_AUTO_HIDE_MS: u32 = 8_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreBackend {
    Tauri { command: String },
    Http { base_url: String },
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::Tauri {
            command: "get_transactions".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub page_size: usize,
    pub default_chain: BridgeChain,
    pub notification_auto_hide_ms: u32,
    pub store: StoreBackend,
    pub wallet: WalletBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            default_chain: BridgeChain::default(),
            notification_auto_hide_ms: DEFAULT_AUTO_HIDE_MS,
            store: StoreBackend::default(),
            wallet: WalletBackend::default(),
        }
    }
}

impl AppConfig {
    /// Reads the config from local storage, falling back to defaults.
    pub fn load() -> Self {
        match LocalStorage::get::<serde_json::Value>(CONFIG_KEY) {
            Ok(raw) => Self::from_value(raw),
            Err(e) => {
                debug!("No stored config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn from_value(raw: serde_json::Value) -> Self {
        match serde_json::from_value::<AppConfig>(raw) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                warn!("Ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            warn!("page_size must be positive, using {}", PAGE_SIZE);
            self.page_size = PAGE_SIZE;
        }
        self
    }
}

/// Choices the user makes in the dialog that survive a reload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Preferences {
    pub chain: Option<BridgeChain>,
}

impl Preferences {
    pub fn load() -> Self {
        LocalStorage::get(PREFERENCES_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        match LocalStorage::set(PREFERENCES_KEY, self) {
            Ok(()) => info!("Saved preferences: {:?}", self),
            Err(e) => warn!("Failed to save preferences: {}", e),
        }
    }

    pub fn chain_or(&self, config: &AppConfig) -> BridgeChain {
        self.chain.unwrap_or(config.default_chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== AppConfig defaults ====================

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.default_chain, BridgeChain::Ethc);
        assert_eq!(config.notification_auto_hide_ms, 8_000);
        assert_eq!(
            config.store,
            StoreBackend::Tauri { command: "get_transactions".to_string() }
        );
    }

    // ==================== from_value tests ====================

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_value(json!({ "default_chain": "bscc" }));
        assert_eq!(config.default_chain, BridgeChain::Bscc);
        assert_eq!(config.page_size, PAGE_SIZE);
    }

    #[test]
    fn test_http_backend() {
        let config = AppConfig::from_value(json!({
            "store": { "kind": "http", "base_url": "https://bridge.example" }
        }));
        assert_eq!(
            config.store,
            StoreBackend::Http { base_url: "https://bridge.example".to_string() }
        );
    }

    #[test]
    fn test_plain_web_page_config() {
        let config = AppConfig::from_value(json!({
            "store": { "kind": "http", "base_url": "https://bridge.example" },
            "wallet": { "kind": "http", "base_url": "https://bridge.example" }
        }));
        assert_eq!(
            config.wallet,
            WalletBackend::Http { base_url: "https://bridge.example".to_string() }
        );
    }

    #[test]
    fn test_wallet_defaults_to_tauri() {
        assert_eq!(AppConfig::default().wallet, WalletBackend::Tauri);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = AppConfig::from_value(json!({ "page_size": "four" }));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_replaced() {
        let config = AppConfig::from_value(json!({ "page_size": 0 }));
        assert_eq!(config.page_size, PAGE_SIZE);
    }

    // ==================== Preferences tests ====================

    #[test]
    fn test_preferences_chain_or_default() {
        let config = AppConfig::default();
        assert_eq!(Preferences::default().chain_or(&config), BridgeChain::Ethc);
        let prefs = Preferences { chain: Some(BridgeChain::Bscc) };
        assert_eq!(prefs.chain_or(&config), BridgeChain::Bscc);
    }
}
