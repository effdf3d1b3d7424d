use serde::{Deserialize, Serialize};

use crate::chains::RenChain;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Mint,
    #[serde(other)]
    Release,
}

/// Progress of a bridge transaction. Only `Completed` is terminal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    #[default]
    Created,
    Confirming,
    Submitted,
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub source_chain: RenChain,
    pub dest_chain: RenChain,
    #[serde(default)]
    pub source_asset: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: TxStatus,
    #[serde(default)]
    pub timestamp: String,
}

impl BridgeTransaction {
    pub fn is_completed(&self) -> bool {
        self.status == TxStatus::Completed
    }

    pub fn touches_chain(&self, chain: RenChain) -> bool {
        self.source_chain == chain || self.dest_chain == chain
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WalletSession {
    pub connected: bool,
    pub authenticated: bool,
    #[serde(default)]
    pub account: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetTransactionsArgs {
    pub account: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConnectWalletArgs {
    pub chain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum NotificationVariant {
    #[default]
    Info,
    Error,
    Warning,
    Success,
    SpecialInfo,
}

impl NotificationVariant {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationVariant::Error => "toast-error",
            NotificationVariant::Success => "toast-success",
            NotificationVariant::Warning => "toast-warning",
            NotificationVariant::Info => "toast-info",
            NotificationVariant::SpecialInfo => "toast-special-info",
        }
    }
    pub fn icon_mask(&self) -> &'static str {
        match self {
            NotificationVariant::Error => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23f87171' stroke-width='2'%3E%3Ccircle cx='12' cy='12' r='10'%3E%3C/circle%3E%3Cline x1='15' y1='9' x2='9' y2='15'%3E%3C/line%3E%3Cline x1='9' y1='9' x2='15' y2='15'%3E%3C/line%3E%3C/svg%3E",
            NotificationVariant::Success => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%232dd4bf' stroke-width='2'%3E%3Cpolyline points='20 6 9 17 4 12'%3E%3C/polyline%3E%3C/svg%3E",
            NotificationVariant::Warning => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23fbbf24' stroke-width='2'%3E%3Cpath d='M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z'%3E%3C/path%3E%3C/svg%3E",
            NotificationVariant::Info | NotificationVariant::SpecialInfo => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%236b7280' stroke-width='2'%3E%3Ccircle cx='12' cy='12' r='10'%3E%3C/circle%3E%3Cpath d='M12 16v-4m0-4h.01'%3E%3C/path%3E%3C/svg%3E",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Vertical {
    Top,
    #[default]
    Bottom,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Horizontal {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AnchorOrigin {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl AnchorOrigin {
    pub fn class(&self) -> String {
        let v = match self.vertical {
            Vertical::Top => "top",
            Vertical::Bottom => "bottom",
        };
        let h = match self.horizontal {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        };
        format!("toast-anchor-{}-{}", v, h)
    }
}

/// How a snackbar is shown. `auto_hide_ms` of `None` uses the configured default.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NotificationOptions {
    pub variant: NotificationVariant,
    pub persist: bool,
    pub auto_hide_ms: Option<u32>,
    pub anchor: AnchorOrigin,
}

impl NotificationOptions {
    pub fn variant(variant: NotificationVariant) -> Self {
        Self { variant, ..Default::default() }
    }

    pub fn persistent(mut self) -> Self {
        self.persist = true;
        self
    }

    pub fn auto_hide(mut self, ms: u32) -> Self {
        self.auto_hide_ms = Some(ms);
        self
    }

    pub fn anchored(mut self, vertical: Vertical, horizontal: Horizontal) -> Self {
        self.anchor = AnchorOrigin { vertical, horizontal };
        self
    }
}
