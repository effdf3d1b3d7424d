pub mod alert;
pub mod catalog;
pub mod chain_dropdown;
pub mod notifications;
pub mod pagination;
pub mod transaction_history;
pub mod tx_entries;

pub use catalog::NotificationsSection;
pub use notifications::{use_notifications, NotificationsProvider};
pub use transaction_history::TransactionHistory;
