use crate::error::HistoryError;
use crate::history::feed::FeedStatus;

/// What the history dialog shows. Derived on every render, never stored.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewMode {
    Disconnected,
    Loading,
    Failed(HistoryError),
    Empty,
    Populated,
}

pub fn select_view_mode(wallet_connected: bool, status: &FeedStatus, count: usize) -> ViewMode {
    if !wallet_connected {
        return ViewMode::Disconnected;
    }
    match status {
        FeedStatus::Pending => ViewMode::Loading,
        FeedStatus::Failed(e) => ViewMode::Failed(e.clone()),
        FeedStatus::Loaded if count == 0 => ViewMode::Empty,
        FeedStatus::Loaded => ViewMode::Populated,
    }
}

impl ViewMode {
    /// Empty and populated lists both get the pagination control.
    pub fn shows_list(&self) -> bool {
        matches!(self, ViewMode::Empty | ViewMode::Populated)
    }
}
