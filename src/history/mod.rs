pub mod feed;
pub mod grouping;
pub mod view_mode;

pub use feed::{filter_by_chain, FeedRequest, FeedStatus, FeedUpdate, FetchTicket, TransactionFeed};
pub use grouping::{layout_page, page_count, EntryKind, GroupHeader, Page, PageRow, StatusCounts, PAGE_SIZE};
pub use view_mode::{select_view_mode, ViewMode};
