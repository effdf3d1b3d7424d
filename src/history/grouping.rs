//! Splits the ordered transaction list into pages and places the
//! "Pending" / "Completed" group headers.

use std::fmt;
use std::ops::Range;

use crate::models::{BridgeTransaction, TxType};

pub const PAGE_SIZE: usize = 4;

/// Zero-based page over the ordered list. Not clamped to the list length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    pub fn start(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    pub fn end(&self) -> usize {
        self.start().saturating_add(self.size)
    }

    pub fn contains(&self, i: usize) -> bool {
        self.start() <= i && i < self.end()
    }

    /// Visible indices for a list of `len` entries.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.start().min(len);
        let end = self.end().min(len);
        start..end
    }

    /// The same page moved back to the last one that has entries.
    pub fn clamped(&self, total: usize) -> Self {
        let last = page_count(total, self.size).saturating_sub(1);
        Self::new(self.index.min(last), self.size)
    }
}

/// `ceil(total / size)`; zero for an empty list or a zero page size.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        total.div_ceil(size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn of(transactions: &[BridgeTransaction]) -> Self {
        let completed = transactions.iter().filter(|tx| tx.is_completed()).count();
        Self {
            pending: transactions.len() - completed,
            completed,
        }
    }

    pub fn header_for(&self, tx: &BridgeTransaction) -> GroupHeader {
        if tx.is_completed() {
            GroupHeader::Completed(self.completed)
        } else {
            GroupHeader::Pending(self.pending)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupHeader {
    Pending(usize),
    Completed(usize),
}

impl fmt::Display for GroupHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupHeader::Pending(n) => write!(f, "Pending ({})", n),
            GroupHeader::Completed(n) => write!(f, "Completed ({})", n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Mint,
    Release,
}

impl From<TxType> for EntryKind {
    fn from(tx_type: TxType) -> Self {
        match tx_type {
            TxType::Mint => EntryKind::Mint,
            TxType::Release => EntryKind::Release,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageRow<'a> {
    pub index: usize,
    pub header: Option<GroupHeader>,
    pub kind: EntryKind,
    pub is_active: bool,
    pub tx: &'a BridgeTransaction,
}

fn status_changes_at(transactions: &[BridgeTransaction], i: usize) -> bool {
    i > 0 && transactions[i].is_completed() != transactions[i - 1].is_completed()
}

/// Indices where a status run begins, independent of paging.
pub fn transition_headers(transactions: &[BridgeTransaction]) -> Vec<usize> {
    (0..transactions.len())
        .filter(|&i| i == 0 || status_changes_at(transactions, i))
        .collect()
}

/// Rows visible on `page`, each with its header (if any) and renderer kind.
pub fn layout_page<'a>(
    transactions: &'a [BridgeTransaction],
    page: Page,
    active_tx_id: Option<&str>,
) -> Vec<PageRow<'a>> {
    let counts = StatusCounts::of(transactions);
    let range = page.visible_range(transactions.len());
    let first = range.start;

    range
        .map(|i| {
            let tx = &transactions[i];
            let show_header = i == first || status_changes_at(transactions, i);
            PageRow {
                index: i,
                header: show_header.then(|| counts.header_for(tx)),
                kind: tx.tx_type.into(),
                is_active: active_tx_id == Some(tx.id.as_str()),
                tx,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::RenChain;
    use crate::models::TxStatus;

    fn tx(id: &str, tx_type: TxType, completed: bool) -> BridgeTransaction {
        BridgeTransaction {
            id: id.to_string(),
            tx_type,
            source_chain: RenChain::Bitcoin,
            dest_chain: RenChain::Ethereum,
            source_asset: "BTC".to_string(),
            amount: "0.1".to_string(),
            status: if completed { TxStatus::Completed } else { TxStatus::Confirming },
            timestamp: String::new(),
        }
    }

    fn statuses(pattern: &str) -> Vec<BridgeTransaction> {
        pattern
            .chars()
            .enumerate()
            .map(|(i, c)| tx(&format!("tx{}", i), TxType::Mint, c == 'c'))
            .collect()
    }

    // ==================== Page tests ====================

    #[test]
    fn test_visible_range_first_page() {
        assert_eq!(Page::new(0, PAGE_SIZE).visible_range(10), 0..4);
    }

    #[test]
    fn test_visible_range_partial_last_page() {
        assert_eq!(Page::new(2, 4).visible_range(10), 8..10);
    }

    #[test]
    fn test_visible_range_past_end_is_empty() {
        assert!(Page::new(5, 4).visible_range(10).is_empty());
    }

    #[test]
    fn test_visible_range_matches_definition_for_all_pages() {
        for len in 0..12 {
            for p in 0..5 {
                for s in 1..6 {
                    let page = Page::new(p, s);
                    let expected: Vec<usize> = (0..len).filter(|&i| p * s <= i && i < (p + 1) * s).collect();
                    let actual: Vec<usize> = page.visible_range(len).collect();
                    assert_eq!(actual, expected, "len={} page={} size={}", len, p, s);
                    assert!(actual.iter().all(|&i| page.contains(i)));
                }
            }
        }
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        assert!(Page::new(usize::MAX, 4).visible_range(3).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 4), 0);
        assert_eq!(page_count(4, 4), 1);
        assert_eq!(page_count(5, 4), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_clamped_moves_to_last_page() {
        assert_eq!(Page::new(9, 4).clamped(5), Page::new(1, 4));
        assert_eq!(Page::new(3, 4).clamped(0), Page::new(0, 4));
        assert_eq!(Page::new(1, 4).clamped(8), Page::new(1, 4));
    }

    // ==================== header tests ====================

    #[test]
    fn test_header_text() {
        assert_eq!(GroupHeader::Pending(2).to_string(), "Pending (2)");
        assert_eq!(GroupHeader::Completed(1).to_string(), "Completed (1)");
    }

    #[test]
    fn test_scenario_pending_pending_completed() {
        let list = vec![
            tx("A", TxType::Mint, false),
            tx("B", TxType::Release, false),
            tx("C", TxType::Mint, true),
        ];
        let rows = layout_page(&list, Page::new(0, PAGE_SIZE), None);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].header.map(|h| h.to_string()).as_deref(), Some("Pending (2)"));
        assert_eq!(rows[1].header, None);
        assert_eq!(rows[2].header.map(|h| h.to_string()).as_deref(), Some("Completed (1)"));
        assert_eq!(rows[0].kind, EntryKind::Mint);
        assert_eq!(rows[1].kind, EntryKind::Release);
    }

    #[test]
    fn test_completed_to_pending_transition_gets_header() {
        let list = statuses("cp");
        let rows = layout_page(&list, Page::new(0, 4), None);
        assert_eq!(rows[1].header, Some(GroupHeader::Pending(1)));
    }

    #[test]
    fn test_first_row_of_later_page_gets_header() {
        let list = statuses("pppppp");
        let rows = layout_page(&list, Page::new(1, 4), None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 4);
        assert_eq!(rows[0].header, Some(GroupHeader::Pending(6)));
        assert_eq!(rows[1].header, None);
    }

    #[test]
    fn test_transition_uses_global_previous_entry() {
        // index 4 is first on page 1 and also follows a pending entry
        let list = statuses("ppppcc");
        let rows = layout_page(&list, Page::new(1, 4), None);
        assert_eq!(rows[0].header, Some(GroupHeader::Completed(2)));
        assert_eq!(rows[1].header, None);
    }

    #[test]
    fn test_counts_span_entire_list() {
        let list = statuses("ppcppc");
        let rows = layout_page(&list, Page::new(1, 4), None);
        assert_eq!(rows[0].header, Some(GroupHeader::Pending(4)));
        assert_eq!(rows[1].header, Some(GroupHeader::Completed(2)));
    }

    #[test]
    fn test_empty_list_yields_no_rows() {
        assert!(layout_page(&[], Page::new(0, 4), None).is_empty());
        assert!(transition_headers(&[]).is_empty());
    }

    #[test]
    fn test_transition_header_count_is_one_plus_transitions() {
        for pattern in ["p", "c", "pc", "pppc", "cpcp", "ccppcc", "pcpcpcpc"] {
            let list = statuses(pattern);
            let transitions = pattern
                .as_bytes()
                .windows(2)
                .filter(|w| w[0] != w[1])
                .count();
            assert_eq!(transition_headers(&list).len(), 1 + transitions, "{}", pattern);
        }
    }

    #[test]
    fn test_transition_headers_independent_of_paging() {
        let list = statuses("ppcccpcpp");
        let expected = transition_headers(&list);
        for size in 1..6 {
            let total = page_count(list.len(), size);
            let mut transition_rows = Vec::new();
            for p in 0..total {
                for row in layout_page(&list, Page::new(p, size), None) {
                    if row.header.is_some() && (row.index == 0 || status_changes_at(&list, row.index)) {
                        transition_rows.push(row.index);
                    }
                }
            }
            assert_eq!(transition_rows, expected, "size={}", size);
        }
    }

    // ==================== active flag tests ====================

    #[test]
    fn test_active_flag_matches_tracked_id() {
        let list = vec![tx("a", TxType::Mint, false), tx("b", TxType::Release, true)];
        let rows = layout_page(&list, Page::new(0, 4), Some("b"));
        assert!(!rows[0].is_active);
        assert!(rows[1].is_active);
    }

    #[test]
    fn test_no_active_id_means_no_active_rows() {
        let list = statuses("pcp");
        assert!(layout_page(&list, Page::new(0, 4), None).iter().all(|r| !r.is_active));
    }
}
