//! Transaction feed for the active account and chain.
//!
//! Every request bumps an epoch. A response is only applied when it carries
//! the latest epoch, so a fetch for a chain the user already switched away
//! from can never overwrite the current list.

use std::rc::Rc;

use log::{debug, error, info};

use crate::chains::{to_canonical_chain, RenChain};
use crate::error::HistoryError;
use crate::models::BridgeTransaction;

#[derive(Clone, Debug, PartialEq)]
pub struct FeedRequest {
    pub account: String,
    pub chain: String,
    pub authenticated: bool,
}

/// Handed to the fetch task and returned with its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub account: String,
    pub chain: RenChain,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum FeedStatus {
    #[default]
    Pending,
    Loaded,
    Failed(HistoryError),
}

impl FeedStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FeedStatus::Pending)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedUpdate {
    Applied,
    Stale,
}

#[derive(Debug, Default)]
pub struct TransactionFeed {
    epoch: u64,
    status: FeedStatus,
    transactions: Rc<Vec<BridgeTransaction>>,
}

/// Keeps only the transactions that leave from or arrive on `chain`, in order.
pub fn filter_by_chain(transactions: &[BridgeTransaction], chain: RenChain) -> Vec<BridgeTransaction> {
    transactions
        .iter()
        .filter(|tx| tx.touches_chain(chain))
        .cloned()
        .collect()
}

impl TransactionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    pub fn transactions(&self) -> Rc<Vec<BridgeTransaction>> {
        Rc::clone(&self.transactions)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Starts a new request. Returns a ticket when a fetch should be issued.
    ///
    /// Any request, issued or not, invalidates tickets handed out before it.
    pub fn request(&mut self, request: &FeedRequest) -> Result<Option<FetchTicket>, HistoryError> {
        self.epoch += 1;

        if !request.authenticated {
            debug!("Feed waiting for authentication (epoch {})", self.epoch);
            self.status = FeedStatus::Pending;
            return Ok(None);
        }

        let chain = match to_canonical_chain(&request.chain) {
            Ok(chain) => chain,
            Err(e) => {
                error!("Rejecting feed request: {}", e);
                self.status = FeedStatus::Failed(e.clone());
                return Err(e);
            }
        };

        info!(
            "Fetching transactions for {} on {} (epoch {})",
            request.account, chain, self.epoch
        );
        self.status = FeedStatus::Pending;
        Ok(Some(FetchTicket {
            epoch: self.epoch,
            account: request.account.clone(),
            chain,
        }))
    }

    /// The wallet went away: back to pending and drop any in-flight fetch.
    pub fn disconnect(&mut self) {
        self.epoch += 1;
        debug!("Wallet disconnected, invalidating fetches before epoch {}", self.epoch);
        self.status = FeedStatus::Pending;
    }

    /// Applies a fetch result unless a newer request superseded it.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<BridgeTransaction>, HistoryError>,
    ) -> FeedUpdate {
        if ticket.epoch != self.epoch {
            debug!(
                "Discarding stale response for {} (epoch {}, current {})",
                ticket.chain, ticket.epoch, self.epoch
            );
            return FeedUpdate::Stale;
        }

        match result {
            Ok(all) => {
                let filtered = filter_by_chain(&all, ticket.chain);
                info!(
                    "Loaded {} of {} transactions for {}",
                    filtered.len(),
                    all.len(),
                    ticket.chain
                );
                self.transactions = Rc::new(filtered);
                self.status = FeedStatus::Loaded;
            }
            Err(e) => {
                error!("Transaction fetch failed for {}: {}", ticket.account, e);
                self.status = FeedStatus::Failed(e);
            }
        }
        FeedUpdate::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TxStatus, TxType};

    fn tx(id: &str, source: RenChain, dest: RenChain) -> BridgeTransaction {
        BridgeTransaction {
            id: id.to_string(),
            tx_type: TxType::Mint,
            source_chain: source,
            dest_chain: dest,
            source_asset: "BTC".to_string(),
            amount: "1".to_string(),
            status: TxStatus::Created,
            timestamp: String::new(),
        }
    }

    fn store_response() -> Vec<BridgeTransaction> {
        vec![
            tx("eth-mint", RenChain::Bitcoin, RenChain::Ethereum),
            tx("bsc-mint", RenChain::Bitcoin, RenChain::BinanceSmartChain),
            tx("eth-release", RenChain::Ethereum, RenChain::Zcash),
            tx("odd", RenChain::Unknown, RenChain::Dogecoin),
        ]
    }

    fn request(chain: &str) -> FeedRequest {
        FeedRequest {
            account: "0xabc".to_string(),
            chain: chain.to_string(),
            authenticated: true,
        }
    }

    fn ids(feed: &TransactionFeed) -> Vec<String> {
        feed.transactions().iter().map(|t| t.id.clone()).collect()
    }

    // ==================== filter_by_chain tests ====================

    #[test]
    fn test_filter_keeps_source_or_dest_matches_in_order() {
        let filtered = filter_by_chain(&store_response(), RenChain::Ethereum);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["eth-mint", "eth-release"]);
        assert!(filtered.iter().all(|t| t.touches_chain(RenChain::Ethereum)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_by_chain(&store_response(), RenChain::BinanceSmartChain);
        let twice = filter_by_chain(&once, RenChain::BinanceSmartChain);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(filter_by_chain(&store_response(), RenChain::BitcoinCash).is_empty());
    }

    // ==================== request tests ====================

    #[test]
    fn test_new_feed_is_pending_and_empty() {
        let feed = TransactionFeed::new();
        assert!(feed.status().is_pending());
        assert!(feed.transactions().is_empty());
    }

    #[test]
    fn test_unauthenticated_request_issues_no_fetch() {
        let mut feed = TransactionFeed::new();
        let mut req = request("ethc");
        req.authenticated = false;
        assert_eq!(feed.request(&req).unwrap(), None);
        assert_eq!(feed.status(), &FeedStatus::Pending);
    }

    #[test]
    fn test_invalid_chain_fails_loudly() {
        let mut feed = TransactionFeed::new();
        let err = feed.request(&request("nope")).unwrap_err();
        assert_eq!(err, HistoryError::InvalidChainSelection("nope".to_string()));
        assert_eq!(feed.status(), &FeedStatus::Failed(err));
    }

    #[test]
    fn test_ticket_carries_canonical_chain() {
        let mut feed = TransactionFeed::new();
        let ticket = feed.request(&request("bscc")).unwrap().unwrap();
        assert_eq!(ticket.chain, RenChain::BinanceSmartChain);
        assert_eq!(ticket.account, "0xabc");
        assert_eq!(ticket.epoch, feed.epoch());
    }

    // ==================== resolve tests ====================

    #[test]
    fn test_resolve_publishes_filtered_list() {
        let mut feed = TransactionFeed::new();
        let ticket = feed.request(&request("ethc")).unwrap().unwrap();
        assert_eq!(feed.resolve(&ticket, Ok(store_response())), FeedUpdate::Applied);
        assert_eq!(feed.status(), &FeedStatus::Loaded);
        assert_eq!(ids(&feed), vec!["eth-mint", "eth-release"]);
    }

    #[test]
    fn test_resolve_failure_is_explicit() {
        let mut feed = TransactionFeed::new();
        let ticket = feed.request(&request("ethc")).unwrap().unwrap();
        let err = HistoryError::FetchFailure("offline".to_string());
        assert_eq!(feed.resolve(&ticket, Err(err.clone())), FeedUpdate::Applied);
        assert_eq!(feed.status(), &FeedStatus::Failed(err));
        assert!(!feed.status().is_pending());
    }

    #[test]
    fn test_late_response_for_previous_chain_is_discarded() {
        let mut feed = TransactionFeed::new();
        let eth_ticket = feed.request(&request("ethc")).unwrap().unwrap();
        let bsc_ticket = feed.request(&request("bscc")).unwrap().unwrap();

        assert_eq!(feed.resolve(&bsc_ticket, Ok(store_response())), FeedUpdate::Applied);
        assert_eq!(ids(&feed), vec!["bsc-mint"]);

        assert_eq!(feed.resolve(&eth_ticket, Ok(store_response())), FeedUpdate::Stale);
        assert_eq!(ids(&feed), vec!["bsc-mint"]);
        assert_eq!(feed.status(), &FeedStatus::Loaded);
    }

    #[test]
    fn test_stale_response_before_current_keeps_pending() {
        let mut feed = TransactionFeed::new();
        let eth_ticket = feed.request(&request("ethc")).unwrap().unwrap();
        let _bsc_ticket = feed.request(&request("bscc")).unwrap().unwrap();

        assert_eq!(feed.resolve(&eth_ticket, Ok(store_response())), FeedUpdate::Stale);
        assert!(feed.status().is_pending());
        assert!(feed.transactions().is_empty());
    }

    #[test]
    fn test_logout_invalidates_in_flight_fetch() {
        let mut feed = TransactionFeed::new();
        let ticket = feed.request(&request("ethc")).unwrap().unwrap();
        let mut logged_out = request("ethc");
        logged_out.authenticated = false;
        feed.request(&logged_out).unwrap();

        assert_eq!(feed.resolve(&ticket, Ok(store_response())), FeedUpdate::Stale);
        assert!(feed.status().is_pending());
    }

    #[test]
    fn test_disconnect_invalidates_in_flight_fetch() {
        let mut feed = TransactionFeed::new();
        let ticket = feed.request(&request("ethc")).unwrap().unwrap();
        feed.disconnect();

        assert_eq!(feed.resolve(&ticket, Ok(store_response())), FeedUpdate::Stale);
        assert!(feed.status().is_pending());
        assert!(feed.transactions().is_empty());
    }

    #[test]
    fn test_reconnect_after_disconnect_applies_new_fetch() {
        let mut feed = TransactionFeed::new();
        let _old = feed.request(&request("ethc")).unwrap().unwrap();
        feed.disconnect();
        let ticket = feed.request(&request("ethc")).unwrap().unwrap();

        assert_eq!(feed.resolve(&ticket, Ok(store_response())), FeedUpdate::Applied);
        assert_eq!(ids(&feed), vec!["eth-mint", "eth-release"]);
    }

    #[test]
    fn test_refetch_replaces_whole_list() {
        let mut feed = TransactionFeed::new();
        let first = feed.request(&request("ethc")).unwrap().unwrap();
        feed.resolve(&first, Ok(store_response()));
        let before = feed.transactions();

        let second = feed.request(&request("ethc")).unwrap().unwrap();
        feed.resolve(&second, Ok(vec![tx("new", RenChain::Bitcoin, RenChain::Ethereum)]));

        assert_eq!(before.len(), 2);
        assert_eq!(ids(&feed), vec!["new"]);
    }
}
