use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::chains::{BridgeChain, SUPPORTED_MINT_DESTINATION_CHAINS};
use crate::components::chain_dropdown::ChainDropdown;
use crate::components::pagination::SimplePagination;
use crate::components::tx_entries::{MintEntry, ReleaseEntry};
use crate::history::{
    layout_page, select_view_mode, EntryKind, FeedRequest, FeedStatus, FeedUpdate, Page, PageRow,
    TransactionFeed, ViewMode,
};
use crate::models::{BridgeTransaction, WalletSession};
use crate::store::StoreHandle;
use crate::utils::article_for;

#[derive(Clone, PartialEq)]
pub struct FeedSnapshot {
    pub status: FeedStatus,
    pub transactions: Rc<Vec<BridgeTransaction>>,
}

/// Runs the feed for the current wallet and chain and re-renders on results.
///
/// The returned callback re-issues the request for the same inputs.
#[hook]
pub fn use_transaction_feed(
    store: StoreHandle,
    session: WalletSession,
    chain: BridgeChain,
) -> (FeedSnapshot, Callback<()>) {
    let feed = use_mut_ref(TransactionFeed::new);
    let trigger = use_force_update();
    let reload = use_state(|| 0u32);

    {
        let feed = feed.clone();
        let trigger = trigger.clone();
        use_effect_with(
            (session, chain, *reload, store),
            move |(session, chain, _, store)| {
                if session.connected {
                    let request = FeedRequest {
                        account: session.account.clone(),
                        chain: chain.key().to_string(),
                        authenticated: session.authenticated,
                    };
                    let ticket = feed.borrow_mut().request(&request);
                    trigger.force_update();

                    if let Ok(Some(ticket)) = ticket {
                        let fetch = store.fetch_transactions(&ticket.account);
                        spawn_local(async move {
                            let result = fetch.await;
                            let update = feed.borrow_mut().resolve(&ticket, result);
                            if update == FeedUpdate::Applied {
                                trigger.force_update();
                            }
                        });
                    }
                } else {
                    feed.borrow_mut().disconnect();
                }
                || ()
            },
        );
    }

    let retry = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(reload.wrapping_add(1)))
    };

    let snapshot = {
        let feed = feed.borrow();
        FeedSnapshot {
            status: feed.status().clone(),
            transactions: feed.transactions(),
        }
    };
    (snapshot, retry)
}

#[derive(Properties, PartialEq)]
pub struct TransactionHistoryProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub session: WalletSession,
    pub chain: BridgeChain,
    pub on_chain_change: Callback<BridgeChain>,
    pub on_connect: Callback<()>,
    #[prop_or_default]
    pub connecting: bool,
    pub store: StoreHandle,
    pub page_size: usize,
    #[prop_or_default]
    pub active_tx_id: Option<String>,
    pub on_select_tx: Callback<String>,
}

fn render_row(row: PageRow<'_>, on_select: &Callback<String>) -> Html {
    let header = row.header.map(|h| {
        html! { <div class="tx-status-header">{ h.to_string() }</div> }
    });
    let tx = row.tx.clone();
    let entry = match row.kind {
        EntryKind::Mint => html! {
            <MintEntry tx={tx} is_active={row.is_active} on_select={on_select.clone()} />
        },
        EntryKind::Release => html! {
            <ReleaseEntry tx={tx} is_active={row.is_active} on_select={on_select.clone()} />
        },
    };
    html! {
        <div class="tx-entry" key={row.tx.id.clone()}>
            { for header }
            { entry }
        </div>
    }
}

#[function_component(TransactionHistory)]
pub fn transaction_history(props: &TransactionHistoryProps) -> Html {
    let (feed, retry) = use_transaction_feed(props.store.clone(), props.session.clone(), props.chain);
    let page = use_state(|| 0usize);

    {
        let page = page.clone();
        use_effect_with(props.chain, move |chain| {
            debug!("Chain changed to {}, back to first page", chain);
            page.set(0);
            || ()
        });
    }

    let mode = select_view_mode(props.session.connected, &feed.status, feed.transactions.len());
    let chain_config = props.chain.config();

    let on_change_page = {
        let page = page.clone();
        Callback::from(move |p: usize| page.set(p))
    };

    let body = match &mode {
        ViewMode::Disconnected => html! {
            <div class="tx-content status-content">
                <p class="info-text">
                    { format!(
                        "Please connect {} {} compatible wallet to view transactions",
                        article_for(chain_config.full),
                        chain_config.full
                    ) }
                </p>
                <div class="wallet-connection-progress">
                    <span class={classes!("spinner", props.connecting.then_some("active"))} aria-hidden="true"></span>
                </div>
                <button
                    class={classes!("btn", "btn-primary", props.connecting.then_some("loading"))}
                    disabled={props.connecting}
                    onclick={props.on_connect.reform(|_| ())}
                >
                    { "Connect Wallet" }
                </button>
            </div>
        },
        ViewMode::Loading => html! {
            <div class="tx-content status-content">
                <div class="centered-progress" role="progressbar" aria-busy="true"></div>
            </div>
        },
        ViewMode::Failed(e) => html! {
            <div class="tx-content status-content">
                <p class="info-text error-text">{ e.user_message() }</p>
                <button class="btn btn-primary" onclick={retry.reform(|_| ())}>{ "Retry" }</button>
            </div>
        },
        ViewMode::Empty | ViewMode::Populated => {
            let rows = layout_page(
                &feed.transactions,
                Page::new(*page, props.page_size),
                props.active_tx_id.as_deref(),
            );
            html! {
                <>
                    <div class="tx-list">
                        { for rows.into_iter().map(|row| render_row(row, &props.on_select_tx)) }
                    </div>
                    if mode == ViewMode::Empty {
                        <p class="info-text">{ "You have no transactions with this account." }</p>
                    }
                    <div class="tx-pagination">
                        <SimplePagination
                            count={feed.transactions.len()}
                            rows_per_page={props.page_size}
                            page={*page}
                            on_change_page={on_change_page}
                        />
                    </div>
                </>
            }
        }
    };

    html! {
        <div
            class={classes!("modal-overlay", (!props.open).then_some("hidden"))}
            aria-hidden={(!props.open).to_string()}
            onclick={props.on_close.reform(|_| ())}
        >
            <div class="modal tx-history" role="dialog" aria-label="Transactions" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h3>{ "Transactions" }</h3>
                    <div class="tx-viewing">
                        <span class="subtitle">{ "Viewing: " }</span>
                        <ChainDropdown
                            available={SUPPORTED_MINT_DESTINATION_CHAINS.to_vec()}
                            value={props.chain}
                            on_change={props.on_chain_change.clone()}
                            condensed=true
                        />
                    </div>
                    <button class="close-btn" aria-label="Close" onclick={props.on_close.reform(|_| ())}>{ "×" }</button>
                </div>
                <div class="modal-body">
                    if !mode.shows_list() {
                        <div class="tx-status-header"></div>
                    }
                    { body }
                </div>
            </div>
        </div>
    }
}
