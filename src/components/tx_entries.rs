use yew::prelude::*;

use crate::models::{BridgeTransaction, TxStatus};
use crate::utils::shorten_id;

#[derive(Properties, PartialEq)]
pub struct TxEntryProps {
    pub tx: BridgeTransaction,
    pub is_active: bool,
    pub on_select: Callback<String>,
}

fn status_label(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Created => "Awaiting deposit",
        TxStatus::Confirming => "Confirming",
        TxStatus::Submitted => "Submitted",
        TxStatus::Completed => "Completed",
    }
}

fn entry_card(props: &TxEntryProps, title: String, direction_class: &'static str) -> Html {
    let tx = &props.tx;
    let on_click = {
        let id = tx.id.clone();
        props.on_select.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div
            class={classes!("tx-card", "clickable", props.is_active.then_some("active"))}
            aria-current={props.is_active.then_some("true")}
            onclick={on_click}
        >
            <div class="tx-header">
                <span class={classes!("icon", direction_class)}></span>
                <strong>{ title }</strong>
                <span class={classes!("tx-status", tx.is_completed().then_some("completed"))}>
                    { status_label(tx.status) }
                </span>
            </div>
            <div class="tx-body">
                <p class={classes!("tx-amt", direction_class)}>{ &tx.amount }{ " " }{ &tx.source_asset }</p>
                <p class="tx-time">{ &tx.timestamp }</p>
                <code class="tx-addr">{ shorten_id(&tx.id, 6) }</code>
            </div>
        </div>
    }
}

#[function_component(MintEntry)]
pub fn mint_entry(props: &TxEntryProps) -> Html {
    let tx = &props.tx;
    let title = format!("Mint {} from {} to {}", tx.source_asset, tx.source_chain, tx.dest_chain);
    entry_card(props, title, "incoming")
}

#[function_component(ReleaseEntry)]
pub fn release_entry(props: &TxEntryProps) -> Html {
    let tx = &props.tx;
    let title = format!("Release {} from {} to {}", tx.source_asset, tx.source_chain, tx.dest_chain);
    entry_card(props, title, "outgoing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(TxStatus::Created), "Awaiting deposit");
        assert_eq!(status_label(TxStatus::Completed), "Completed");
    }
}
