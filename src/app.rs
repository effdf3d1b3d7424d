use crate::chains::BridgeChain;
use crate::components::{use_notifications, NotificationsProvider, NotificationsSection, TransactionHistory};
use crate::config::{AppConfig, Preferences};
use crate::error::HistoryError;
use crate::models::{NotificationOptions, NotificationVariant, WalletSession};
use crate::store::StoreHandle;
use crate::wallet::WalletHandle;
use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A session failure is shown once until it changes or a refresh succeeds.
fn is_new_session_error(last: &Option<HistoryError>, err: &HistoryError) -> bool {
    last.as_ref() != Some(err)
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <NotificationsProvider auto_hide_ms={config.notification_auto_hide_ms}>
            <Shell config={(*config).clone()} />
        </NotificationsProvider>
    }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    config: AppConfig,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let notifications = use_notifications();
    let store = use_memo(props.config.store.clone(), StoreHandle::from_backend);
    let wallet = use_memo(props.config.wallet.clone(), WalletHandle::from_backend);
    let last_session_error = use_mut_ref(|| None::<HistoryError>);
    let session = use_state(WalletSession::default);
    let chain = {
        let config = props.config.clone();
        use_state(move || Preferences::load().chain_or(&config))
    };
    let history_opened = use_state(|| false);
    let active_tx_id = use_state(|| None::<String>);
    let connecting = use_state(|| false);

    // Refresh the wallet session on start and whenever the dialog opens.
    {
        let session = session.clone();
        let notifications = notifications.clone();
        let wallet = (*wallet).clone();
        let last_session_error = last_session_error.clone();
        use_effect_with(*history_opened, move |_| {
            spawn_local(async move {
                match wallet.session().await {
                    Ok(s) => {
                        *last_session_error.borrow_mut() = None;
                        session.set(s);
                    }
                    Err(e) => {
                        error!("Wallet session refresh failed: {}", e);
                        if is_new_session_error(&last_session_error.borrow(), &e) {
                            notifications.show(
                                html! { <>{ e.user_message() }</> },
                                NotificationOptions::variant(NotificationVariant::Warning),
                            );
                        } else {
                            debug!("Session error already reported");
                        }
                        *last_session_error.borrow_mut() = Some(e);
                    }
                }
            });
            || ()
        });
    }

    let open_history = {
        let history_opened = history_opened.clone();
        Callback::from(move |_: MouseEvent| history_opened.set(true))
    };

    let close_history = {
        let history_opened = history_opened.clone();
        Callback::from(move |_: ()| history_opened.set(false))
    };

    let change_chain = {
        let chain = chain.clone();
        Callback::from(move |selected: BridgeChain| {
            info!("Viewing transactions on {}", selected);
            chain.set(selected);
            Preferences { chain: Some(selected) }.save();
        })
    };

    let select_tx = {
        let active_tx_id = active_tx_id.clone();
        Callback::from(move |id: String| active_tx_id.set(Some(id)))
    };

    let connect = {
        let session = session.clone();
        let connecting = connecting.clone();
        let notifications = notifications.clone();
        let chain = chain.clone();
        let wallet = (*wallet).clone();
        Callback::from(move |_: ()| {
            let wallet = wallet.clone();
            let session = session.clone();
            let connecting = connecting.clone();
            let notifications = notifications.clone();
            let selected = *chain;
            connecting.set(true);
            spawn_local(async move {
                match wallet.connect(selected).await {
                    Ok(s) => {
                        info!("Wallet connected for {}", selected);
                        session.set(s);
                        notifications.show(
                            html! { <>{ "Wallet connected" }</> },
                            NotificationOptions::variant(NotificationVariant::Success),
                        );
                    }
                    Err(e) => {
                        error!("Wallet connection for {} failed: {}", selected, e);
                        notifications.show(
                            html! { <>{ e.user_message() }</> },
                            NotificationOptions::variant(NotificationVariant::Error),
                        );
                    }
                }
                connecting.set(false);
            });
        })
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "Bridge" }</h1>
                <button class="btn btn-primary" onclick={open_history}>{ "Transactions" }</button>
            </header>
            <main class="screen-container" role="main">
                <NotificationsSection />
            </main>
            <TransactionHistory
                open={*history_opened}
                on_close={close_history}
                session={(*session).clone()}
                chain={*chain}
                on_chain_change={change_chain}
                on_connect={connect}
                connecting={*connecting}
                store={(*store).clone()}
                page_size={props.config.page_size}
                active_tx_id={(*active_tx_id).clone()}
                on_select_tx={select_tx}
            />
            <footer class="app-footer">{ format!("v{}", VERSION) }</footer>
        </div>
    }
}
