use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::chains::BridgeChain;

#[derive(Properties, PartialEq)]
pub struct ChainDropdownProps {
    pub available: Vec<BridgeChain>,
    pub value: BridgeChain,
    pub on_change: Callback<BridgeChain>,
    #[prop_or_default]
    pub condensed: bool,
}

/// Sets `open` to false on any document click that lands outside `container`.
/// The listener only exists while the menu is open.
#[hook]
fn use_dismiss_on_outside_click(container: NodeRef, open: UseStateHandle<bool>) {
    use_effect_with(*open, move |is_open| {
        let listener = is_open
            .then(|| web_sys::window().and_then(|w| w.document()))
            .flatten()
            .map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let clicked = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = match (container.cast::<Node>(), clicked) {
                        (Some(menu), Some(node)) => menu.contains(Some(&node)),
                        _ => true,
                    };
                    if !inside {
                        open.set(false);
                    }
                })
            });
        move || drop(listener)
    });
}

fn chain_option(chain: BridgeChain, current: BridgeChain, on_pick: &Callback<BridgeChain>) -> Html {
    let picked = chain == current;
    html! {
        <button
            type="button"
            role="option"
            aria-selected={picked.to_string()}
            class={classes!("chain-select-option", picked.then_some("selected"))}
            onclick={on_pick.reform(move |_: MouseEvent| chain)}
        >
            { chain.config().full }
        </button>
    }
}

#[function_component(ChainDropdown)]
pub fn chain_dropdown(props: &ChainDropdownProps) -> Html {
    let open = use_state(|| false);
    let container = use_node_ref();
    use_dismiss_on_outside_click(container.clone(), open.clone());

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let on_pick = {
        let open = open.clone();
        props.on_change.reform(move |chain: BridgeChain| {
            open.set(false);
            chain
        })
    };

    let label = props.value.config();
    let menu = if *open {
        html! {
            <div class="chain-select-dropdown" role="listbox">
                { for props.available.iter().map(|chain| chain_option(*chain, props.value, &on_pick)) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div
            ref={container}
            class={classes!("chain-select-wrapper", props.condensed.then_some("condensed"))}
            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
        >
            <button
                type="button"
                class="chain-select-button"
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={on_toggle}
            >
                <span class="chain-select-text">
                    { if props.condensed { label.short } else { label.full } }
                </span>
                <span class={classes!("chain-select-arrow", (*open).then_some("open"))} aria-hidden="true"></span>
            </button>
            { menu }
        </div>
    }
}
