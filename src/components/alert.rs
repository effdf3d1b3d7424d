use yew::prelude::*;

use crate::models::NotificationVariant;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub severity: NotificationVariant,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

/// Inline banner sharing the snackbar palette.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let icon_mask = props.severity.icon_mask();
    html! {
        <div class={classes!("alert", props.severity.class())} role="alert">
            <span class="toast-icon" style={format!("-webkit-mask-image: url(\"{}\"); mask-image: url(\"{}\");", icon_mask, icon_mask)}></span>
            <span class="alert-message">{ props.children.clone() }</span>
            if let Some(on_close) = &props.on_close {
                <button class="toast-close" aria-label="Close" onclick={on_close.reform(|_| ())}>{ "×" }</button>
            }
        </div>
    }
}
