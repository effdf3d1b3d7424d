use yew::prelude::*;

use crate::components::alert::Alert;
use crate::components::notifications::{use_notifications, NotificationsHandle};
use crate::models::{Horizontal, NotificationOptions, NotificationVariant, Vertical};
use crate::utils::random_text;

const ALERT_SEVERITIES: [NotificationVariant; 4] = [
    NotificationVariant::Error,
    NotificationVariant::Warning,
    NotificationVariant::Info,
    NotificationVariant::Success,
];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub header: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class="catalog-section">
            <h3 class="section-title">{ props.header.clone() }</h3>
            { props.children.clone() }
        </section>
    }
}

/// One snackbar per variant, as raised when the section mounts.
pub fn basic_notifications() -> Vec<(&'static str, NotificationOptions)> {
    vec![
        ("Error", NotificationOptions::variant(NotificationVariant::Error)),
        ("Warning", NotificationOptions::variant(NotificationVariant::Warning)),
        ("Info", NotificationOptions::variant(NotificationVariant::Info)),
        ("Success", NotificationOptions::variant(NotificationVariant::Success).persistent()),
        (
            "Special Info",
            NotificationOptions::variant(NotificationVariant::SpecialInfo)
                .persistent()
                .anchored(Vertical::Top, Horizontal::Center),
        ),
    ]
}

fn show_basic(notifications: &NotificationsHandle) {
    for (text, options) in basic_notifications() {
        notifications.show(html! { <>{ text }</> }, options);
    }
}

fn show_advanced(notifications: &NotificationsHandle) {
    notifications.show(
        html! { <>{ "Advanced Snackbar content" }</> },
        NotificationOptions::variant(NotificationVariant::Info).auto_hide(10_000),
    );
    notifications.show(
        html! {
            <span>
                { random_text() }{ " " }
                <a href="/" target="_blank" rel="noopener noreferrer">{ "a link" }</a>
            </span>
        },
        NotificationOptions::variant(NotificationVariant::Warning),
    );
    notifications.show(
        html! { <span>{ "Persistent notification" }</span> },
        NotificationOptions::variant(NotificationVariant::Success).persistent(),
    );
    notifications.show(
        html! { <span>{ "Persistent notification" }</span> },
        NotificationOptions::variant(NotificationVariant::SpecialInfo).persistent(),
    );
}

#[function_component(NotificationsSection)]
pub fn notifications_section() -> Html {
    let notifications = use_notifications();

    {
        let notifications = notifications.clone();
        use_effect_with((), move |_| {
            show_basic(&notifications);
            || ()
        });
    }

    let on_show = {
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| show_basic(&notifications))
    };
    let on_show_advanced = {
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| show_advanced(&notifications))
    };

    html! {
        <Section header="Notifications (Alerts / Snackbars)">
            { for ALERT_SEVERITIES.iter().map(|severity| html! {
                <div class="separation-wrapper">
                    <Alert severity={severity.clone()} on_close={Callback::from(|_: ()| ())}>
                        <span>{ random_text() }{ " " }<a href="/">{ "a link" }</a></span>
                    </Alert>
                </div>
            })}
            <button class="btn btn-primary" onclick={on_show}>{ "Show snackbars" }</button>
            <button class="btn btn-secondary" onclick={on_show_advanced}>{ "Show advanced snackbars" }</button>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_notifications_cover_every_variant() {
        let shown = basic_notifications();
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4].1.variant, NotificationVariant::SpecialInfo);
        assert_eq!(shown[4].1.anchor.vertical, Vertical::Top);
    }

    #[test]
    fn test_only_success_and_special_info_persist() {
        let persistent: Vec<&str> = basic_notifications()
            .into_iter()
            .filter(|(_, o)| o.persist)
            .map(|(text, _)| text)
            .collect();
        assert_eq!(persistent, vec!["Success", "Special Info"]);
    }
}
