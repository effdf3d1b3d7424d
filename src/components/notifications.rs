use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config::DEFAULT_AUTO_HIDE_MS;
use crate::models::{AnchorOrigin, NotificationOptions};

#[derive(Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: Html,
    pub options: NotificationOptions,
}

/// Snackbars on screen, oldest first.
#[derive(Clone, PartialEq, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

pub enum NotificationAction {
    Push(Notification),
    Dismiss(u32),
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Notifications grouped by screen corner, in first-seen anchor order.
    pub fn by_anchor(&self) -> Vec<(AnchorOrigin, Vec<&Notification>)> {
        let mut groups: Vec<(AnchorOrigin, Vec<&Notification>)> = Vec::new();
        for n in &self.items {
            match groups.iter_mut().find(|(anchor, _)| *anchor == n.options.anchor) {
                Some((_, group)) => group.push(n),
                None => groups.push((n.options.anchor, vec![n])),
            }
        }
        groups
    }
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push(n) => next.push(n),
            NotificationAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Lets any component below the provider raise a snackbar.
#[derive(Clone, PartialEq)]
pub struct NotificationsHandle {
    show: Callback<(Html, NotificationOptions)>,
}

impl NotificationsHandle {
    pub fn show(&self, message: Html, options: NotificationOptions) {
        self.show.emit((message, options));
    }
}

#[hook]
pub fn use_notifications() -> NotificationsHandle {
    use_context::<NotificationsHandle>().unwrap_or_else(|| {
        warn!("use_notifications called outside NotificationsProvider");
        NotificationsHandle {
            show: Callback::from(|_: (Html, NotificationOptions)| ()),
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Html,
    pub options: NotificationOptions,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let kind_class = props.options.variant.class();
    let icon_mask = props.options.variant.icon_mask();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="alert">
            <span class="toast-icon" style={format!("-webkit-mask-image: url(\"{}\"); mask-image: url(\"{}\");", icon_mask, icon_mask)}></span>
            <span class="toast-message">{ props.message.clone() }</span>
            <button class="toast-close" onclick={close}>{ "×" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationsProviderProps {
    #[prop_or(DEFAULT_AUTO_HIDE_MS)]
    pub auto_hide_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NotificationsProvider)]
pub fn notifications_provider(props: &NotificationsProviderProps) -> Html {
    let queue = use_reducer(NotificationQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let handle = {
        let queue = queue.dispatcher();
        let next_id = next_id.clone();
        let default_hide = props.auto_hide_ms;
        let show = Callback::from(move |(message, options): (Html, NotificationOptions)| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            debug!("Showing notification {} ({:?})", id, options.variant);
            if !options.persist {
                let queue = queue.clone();
                let delay = options.auto_hide_ms.unwrap_or(default_hide);
                Timeout::new(delay, move || queue.dispatch(NotificationAction::Dismiss(id))).forget();
            }
            queue.dispatch(NotificationAction::Push(Notification { id, message, options }));
        });
        NotificationsHandle { show }
    };

    let stacks = queue.by_anchor().into_iter().map(|(anchor, group)| {
        html! {
            <div class={classes!("toast-stack", anchor.class())}>
                { for group.into_iter().map(|n| {
                    let dispatcher = queue.dispatcher();
                    let id = n.id;
                    html! {
                        <Toast
                            key={id.to_string()}
                            message={n.message.clone()}
                            options={n.options.clone()}
                            on_close={Callback::from(move |_: ()| dispatcher.dispatch(NotificationAction::Dismiss(id)))}
                        />
                    }
                })}
            </div>
        }
    });

    html! {
        <ContextProvider<NotificationsHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-container">
                { for stacks }
            </div>
        </ContextProvider<NotificationsHandle>>
    }
}
