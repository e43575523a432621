//! Transient notifications (toasts) shown in the top-right corner.

use crate::shared::config::app_config;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            NotificationKind::Success => MessageBarIntent::Success,
            NotificationKind::Info => MessageBarIntent::Info,
            NotificationKind::Warning => MessageBarIntent::Warning,
            NotificationKind::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub text: String,
}

/// Notification queue provided at the application root
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, kind: NotificationKind, text: impl Into<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let items = self.items;
        Timeout::new(app_config().notifications.dismiss_ms, move || {
            items.update(|items| items.retain(|n| n.id != id));
        })
        .forget();
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NotificationKind::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NotificationKind::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("error shown: {}", text);
        self.push(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the current notifications
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class="notifications__item">
                            <MessageBar intent=n.kind.intent()>
                                <span class="notifications__text">{n.text.clone()}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| service.dismiss(id)
                                >
                                    "Dismiss"
                                </Button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
