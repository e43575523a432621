use crate::layout::modal_service::ModalService;
use crate::layout::notifications::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ModalService::new());
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
                <NotificationHost />
            </AuthProvider>
        </ConfigProvider>
    }
}
