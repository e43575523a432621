pub mod modal_service;
pub mod notifications;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Signed-in layout: top bar over the page content
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{children()}</main>
        </div>
    }
}
