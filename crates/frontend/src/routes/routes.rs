use crate::dashboards::d400_inventory_summary::ui::InventoryDashboard;
use crate::layout::AppShell;
use crate::projections::p900_product_view::ui::ProductViewPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// `/` dashboard (signed in), `/signin`, `/batch/:batch_id` (public)
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route
                    path=path!("/")
                    view=|| view! {
                        <RequireAuth>
                            <AppShell>
                                <InventoryDashboard />
                            </AppShell>
                        </RequireAuth>
                    }
                />
                <Route path=path!("/signin") view=LoginPage />
                <Route path=path!("/batch/:batch_id") view=ProductViewPage />
            </Routes>
        </Router>
    }
}
