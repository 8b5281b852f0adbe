use crate::dashboards::TransactionSummaryDashboard;
use crate::domain::a001_customer::ui::CustomerList;
use crate::domain::a002_transaction::ui::{TransactionDetail, TransactionList};
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=TransactionSummaryDashboard />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/transactions") view=TransactionList />
                    <Route path=path!("/transactions/:code") view=TransactionDetail />
                </Routes>
            </Shell>
        </Router>
    }
}
