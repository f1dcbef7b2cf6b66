//! SwapDeck Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Navbar, Toast};
use crate::pages::SwapPage;
use crate::state::market::provide_market_context;
use crate::state::notify::provide_notify_context;

#[component]
pub fn App() -> impl IntoView {
    provide_market_context();
    provide_notify_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Toast/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=SwapPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to Swap"
                    </span>
                </A>
            </div>
        </div>
    }
}
