//! Swap page - hosts the swap form
//!
//! Loads the wallet snapshot on mount, owns the availability gate and the
//! form handle, and submits validated drafts to the backend.

use leptos::prelude::*;

use shared::dto::wallet::SwapRequest;

use crate::components::swap_form::{SwapForm, SwapFormHandle};
use crate::services::api;
use crate::state::market::use_market_context;
use crate::state::notify::use_notify_context;
use crate::swap::SwapDraft;

#[component]
pub fn SwapPage() -> impl IntoView {
    let market = use_market_context();
    let notify = use_notify_context();

    let (swap_available, set_swap_available) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let handle = RwSignal::new(None::<SwapFormHandle>);

    // One-shot wallet snapshot load; a failure leaves the catalog empty and
    // the form dormant.
    leptos::task::spawn_local(async move {
        match api::fetch_portfolio().await {
            Ok(portfolio) => {
                market.assets.set(portfolio.symbols);
                market.balances.set(portfolio.balances);
                market.swap_fee.set(portfolio.swap_fee);
            }
            Err(err) => log::warn!("portfolio load failed: {err}"),
        }
    });

    let on_submit = Callback::new(move |draft: SwapDraft| {
        let request = SwapRequest::from(&draft);
        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::submit_swap(&request).await {
                Ok(response) if response.success => notify.notify("Swap request submitted"),
                Ok(response) => notify.notify(response.message),
                Err(err) => {
                    log::warn!("swap submit failed: {err}");
                    notify.notify("Swap failed, try again later");
                }
            }
            set_submitting.set(false);
        });
    });

    let trigger_submit = move |_| {
        if let Some(form) = handle.get_untracked() {
            form.submit.run(());
        }
    };

    view! {
        <div class="page swap-page" style="display: flex; justify-content: center; padding: 48px 24px;">
            <div class="card swap-card" style="width: 100%; max-width: 480px;">
                <h1 class="card-title">"Swap"</h1>
                <SwapForm
                    on_submit=on_submit
                    set_swap_available=set_swap_available
                    handle=handle
                />
                <button
                    class="btn btn-submit"
                    style="width: 100%; margin-top: 20px;"
                    on:click=trigger_submit
                    disabled=move || !swap_available.get() || submitting.get()
                >
                    {move || if submitting.get() { "Swapping..." } else { "Swap" }}
                </button>
            </div>
        </div>
    }
}
