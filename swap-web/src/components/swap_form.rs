//! Currency swap form
//!
//! Owns the swap draft, derives the minimum, rate, and destination amount,
//! and emits a validated draft to the host. Async derivations (quote
//! recompute, rollover fetch) carry a sequence ticket; a superseded task
//! drops its result instead of overwriting fresher state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use shared::dto::wallet::{Asset, WithdrawInfoResponse};
use shared::utils::format_amount;

use crate::components::asset_picker::AssetPicker;
use crate::services::api;
use crate::state::market::use_market_context;
use crate::state::notify::use_notify_context;
use crate::swap::{
    amount_after_flip, clamp_on_blur, converted_amount, exchange_rate, initial_amount, max_amount,
    min_swap, selectable_assets, swap_available, validate, SwapDraft,
};
use crate::utils::constants::{
    AMOUNT_FROM_DECIMALS, AMOUNT_TO_DECIMALS, FALLBACK_ASSET_LOGO, QUOTE_DEBOUNCE_MS,
};
use crate::utils::format::format_number;

/// Host-side handle to the form: trigger submission, read the draft.
#[derive(Clone, Copy)]
pub struct SwapFormHandle {
    pub submit: Callback<()>,
    pub draft: Signal<SwapDraft>,
}

/// Rollover funds for the current source asset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RolloverInfo {
    pub available_amount: f64,
    pub available_amount_usd: f64,
    pub locked_amount: f64,
    pub locked_amount_usd: f64,
}

impl From<WithdrawInfoResponse> for RolloverInfo {
    fn from(info: WithdrawInfoResponse) -> Self {
        Self {
            available_amount: info.available_withdrawal_amount,
            available_amount_usd: info.available_withdrawal_amount_usd,
            locked_amount: info.locked_funds_amount,
            locked_amount_usd: info.locked_funds_amount_usd,
        }
    }
}

#[component]
pub fn SwapForm(
    #[prop(into)] on_submit: Callback<SwapDraft>,
    set_swap_available: WriteSignal<bool>,
    handle: RwSignal<Option<SwapFormHandle>>,
) -> impl IntoView {
    let market = use_market_context();
    let notify = use_notify_context();

    let draft = RwSignal::new(SwapDraft::default());
    let (loading_quote, set_loading_quote) = signal(false);
    let (rollover, set_rollover) = signal(RolloverInfo::default());
    let (show_from_picker, set_show_from_picker) = signal(false);
    let (show_to_picker, set_show_to_picker) = signal(false);

    let quote_seq = StoredValue::new(0u64);
    let rollover_seq = StoredValue::new(0u64);

    // Memos keep the effects below from waking on unrelated draft writes
    // (the quote task writing amount_to must not retrigger itself).
    let amount_from_raw = Memo::new(move |_| draft.with(|d| d.amount_from.clone()));
    let amount_to_raw = Memo::new(move |_| draft.with(|d| d.amount_to.clone()));
    let symbol_from = Memo::new(move |_| draft.with(|d| d.symbol_from.clone()));
    let symbol_to = Memo::new(move |_| draft.with(|d| d.symbol_to.clone()));
    let asset_from = Memo::new(move |_| market.asset_by_id(&symbol_from.get()));
    let asset_to = Memo::new(move |_| market.asset_by_id(&symbol_to.get()));
    let min_swap_amount = Memo::new(move |_| min_swap(market.price_of(&symbol_from.get())));
    let rate = Memo::new(move |_| {
        exchange_rate(
            market.price_of(&symbol_from.get()),
            market.price_of(&symbol_to.get()),
        )
    });
    let fee_preview = Memo::new(move |_| {
        let amount: f64 = amount_from_raw.get().trim().parse().unwrap_or(0.0);
        format_amount(market.swap_fee.get() * amount, AMOUNT_TO_DECIMALS)
    });

    let from_assets = Memo::new(move |_| {
        market
            .assets
            .with(|assets| selectable_assets(assets, &symbol_to.get()))
    });
    let to_assets = Memo::new(move |_| {
        market
            .assets
            .with(|assets| selectable_assets(assets, &symbol_from.get()))
    });

    // Seed the draft from the first two catalog entries; re-runs whenever the
    // catalog itself changes.
    Effect::new(move |_| {
        market.assets.with(|assets| {
            if assets.is_empty() {
                return;
            }
            let first = assets[0].clone();
            let second = assets.get(1).cloned();
            let balance = market.balance_of_untracked(&first.id);
            let seed = format_amount(
                initial_amount(balance, min_swap(Some(first.price))),
                AMOUNT_FROM_DECIMALS,
            );
            draft.update(|d| {
                d.symbol_from = first.id.clone();
                d.network_from = first.network.clone();
                d.symbol_to = second.as_ref().map(|a| a.id.clone()).unwrap_or_default();
                d.network_to = second.as_ref().map(|a| a.network.clone()).unwrap_or_default();
                d.amount_from = seed;
            });
        });
    });

    // Recompute the destination amount when the source amount, either symbol,
    // or the rate changes.
    Effect::new(move |_| {
        let amount_raw = amount_from_raw.get();
        // a symbol change must requote even when the rate is numerically unchanged
        symbol_from.track();
        symbol_to.track();
        let current_rate = rate.get();

        let ticket = quote_seq.get_value() + 1;
        quote_seq.set_value(ticket);
        set_loading_quote.set(true);

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(QUOTE_DEBOUNCE_MS).await;
            if quote_seq.get_value() != ticket {
                return;
            }
            let next = match amount_raw.trim().parse::<f64>() {
                Ok(amount) => format_amount(converted_amount(amount, current_rate), AMOUNT_TO_DECIMALS),
                Err(_) => "0".to_string(),
            };
            draft.update(|d| d.amount_to = next);
            set_loading_quote.set(false);
        });
    });

    // Refresh rollover funds whenever the source asset changes.
    Effect::new(move |_| {
        let asset_id = symbol_from.get();
        if asset_id.is_empty() {
            return;
        }
        let ticket = rollover_seq.get_value() + 1;
        rollover_seq.set_value(ticket);

        leptos::task::spawn_local(async move {
            let info = match api::fetch_withdraw_info(&asset_id).await {
                Ok(response) => RolloverInfo::from(response),
                Err(err) => {
                    log::warn!("withdraw info fetch failed: {err}");
                    RolloverInfo::default()
                }
            };
            if rollover_seq.get_value() == ticket {
                set_rollover.set(info);
            }
        });
    });

    // Submit gate for the host's button.
    Effect::new(move |_| {
        let amount: f64 = amount_from_raw.get().trim().parse().unwrap_or(0.0);
        set_swap_available.set(swap_available(amount, min_swap_amount.get()));
    });

    let on_amount_from_input = move |ev| {
        let value = event_target_value(&ev);
        draft.update(|d| d.amount_from = value);
    };

    let on_amount_from_blur = move |_| {
        let balance = market.balance_of_untracked(&symbol_from.get_untracked());
        let min = min_swap_amount.get_untracked();
        let input = draft.with_untracked(|d| d.amount_from_value());
        let next = clamp_on_blur(input, min, balance);
        if next != input {
            draft.update(|d| d.amount_from = format_amount(next, AMOUNT_FROM_DECIMALS));
        }
    };

    let apply_max_balance = move |_| {
        let balance = market.balance_of_untracked(&symbol_from.get_untracked());
        draft.update(|d| d.amount_from = format_amount(max_amount(balance), AMOUNT_FROM_DECIMALS));
    };

    let swap_direction = move |_| {
        let snapshot = draft.get_untracked();
        let new_from_balance = market.balance_of_untracked(&snapshot.symbol_to);
        draft.update(|d| {
            d.symbol_from = snapshot.symbol_to.clone();
            d.network_from = snapshot.network_to.clone();
            d.symbol_to = snapshot.symbol_from.clone();
            d.network_to = snapshot.network_from.clone();
            d.amount_from = amount_after_flip(&snapshot.amount_to, new_from_balance);
        });
    };

    let select_from_asset = Callback::new(move |asset: Asset| {
        let balance = market.balance_of_untracked(&asset.id);
        let seed = format_amount(
            initial_amount(balance, min_swap(Some(asset.price))),
            AMOUNT_FROM_DECIMALS,
        );
        draft.update(|d| {
            d.symbol_from = asset.id.clone();
            d.network_from = asset.network.clone();
            d.amount_from = seed;
        });
    });

    let select_to_asset = Callback::new(move |asset: Asset| {
        draft.update(|d| {
            d.symbol_to = asset.id.clone();
            d.network_to = asset.network.clone();
        });
    });

    let submit = Callback::new(move |()| {
        let snapshot = draft.get_untracked();
        let min = min_swap_amount.get_untracked();
        let balance = market.balance_of_untracked(&snapshot.symbol_from);
        match validate(&snapshot, min, balance) {
            Ok(()) => on_submit.run(snapshot),
            Err(err) => notify.notify(err.user_message()),
        }
    });

    // publish the handle into the parent-owned slot
    Effect::new(move |_| {
        handle.set(Some(SwapFormHandle {
            submit,
            draft: Signal::derive(move || draft.get()),
        }));
    });

    let from_name = move || asset_from.get().map(|a| a.name).unwrap_or_default();
    let to_name = move || asset_to.get().map(|a| a.name).unwrap_or_default();
    let from_logo = move || {
        asset_from
            .get()
            .map(|a| a.logo)
            .filter(|logo| !logo.is_empty())
            .unwrap_or_else(|| FALLBACK_ASSET_LOGO.to_string())
    };
    let to_logo = move || {
        asset_to
            .get()
            .map(|a| a.logo)
            .filter(|logo| !logo.is_empty())
            .unwrap_or_else(|| FALLBACK_ASSET_LOGO.to_string())
    };

    view! {
        <div class="swap-form">
            <div class="swap-form-header">
                <span>"Get approximately"</span>
                <span class="swap-min">
                    "Min: " {move || format_number(min_swap_amount.get(), AMOUNT_FROM_DECIMALS)}
                    " " {from_name}
                </span>
            </div>

            <div class="swap-row">
                <input
                    class="swap-input"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || amount_from_raw.get()
                    on:input=on_amount_from_input
                    on:blur=on_amount_from_blur
                />
                <button class="swap-max" on:click=apply_max_balance>"Max"</button>
                <button class="swap-asset" on:click=move |_| set_show_from_picker.set(true)>
                    <img src=from_logo alt="source asset" width="24" height="24"/>
                    <span>{from_name}</span>
                    <span class="chevron">"▾"</span>
                </button>
            </div>

            <button class="swap-flip" on:click=swap_direction title="Swap direction">
                "⇅"
            </button>

            <div class="swap-row" class:blurred=move || loading_quote.get()>
                <input
                    class="swap-input"
                    type="text"
                    readonly=true
                    prop:value=move || amount_to_raw.get()
                />
                <button class="swap-asset" on:click=move |_| set_show_to_picker.set(true)>
                    <img src=to_logo alt="destination asset" width="24" height="24"/>
                    <span>{to_name}</span>
                    <span class="chevron">"▾"</span>
                </button>
            </div>

            <div class="swap-meta">
                <span>"Available: "</span>
                <span>
                    {move || format_number(rollover.get().available_amount, AMOUNT_TO_DECIMALS)}
                    " " {from_name}
                </span>
            </div>

            <div class="swap-rate" class:blurred=move || loading_quote.get()>
                {move || format_number(1.0, 2)} " " {from_name} " ≈ "
                {move || format_number(rate.get(), AMOUNT_TO_DECIMALS)} " " {to_name}
            </div>

            <div class="swap-detail">
                <span>"Estimated time"</span>
                <span>"~30 seconds"</span>
            </div>
            <div class="swap-detail">
                <span>"Swap fee"</span>
                <span>{move || fee_preview.get()} " " {from_name}</span>
            </div>

            {move || show_from_picker.get().then(|| view! {
                <AssetPicker
                    assets=from_assets
                    selected=symbol_from
                    on_select=select_from_asset
                    on_close=Callback::new(move |()| set_show_from_picker.set(false))
                />
            })}

            {move || show_to_picker.get().then(|| view! {
                <AssetPicker
                    assets=to_assets
                    selected=symbol_to
                    on_select=select_to_asset
                    on_close=Callback::new(move |()| set_show_to_picker.set(false))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::RolloverInfo;
    use shared::dto::wallet::WithdrawInfoResponse;

    #[test]
    fn rollover_maps_withdraw_info() {
        let info = RolloverInfo::from(WithdrawInfoResponse {
            available_withdrawal_amount: 1.5,
            available_withdrawal_amount_usd: 75.0,
            locked_funds_amount: 0.25,
            locked_funds_amount_usd: 12.5,
        });
        assert_eq!(info.available_amount, 1.5);
        assert_eq!(info.available_amount_usd, 75.0);
        assert_eq!(info.locked_amount, 0.25);
        assert_eq!(info.locked_amount_usd, 12.5);
    }

    #[test]
    fn rollover_default_is_all_zeros() {
        assert_eq!(RolloverInfo::default(), RolloverInfo::from(WithdrawInfoResponse::default()));
    }
}
