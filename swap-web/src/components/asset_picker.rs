//! Asset picker modal
//!
//! Presents the catalog for one side of the swap. The caller supplies the
//! list already stripped of the asset selected on the opposite side, so the
//! two slots can never collide.

use leptos::prelude::*;

use shared::dto::wallet::Asset;
use shared::utils::format_amount;

use crate::state::market::use_market_context;
use crate::utils::constants::{AMOUNT_FROM_DECIMALS, FALLBACK_ASSET_LOGO};

#[component]
pub fn AssetPicker(
    #[prop(into)] assets: Signal<Vec<Asset>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<Asset>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let market = use_market_context();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal-card" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Select asset"</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <ul class="asset-list">
                    <For
                        each=move || assets.get()
                        key=|asset| asset.id.clone()
                        children=move |asset: Asset| {
                            let row = asset.clone();
                            let is_selected = {
                                let id = asset.id.clone();
                                move || selected.get() == id
                            };
                            let held = {
                                let id = asset.id.clone();
                                move || format_amount(market.balance_of(&id), AMOUNT_FROM_DECIMALS)
                            };
                            let logo = if asset.logo.is_empty() {
                                FALLBACK_ASSET_LOGO.to_string()
                            } else {
                                asset.logo.clone()
                            };
                            view! {
                                <li>
                                    <button
                                        class="asset-row"
                                        class:selected=is_selected
                                        on:click=move |_| {
                                            on_select.run(row.clone());
                                            on_close.run(());
                                        }
                                    >
                                        <img class="asset-logo" src=logo alt=asset.name.clone() width="24" height="24"/>
                                        <span class="asset-name">{asset.name.clone()}</span>
                                        <span class="asset-held">{held}</span>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
