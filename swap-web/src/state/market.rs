//! Wallet snapshot state management

use leptos::prelude::*;

use shared::dto::wallet::{Asset, AssetBalance};

/// Application-wide snapshot of the wallet: the swappable asset catalog,
/// held balances, and the flat swap fee rate. Populated once by the host
/// page; read-only for everything downstream.
#[derive(Clone, Copy)]
pub struct MarketContext {
    pub assets: RwSignal<Vec<Asset>>,
    pub balances: RwSignal<Vec<AssetBalance>>,
    pub swap_fee: RwSignal<f64>,
}

impl MarketContext {
    pub fn new() -> Self {
        Self {
            assets: RwSignal::new(Vec::new()),
            balances: RwSignal::new(Vec::new()),
            swap_fee: RwSignal::new(0.0),
        }
    }

    pub fn asset_by_id(&self, id: &str) -> Option<Asset> {
        self.assets
            .with(|assets| assets.iter().find(|asset| asset.id == id).cloned())
    }

    pub fn price_of(&self, id: &str) -> Option<f64> {
        self.assets
            .with(|assets| assets.iter().find(|asset| asset.id == id).map(|asset| asset.price))
    }

    /// Held amount of an asset; unknown assets read as 0.
    pub fn balance_of(&self, id: &str) -> f64 {
        self.balances.with(|balances| {
            balances
                .iter()
                .find(|record| record.symbol_id == id)
                .map(|record| record.amount)
                .unwrap_or(0.0)
        })
    }

    /// Like [`balance_of`](Self::balance_of) but without subscribing the
    /// caller to balance changes.
    pub fn balance_of_untracked(&self, id: &str) -> f64 {
        self.balances.with_untracked(|balances| {
            balances
                .iter()
                .find(|record| record.symbol_id == id)
                .map(|record| record.amount)
                .unwrap_or(0.0)
        })
    }
}

pub fn provide_market_context() -> MarketContext {
    let context = MarketContext::new();
    provide_context(context);
    context
}

pub fn use_market_context() -> MarketContext {
    expect_context::<MarketContext>()
}
