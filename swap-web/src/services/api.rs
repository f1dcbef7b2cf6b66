//! Wallet API calls
//!
//! Thin wrappers over `gloo-net`. Every failure becomes a `String` the caller
//! logs and recovers from; nothing here is fatal to the UI.

use gloo_net::http::Request;

use shared::dto::wallet::{SwapRequest, SwapResponse, WalletPortfolioResponse, WithdrawInfoResponse};

use crate::utils::constants::API_BASE;

/// Fetch the asset catalog, balances, and swap fee in one round trip.
pub async fn fetch_portfolio() -> Result<WalletPortfolioResponse, String> {
    let url = format!("{API_BASE}/api/wallet/portfolio");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| format!("portfolio request failed: {err}"))?;
    if !response.ok() {
        return Err(format!("portfolio request failed: HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| format!("invalid portfolio payload: {err}"))
}

/// Fetch withdrawable/locked funds for one asset.
pub async fn fetch_withdraw_info(asset_id: &str) -> Result<WithdrawInfoResponse, String> {
    let url = format!("{API_BASE}/api/wallet/withdraw-info?asset={asset_id}");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| format!("withdraw info request failed: {err}"))?;
    if !response.ok() {
        return Err(format!("withdraw info request failed: HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| format!("invalid withdraw info payload: {err}"))
}

/// Submit a validated swap.
pub async fn submit_swap(request: &SwapRequest) -> Result<SwapResponse, String> {
    let url = format!("{API_BASE}/api/wallet/swap");
    let response = Request::post(&url)
        .json(request)
        .map_err(|err| format!("swap request encode failed: {err}"))?
        .send()
        .await
        .map_err(|err| format!("swap request failed: {err}"))?;
    if !response.ok() {
        return Err(format!("swap request failed: HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| format!("invalid swap response: {err}"))
}
