//! The swap draft and its derived values.

use serde::Serialize;

use shared::dto::wallet::{Asset, SwapRequest};
use shared::utils::{format_amount, round_decimals};

use crate::utils::constants::{AMOUNT_FROM_DECIMALS, SWAP_MIN_USD};

/// The swap transaction in progress, as edited in the form.
///
/// Amounts are non-negative decimal strings, `"0"` by default. The symbols
/// reference catalog entries by id and never point at the same asset on both
/// sides; the networks ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapDraft {
    pub amount_from: String,
    pub amount_to: String,
    pub symbol_from: String,
    pub symbol_to: String,
    pub network_from: String,
    pub network_to: String,
}

impl Default for SwapDraft {
    fn default() -> Self {
        Self {
            amount_from: "0".to_string(),
            amount_to: "0".to_string(),
            symbol_from: String::new(),
            symbol_to: String::new(),
            network_from: String::new(),
            network_to: String::new(),
        }
    }
}

impl SwapDraft {
    /// Entered source amount as a number; empty or malformed input reads as 0.
    pub fn amount_from_value(&self) -> f64 {
        self.amount_from.trim().parse().unwrap_or(0.0)
    }
}

impl From<&SwapDraft> for SwapRequest {
    fn from(draft: &SwapDraft) -> Self {
        SwapRequest {
            amount_from: draft.amount_from.clone(),
            amount_to: draft.amount_to.clone(),
            symbol_from: draft.symbol_from.clone(),
            symbol_to: draft.symbol_to.clone(),
            network_from: draft.network_from.clone(),
            network_to: draft.network_to.clone(),
        }
    }
}

/// Smallest allowed source amount for an asset, in asset units.
///
/// A missing or zero price counts as 1, so the minimum stays discoverable
/// even while the catalog is incomplete.
pub fn min_swap(price: Option<f64>) -> f64 {
    let price = price.filter(|p| *p != 0.0).unwrap_or(1.0);
    round_decimals(SWAP_MIN_USD / price, 4)
}

/// Units of the destination asset per unit of the source asset.
///
/// An unresolved source prices at 0 and an unresolved destination at 1;
/// missing catalog data yields a rate of 0 instead of an error.
pub fn exchange_rate(from_price: Option<f64>, to_price: Option<f64>) -> f64 {
    from_price.unwrap_or(0.0) / to_price.unwrap_or(1.0)
}

/// Destination amount for a given source amount and rate.
pub fn converted_amount(amount_from: f64, rate: f64) -> f64 {
    round_decimals(amount_from * rate, 8)
}

/// Default source amount when an asset enters the "from" slot: never below
/// the discoverable minimum, never above holdings.
pub fn initial_amount(balance: f64, min_swap: f64) -> f64 {
    balance.min(min_swap)
}

/// Source amount for the "max" action.
pub fn max_amount(balance: f64) -> f64 {
    round_decimals(balance, 4)
}

/// Normalize the entered source amount when the field loses focus.
///
/// With enough balance to meet the minimum, the input is clamped into
/// `[min_swap, balance]`. With less, it is forced down to the balance and the
/// submit gate reports the shortfall instead. `balance == min_swap` leaves
/// the input untouched.
pub fn clamp_on_blur(input: f64, min_swap: f64, balance: f64) -> f64 {
    if balance > min_swap {
        if input < min_swap {
            return min_swap;
        }
        if input > balance {
            return balance;
        }
    }
    if balance < min_swap {
        return balance;
    }
    input
}

/// Source amount after the direction flip: the previous destination amount,
/// capped at what the user actually holds of the new source asset.
pub fn amount_after_flip(prev_amount_to: &str, balance_new_from: f64) -> String {
    let prev: f64 = prev_amount_to.trim().parse().unwrap_or(0.0);
    if prev > balance_new_from {
        format_amount(balance_new_from, AMOUNT_FROM_DECIMALS)
    } else {
        prev_amount_to.trim().to_string()
    }
}

/// Catalog as offered by the picker for one slot: everything except the
/// asset currently selected on the opposite side.
pub fn selectable_assets(catalog: &[Asset], excluded_id: &str) -> Vec<Asset> {
    catalog
        .iter()
        .filter(|asset| asset.id != excluded_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::AMOUNT_TO_DECIMALS;

    fn asset(id: &str, price: f64) -> Asset {
        Asset {
            id: id.to_string(),
            name: id.to_string(),
            price,
            logo: String::new(),
            network: String::new(),
        }
    }

    #[test]
    fn min_swap_divides_by_price() {
        assert_eq!(min_swap(Some(50_000.0)), 0.0010);
        assert_eq!(min_swap(Some(2_500.0)), 0.02);
    }

    #[test]
    fn min_swap_treats_missing_price_as_one() {
        assert_eq!(min_swap(None), SWAP_MIN_USD);
        assert_eq!(min_swap(Some(0.0)), SWAP_MIN_USD);
    }

    #[test]
    fn exchange_rate_degrades_to_zero() {
        assert_eq!(exchange_rate(Some(50_000.0), Some(2_500.0)), 20.0);
        assert_eq!(exchange_rate(None, Some(2_500.0)), 0.0);
        assert_eq!(exchange_rate(None, None), 0.0);
    }

    #[test]
    fn converted_amount_rounds_to_eight_decimals() {
        assert_eq!(converted_amount(0.0010, 20.0), 0.02);
        assert_eq!(
            format_amount(converted_amount(0.0010, 20.0), AMOUNT_TO_DECIMALS),
            "0.02000000"
        );
        assert_eq!(converted_amount(1.0 / 3.0, 1.0), 0.33333333);
    }

    #[test]
    fn max_amount_rounds_to_four_decimals() {
        assert_eq!(max_amount(0.123456), 0.1235);
        assert_eq!(max_amount(100.0), 100.0);
    }

    #[test]
    fn blur_clamps_up_to_minimum() {
        assert_eq!(clamp_on_blur(5.0, 10.0, 100.0), 10.0);
    }

    #[test]
    fn blur_clamps_down_to_balance() {
        assert_eq!(clamp_on_blur(150.0, 10.0, 100.0), 100.0);
    }

    #[test]
    fn blur_keeps_input_inside_range() {
        assert_eq!(clamp_on_blur(50.0, 10.0, 100.0), 50.0);
    }

    #[test]
    fn blur_forces_balance_when_minimum_unreachable() {
        assert_eq!(clamp_on_blur(3.0, 10.0, 5.0), 5.0);
        assert_eq!(clamp_on_blur(12.0, 10.0, 5.0), 5.0);
    }

    #[test]
    fn blur_leaves_input_when_balance_equals_minimum() {
        assert_eq!(clamp_on_blur(3.0, 10.0, 10.0), 3.0);
    }

    #[test]
    fn flip_keeps_destination_amount_when_affordable() {
        assert_eq!(amount_after_flip("0.02000000", 1.0), "0.02000000");
    }

    #[test]
    fn flip_caps_at_new_balance() {
        assert_eq!(amount_after_flip("0.5", 0.25), "0.2500");
    }

    #[test]
    fn picker_excludes_opposite_side() {
        let catalog = vec![asset("BTC", 50_000.0), asset("ETH", 2_500.0), asset("SOL", 150.0)];
        let offered = selectable_assets(&catalog, "ETH");
        assert_eq!(offered.len(), 2);
        assert!(offered.iter().all(|a| a.id != "ETH"));
    }

    // Bootstrap numbers for a BTC@50000 / ETH@2500 catalog with 0.01 BTC held.
    #[test]
    fn btc_to_eth_bootstrap() {
        let btc = asset("BTC", 50_000.0);
        let eth = asset("ETH", 2_500.0);

        let min = min_swap(Some(btc.price));
        assert_eq!(min, 0.0010);

        let seed = initial_amount(0.01, min);
        assert_eq!(format_amount(seed, AMOUNT_FROM_DECIMALS), "0.0010");

        let rate = exchange_rate(Some(btc.price), Some(eth.price));
        assert_eq!(rate, 20.0);
        assert_eq!(
            format_amount(converted_amount(seed, rate), AMOUNT_TO_DECIMALS),
            "0.02000000"
        );
    }

    #[test]
    fn draft_amount_parses_loosely() {
        let mut draft = SwapDraft::default();
        assert_eq!(draft.amount_from_value(), 0.0);
        draft.amount_from = "  1.25 ".to_string();
        assert_eq!(draft.amount_from_value(), 1.25);
        draft.amount_from = "not a number".to_string();
        assert_eq!(draft.amount_from_value(), 0.0);
    }

    #[test]
    fn swap_request_carries_networks() {
        let draft = SwapDraft {
            amount_from: "0.0010".to_string(),
            amount_to: "0.02000000".to_string(),
            symbol_from: "BTC".to_string(),
            symbol_to: "ETH".to_string(),
            network_from: "bitcoin".to_string(),
            network_to: "ethereum".to_string(),
        };
        let request = SwapRequest::from(&draft);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amountFrom"], "0.0010");
        assert_eq!(json["networkFrom"], "bitcoin");
        assert_eq!(json["networkTo"], "ethereum");
    }
}
