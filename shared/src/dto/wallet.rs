use serde::{Deserialize, Serialize};

/// Catalog entry for a swappable asset.
///
/// `price` is the quote-currency price per unit; `network` is the chain the
/// asset settles on and is carried through the swap flow untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub network: String,
}

/// Held amount of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub symbol_id: String,
    pub amount: f64,
}

/// Wallet snapshot: the asset catalog, held balances, and the flat swap fee
/// rate, fetched in one request when the swap page mounts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletPortfolioResponse {
    #[serde(default)]
    pub symbols: Vec<Asset>,
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
    #[serde(default)]
    pub swap_fee: f64,
}

/// Withdrawable and locked funds for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawInfoResponse {
    #[serde(default)]
    pub available_withdrawal_amount: f64,
    #[serde(default)]
    pub available_withdrawal_amount_usd: f64,
    #[serde(default)]
    pub locked_funds_amount: f64,
    #[serde(default)]
    pub locked_funds_amount_usd: f64,
}

/// Swap submission payload. Amounts stay decimal strings end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub amount_from: String,
    pub amount_to: String,
    pub symbol_from: String,
    pub symbol_to: String,
    pub network_from: String,
    pub network_to: String,
}

/// Swap submission outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdraw_info_defaults_missing_fields() {
        let info: WithdrawInfoResponse =
            serde_json::from_str(r#"{"availableWithdrawalAmount": 12.5}"#).unwrap();
        assert_eq!(info.available_withdrawal_amount, 12.5);
        assert_eq!(info.available_withdrawal_amount_usd, 0.0);
        assert_eq!(info.locked_funds_amount, 0.0);
        assert_eq!(info.locked_funds_amount_usd, 0.0);
    }

    #[test]
    fn portfolio_wire_format() {
        let body = r#"{
            "symbols": [
                {"id": "BTC", "name": "Bitcoin", "price": 50000.0, "logo": "/img/btc.svg", "network": "bitcoin"},
                {"id": "ETH", "name": "Ethereum", "price": 2500.0}
            ],
            "balances": [{"symbolId": "BTC", "amount": 0.01}],
            "swapFee": 0.001
        }"#;
        let portfolio: WalletPortfolioResponse = serde_json::from_str(body).unwrap();
        assert_eq!(portfolio.symbols.len(), 2);
        assert_eq!(portfolio.symbols[1].logo, "");
        assert_eq!(portfolio.balances[0].symbol_id, "BTC");
        assert_eq!(portfolio.swap_fee, 0.001);
    }

    #[test]
    fn swap_request_serializes_camel_case() {
        let request = SwapRequest {
            amount_from: "0.0010".to_string(),
            amount_to: "0.02000000".to_string(),
            symbol_from: "BTC".to_string(),
            symbol_to: "ETH".to_string(),
            network_from: "bitcoin".to_string(),
            network_to: "ethereum".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amountFrom"], "0.0010");
        assert_eq!(json["networkTo"], "ethereum");
    }
}
