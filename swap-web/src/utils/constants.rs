//! Application constants

pub const API_BASE: &str = "http://127.0.0.1:3001";

/// Smallest swap size, in quote currency (USD).
pub const SWAP_MIN_USD: f64 = 50.0;

/// Display precision for source amounts and balances.
pub const AMOUNT_FROM_DECIMALS: usize = 4;
/// Display precision for destination amounts, rates, and fees.
pub const AMOUNT_TO_DECIMALS: usize = 8;

// UI constants
pub const QUOTE_DEBOUNCE_MS: u32 = 300;
pub const NOTIFY_DISMISS_MS: u32 = 4000;

/// Below this viewport width the shell switches to its compact layout.
pub const COMPACT_LAYOUT_MAX_WIDTH: f64 = 640.0;

pub const FALLBACK_ASSET_LOGO: &str = "/img/asset-generic.svg";
