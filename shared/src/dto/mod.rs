//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the swap frontend and the wallet backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Asset catalog, balances, withdraw info, and swap DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire via `#[serde(rename_all = "camelCase")]`
//! - **Optional numerics**: defaulted to zero with `#[serde(default)]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/wallet/withdraw-info?asset=BTC
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "availableWithdrawalAmount": 0.0125,
//!   "availableWithdrawalAmountUsd": 625.0,
//!   "lockedFundsAmount": 0.002,
//!   "lockedFundsAmountUsd": 100.0
//! }
//! ```

pub mod wallet;

pub use wallet::*;
