//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the swap frontend and the wallet
//! backend API. All DTOs use JSON serialization via `serde` for API
//! communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::wallet`]**: Asset catalog, balances, withdraw info, and swap DTOs
//! - **[`utils`]**: Shared numeric utilities
//!   - **[`utils::round_decimals`]**: Round a value to a fixed number of decimals
//!   - **[`utils::format_amount`]**: Render a value as a fixed-point decimal string
//!
//! ## Wire Format
//!
//! The wallet API speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Numeric fields the backend may omit
//! are marked `#[serde(default)]` and read as zero.
//!
//! ## Usage in Frontend
//!
//! ```rust,no_run
//! use shared::dto::wallet::WithdrawInfoResponse;
//!
//! # fn parse(body: &str) -> Result<(), serde_json::Error> {
//! let info: WithdrawInfoResponse = serde_json::from_str(body)?;
//! println!("available: {}", info.available_withdrawal_amount);
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
