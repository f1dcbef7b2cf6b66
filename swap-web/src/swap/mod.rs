//! Swap form model
//!
//! Pure derivations and validation for the swap draft. Components read
//! reactive state, call into these functions, and write the results back;
//! nothing in here touches the DOM or the network.

pub mod draft;
pub mod validate;

pub use draft::*;
pub use validate::*;
