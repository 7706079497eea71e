//! Common types and utilities for the account ledger
//!
//! This library contains the shared domain layer used by the ledger
//! service and by repository implementations plugged into it. It provides
//! a unified approach to error handling, the account model, and the
//! monetary unit type.

pub mod error;
pub mod model;
pub mod money;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use money::*;
