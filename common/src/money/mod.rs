//! Monetary unit type for ledger amounts

/// Signed ledger amount in indivisible units
///
/// Used both for operation deltas (positive for deposits, negative for
/// withdrawals) and for running balances, which the type allows to be
/// negative.
pub type Amount = i64;
