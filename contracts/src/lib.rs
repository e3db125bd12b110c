//! DSU Batcher Contracts
//!
//! Liquidity pools that convert between an 18-decimal synthetic token (DSU)
//! and its 6-decimal collateral (USDC) at 1:1 without calling the reserve on
//! every swap. Net flows are settled with the reserve in bulk.
//!
//! ## Architecture
//!
//! - **WrapOnlyBatcher**: Sells pooled DSU for USDC
//! - **TwoWayBatcher**: Wraps and unwraps; accepts USDC loans from depositors
//! - **Pool**: Token custody, rebalance and close shared by both batchers
//! - **ClaimLedger**: Per-depositor collateral claims
//! - **Wrapper**: Routes conversions through a batcher or the reserve
//!
//! ## Rounding
//!
//! Amounts are denominated in DSU units. USDC collected from a user is
//! rounded up; USDC paid out to a user is rounded down. The pool never loses
//! value to rounding.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod events;
pub mod units;
pub mod rebalance;

// Shared sub-modules
pub mod ledger;
pub mod ownership;
pub mod pool;

// Contract modules
pub mod wrap_only;
pub mod two_way;
pub mod wrapper;

// Test collaborators
pub mod mocks;
