//! Batcher error definitions.

use odra::prelude::*;

/// Batcher errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BatcherError {
    // Amount errors (1xx)
    InvalidAmount = 100,
    InsufficientClaim = 101,
    Overflow = 102,

    // Liquidity errors (2xx)
    InsufficientPoolBalance = 200,
    ReserveInsolvent = 201,

    // Variant errors (3xx)
    NotImplemented = 300,

    // Access control errors (4xx)
    NotOwner = 400,
    NotPendingOwner = 401,
    Unauthorized = 402,

    // Token errors (5xx)
    TokenTransferFailed = 500,
    InsufficientTokenBalance = 501,
    InsufficientAllowance = 502,

    // Configuration errors (9xx)
    NotConfigured = 900,
}

impl BatcherError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Amount
            BatcherError::InvalidAmount => "Amount is not representable in collateral units",
            BatcherError::InsufficientClaim => "Withdraw exceeds outstanding claim",
            BatcherError::Overflow => "Arithmetic overflow",

            // Liquidity
            BatcherError::InsufficientPoolBalance => "Insufficient pool balance",
            BatcherError::ReserveInsolvent => "Reserve returned less than required",

            // Variant
            BatcherError::NotImplemented => "Operation not implemented by this batcher",

            // Access control
            BatcherError::NotOwner => "Unauthorized: caller is not owner",
            BatcherError::NotPendingOwner => "Unauthorized: caller is not pending owner",
            BatcherError::Unauthorized => "Unauthorized: caller is not minter",

            // Token
            BatcherError::TokenTransferFailed => "Token transfer failed",
            BatcherError::InsufficientTokenBalance => "Insufficient token balance",
            BatcherError::InsufficientAllowance => "Insufficient token allowance",

            // Config
            BatcherError::NotConfigured => "Required address not configured",
        }
    }
}

impl core::fmt::Display for BatcherError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<BatcherError> for OdraError {
    fn from(error: BatcherError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
