//! Collaborators for tests: a CEP-18 token, a reserve with adjustable
//! solvency and a batcher that can be made to pay short.

pub mod batcher;
pub mod reserve;
pub mod token;

pub use batcher::MockBatcher;
pub use reserve::MockReserve;
pub use token::MockToken;
