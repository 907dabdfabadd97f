//! NLOV Cashout Module
//!
//! Domain core for cashing out earned NLOV tokens:
//! - Fixed catalog of payout methods with per-method bounds and fees
//! - Ordered, short-circuiting cashout validation
//! - thiserror for clean error handling
//! - Fee and net amounts derived on demand, never stored
//! - Receipt generation with an opaque base-36 transaction identifier
//!
//! The crate is pure and synchronous; everything asynchronous (the simulated
//! processing delay, the UI event loop) lives in the `earnings-gui` binary.

pub mod method;
pub mod request;
pub mod validate;

pub use method::{CatalogError, PayoutCatalog, PayoutMethod, PayoutMethodId};
pub use request::{generate_transaction_id, CashoutReceipt, CashoutRequest};
pub use validate::{validate, validate_amount, CashoutError};
