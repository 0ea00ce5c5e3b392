//! TBC TPay e-commerce client
//!
//! A thin async client for the TPay checkout API (`modules::payments`) and a
//! webhook receiver that resolves gateway notifications to a payment status
//! (`modules::webhooks`).

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Currency, GatewayOperation, Result};
pub use modules::payments;
pub use modules::payments::{Credentials, TpayClient};
pub use modules::webhooks;
