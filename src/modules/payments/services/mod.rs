pub mod token_cache;
pub mod token_source;
pub mod tpay_client;

pub use token_cache::TokenCache;
pub use token_source::{StaticToken, TokenSource};
pub use tpay_client::TpayClient;
