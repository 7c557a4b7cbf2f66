#![deny(missing_docs)]

//! # tatum-sdk
//!
//! Client for the Tatum blockchain API: server-side wallet generation,
//! account lookups, and transaction listings for a configurable
//! blockchain network.
//!
//! All key derivation happens on the Tatum side. This crate
//! authenticates requests, builds endpoint URLs, validates listing
//! filters, and maps transport and payload failures into [`TatumError`].
//!
//! # Example
//!
//! ```no_run
//! use tatum_sdk::{TatumClient, TatumConfig};
//!
//! # async fn example() -> Result<(), tatum_sdk::TatumError> {
//! let client = TatumClient::new(TatumConfig::new("my-api-key"));
//!
//! let wallet = client.generate_wallet().await?;
//! println!("address: {}", wallet.address);
//!
//! let account = client.get_account_details(&wallet.address).await?;
//! println!("account: {account}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::TatumClient;
pub use error::TatumError;
pub use types::{
    GeneratedWallet, TatumConfig, TransactionFilter, MAX_DERIVATION_INDEX, ORDER_BY_ASC,
    ORDER_BY_DESC,
};
