//! Tatum data types: configuration, transaction filters, and wallet records.

use serde::{Deserialize, Serialize};

use crate::error::TatumError;

/// Sort transactions ascending by block timestamp.
pub const ORDER_BY_ASC: &str = "block_timestamp,asc";

/// Sort transactions descending by block timestamp.
pub const ORDER_BY_DESC: &str = "block_timestamp,desc";

/// Largest derivation index accepted by the Tatum API.
pub const MAX_DERIVATION_INDEX: u32 = 2_147_483_647;

/// Configuration for a [`TatumClient`](crate::TatumClient).
#[derive(Debug, Clone)]
pub struct TatumConfig {
    /// API key sent via the `x-api-key` header. Never validated locally;
    /// a bad key only surfaces on the first remote call.
    pub api_key: String,
    /// Blockchain the client targets (path segment in every endpoint).
    pub blockchain: String,
    /// Base URL for the Tatum API (e.g. `https://api.tatum.io`).
    pub base_url: String,
}

impl TatumConfig {
    /// Configuration for the public Tatum service with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for TatumConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            blockchain: "tron".to_string(),
            base_url: "https://api.tatum.io".to_string(),
        }
    }
}

/// A wallet generated by the Tatum API.
///
/// Produced fresh on every call and never persisted. Indices are not
/// deduplicated across calls. The mnemonic and private key are secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWallet {
    /// Derivation index the address and private key were derived at.
    pub index: u32,
    /// Secret seed phrase.
    pub mnemonic: String,
    /// Extended public key.
    pub xpub: String,
    /// Address derived from the xpub at `index`.
    pub address: String,
    /// Private key derived from the mnemonic at `index`.
    pub private_key: String,
}

/// Filter parameters for listing account transactions.
///
/// Transient, built per call. Confirmation values stay literal strings
/// because the remote contract is stringly typed and the accepted
/// literals are part of the wire behavior.
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    /// Only confirmed transactions; must be `"true"` or `"false"`.
    pub only_confirmed: Option<String>,
    /// Only unconfirmed transactions; must be `"true"` or `"false"`.
    pub only_unconfirmed: Option<String>,
    /// Only transactions received by this address. Mutually exclusive
    /// with `only_from`.
    pub only_to: Option<String>,
    /// Only transactions sent by this address. Mutually exclusive with
    /// `only_to`.
    pub only_from: Option<String>,
    /// Sort order; one of [`ORDER_BY_ASC`] or [`ORDER_BY_DESC`].
    pub order_by: String,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            only_confirmed: None,
            only_unconfirmed: None,
            only_to: None,
            only_from: None,
            order_by: ORDER_BY_ASC.to_string(),
        }
    }
}

impl TransactionFilter {
    /// Check the filter's preconditions in a fixed order and return the
    /// first violated rule.
    pub fn validate(&self) -> Result<(), TatumError> {
        if let Some(value) = &self.only_confirmed {
            if value != "true" && value != "false" {
                return Err(TatumError::InvalidArgument(
                    "only_confirmed must be either 'true' or 'false'".to_string(),
                ));
            }
        }

        if let Some(value) = &self.only_unconfirmed {
            if value != "true" && value != "false" {
                return Err(TatumError::InvalidArgument(
                    "only_unconfirmed must be either 'true' or 'false'".to_string(),
                ));
            }
        }

        if let (Some(confirmed), Some(unconfirmed)) =
            (&self.only_confirmed, &self.only_unconfirmed)
        {
            if confirmed != "true" && unconfirmed != "false" {
                return Err(TatumError::InvalidArgument(
                    "only one of only_confirmed or only_unconfirmed can be set to a non-default value"
                        .to_string(),
                ));
            }
        }

        if self.order_by != ORDER_BY_ASC && self.order_by != ORDER_BY_DESC {
            return Err(TatumError::InvalidArgument(
                "order_by must be either 'block_timestamp,asc' or 'block_timestamp,desc'"
                    .to_string(),
            ));
        }

        if self.only_to.is_some() && self.only_from.is_some() {
            return Err(TatumError::InvalidArgument(
                "only one of only_to or only_from can be provided, not both".to_string(),
            ));
        }

        // Wider than the non-default check above: both given always fails,
        // even for default-equivalent values.
        if self.only_confirmed.is_some() && self.only_unconfirmed.is_some() {
            return Err(TatumError::InvalidArgument(
                "only one of only_confirmed or only_unconfirmed can be provided, not both"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Encode the filter as the endpoint's query string, parameters in a
    /// fixed order. Default-equivalent confirmation values are omitted.
    pub fn query_string(&self) -> String {
        let mut query = String::new();

        if let Some(value) = self.only_confirmed.as_deref().filter(|v| *v != "true") {
            query.push_str(&format!("onlyConfirmed={value}&"));
        } else if let Some(value) = self.only_unconfirmed.as_deref().filter(|v| *v != "false") {
            query.push_str(&format!("onlyUnconfirmed={value}&"));
        }

        if let Some(to) = &self.only_to {
            query.push_str(&format!("onlyTo={to}&"));
        } else if let Some(from) = &self.only_from {
            query.push_str(&format!("onlyFrom={from}&"));
        }

        query.push_str(&format!("orderBy={}", self.order_by));
        query
    }
}
