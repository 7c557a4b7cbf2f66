//! Tatum HTTP client for server-side wallets, accounts, and transactions.

use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::error::TatumError;
use crate::types::{GeneratedWallet, TatumConfig, TransactionFilter, MAX_DERIVATION_INDEX};

/// HTTP client for the Tatum API.
#[derive(Debug, Clone)]
pub struct TatumClient {
    /// Client configuration.
    config: TatumConfig,
    /// Default headers, fixed at construction.
    headers: HeaderMap,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl TatumClient {
    /// Create a new Tatum client with the given configuration.
    ///
    /// No network activity happens here; an invalid credential only
    /// surfaces as a failure on the first remote call.
    pub fn new(config: TatumConfig) -> Self {
        let headers = build_headers(&config);
        let client = reqwest::Client::new();
        Self {
            config,
            headers,
            client,
        }
    }

    /// Fetch account details for an address.
    ///
    /// The address is forwarded to the service as-is, without local
    /// validation.
    pub async fn get_account_details(&self, address: &str) -> Result<Value, TatumError> {
        let url = format!(
            "{}/v3/{}/account/{}",
            self.config.base_url, self.config.blockchain, address
        );
        self.get_json(&url).await
    }

    /// List transactions for an address, subject to `filter`.
    ///
    /// The filter is validated before any request is sent; the first
    /// violated rule is returned as [`TatumError::InvalidArgument`].
    pub async fn get_all_transactions(
        &self,
        address: &str,
        filter: &TransactionFilter,
    ) -> Result<Value, TatumError> {
        filter.validate()?;

        let url = format!(
            "{}/v3/{}/transaction/account/{}?{}",
            self.config.base_url,
            self.config.blockchain,
            address,
            filter.query_string()
        );
        let url = url.trim_end_matches('&').trim_end_matches('?');
        self.get_json(url).await
    }

    /// Generate a wallet at a random derivation index in
    /// `[1, MAX_DERIVATION_INDEX]`.
    ///
    /// Indices are drawn independently per call; collisions across calls
    /// are possible and not guarded against.
    pub async fn generate_wallet(&self) -> Result<GeneratedWallet, TatumError> {
        let index = rand::thread_rng().gen_range(1..=MAX_DERIVATION_INDEX);
        self.generate_wallet_at(index).await
    }

    /// Generate a wallet at a caller-chosen derivation index.
    ///
    /// Sequences the dependent remote derivations: fetch a mnemonic and
    /// xpub, derive the address from the xpub at `index`, then derive the
    /// private key from the mnemonic at `index`. The first failure aborts
    /// the sequence; no partial result is returned. The remote
    /// derivations are stateless lookups, so there is nothing to roll
    /// back.
    pub async fn generate_wallet_at(&self, index: u32) -> Result<GeneratedWallet, TatumError> {
        let (mnemonic, xpub) = self.create_wallet().await?;
        let address = self.derive_address(&xpub, index).await?;
        let private_key = self.derive_private_key(&mnemonic, index).await?;

        Ok(GeneratedWallet {
            index,
            mnemonic,
            xpub,
            address,
            private_key,
        })
    }

    /// Fetch a fresh mnemonic and extended public key.
    async fn create_wallet(&self) -> Result<(String, String), TatumError> {
        let url = format!(
            "{}/v3/{}/wallet",
            self.config.base_url, self.config.blockchain
        );
        let body = self.get_json(&url).await?;
        let mnemonic = required_str(&body, "mnemonic")?;
        let xpub = required_str(&body, "xpub")?;
        Ok((mnemonic, xpub))
    }

    /// Derive the address at `index` from an extended public key.
    async fn derive_address(&self, xpub: &str, index: u32) -> Result<String, TatumError> {
        let url = format!(
            "{}/v3/{}/address/{}/{}",
            self.config.base_url, self.config.blockchain, xpub, index
        );
        let body = self.get_json(&url).await?;
        required_str(&body, "address")
    }

    /// Derive the private key at `index` from a mnemonic.
    async fn derive_private_key(&self, mnemonic: &str, index: u32) -> Result<String, TatumError> {
        let url = format!(
            "{}/v3/{}/wallet/priv",
            self.config.base_url, self.config.blockchain
        );
        let body = serde_json::json!({ "mnemonic": mnemonic, "index": index });
        let body = self.post_json(&url, &body).await?;
        required_str(&body, "key")
    }

    /// Perform a GET request and translate the response.
    async fn get_json(&self, url: &str) -> Result<Value, TatumError> {
        tracing::debug!(url = %url, "sending GET request");
        let resp = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;
        translate(resp).await
    }

    /// Perform a POST request with a JSON body and translate the response.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TatumError> {
        tracing::debug!(url = %url, "sending POST request");
        let resp = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;
        translate(resp).await
    }
}

/// Map a raw response into parsed JSON or a [`TatumError`].
///
/// Every endpoint caller routes through here; none of them inspect
/// status codes or parse bodies themselves.
async fn translate(resp: reqwest::Response) -> Result<Value, TatumError> {
    let resp = resp.error_for_status()?;
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|_| TatumError::InvalidJson)
}

/// Extract a required string field from a response body.
fn required_str(body: &Value, field: &'static str) -> Result<String, TatumError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TatumError::MissingField(field))
}

/// Build the default header set from config.
///
/// A credential that is not a valid header value is skipped rather than
/// rejected; the remote service reports it on the first call.
fn build_headers(config: &TatumConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Ok(val) = HeaderValue::from_str(&config.api_key) {
        headers.insert("x-api-key", val);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
}
