//! Async REST client for the platform wallet API.
//!
//! Wraps the two read endpoints the dashboard needs: the balance
//! snapshot and the mutation history window. Both are signed GETs (see
//! [`crate::auth`]). Failures map to [`DompetError`] variants; there is
//! no retry logic here; the view treats any failed load as "no data
//! available" and keeps whatever it showed before.

use reqwest::StatusCode;
use tracing::info;

use crate::auth;
use crate::config::ApiConfig;
use crate::models::ApiEnvelope;
use crate::models::balance::BalanceSnapshot;
use crate::models::mutation::MutationRecord;
use crate::{DompetError, Result};

const BALANCE_PATH: &str = "/wallet/balance";
const MUTATIONS_PATH: &str = "/wallet/mutations";

/// HTTP client bound to one wallet's credentials.
#[derive(Clone)]
pub struct WalletClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl WalletClient {
    /// Builds a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DompetError::Config`] if credentials are missing, since
    /// every wallet endpoint is private.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let (Some(api_key), Some(api_secret)) = (&config.api_key, &config.api_secret) else {
            return Err(DompetError::Config(
                "wallet endpoints require DOMPET_API_KEY and DOMPET_API_SECRET".to_string(),
            ));
        };

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            api_secret: api_secret.clone(),
        })
    }

    /// Fetches the current balance snapshot.
    ///
    /// The snapshot's structural invariants are checked at this
    /// boundary; a snapshot the server reports inconsistently is a
    /// [`DompetError::Malformed`], never rendered.
    pub async fn fetch_balance(&self) -> Result<BalanceSnapshot> {
        let snapshot: BalanceSnapshot = self.get(BALANCE_PATH, &[]).await?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Fetches up to `limit` mutation records, newest first.
    ///
    /// The API serves history descending by `created_at`; callers
    /// re-sort ascending (see [`crate::ledger::chronological`]) before
    /// chain validation.
    pub async fn fetch_mutations(&self, limit: usize) -> Result<Vec<MutationRecord>> {
        let limit = limit.to_string();
        let mutations: Vec<MutationRecord> =
            self.get(MUTATIONS_PATH, &[("limit", limit.as_str())]).await?;
        info!(count = mutations.len(), "fetched mutation history");
        Ok(mutations)
    }

    /// Fetches the balance and the mutation window concurrently.
    ///
    /// The two reads are independent; the pair is returned only once
    /// both settle, so a caller can never observe a torn half-update.
    pub async fn load_snapshot(
        &self,
        limit: usize,
    ) -> Result<(BalanceSnapshot, Vec<MutationRecord>)> {
        tokio::try_join!(self.fetch_balance(), self.fetch_mutations(limit))
    }

    /// Issues a signed GET and unwraps the platform envelope.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let nonce = auth::next_nonce();
        let signature = auth::sign(&self.api_secret, "GET", path, nonce)?;

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .header("X-Api-Key", &self.api_key)
            .header("X-Nonce", nonce.to_string())
            .header("X-Signature", signature)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DompetError::Auth(format!(
                "{path} rejected credentials ({status})"
            )));
        }
        if !status.is_success() {
            return Err(DompetError::Api(format!("{path} returned {status}")));
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.into_data()
    }
}
