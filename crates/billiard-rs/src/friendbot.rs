use crate::{Signer, error::ClientError};
use tracing::info;

/// Funds fresh test-network accounts through a friendbot endpoint.
#[derive(Clone, Debug)]
pub struct Friendbot {
    url: String,
    client: reqwest::Client,
}

impl Friendbot {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request URL that funds `account`.
    pub fn funding_url(&self, account: &str) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}addr={}", self.url, separator, account)
    }

    /// Creates and funds the signer's account. Any non-2xx answer is a
    /// funding failure.
    pub async fn fund(&self, signer: &Signer) -> Result<(), ClientError> {
        let account = signer.public_key().to_string();
        let response = self.client.get(self.funding_url(&account)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::FundingFailed(format!(
                "{} answered {} for {}: {}",
                self.url, status, account, body
            )));
        }

        info!(account = %account, "funded account");
        Ok(())
    }
}
