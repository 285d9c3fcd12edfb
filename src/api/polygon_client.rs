// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use super::StockDataClient;
use crate::config::ApiKeyProvider;
use crate::models::{ApiErrorBody, OpenClose, OpenCloseResponse, TickerDetails, TickerDetailsResponse};

pub struct PolygonClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PolygonClient {
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from whatever supplies the API key.
    pub fn from_provider<P: ApiKeyProvider + ?Sized>(provider: &P, base_url: &str) -> Result<Self> {
        let api_key = provider.api_key()?;
        Ok(Self::with_base_url(api_key, base_url))
    }

    async fn send(&self, url: &str) -> Result<Response> {
        debug!(url, "polygon request");
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to send request")
    }
}

#[async_trait::async_trait]
impl StockDataClient for PolygonClient {
    async fn get_ticker_details(&self, symbol: &str, date: NaiveDate) -> Result<TickerDetails> {
        if symbol.is_empty() {
            anyhow::bail!("ticker empty");
        }

        let url = format!(
            "{}/v3/reference/tickers/{}?date={}",
            self.base_url,
            urlencoding::encode(symbol),
            date.format("%Y-%m-%d")
        );

        let response = self.send(&url).await?;
        let status = response.status();
        let text = response.text().await.context("Failed to get response text")?;

        if !status.is_success() {
            anyhow::bail!("API error: {} - {}", status, text);
        }

        let parsed: TickerDetailsResponse = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse ticker details response: {}", text))?;
        Ok(parsed.results)
    }

    async fn get_open_close(&self, symbol: &str, date: NaiveDate) -> Result<OpenCloseResponse> {
        if symbol.is_empty() {
            anyhow::bail!("ticker empty");
        }

        let url = format!(
            "{}/v1/open-close/{}/{}?adjusted=true",
            self.base_url,
            urlencoding::encode(symbol),
            date.format("%Y-%m-%d")
        );

        let response = self.send(&url).await?;
        let status = response.status();
        let text = response.text().await.context("Failed to get response text")?;

        if !status.is_success() {
            warn!(%status, symbol, "open/close lookup failed");
            let mut body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
            if body.status.is_empty() {
                body.status = status.as_u16().to_string();
            }
            return Ok(OpenCloseResponse::Failed(body));
        }

        let prices: OpenClose = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse open/close response: {}", text))?;
        Ok(OpenCloseResponse::Found(prices))
    }
}
