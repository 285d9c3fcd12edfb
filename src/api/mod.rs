// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

pub mod polygon_client;

pub use polygon_client::PolygonClient;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{OpenCloseResponse, TickerDetails};

/// Market data lookups the stock check needs.
#[async_trait::async_trait]
pub trait StockDataClient {
    /// Reference data for `symbol` as of `date`. Any non-2xx response is an error.
    async fn get_ticker_details(&self, symbol: &str, date: NaiveDate) -> Result<TickerDetails>;

    /// Adjusted daily prices for `symbol` on `date`. A non-2xx response is
    /// returned as [`OpenCloseResponse::Failed`].
    async fn get_open_close(&self, symbol: &str, date: NaiveDate) -> Result<OpenCloseResponse>;
}
