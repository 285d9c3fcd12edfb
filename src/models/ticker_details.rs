// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Deserialize;

/// Reference data for a single ticker as returned by `/v3/reference/tickers/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerDetails {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub currency_name: String,
}

#[derive(Debug, Deserialize)]
pub struct TickerDetailsResponse {
    pub results: TickerDetails,
}
