// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use chrono::NaiveDate;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

use crate::api::StockDataClient;
use crate::dates::{self, DateError};
use crate::models::{OpenClose, OpenCloseResponse, TickerDetails};
use crate::utils::{format_price, render_table};

/// A validated lookup: the uppercased symbol and the date to query.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub symbol: String,
    pub date: NaiveDate,
}

impl CheckRequest {
    /// Normalises `symbol` and resolves the optional `--date` against `today`.
    pub fn new(symbol: &str, date: Option<&str>, today: NaiveDate) -> Result<Self, DateError> {
        Ok(Self {
            symbol: symbol.trim().to_uppercase(),
            date: resolve_date(date, today)?,
        })
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error("Could not retrieve stock data.\nStatus: {status}\nMessage: {message}")]
    PricesUnavailable { status: String, message: String },

    /// Ticker details lookup or transport failure.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolves the date to query: the parsed `--date` (which must be in the
/// past) or the previous weekday. Either way it must be within the last year.
pub fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let date = match date {
        Some(input) => {
            let parsed = dates::parse_date(input, today)?;
            dates::ensure_in_past(parsed, today)?;
            parsed
        }
        None => dates::previous_weekday(today),
    };
    dates::ensure_within_last_year(date, today)?;
    Ok(date)
}

/// Looks up `request.symbol` and writes the price report to `out`.
///
/// Ticker details are fetched first and any failure there aborts the check.
/// A failed price lookup is reported as [`CheckError::PricesUnavailable`].
/// Nothing is written to `out` unless both lookups succeed.
pub async fn check_stock<C, W>(client: &C, request: &CheckRequest, out: &mut W) -> Result<(), CheckError>
where
    C: StockDataClient + ?Sized,
    W: Write,
{
    let symbol = request.symbol.as_str();
    let date = request.date;
    info!(symbol, %date, "checking stock");

    let ticker = client.get_ticker_details(symbol, date).await?;
    debug!(name = %ticker.name, "ticker details fetched");

    let prices = match client.get_open_close(symbol, date).await? {
        OpenCloseResponse::Found(prices) => prices,
        OpenCloseResponse::Failed(body) => {
            return Err(CheckError::PricesUnavailable {
                status: body.status,
                message: body.message,
            });
        }
    };

    write_report(out, &ticker, date, &prices)?;
    Ok(())
}

fn write_report<W: Write>(
    out: &mut W,
    ticker: &TickerDetails,
    date: NaiveDate,
    prices: &OpenClose,
) -> std::io::Result<()> {
    writeln!(out, "Stock: {} ({})", ticker.name, ticker.ticker)?;
    writeln!(out, "Date: {}", date.format("%Y-%m-%d"))?;
    writeln!(out, "Currency: {}", ticker.currency_name)?;

    let row = vec![
        format_price(prices.open),
        format_price(prices.close),
        format_price(prices.high),
        format_price(prices.low),
    ];
    writeln!(out, "{}", render_table(&["Open", "Close", "High", "Low"], &[row]))?;
    out.flush()
}
