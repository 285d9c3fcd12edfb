// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Deserialize;

/// Daily open/close prices from `/v1/open-close/{symbol}/{date}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenClose {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

/// Error payload Polygon sends with a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Outcome of an open/close lookup. A failed lookup is data, not an `Err`,
/// so the caller can show the API's own status and message.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenCloseResponse {
    Found(OpenClose),
    Failed(ApiErrorBody),
}
