// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

// Re-export model modules
mod open_close;
mod ticker_details;

pub use open_close::*;
pub use ticker_details::*;
