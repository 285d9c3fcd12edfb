// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use thiserror::Error;

use crate::check::CheckError;
use crate::dates::DateError;

/// Top-level failures, each mapped to a process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("configuration error: {0:#}")]
    Config(anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Check(CheckError::Date(DateError::Unparseable(_))) => 2,
            Self::Check(_) => 1,
            Self::Config(_) => 3,
        }
    }
}
