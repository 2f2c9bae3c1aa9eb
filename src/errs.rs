// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("entry not found")]
    NotFound,
    #[error("container is empty")]
    EmptyContainer,
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("data insertion would exceed maximum capacity")]
    DataExceedsMaximum,
}

pub type Result<T> = std::result::Result<T, Error>;
