// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures the persistence layer can signal. Reporting queries never
/// produce `NotFound`; empty result sets yield zero/empty values instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("inconsistent stored data: {0}")]
    Consistency(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }

    /// A value read back from the store that no longer parses, e.g. a
    /// mangled amount column.
    pub fn corrupt(msg: impl Into<String>) -> Self {
        StoreError::Consistency(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
