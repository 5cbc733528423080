// ABOUTME: Structured error types for persistence operations
// ABOUTME: Callers map driver failures explicitly; every variant converts into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Opening the connection pool failed
    #[error("failed to connect to database: {0}")]
    Connection(String),

    /// A schema migration statement failed
    #[error("migration '{step}' failed: {reason}")]
    Migration {
        /// Name of the migration step
        step: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// A query failed while executing
    #[error("query failed during {operation}: {reason}")]
    Query {
        /// What the caller was doing
        operation: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// Transaction begin/commit/rollback failed
    #[error("transaction {stage} failed: {reason}")]
    Transaction {
        /// Which transaction stage failed
        stage: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// A stored value could not be decoded
    #[error("invalid stored value in column '{column}': {reason}")]
    InvalidData {
        /// Column holding the bad value
        column: &'static str,
        /// Why it is invalid
        reason: String,
    },
}

impl DatabaseError {
    /// Build a query error with the operation name for context
    pub fn query(operation: &'static str, reason: impl ToString) -> Self {
        Self::Query {
            operation,
            reason: reason.to_string(),
        }
    }

    /// Build a transaction stage error
    pub fn transaction(stage: &'static str, reason: impl ToString) -> Self {
        Self::Transaction {
            stage,
            reason: reason.to_string(),
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        Self::new(ErrorCode::DatabaseError, error.to_string()).with_source(error)
    }
}
