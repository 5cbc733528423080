// ABOUTME: RAII transaction guard that rolls back unless explicitly committed
// ABOUTME: Every List Mutator batch runs inside exactly one guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Transaction management with an RAII guard
//!
//! ```text
//! let mut guard = db.begin().await?;
//! shopping_list::insert_item(guard.executor()?, &item).await?;
//! shopping_list::update_item_name(guard.executor()?, user_id, other_id, "3 eggs").await?;
//! guard.commit().await?;
//! ```
//!
//! If anything returns early before `commit()`, the guard is dropped and the
//! whole batch is rolled back by `SQLx`.

use larder_core::errors::{AppResult, DatabaseError};
use sqlx::{Database, Sqlite, Transaction};
use tracing::{debug, warn};

/// RAII guard for database transactions ensuring automatic rollback on drop
pub struct TransactionGuard<'c, DB: Database> {
    transaction: Option<Transaction<'c, DB>>,
    committed: bool,
}

impl<'c, DB: Database> TransactionGuard<'c, DB> {
    /// Wrap a transaction obtained from `pool.begin()`
    #[must_use]
    pub fn new(transaction: Transaction<'c, DB>) -> Self {
        debug!("Transaction opened");
        Self {
            transaction: Some(transaction),
            committed: false,
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction was already consumed or the commit fails
    pub async fn commit(mut self) -> AppResult<()> {
        let tx = self
            .transaction
            .take()
            .ok_or_else(|| DatabaseError::transaction("commit", "transaction already consumed"))?;
        tx.commit()
            .await
            .map_err(|e| DatabaseError::transaction("commit", e))?;
        self.committed = true;
        debug!("Transaction committed");
        Ok(())
    }

    /// Explicitly roll back the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction was already consumed or the rollback fails
    pub async fn rollback(mut self) -> AppResult<()> {
        let tx = self
            .transaction
            .take()
            .ok_or_else(|| DatabaseError::transaction("rollback", "transaction already consumed"))?;
        tx.rollback()
            .await
            .map_err(|e| DatabaseError::transaction("rollback", e))?;
        debug!("Transaction rolled back explicitly");
        Ok(())
    }

    /// Check if the transaction has been committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// Connection to run queries on inside the transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was used after commit or rollback
    pub fn executor(&mut self) -> AppResult<&mut <DB as Database>::Connection> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            DatabaseError::transaction("execute", "guard used after commit/rollback").into()
        })
    }
}

impl<DB: Database> Drop for TransactionGuard<'_, DB> {
    fn drop(&mut self) {
        if self.transaction.is_some() && !self.committed {
            warn!("Transaction dropped without commit; rolling back");
        }
    }
}

/// `SQLite` transaction guard
pub type SqliteTransactionGuard<'c> = TransactionGuard<'c, Sqlite>;
