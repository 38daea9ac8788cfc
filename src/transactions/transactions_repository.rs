use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::schema::transactions;
use crate::transactions::transactions_errors::{Result, TransactionError};
use crate::transactions::transactions_model::{Transaction, TransactionDB};
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

/// Repository for managing transaction records in the database
pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        transactions::table
            .find(transaction_id)
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .optional()?
            .map(Transaction::from)
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()))
    }

    fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .select(TransactionDB::as_select())
            .order(transactions::transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Transaction::from).collect())
            .map_err(TransactionError::from)
    }

    fn get_transactions_by_tag(&self, user_id: &str, tag: &str) -> Result<Vec<Transaction>> {
        // Tags are stored as a JSON array; match on the parsed values rather
        // than on a substring of the raw column.
        let all = self.get_transactions_by_user(user_id)?;
        Ok(all
            .into_iter()
            .filter(|t| t.tags.iter().any(|candidate| candidate == tag))
            .collect())
    }

    fn get_all_transactions(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        transactions::table
            .select(TransactionDB::as_select())
            .order(transactions::transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Transaction::from).collect())
            .map_err(TransactionError::from)
    }

    fn insert(&self, transaction: Transaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        let row = TransactionDB::from(&transaction);
        diesel::insert_into(transactions::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(transaction)
    }

    fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        let row = TransactionDB::from(&transaction);
        let affected = diesel::update(transactions::table.find(&transaction.id))
            .set(&row)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(TransactionError::NotFound(transaction.id));
        }

        Ok(transaction)
    }

    fn delete(&self, transaction_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        let affected =
            diesel::delete(transactions::table.find(transaction_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(TransactionError::NotFound(transaction_id.to_string()));
        }

        Ok(affected)
    }
}
