use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::reports_model::Report;
use crate::transactions::{Transaction, TransactionRepositoryTrait, TransactionType};
use crate::Result;

/// Folds a sequence of transactions into a report.
///
/// Pure and order-independent: exact decimal accumulation means a permuted
/// input produces an identical report. Amounts are taken as-is; they were
/// normalized to the owner's base currency when written.
pub fn aggregate<'a, I>(transactions: I) -> Report
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut report = Report::empty();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => {
                report.total_income += transaction.amount;
            }
            TransactionType::Expense => {
                report.total_expense += transaction.amount;
                *report
                    .category_breakdown
                    .entry(transaction.category)
                    .or_insert(Decimal::ZERO) += transaction.amount;
            }
        }
    }

    report.net_balance = report.total_income - report.total_expense;
    report
}

/// Trait defining the contract for report generation
pub trait ReportServiceTrait: Send + Sync {
    fn financial_report(&self, user_id: &str) -> Result<Report>;
}

pub struct ReportService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl ReportService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn financial_report(&self, user_id: &str) -> Result<Report> {
        let transactions = self
            .transaction_repository
            .get_transactions_by_user(user_id)?;

        debug!(
            "Generating financial report for user {} over {} transactions",
            user_id,
            transactions.len()
        );

        Ok(aggregate(&transactions))
    }
}
