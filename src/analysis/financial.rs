//! Financial transaction screening.

use serde::Serialize;

use crate::dataset::{FinancialRecord, Transaction};

/// Suspicious-transaction summary for one athlete's financial record.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_transactions: usize,
    pub suspicious_count: usize,
    pub details: Vec<Transaction>,
}

/// Count suspicious transactions, keeping the matching rows in input order.
pub fn summarize(financial: &FinancialRecord) -> FinancialSummary {
    let details: Vec<Transaction> = financial
        .transactions
        .iter()
        .filter(|txn| txn.suspicious)
        .cloned()
        .collect();

    FinancialSummary {
        total_transactions: financial.transactions.len(),
        suspicious_count: details.len(),
        details,
    }
}
