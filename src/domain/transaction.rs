use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Expense,
    Deposit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Deposit => "Deposit",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged event (expense or deposit) in the bounded recent-activity
/// history. The history keeps only the most recent N entries; trimming is
/// handled by the ledger state, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    pub category: String,
    pub amount_cents: Cents,
}

impl Transaction {
    pub fn expense(timestamp: DateTime<Utc>, category: impl Into<String>, amount_cents: Cents) -> Self {
        Self {
            kind: TransactionKind::Expense,
            timestamp,
            category: category.into(),
            amount_cents,
        }
    }

    /// Deposits carry no user category; they are labeled "Deposit" in the
    /// history just like the category column of an expense entry.
    pub fn deposit(timestamp: DateTime<Utc>, amount_cents: Cents) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            timestamp,
            category: "Deposit".to_string(),
            amount_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_constructors() {
        let now = Utc::now();

        let expense = Transaction::expense(now, "Food", 5000);
        assert_eq!(expense.kind, TransactionKind::Expense);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount_cents, 5000);

        let deposit = Transaction::deposit(now, 10000);
        assert_eq!(deposit.kind, TransactionKind::Deposit);
        assert_eq!(deposit.category, "Deposit");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
    }
}
