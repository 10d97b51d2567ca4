use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{BudgetInterval, Cents, Expense, Transaction};

/// Categories seeded on first run.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Housing",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Other",
];

/// How many recent transactions the history keeps.
pub const DEFAULT_HISTORY_LENGTH: usize = 5;

/// The full tracker state: everything that persists between runs. Field
/// defaults mirror the first-run state, so a file missing any field (or the
/// whole file missing) deserializes into something usable.
///
/// Mutations here are pure state transitions; validation (positive amounts,
/// known categories) happens in the application service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub balance_cents: Cents,
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
    #[serde(default = "default_history_length")]
    pub history_length: usize,
    #[serde(default)]
    pub budget_cents: Cents,
    #[serde(default = "default_interval")]
    pub budget_interval: BudgetInterval,
    #[serde(default)]
    pub category_budgets: HashMap<String, Cents>,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_history_length() -> usize {
    DEFAULT_HISTORY_LENGTH
}

fn default_interval() -> BudgetInterval {
    BudgetInterval::Month
}

impl Default for LedgerState {
    fn default() -> Self {
        let mut state = Self {
            expenses: Vec::new(),
            categories: default_categories(),
            balance_cents: 0,
            transaction_history: Vec::new(),
            history_length: DEFAULT_HISTORY_LENGTH,
            budget_cents: 0,
            budget_interval: BudgetInterval::Month,
            category_budgets: HashMap::new(),
        };
        state.seed_category_budgets();
        state
    }
}

impl LedgerState {
    /// Ensure every category has a budget entry (0 = unset). Called after
    /// load so categories persisted without a budget pick one up.
    pub fn seed_category_budgets(&mut self) {
        for category in &self.categories {
            self.category_budgets.entry(category.clone()).or_insert(0);
        }
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Append an expense: the list grows, the balance drops, and the
    /// history logs it under the expense's date. Caller has validated the
    /// amount and category.
    pub fn record_expense(&mut self, date: NaiveDate, category: String, amount_cents: Cents) {
        self.expenses
            .push(Expense::new(date, category.clone(), amount_cents));
        self.balance_cents -= amount_cents;

        let timestamp = date_to_timestamp(date);
        self.push_transaction(Transaction::expense(timestamp, category, amount_cents));
    }

    /// Add funds to the balance and log a deposit.
    pub fn record_deposit(&mut self, amount_cents: Cents, now: DateTime<Utc>) {
        self.balance_cents += amount_cents;
        self.push_transaction(Transaction::deposit(now, amount_cents));
    }

    /// Add a category with its budget seeded to 0. Returns false on
    /// duplicates, leaving the state untouched.
    pub fn add_category(&mut self, name: &str) -> bool {
        if self.has_category(name) {
            return false;
        }
        self.categories.push(name.to_string());
        self.category_budgets.insert(name.to_string(), 0);
        true
    }

    /// Remove a category and its budget entry. Returns false if unknown.
    /// Expenses already recorded under the category are left alone.
    pub fn delete_category(&mut self, name: &str) -> bool {
        let Some(pos) = self.categories.iter().position(|c| c == name) else {
            return false;
        };
        self.categories.remove(pos);
        self.category_budgets.remove(name);
        true
    }

    /// Reset expenses, balance, history and all budgets. Categories and the
    /// budget interval survive a clear; category budgets go back to 0.
    pub fn clear(&mut self) {
        self.expenses.clear();
        self.balance_cents = 0;
        self.transaction_history.clear();
        self.budget_cents = 0;
        self.category_budgets.clear();
        self.seed_category_budgets();
    }

    fn push_transaction(&mut self, transaction: Transaction) {
        self.transaction_history.push(transaction);
        while self.transaction_history.len() > self.history_length {
            self.transaction_history.remove(0);
        }
    }
}

/// Expense dates are calendar days; the history timestamps them at UTC
/// midnight.
fn date_to_timestamp(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is valid for any date")
        .and_utc()
}
