use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::domain::{
    category_spent, category_totals, sorted_by_date, spend_between, total_spending,
    BudgetInterval, Cents, LedgerState, Transaction,
};
use crate::storage::Repository;

use super::{
    AppError, BudgetOverview, BudgetWindow, CategoryBudgetRow, CategoryTotal, StatusReport,
    SummaryReport,
};

/// High-level tracker operations over the in-memory state plus its backing
/// file. This is the primary interface for any client (the console menu,
/// tests).
pub struct TrackerService {
    state: LedgerState,
    repo: Repository,
}

impl TrackerService {
    /// Open the tracker backed by the given file. A missing file starts
    /// from defaults; an unreadable or corrupt file also starts from
    /// defaults, with the error handed back for the caller to report.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<anyhow::Error>) {
        let repo = Repository::new(path);

        let (mut state, load_error) = match repo.load() {
            Ok(Some(state)) => (state, None),
            Ok(None) => (LedgerState::default(), None),
            Err(err) => (LedgerState::default(), Some(err)),
        };
        state.seed_category_budgets();

        (Self { state, repo }, load_error)
    }

    // ========================
    // Recording
    // ========================

    /// Record an expense: balance drops by the amount, one expense and one
    /// history entry are appended.
    pub fn record_expense(
        &mut self,
        amount_cents: Cents,
        category: &str,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount);
        }
        if !self.state.has_category(category) {
            return Err(AppError::UnknownCategory(category.to_string()));
        }

        self.state
            .record_expense(date, category.to_string(), amount_cents);
        Ok(())
    }

    /// Add funds to the balance. Returns the new balance.
    pub fn record_deposit(&mut self, amount_cents: Cents) -> Result<Cents, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount);
        }

        self.state.record_deposit(amount_cents, Utc::now());
        Ok(self.state.balance_cents)
    }

    // ========================
    // Reports
    // ========================

    /// Build the expense summary, or None when nothing is recorded yet.
    pub fn summary(&self) -> Option<SummaryReport> {
        if self.state.expenses.is_empty() {
            return None;
        }

        let totals = category_totals(&self.state.expenses)
            .into_iter()
            .map(|(category, total_cents)| CategoryTotal {
                category,
                total_cents,
            })
            .collect();

        Some(SummaryReport {
            expenses: sorted_by_date(&self.state.expenses),
            category_totals: totals,
            total_cents: total_spending(&self.state.expenses),
        })
    }

    /// Current balance, spend inside the active budget window, category
    /// budget lines, and recent transactions newest-first.
    pub fn status(&self, today: NaiveDate) -> StatusReport {
        let window = (self.state.budget_cents > 0).then(|| {
            let start = self.state.budget_interval.window_start(today);
            let spent = spend_between(&self.state.expenses, start, today);
            BudgetWindow {
                interval: self.state.budget_interval,
                budget_cents: self.state.budget_cents,
                spent_cents: spent,
                remaining_cents: self.state.budget_cents - spent,
                window_start: start,
            }
        });

        let mut recent: Vec<Transaction> = self.state.transaction_history.clone();
        recent.reverse();

        StatusReport {
            balance_cents: self.state.balance_cents,
            window,
            category_rows: self.category_rows(),
            recent_transactions: recent,
        }
    }

    /// Budget menu header: overall budget and interval, category lines,
    /// and lifetime expense totals.
    pub fn budget_overview(&self) -> BudgetOverview {
        let total = total_spending(&self.state.expenses);
        BudgetOverview {
            budget_cents: self.state.budget_cents,
            interval: self.state.budget_interval,
            category_rows: self.category_rows(),
            total_expenses_cents: total,
            remaining_cents: self.state.budget_cents - total,
        }
    }

    fn category_rows(&self) -> Vec<CategoryBudgetRow> {
        self.state
            .categories
            .iter()
            .map(|category| {
                let budget = self
                    .state
                    .category_budgets
                    .get(category)
                    .copied()
                    .unwrap_or(0);
                let spent = category_spent(&self.state.expenses, category);
                CategoryBudgetRow {
                    category: category.clone(),
                    budget_cents: budget,
                    spent_cents: spent,
                    remaining_cents: budget - spent,
                }
            })
            .collect()
    }

    // ========================
    // Budgets
    // ========================

    pub fn set_budget(&mut self, amount_cents: Cents) -> Result<(), AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount);
        }
        self.state.budget_cents = amount_cents;
        Ok(())
    }

    pub fn set_category_budget(
        &mut self,
        category: &str,
        amount_cents: Cents,
    ) -> Result<(), AppError> {
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount);
        }
        if !self.state.has_category(category) {
            return Err(AppError::UnknownCategory(category.to_string()));
        }
        self.state
            .category_budgets
            .insert(category.to_string(), amount_cents);
        Ok(())
    }

    pub fn set_budget_interval(&mut self, interval: BudgetInterval) {
        self.state.budget_interval = interval;
    }

    // ========================
    // Categories
    // ========================

    pub fn add_category(&mut self, name: &str) -> Result<(), AppError> {
        if !self.state.add_category(name) {
            return Err(AppError::CategoryAlreadyExists(name.to_string()));
        }
        Ok(())
    }

    pub fn delete_category(&mut self, name: &str) -> Result<(), AppError> {
        if !self.state.delete_category(name) {
            return Err(AppError::UnknownCategory(name.to_string()));
        }
        Ok(())
    }

    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    // ========================
    // Persistence and reset
    // ========================

    /// Reset all data to defaults and persist the empty state immediately.
    pub fn clear_all(&mut self) -> Result<(), AppError> {
        self.state.clear();
        self.save()
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.repo.save(&self.state)?;
        Ok(())
    }

    pub fn balance_cents(&self) -> Cents {
        self.state.balance_cents
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }
}
