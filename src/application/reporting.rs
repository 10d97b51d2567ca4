use chrono::NaiveDate;

use crate::domain::{BudgetInterval, Cents, Expense, Transaction};

/// One-shot expense report: every expense sorted by date, per-category
/// totals in first-appearance order, and the grand total. Never persisted.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub expenses: Vec<Expense>,
    pub category_totals: Vec<CategoryTotal>,
    pub total_cents: Cents,
}

#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: String,
    pub total_cents: Cents,
}

/// Spend-to-date against the overall budget for the current interval
/// window. Only produced when a budget is set.
#[derive(Debug, Clone)]
pub struct BudgetWindow {
    pub interval: BudgetInterval,
    pub budget_cents: Cents,
    pub spent_cents: Cents,
    pub remaining_cents: Cents,
    pub window_start: NaiveDate,
}

/// Per-category budget line: limit, lifetime spending, and what is left.
#[derive(Debug, Clone)]
pub struct CategoryBudgetRow {
    pub category: String,
    pub budget_cents: Cents,
    pub spent_cents: Cents,
    pub remaining_cents: Cents,
}

/// Everything the status display needs: balance, the budget window (if a
/// budget is set), category budget lines, and the recent transactions
/// newest-first.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub balance_cents: Cents,
    pub window: Option<BudgetWindow>,
    pub category_rows: Vec<CategoryBudgetRow>,
    pub recent_transactions: Vec<Transaction>,
}

/// Header data for the budget menu: the overall budget, its interval,
/// category lines, and lifetime totals.
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub budget_cents: Cents,
    pub interval: BudgetInterval,
    pub category_rows: Vec<CategoryBudgetRow>,
    pub total_expenses_cents: Cents,
    pub remaining_cents: Cents,
}
