use chrono::NaiveDate;

use super::{Cents, Expense};

/// Expenses sorted by date ascending. The sort is stable, so same-day
/// expenses keep their recording order.
pub fn sorted_by_date(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Per-category totals in first-appearance order. Grouping is by the
/// category string the expense carries, so totals for categories that have
/// since been deleted still show up.
pub fn category_totals(expenses: &[Expense]) -> Vec<(String, Cents)> {
    let mut totals: Vec<(String, Cents)> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount_cents,
            None => totals.push((expense.category.clone(), expense.amount_cents)),
        }
    }

    totals
}

/// Total spending across all recorded expenses.
pub fn total_spending(expenses: &[Expense]) -> Cents {
    expenses.iter().map(|e| e.amount_cents).sum()
}

/// Spending with expense date in [start, end], both ends inclusive.
pub fn spend_between(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Cents {
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .map(|e| e.amount_cents)
        .sum()
}

/// Total spent in one category across all recorded expenses.
pub fn category_spent(expenses: &[Expense], category: &str) -> Cents {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount_cents)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(date(2024, 1, 15), "Transportation", 3000),
            Expense::new(date(2024, 1, 10), "Food", 5000),
            Expense::new(date(2024, 1, 20), "Food", 2500),
        ]
    }

    #[test]
    fn test_sorted_by_date() {
        let sorted = sorted_by_date(&sample_expenses());
        let dates: Vec<NaiveDate> = sorted.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 10), date(2024, 1, 15), date(2024, 1, 20)]
        );
    }

    #[test]
    fn test_category_totals_first_appearance_order() {
        let totals = category_totals(&sample_expenses());
        assert_eq!(
            totals,
            vec![
                ("Transportation".to_string(), 3000),
                ("Food".to_string(), 7500),
            ]
        );
    }

    #[test]
    fn test_total_spending_matches_category_totals() {
        let expenses = sample_expenses();
        let by_category: Cents = category_totals(&expenses).iter().map(|(_, t)| t).sum();
        assert_eq!(total_spending(&expenses), 10500);
        assert_eq!(by_category, 10500);
    }

    #[test]
    fn test_total_insensitive_to_insertion_order() {
        let mut reversed = sample_expenses();
        reversed.reverse();
        assert_eq!(
            total_spending(&reversed),
            total_spending(&sample_expenses())
        );
    }

    #[test]
    fn test_spend_between_inclusive_bounds() {
        let expenses = sample_expenses();
        assert_eq!(
            spend_between(&expenses, date(2024, 1, 10), date(2024, 1, 15)),
            8000
        );
        assert_eq!(
            spend_between(&expenses, date(2024, 1, 11), date(2024, 1, 14)),
            0
        );
    }

    #[test]
    fn test_category_spent() {
        let expenses = sample_expenses();
        assert_eq!(category_spent(&expenses, "Food"), 7500);
        assert_eq!(category_spent(&expenses, "Utilities"), 0);
    }
}
