use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cents;

/// A recorded outflow. Expenses are immutable once created; the only way to
/// remove them is a full data clear. The category is the string it carried
/// at creation time and is not revalidated if the category is later deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
}

impl Expense {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount_cents: Cents) -> Self {
        assert!(amount_cents > 0, "Expense amount must be positive");
        Self {
            date,
            category: category.into(),
            amount_cents,
        }
    }
}
