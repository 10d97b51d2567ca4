mod common;

use anyhow::Result;
use common::{date, test_service};

#[test]
fn test_summary_none_when_empty() -> Result<()> {
    let (service, _temp) = test_service()?;
    assert!(service.summary().is_none());
    Ok(())
}

#[test]
fn test_summary_scenario_two_expenses() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.record_expense(5000, "Food", date("2024-01-10"))?;
    service.record_expense(3000, "Transportation", date("2024-01-15"))?;

    assert_eq!(service.balance_cents(), -8000);

    let report = service.summary().expect("expenses were recorded");
    assert_eq!(report.total_cents, 8000);
    assert_eq!(report.category_totals.len(), 2);
    assert_eq!(report.category_totals[0].category, "Food");
    assert_eq!(report.category_totals[0].total_cents, 5000);
    assert_eq!(report.category_totals[1].category, "Transportation");
    assert_eq!(report.category_totals[1].total_cents, 3000);

    Ok(())
}

#[test]
fn test_summary_sorted_by_date_ascending() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.record_expense(3000, "Food", date("2024-03-01"))?;
    service.record_expense(1000, "Food", date("2024-01-01"))?;
    service.record_expense(2000, "Food", date("2024-02-01"))?;

    let report = service.summary().expect("expenses were recorded");
    let dates: Vec<_> = report.expenses.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-01"), date("2024-02-01"), date("2024-03-01")]
    );

    Ok(())
}

#[test]
fn test_summary_total_independent_of_order() -> Result<()> {
    let (mut a, _temp_a) = test_service()?;
    a.record_expense(5000, "Food", date("2024-01-10"))?;
    a.record_expense(3000, "Transportation", date("2024-01-15"))?;

    let (mut b, _temp_b) = test_service()?;
    b.record_expense(3000, "Transportation", date("2024-01-15"))?;
    b.record_expense(5000, "Food", date("2024-01-10"))?;

    assert_eq!(
        a.summary().unwrap().total_cents,
        b.summary().unwrap().total_cents
    );

    Ok(())
}

#[test]
fn test_status_category_rows_track_spending() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.set_category_budget("Food", 10000)?;
    service.record_expense(4000, "Food", date("2024-01-10"))?;

    let status = service.status(date("2024-01-15"));
    let food = status
        .category_rows
        .iter()
        .find(|r| r.category == "Food")
        .expect("Food row present");

    assert_eq!(food.budget_cents, 10000);
    assert_eq!(food.spent_cents, 4000);
    assert_eq!(food.remaining_cents, 6000);

    // Untouched categories show up with an unset (0) budget.
    let housing = status
        .category_rows
        .iter()
        .find(|r| r.category == "Housing")
        .expect("Housing row present");
    assert_eq!(housing.budget_cents, 0);
    assert_eq!(housing.spent_cents, 0);

    Ok(())
}

#[test]
fn test_status_recent_transactions_newest_first() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.record_expense(1000, "Food", date("2024-01-10"))?;
    service.record_expense(2000, "Housing", date("2024-01-11"))?;

    let status = service.status(date("2024-01-15"));
    let amounts: Vec<i64> = status
        .recent_transactions
        .iter()
        .map(|t| t.amount_cents)
        .collect();
    assert_eq!(amounts, vec![2000, 1000]);

    Ok(())
}

#[test]
fn test_deleted_category_still_reported_in_summary() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    service.record_expense(5000, "Food", date("2024-01-10"))?;
    service.delete_category("Food")?;

    // The orphaned expense keeps its category string and neither the
    // summary nor the status display chokes on it.
    let report = service.summary().expect("expense still recorded");
    assert_eq!(report.category_totals[0].category, "Food");
    assert_eq!(report.total_cents, 5000);

    let status = service.status(date("2024-01-15"));
    assert!(status.category_rows.iter().all(|r| r.category != "Food"));
    assert_eq!(status.balance_cents, -5000);

    Ok(())
}
