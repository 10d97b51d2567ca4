use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::application::TrackerService;
use crate::domain::{format_cents, parse_cents, BudgetInterval, Cents};

/// Main menu loop. Reads single-line choices until the user exits or the
/// input ends. 'x' saves before exiting; end-of-input at the top level
/// exits without the explicit-exit save.
pub fn run<R: BufRead, W: Write>(
    service: &mut TrackerService,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Welcome to the Spending Tracker!")?;

    loop {
        print_status(service, &mut out)?;

        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "1. Add Expense")?;
        writeln!(out, "2. Add Money")?;
        writeln!(out, "3. View Summary")?;
        writeln!(out, "4. Budget")?;
        writeln!(out, "5. Categories")?;
        writeln!(out, "6. Clear All Data")?;
        writeln!(out, "x. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice: ")? else {
            writeln!(out)?;
            writeln!(out, "No input provided. Exiting...")?;
            break;
        };

        match choice.as_str() {
            "1" => add_expense_flow(service, &mut input, &mut out)?,
            "2" => add_money_flow(service, &mut input, &mut out)?,
            "3" => view_summary(service, &mut out)?,
            "4" => budget_menu(service, &mut input, &mut out)?,
            "5" => category_menu(service, &mut input, &mut out)?,
            "6" => clear_all_flow(service, &mut input, &mut out)?,
            c if c.eq_ignore_ascii_case("x") => {
                writeln!(out, "Exiting...")?;
                if let Err(err) = service.save() {
                    writeln!(out, "Error saving data: {err}")?;
                }
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print a prompt (no newline) and read one line. `Ok(None)` means the
/// input ended; every sub-flow treats that as "abort, back to the menu".
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompt until a strictly positive amount is entered. None = aborted.
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<Cents>> {
    loop {
        let Some(line) = prompt(input, out, text)? else {
            return Ok(None);
        };

        match parse_cents(&line) {
            Ok(amount) if amount > 0 => return Ok(Some(amount)),
            Ok(_) => writeln!(out, "Amount must be greater than zero.")?,
            Err(_) => writeln!(out, "Invalid amount. Please enter a number.")?,
        }
    }
}

/// List the categories and re-prompt until the user picks one by number or
/// exact name. None = aborted (end-of-input or empty line).
fn prompt_category<R: BufRead, W: Write>(
    service: &TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    loop {
        writeln!(out, "Categories:")?;
        for (i, category) in service.categories().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, category)?;
        }

        let Some(line) = prompt(input, out, "Enter category number or name: ")? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(None);
        }

        if let Ok(number) = line.parse::<usize>() {
            match number
                .checked_sub(1)
                .and_then(|i| service.categories().get(i))
            {
                Some(category) => return Ok(Some(category.clone())),
                None => {
                    writeln!(out, "Invalid category number. Please choose from the list.")?;
                    continue;
                }
            }
        }

        if service.categories().iter().any(|c| *c == line) {
            return Ok(Some(line));
        }
        writeln!(
            out,
            "Invalid category name. Please choose from the list or enter the number."
        )?;
    }
}

/// Re-prompt until a valid YYYY-MM-DD date is entered. An empty line means
/// today. None = aborted.
fn prompt_date<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<NaiveDate>> {
    loop {
        let Some(line) = prompt(input, out, "Enter date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(today()));
        }

        match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => writeln!(out, "Invalid date format. Please use YYYY-MM-DD.")?,
        }
    }
}

fn prompt_interval<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<BudgetInterval>> {
    let names: Vec<&str> = BudgetInterval::ALL.iter().map(|i| i.as_str()).collect();
    let text = format!("Enter budget interval ({}): ", names.join(", "));

    loop {
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(None);
        };

        match BudgetInterval::from_str(&line) {
            Some(interval) => return Ok(Some(interval)),
            None => writeln!(out, "Invalid interval. Please choose from the list.")?,
        }
    }
}

fn add_expense_flow<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(amount) = prompt_amount(input, out, "Enter amount: ")? else {
        writeln!(out, "No input provided. Exiting expense entry.")?;
        return Ok(());
    };
    let Some(category) = prompt_category(service, input, out)? else {
        writeln!(out, "No input provided. Exiting expense entry.")?;
        return Ok(());
    };
    let Some(date) = prompt_date(input, out)? else {
        writeln!(out, "No input provided. Exiting expense entry.")?;
        return Ok(());
    };

    match service.record_expense(amount, &category, date) {
        Ok(()) => writeln!(out, "Expense added successfully!")?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn add_money_flow<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(amount) = prompt_amount(input, out, "Enter amount to add: ")? else {
        writeln!(out, "No input provided. Exiting adding money.")?;
        return Ok(());
    };

    match service.record_deposit(amount) {
        Ok(balance) => writeln!(
            out,
            "{} added to balance. New balance: {}",
            format_cents(amount),
            format_cents(balance)
        )?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn view_summary<W: Write>(service: &TrackerService, out: &mut W) -> Result<()> {
    let Some(report) = service.summary() else {
        writeln!(out, "No expenses recorded yet.")?;
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "--- Expense Summary ---")?;
    for expense in &report.expenses {
        writeln!(
            out,
            "Date: {}, Category: {}, Amount: {}",
            expense.date.format("%Y-%m-%d"),
            expense.category,
            format_cents(expense.amount_cents)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- Category Totals ---")?;
    for total in &report.category_totals {
        writeln!(
            out,
            "{}: {}",
            total.category,
            format_cents(total.total_cents)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total Spending: {}", format_cents(report.total_cents))?;
    Ok(())
}

fn window_label(interval: BudgetInterval) -> &'static str {
    match interval {
        BudgetInterval::Day => "today",
        BudgetInterval::Week => "this week",
        BudgetInterval::BiWeekly => "this bi-weekly period",
        BudgetInterval::Month => "this month",
        BudgetInterval::Year => "this year",
    }
}

fn print_status<W: Write>(service: &TrackerService, out: &mut W) -> Result<()> {
    let status = service.status(today());

    writeln!(out)?;
    writeln!(out, "--- Current Balance and Recent Transactions ---")?;
    writeln!(
        out,
        "Current Balance: {}",
        format_cents(status.balance_cents)
    )?;

    if let Some(window) = &status.window {
        writeln!(
            out,
            "Total Budget ({}): {}",
            window.interval,
            format_cents(window.budget_cents)
        )?;
        writeln!(
            out,
            "Spending {}: {}",
            window_label(window.interval),
            format_cents(window.spent_cents)
        )?;
        writeln!(
            out,
            "Remaining budget: {}",
            format_cents(window.remaining_cents)
        )?;
    }

    if !status.category_rows.is_empty() {
        writeln!(out)?;
        writeln!(out, "--- Category Budgets ---")?;
        for row in &status.category_rows {
            writeln!(
                out,
                "{}: Budget = {}, Spent = {}, Remaining = {}",
                row.category,
                format_cents(row.budget_cents),
                format_cents(row.spent_cents),
                format_cents(row.remaining_cents)
            )?;
        }
    }

    if status.recent_transactions.is_empty() {
        writeln!(out, "No recent transactions.")?;
    } else {
        writeln!(out)?;
        writeln!(out, "--- Last Transactions ---")?;
        for transaction in &status.recent_transactions {
            writeln!(
                out,
                "{}: {}, Category: {}, Amount: {}",
                transaction.kind,
                transaction.timestamp.format("%Y-%m-%d %H:%M:%S"),
                transaction.category,
                format_cents(transaction.amount_cents)
            )?;
        }
    }
    Ok(())
}

fn budget_menu<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let overview = service.budget_overview();

        writeln!(out)?;
        writeln!(out, "--- Budget Menu ---")?;
        writeln!(out, "Total Budget: {}", format_cents(overview.budget_cents))?;
        writeln!(out, "Current Budget Interval: {}", overview.interval)?;
        writeln!(out)?;
        writeln!(out, "Category Budgets:")?;
        for row in &overview.category_rows {
            writeln!(
                out,
                "  {}: Budget = {}, Spent = {}, Remaining = {}",
                row.category,
                format_cents(row.budget_cents),
                format_cents(row.spent_cents),
                format_cents(row.remaining_cents)
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Total Expenses: {}",
            format_cents(overview.total_expenses_cents)
        )?;
        writeln!(
            out,
            "Remaining Budget: {}",
            format_cents(overview.remaining_cents)
        )?;

        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "1. Set Total Budget")?;
        writeln!(out, "2. Set Category Budget")?;
        writeln!(out, "3. Set Budget Interval")?;
        writeln!(out, "x. Exit to Main Menu")?;

        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            writeln!(out)?;
            writeln!(out, "No input provided. Exiting to main menu...")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(amount) = prompt_amount(input, out, "Enter your total budget: ")? else {
                    writeln!(out, "No input provided. Exiting setting budget.")?;
                    continue;
                };
                if service.set_budget(amount).is_ok() {
                    writeln!(out, "Total budget set to: {}", format_cents(amount))?;
                }
            }
            "2" => {
                let Some(category) = prompt_category(service, input, out)? else {
                    writeln!(out, "No input provided. Exiting category budget setting.")?;
                    continue;
                };
                let text = format!("Enter budget for {category}: ");
                let Some(amount) = prompt_amount(input, out, &text)? else {
                    writeln!(out, "No input provided. Exiting setting category budget.")?;
                    continue;
                };
                match service.set_category_budget(&category, amount) {
                    Ok(()) => writeln!(
                        out,
                        "Budget for {} set to: {}",
                        category,
                        format_cents(amount)
                    )?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "3" => {
                let Some(interval) = prompt_interval(input, out)? else {
                    writeln!(out, "No input provided. Exiting setting budget interval.")?;
                    continue;
                };
                service.set_budget_interval(interval);
                writeln!(out, "Budget interval set to: {interval}")?;
            }
            c if c.eq_ignore_ascii_case("x") => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn category_menu<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "--- Category Menu ---")?;
        if service.categories().is_empty() {
            writeln!(out, "No categories defined.")?;
        } else {
            for category in service.categories() {
                writeln!(out, "{category}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "1. Add Category")?;
        writeln!(out, "2. Delete Category")?;
        writeln!(out, "x. Exit to Main Menu")?;

        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            writeln!(out)?;
            writeln!(out, "No input provided. Exiting to main menu...")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_category_flow(service, input, out)?,
            "2" => delete_category_flow(service, input, out)?,
            c if c.eq_ignore_ascii_case("x") => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn add_category_flow<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let Some(name) = prompt(input, out, "Enter the new category name: ")? else {
            writeln!(out, "No input provided. Exiting category addition.")?;
            return Ok(());
        };
        if name.is_empty() {
            writeln!(out, "No input provided. Exiting category addition.")?;
            return Ok(());
        }

        match service.add_category(&name) {
            Ok(()) => {
                writeln!(out, "Category '{name}' added successfully!")?;
                return Ok(());
            }
            Err(_) => writeln!(out, "Category already exists.")?,
        }
    }
}

fn delete_category_flow<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let text = format!(
            "Enter the category to delete ({}): ",
            service.categories().join(", ")
        );
        let Some(name) = prompt(input, out, &text)? else {
            writeln!(out, "No input provided. Exiting category deletion.")?;
            return Ok(());
        };
        if name.is_empty() {
            writeln!(out, "No input provided. Exiting category deletion.")?;
            return Ok(());
        }

        match service.delete_category(&name) {
            Ok(()) => {
                writeln!(out, "Category '{name}' deleted successfully!")?;
                return Ok(());
            }
            Err(_) => writeln!(out, "Category not found.")?,
        }
    }
}

fn clear_all_flow<R: BufRead, W: Write>(
    service: &mut TrackerService,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let Some(answer) = prompt(
            input,
            out,
            "Are you sure you want to clear all data? (yes/no): ",
        )?
        else {
            writeln!(out, "Data clearing cancelled.")?;
            return Ok(());
        };

        match answer.to_lowercase().as_str() {
            "yes" => {
                match service.clear_all() {
                    Ok(()) => writeln!(out, "All data cleared successfully!")?,
                    Err(err) => writeln!(out, "Error saving data: {err}")?,
                }
                return Ok(());
            }
            "no" => {
                writeln!(out, "Data clearing cancelled.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid input. Please enter 'yes' or 'no'.")?,
        }
    }
}
