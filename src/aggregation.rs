//! Day and month totals over a list of expenses.
//!
//! Sums use plain `f64` addition, starting from `0.0`. Rounding only happens
//! when an amount is formatted for display.

use std::{collections::HashMap, fmt::Display};

use time::{Date, Month};

use crate::expense::Expense;

/// A calendar month, e.g. May 2024. Displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// The month `date` falls in.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

/// Expenses recorded on `today`, in the order they were added.
pub fn daily_records(records: &[Expense], today: Date) -> impl Iterator<Item = &Expense> {
    records.iter().filter(move |expense| expense.date == today)
}

/// Expenses recorded during `month`, in the order they were added.
pub fn monthly_records(records: &[Expense], month: YearMonth) -> impl Iterator<Item = &Expense> {
    records
        .iter()
        .filter(move |expense| month.contains(expense.date))
}

/// The total spent on `today`.
pub fn daily_total(records: &[Expense], today: Date) -> f64 {
    sum(daily_records(records, today))
}

/// Name and amount of each expense recorded on `today`.
///
/// Expenses with the same name are listed separately.
pub fn daily_breakdown(records: &[Expense], today: Date) -> Vec<(&str, f64)> {
    daily_records(records, today)
        .map(|expense| (expense.name.as_ref(), expense.amount))
        .collect()
}

/// The total spent during `month`.
pub fn monthly_total(records: &[Expense], month: YearMonth) -> f64 {
    sum(monthly_records(records, month))
}

/// The amount spent during `month` per expense name.
///
/// Expenses with the same name are added together. Names are listed in the
/// order they first appear.
pub fn monthly_breakdown(records: &[Expense], month: YearMonth) -> Vec<(&str, f64)> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in monthly_records(records, month) {
        let name = expense.name.as_ref();

        match positions.get(name) {
            Some(&position) => totals[position].1 += expense.amount,
            None => {
                positions.insert(name, totals.len());
                totals.push((name, expense.amount));
            }
        }
    }

    totals
}

/// Format `amount` with exactly two decimal places, e.g. "4.50".
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

// `Iterator::sum` for floats starts from -0.0, which would display as "-0.00".
fn sum<'a>(expenses: impl Iterator<Item = &'a Expense>) -> f64 {
    expenses.fold(0.0, |total, expense| total + expense.amount)
}
