//! Projects expenses into what the daily and monthly panels display.
//!
//! The functions here are pure: the same records, scope and identity always
//! give the same [PanelView]. Turning a view into HTML and chart options is
//! done by the panel handlers and [crate::charts].

use time::Date;

use crate::{
    aggregation::{
        YearMonth, daily_breakdown, daily_records, daily_total, format_amount, monthly_breakdown,
        monthly_records, monthly_total,
    },
    expense::{Expense, expense_emoji},
    session::Identity,
};

/// Colors for chart slices, assigned by slice position.
pub const PALETTE: [&str; 10] = [
    "#ffb6d5", "#b6e0fe", "#f9e7fe", "#e0f7fa", "#f6ad55", "#ecc94b", "#68d391", "#f687b3",
    "#a0aec0", "#63b3ed",
];

/// Label of the single slice shown when there is nothing to chart.
pub const PLACEHOLDER_LABEL: &str = "No expenses";

/// Color of the placeholder slice.
pub const PLACEHOLDER_COLOR: &str = "#ffe0ec";

/// The total shown when no one is logged in.
pub const ZERO_TOTAL: &str = "0.00";

/// Shown in place of the daily list when no one is logged in.
pub const DAILY_LOG_IN_PROMPT: &str = "Please log in to add/view expenses.";

/// Shown in place of the monthly list when no one is logged in.
pub const MONTHLY_LOG_IN_PROMPT: &str = "Please log in to view expenses.";

/// One line in an expense list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub emoji: &'static str,
    pub name: String,
    /// The amount with a dollar sign, e.g. "$4.50".
    pub amount: String,
    /// The date of the expense, only shown in the monthly list.
    pub date: Option<String>,
    /// Position in today's list, used by the remove button in the daily list.
    pub remove_index: Option<usize>,
}

/// A single pie chart slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// The data for one pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieDataset {
    pub slices: Vec<Slice>,
    pub show_legend: bool,
}

impl PieDataset {
    /// Build a dataset from label and value pairs.
    ///
    /// Colors are taken from [PALETTE] by slice position. With no pairs, the
    /// dataset is a single placeholder slice with the legend hidden.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        if pairs.is_empty() {
            return Self::placeholder();
        }

        let slices = pairs
            .iter()
            .enumerate()
            .map(|(index, (label, value))| Slice {
                label: (*label).to_owned(),
                value: *value,
                color: PALETTE[index % PALETTE.len()],
            })
            .collect();

        Self {
            slices,
            show_legend: true,
        }
    }

    /// The dataset shown when there are no expenses.
    pub fn placeholder() -> Self {
        Self {
            slices: vec![Slice {
                label: PLACEHOLDER_LABEL.to_owned(),
                value: 1.0,
                color: PLACEHOLDER_COLOR,
            }],
            show_legend: false,
        }
    }

    /// Whether this is the "no expenses" placeholder.
    pub fn is_placeholder(&self) -> bool {
        !self.show_legend
    }
}

/// What goes in the list part of a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRows {
    /// No one is logged in; show this message instead of data.
    LogInPrompt(&'static str),
    /// The expenses in scope. May be empty.
    Expenses(Vec<ExpenseRow>),
}

/// Everything the daily or monthly panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub rows: PanelRows,
    /// The total with two decimal places and no currency sign.
    pub total: String,
    /// The pie chart, or `None` if no chart should be drawn.
    pub chart: Option<PieDataset>,
}

impl PanelView {
    fn logged_out(prompt: &'static str) -> Self {
        Self {
            rows: PanelRows::LogInPrompt(prompt),
            total: ZERO_TOTAL.to_owned(),
            chart: None,
        }
    }
}

/// The daily panel: today's expenses, their total and one slice per expense.
pub fn project_daily(user: Option<&Identity>, records: &[Expense], today: Date) -> PanelView {
    if user.is_none() {
        return PanelView::logged_out(DAILY_LOG_IN_PROMPT);
    }

    let rows = daily_records(records, today)
        .enumerate()
        .map(|(index, expense)| ExpenseRow {
            emoji: expense_emoji(expense.name.as_ref()),
            name: expense.name.to_string(),
            amount: format!("${}", format_amount(expense.amount)),
            date: None,
            remove_index: Some(index),
        })
        .collect();

    PanelView {
        rows: PanelRows::Expenses(rows),
        total: format_amount(daily_total(records, today)),
        chart: Some(PieDataset::from_pairs(&daily_breakdown(records, today))),
    }
}

/// The monthly panel: the month's expenses, their total and one slice per
/// distinct expense name.
pub fn project_monthly(
    user: Option<&Identity>,
    records: &[Expense],
    month: YearMonth,
) -> PanelView {
    if user.is_none() {
        return PanelView::logged_out(MONTHLY_LOG_IN_PROMPT);
    }

    let rows = monthly_records(records, month)
        .map(|expense| ExpenseRow {
            emoji: expense_emoji(expense.name.as_ref()),
            name: expense.name.to_string(),
            amount: format!("${}", format_amount(expense.amount)),
            date: Some(expense.date.to_string()),
            remove_index: None,
        })
        .collect();

    PanelView {
        rows: PanelRows::Expenses(rows),
        total: format_amount(monthly_total(records, month)),
        chart: Some(PieDataset::from_pairs(&monthly_breakdown(records, month))),
    }
}
