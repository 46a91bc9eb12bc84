//! Core expense domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A validated, non-empty expense name, e.g. "Coffee".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String")]
pub struct ExpenseName(String);

impl ExpenseName {
    /// Create an expense name with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyExpenseName] if `name` is empty
    /// or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyExpenseName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create an expense name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for ExpenseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExpenseName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl FromStr for ExpenseName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseName::new(s)
    }
}

impl Display for ExpenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged spend event.
///
/// Expenses are never edited after they are created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on.
    pub name: ExpenseName,
    /// How much was spent, always greater than zero.
    pub amount: f64,
    /// The calendar day the expense was recorded on.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Expense {
    /// Create an expense for `date` from raw form input.
    ///
    /// # Errors
    ///
    /// - [Error::EmptyExpenseName] if `name` is empty after trimming.
    /// - [Error::InvalidAmount] if `amount` is not a positive number.
    pub fn build(name: &str, amount: &str, date: Date) -> Result<Self, Error> {
        Ok(Self {
            name: ExpenseName::new(name)?,
            amount: parse_amount(amount)?,
            date,
        })
    }
}

/// Parse the text of an amount field.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] unless the text is a finite number greater than zero.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// The raw data entered by the user in the new expense form.
///
/// The amount is kept as text so that anything the browser sends can be
/// received and then rejected quietly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The expense name.
    pub name: String,
    /// The amount as typed.
    pub amount: String,
}
