//! Expense records and their storage.

mod db;
mod domain;
mod emoji;

pub use db::{load_expenses, save_expenses};
pub use domain::{Expense, ExpenseForm, ExpenseName};
pub use emoji::expense_emoji;
