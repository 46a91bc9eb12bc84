//! The logged-in identity together with that identity's expenses.
//!
//! A [Tracker] is loaded from the store at the start of a request, changed by
//! one of its methods and written straight back, so the in-memory list always
//! matches the persisted one.
//!
//! If the stored list of the active user cannot be read, the tracker shows an
//! empty list and refuses every change, so the stored text is never replaced.

use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    expense::{Expense, load_expenses, save_expenses},
    session::{self, Identity, Username, current_user},
};

/// The tracker state: who is logged in and what they have spent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracker {
    user: Option<Identity>,
    expenses: Vec<Expense>,
    /// Set when the stored list could not be read.
    read_only: bool,
}

/// Load the expenses of `username`, or an empty read-only list if the stored
/// list cannot be decoded.
fn read_expenses(username: &Username, connection: &Connection) -> Result<(Vec<Expense>, bool), Error> {
    match load_expenses(username, connection) {
        Ok(expenses) => Ok((expenses, false)),
        Err(error @ Error::UnreadableValue(_)) => {
            tracing::error!("Showing no expenses for {username} and blocking changes: {error}");
            Ok((Vec::new(), true))
        }
        Err(error) => Err(error),
    }
}

impl Tracker {
    /// Load the active identity and its expenses from the store.
    ///
    /// With no one logged in, the expense list is empty.
    pub fn load(connection: &Connection) -> Result<Self, Error> {
        let user = current_user(connection)?;
        let (expenses, read_only) = match &user {
            Some(identity) => read_expenses(&identity.username, connection)?,
            None => (Vec::new(), false),
        };

        Ok(Self {
            user,
            expenses,
            read_only,
        })
    }

    /// The active identity, if any.
    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    /// Every expense of the active identity, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Log in as `username` and replace the expense list with that user's
    /// persisted expenses.
    ///
    /// On error nothing changes.
    pub fn log_in(
        &mut self,
        username: &str,
        password: &str,
        connection: &Connection,
    ) -> Result<(), Error> {
        let identity = session::log_in(username, password, connection)?;
        let (expenses, read_only) = read_expenses(&identity.username, connection)?;

        self.user = Some(identity);
        self.expenses = expenses;
        self.read_only = read_only;

        Ok(())
    }

    /// Clear the active identity and the in-memory expense list.
    ///
    /// The persisted expenses of the user are kept.
    pub fn log_out(&mut self, connection: &Connection) -> Result<(), Error> {
        session::log_out(connection)?;

        if let Some(identity) = self.user.take() {
            tracing::info!("Logged out {}", identity.username);
        }
        self.expenses.clear();
        self.read_only = false;

        Ok(())
    }

    /// Record an expense dated `today` and persist the whole list.
    ///
    /// # Errors
    ///
    /// - [Error::NotLoggedIn] if no one is logged in.
    /// - [Error::EmptyExpenseName] if `name` is empty after trimming.
    /// - [Error::InvalidAmount] if `amount` is not a finite number above zero.
    /// - [Error::UnreadableExpenses] if the stored list could not be read.
    ///
    /// Nothing changes when an error is returned.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: &str,
        today: Date,
        connection: &Connection,
    ) -> Result<Expense, Error> {
        let identity = self.writable_user()?;

        let expense = Expense::build(name, amount, today)?;

        let mut expenses = self.expenses.clone();
        expenses.push(expense.clone());
        save_expenses(&identity.username, &expenses, connection)?;

        self.expenses = expenses;

        Ok(expense)
    }

    /// Remove the expense at `index` in today's list and persist the rest.
    ///
    /// `index` counts only the expenses dated `today`, in insertion order,
    /// which is the order the daily list shows them in.
    ///
    /// # Errors
    ///
    /// - [Error::NotLoggedIn] if no one is logged in.
    /// - [Error::UnreadableExpenses] if the stored list could not be read.
    /// - [Error::RemoveMissingExpense] if today's list has no expense at `index`.
    pub fn remove_today_expense(
        &mut self,
        index: usize,
        today: Date,
        connection: &Connection,
    ) -> Result<Expense, Error> {
        let identity = self.writable_user()?;

        let position = self
            .expenses
            .iter()
            .enumerate()
            .filter(|(_, expense)| expense.date == today)
            .nth(index)
            .map(|(position, _)| position)
            .ok_or(Error::RemoveMissingExpense(index))?;

        let mut expenses = self.expenses.clone();
        let removed = expenses.remove(position);
        save_expenses(&identity.username, &expenses, connection)?;

        self.expenses = expenses;

        Ok(removed)
    }

    fn writable_user(&self) -> Result<&Identity, Error> {
        match &self.user {
            None => Err(Error::NotLoggedIn),
            Some(identity) if self.read_only => {
                Err(Error::UnreadableExpenses(identity.username.to_string()))
            }
            Some(identity) => Ok(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{ExpenseName, load_expenses},
        session::{Username, current_user, log_in},
        storage::{get_item, set_item},
        tracker::Tracker,
    };

    const CORRUPT_LIST: &str = "[{\"name\":";

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn names(tracker: &Tracker) -> Vec<&str> {
        tracker
            .expenses()
            .iter()
            .map(|expense| expense.name.as_ref())
            .collect()
    }

    #[test]
    fn load_with_no_user_is_empty() {
        let connection = get_test_connection();

        let tracker = Tracker::load(&connection).unwrap();

        assert_eq!(tracker, Tracker::default());
    }

    #[test]
    fn add_expense_persists() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();

        let expense = tracker
            .add_expense("  Coffee ", "4.50", date!(2024 - 05 - 01), &connection)
            .unwrap();

        assert_eq!(expense.name, ExpenseName::new_unchecked("Coffee"));
        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.date, date!(2024 - 05 - 01));

        let stored = load_expenses(&Username::new("alice").unwrap(), &connection).unwrap();
        assert_eq!(stored, vec![expense]);
        assert_eq!(Tracker::load(&connection).unwrap(), tracker);
    }

    #[test]
    fn add_expense_when_logged_out_fails() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();

        let result = tracker.add_expense("Coffee", "4.50", date!(2024 - 05 - 01), &connection);

        assert_eq!(result, Err(Error::NotLoggedIn));
        assert!(tracker.expenses().is_empty());
    }

    #[test]
    fn add_invalid_expense_changes_nothing() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();
        let today = date!(2024 - 05 - 01);

        assert_eq!(
            tracker.add_expense("   ", "4.50", today, &connection),
            Err(Error::EmptyExpenseName)
        );
        assert_eq!(
            tracker.add_expense("Coffee", "0", today, &connection),
            Err(Error::InvalidAmount("0".to_owned()))
        );
        assert_eq!(
            tracker.add_expense("Coffee", "abc", today, &connection),
            Err(Error::InvalidAmount("abc".to_owned()))
        );

        assert!(tracker.expenses().is_empty());
        let stored = load_expenses(&Username::new("alice").unwrap(), &connection).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn switching_user_replaces_expenses() {
        let connection = get_test_connection();
        let today = date!(2024 - 05 - 01);
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();
        tracker
            .add_expense("Coffee", "4.50", today, &connection)
            .unwrap();

        tracker.log_in("bob", "pw", &connection).unwrap();
        assert!(tracker.expenses().is_empty());
        tracker.add_expense("Lunch", "12", today, &connection).unwrap();

        tracker.log_in("alice", "pw", &connection).unwrap();
        assert_eq!(names(&tracker), vec!["Coffee"]);
    }

    #[test]
    fn log_out_clears_user_but_keeps_stored_expenses() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();
        tracker
            .add_expense("Coffee", "4.50", date!(2024 - 05 - 01), &connection)
            .unwrap();

        tracker.log_out(&connection).unwrap();

        assert_eq!(tracker.user(), None);
        assert!(tracker.expenses().is_empty());
        assert_eq!(current_user(&connection).unwrap(), None);
        let stored = load_expenses(&Username::new("alice").unwrap(), &connection).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn failed_log_in_keeps_current_user() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();

        assert_eq!(
            tracker.log_in("bob", "", &connection),
            Err(Error::EmptyPassword)
        );

        assert_eq!(tracker.user().unwrap().username.as_ref(), "alice");
    }

    #[test]
    fn remove_counts_only_todays_expenses() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();
        let yesterday = date!(2024 - 05 - 01);
        let today = date!(2024 - 05 - 02);
        tracker.add_expense("Rent", "900", yesterday, &connection).unwrap();
        tracker.add_expense("Coffee", "4.50", today, &connection).unwrap();
        tracker.add_expense("Lunch", "12", today, &connection).unwrap();

        let removed = tracker.remove_today_expense(1, today, &connection).unwrap();

        assert_eq!(removed.name.as_ref(), "Lunch");
        assert_eq!(names(&tracker), vec!["Rent", "Coffee"]);
        assert_eq!(Tracker::load(&connection).unwrap(), tracker);
    }

    #[test]
    fn remove_out_of_range_changes_nothing() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();
        let today = date!(2024 - 05 - 02);
        tracker.add_expense("Coffee", "4.50", today, &connection).unwrap();

        let result = tracker.remove_today_expense(1, today, &connection);

        assert_eq!(result, Err(Error::RemoveMissingExpense(1)));
        assert_eq!(names(&tracker), vec!["Coffee"]);
    }

    #[test]
    fn remove_when_logged_out_fails() {
        let connection = get_test_connection();
        let mut tracker = Tracker::load(&connection).unwrap();

        let result = tracker.remove_today_expense(0, date!(2024 - 05 - 02), &connection);

        assert_eq!(result, Err(Error::NotLoggedIn));
    }

    #[test]
    fn unreadable_list_shows_empty_and_blocks_changes() {
        let connection = get_test_connection();
        log_in("alice", "pw", &connection).unwrap();
        set_item("spendspark-expenses-alice", CORRUPT_LIST, &connection).unwrap();
        let today = date!(2024 - 05 - 02);

        let mut tracker = Tracker::load(&connection).unwrap();

        assert!(tracker.expenses().is_empty());
        assert_eq!(
            tracker.add_expense("Coffee", "4.50", today, &connection),
            Err(Error::UnreadableExpenses("alice".to_owned()))
        );
        assert_eq!(
            tracker.remove_today_expense(0, today, &connection),
            Err(Error::UnreadableExpenses("alice".to_owned()))
        );
        assert_eq!(
            get_item("spendspark-expenses-alice", &connection),
            Ok(Some(CORRUPT_LIST.to_owned()))
        );
    }

    #[test]
    fn switching_away_from_unreadable_list_allows_changes() {
        let connection = get_test_connection();
        set_item("spendspark-expenses-alice", CORRUPT_LIST, &connection).unwrap();
        let mut tracker = Tracker::load(&connection).unwrap();
        tracker.log_in("alice", "pw", &connection).unwrap();

        tracker.log_in("bob", "pw", &connection).unwrap();

        assert!(
            tracker
                .add_expense("Lunch", "12", date!(2024 - 05 - 02), &connection)
                .is_ok()
        );
    }
}
