//! Loading and saving each user's expense list.
//!
//! The whole list for a user is stored as one JSON array under a key derived
//! from their username.

use rusqlite::Connection;

use crate::{
    Error,
    expense::Expense,
    session::Username,
    storage::{APP_KEY_PREFIX, get_json, set_json},
};

/// The storage key for the expenses belonging to `username`.
pub fn expenses_key(username: &Username) -> String {
    format!("{APP_KEY_PREFIX}-expenses-{username}")
}

/// Load every expense recorded by `username`, in the order they were added.
///
/// Returns an empty list if the user has not recorded anything yet.
///
/// # Errors
///
/// Returns [Error::UnreadableValue] if the stored list cannot be decoded.
pub fn load_expenses(username: &Username, connection: &Connection) -> Result<Vec<Expense>, Error> {
    get_json(&expenses_key(username), connection).map(Option::unwrap_or_default)
}

/// Replace the stored expenses of `username` with `expenses`.
pub fn save_expenses(
    username: &Username,
    expenses: &[Expense],
    connection: &Connection,
) -> Result<(), Error> {
    set_json(&expenses_key(username), expenses, connection)
}

#[cfg(test)]
mod expense_storage_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        expense::{Expense, ExpenseName, load_expenses, save_expenses},
        session::Username,
        storage::{create_storage_table, set_item},
    };

    use super::expenses_key;

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_storage_table(&connection).expect("Could not create storage table");
        connection
    }

    fn coffee() -> Expense {
        Expense {
            name: ExpenseName::new_unchecked("Coffee"),
            amount: 4.5,
            date: date!(2024 - 05 - 01),
        }
    }

    #[test]
    fn key_includes_username() {
        let username = Username::new("alice").unwrap();

        assert_eq!(expenses_key(&username), "spendspark-expenses-alice");
    }

    #[test]
    fn load_without_saved_data_is_empty() {
        let connection = get_test_connection();
        let username = Username::new("alice").unwrap();

        assert_eq!(load_expenses(&username, &connection), Ok(vec![]));
    }

    #[test]
    fn save_then_load_returns_same_expenses() {
        let connection = get_test_connection();
        let username = Username::new("alice").unwrap();
        let expenses = vec![coffee(), coffee()];

        save_expenses(&username, &expenses, &connection).unwrap();

        assert_eq!(load_expenses(&username, &connection), Ok(expenses));
    }

    #[test]
    fn expenses_are_kept_per_user() {
        let connection = get_test_connection();
        let alice = Username::new("alice").unwrap();
        let bob = Username::new("bob").unwrap();

        save_expenses(&alice, &[coffee()], &connection).unwrap();

        assert_eq!(load_expenses(&bob, &connection), Ok(vec![]));
    }

    #[test]
    fn corrupt_data_is_an_error() {
        let connection = get_test_connection();
        let username = Username::new("alice").unwrap();
        set_item(&expenses_key(&username), "[{\"name\":", &connection).unwrap();

        assert_eq!(
            load_expenses(&username, &connection),
            Err(Error::UnreadableValue(expenses_key(&username)))
        );
    }
}
