//! String key-value storage backed by a single SQLite table.
//!
//! Values are opaque text blobs. Writes replace the whole value for a key, so a
//! reader only ever sees a complete value. A missing key is not an error; it
//! reads as `None`. A value that is present but cannot be decoded is an error,
//! so callers never mistake it for an empty slot.

use rusqlite::{Connection, OptionalExtension};
use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// Prefix shared by every key the app writes.
pub const APP_KEY_PREFIX: &str = "spendspark";

/// Read the value stored under `key`, or `None` if nothing is stored there.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM storage WHERE key = :key;")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
        .map_err(|error| error.into())
}

/// Store `value` under `key`, replacing any previous value.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        (key, value),
    )?;

    Ok(())
}

/// Remove the value stored under `key`. Removing a missing key does nothing.
pub fn remove_item(key: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute("DELETE FROM storage WHERE key = ?1;", (key,))?;

    Ok(())
}

/// Read and decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [Error::UnreadableValue] if a value is stored but cannot be decoded.
/// The stored text is left as it is.
pub fn get_json<T: DeserializeOwned>(key: &str, connection: &Connection) -> Result<Option<T>, Error> {
    let Some(text) = get_item(key, connection)? else {
        return Ok(None);
    };

    serde_json::from_str(&text).map(Some).map_err(|error| {
        tracing::warn!("Could not decode the value stored under \"{key}\": {error}");
        Error::UnreadableValue(key.to_owned())
    })
}

/// Encode `value` as JSON and store it under `key`.
pub fn set_json<T: Serialize + ?Sized>(
    key: &str,
    value: &T,
    connection: &Connection,
) -> Result<(), Error> {
    let text = serde_json::to_string(value)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    set_item(key, &text, connection)
}

/// Initialize the storage table.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;

    Ok(())
}
