use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use spendspark::{Expense, ExpenseName, initialize_db, log_in, save_expenses};

/// A utility for creating a test database for the SpendSpark server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The name of the demo user.
    #[arg(long, short, default_value = "demo")]
    username: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Logging in as {}...", args.username);
    let identity = log_in(&args.username, "demo", &conn)?;

    println!("Adding sample expenses...");
    let today = OffsetDateTime::now_utc().date();
    let sample_expenses = [
        ("Coffee", 4.5, 0),
        ("Lunch", 12.0, 0),
        ("Groceries", 54.3, 1),
        ("Coffee", 3.8, 2),
        ("Transport", 6.0, 3),
        ("Pizza", 18.0, 5),
    ];

    let expenses: Vec<Expense> = sample_expenses
        .into_iter()
        .map(|(name, amount, days_ago)| {
            Ok(Expense {
                name: ExpenseName::new(name)?,
                amount,
                date: today - Duration::days(days_ago),
            })
        })
        .collect::<Result<_, spendspark::Error>>()?;

    save_expenses(&identity.username, &expenses, &conn)?;

    println!("Success!");

    Ok(())
}
