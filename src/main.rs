use std::{env, process};

use club_ledger_lib::report;

/// Ledger file kept in the working directory when no path is given.
const DEFAULT_LEDGER_FILE: &str = "club_finance.csv";

fn main() {
    let path = env::args_os()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LEDGER_FILE.into());

    match report(&path) {
        Ok(summary) => {
            println!("{}", summary);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("an error occurred: {:#?}", e);
            process::exit(1);
        }
    }
}
