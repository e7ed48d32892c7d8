mod aggregate;
mod error;
mod store;
mod types;

use std::path::Path;

pub use aggregate::{compute_totals, filter_unpaid, sorted_latest_first, Totals, UnpaidMarkers};
pub use error::LedgerError;
pub use store::{LedgerStore, COLUMNS};
pub use types::{Entry, MainCategory, MonetaryAmount, Record, DEFAULT_HANDLER};

/// Loads the ledger at `path` and renders the summary the presentation
/// layer shows: the three headline totals followed by any unpaid rows.
/// Creates an empty ledger file first if none exists.
pub fn report(path: impl AsRef<Path>) -> Result<String, LedgerError> {
    let store = LedgerStore::new(path.as_ref());
    store.initialize()?;

    let records = store.load_all()?;
    let totals = compute_totals(&records);
    let unpaid = filter_unpaid(&records, &UnpaidMarkers::default());

    let mut out = String::new();
    out.push_str(&format!("income total:  ¥{:.2}\n", totals.income.value()));
    out.push_str(&format!("expense total: ¥{:.2}\n", totals.expense.value()));
    out.push_str(&format!("balance:       ¥{:.2}\n", totals.balance.value()));

    if unpaid.is_empty() {
        out.push_str("unpaid: none\n");
    } else {
        out.push_str(&format!("unpaid: {} record(s)\n", unpaid.len()));
        for record in unpaid {
            out.push_str(&format!(
                "  {} | {} | ¥{:.2} | {}\n",
                record.date,
                record.sub_category,
                record.amount.value(),
                record.note
            ));
        }
    }

    Ok(out)
}
