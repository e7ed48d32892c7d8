use thiserror::Error;

/// Failures surfaced by the ledger store. Nothing is retried or recovered:
/// one unreadable file or malformed row fails the whole operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed ledger row: {0}")]
    Parse(#[from] csv::Error),
}
