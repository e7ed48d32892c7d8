use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use ::serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::types::{Entry, MainCategory, MonetaryAmount, Record};

/// Byte-order marker written ahead of the header so spreadsheet tools
/// decode the file as UTF-8.
const BOM: &str = "\u{feff}";

/// Column names, in the fixed on-disk order.
pub const COLUMNS: [&str; 8] = [
    "date",
    "mainCategory",
    "subCategory",
    "amount",
    "location",
    "participantCount",
    "handler",
    "note",
];

#[derive(Debug, Serialize, Deserialize)]
enum CategoryEntity {
    Income,
    Expense,
}

impl CategoryEntity {
    fn into_domain(self) -> MainCategory {
        match self {
            CategoryEntity::Income => MainCategory::Income,
            CategoryEntity::Expense => MainCategory::Expense,
        }
    }

    fn from_domain(category: MainCategory) -> Self {
        match category {
            MainCategory::Income => CategoryEntity::Income,
            MainCategory::Expense => CategoryEntity::Expense,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordRow {
    date: NaiveDate,
    main_category: CategoryEntity,
    sub_category: String,
    amount: Decimal,
    location: String,
    participant_count: u32,
    handler: String,
    note: String,
}

impl RecordRow {
    fn into_domain(self) -> Record {
        Record {
            date: self.date,
            main_category: self.main_category.into_domain(),
            sub_category: self.sub_category,
            amount: MonetaryAmount::from_decimal(self.amount),
            location: self.location,
            participant_count: self.participant_count,
            handler: self.handler,
            note: self.note,
        }
    }

    fn from_domain(record: Record) -> Self {
        Self {
            date: record.date,
            main_category: CategoryEntity::from_domain(record.main_category),
            sub_category: record.sub_category,
            amount: record.amount.value(),
            location: record.location,
            participant_count: record.participant_count,
            handler: record.handler,
            note: record.note,
        }
    }
}

/// Owns the on-disk record file. All reads and writes are synchronous and
/// uncoordinated; concurrent multi-process appends interleave however the
/// file system orders them.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file containing the BOM and the header row.
    /// A no-op when the file already exists.
    pub fn initialize(&self) -> Result<(), LedgerError> {
        if self.path.exists() {
            return Ok(());
        }
        let mut file = File::create(&self.path)?;
        file.write_all(BOM.as_bytes())?;
        file.write_all(COLUMNS.join(",").as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Normalizes the entry (sign convention, handler placeholder) and
    /// writes it as exactly one new row at the end of the file. Existing
    /// content is never read or rewritten.
    pub fn append(&self, entry: Entry) -> Result<(), LedgerError> {
        let record = Record::from_entry(entry);
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(RecordRow::from_domain(record))?;
        wtr.flush()?;
        Ok(())
    }

    /// Reads every record back in file order, oldest append first.
    /// One malformed row fails the whole load, no partial result.
    pub fn load_all(&self) -> Result<Vec<Record>, LedgerError> {
        let content = fs::read_to_string(&self.path)?;
        let body = content.strip_prefix(BOM).unwrap_or(content.as_str());
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(body.as_bytes());

        let mut records: Vec<Record> = Vec::new();
        for row in reader.deserialize::<RecordRow>() {
            records.push(row?.into_domain());
        }
        Ok(records)
    }

    /// The raw file content, BOM included, for the download/export path.
    pub fn export(&self) -> Result<String, LedgerError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{LedgerStore, BOM};

    #[test]
    fn initialize_writes_bom_and_header_only() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.csv"));
        store.initialize().unwrap();

        let content = store.export().unwrap();
        let expected = format!(
            "{}date,mainCategory,subCategory,amount,location,participantCount,handler,note\n",
            BOM
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn initialize_is_a_noop_on_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        std::fs::write(&path, "left alone").unwrap();

        let store = LedgerStore::new(&path);
        store.initialize().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "left alone");
    }

    #[test]
    fn initialize_fails_when_directory_is_missing() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("no-such-dir").join("ledger.csv"));
        assert!(store.initialize().is_err());
    }
}
