use std::path::Path;

use serde::Serialize;

const BOM: &str = "\u{feff}";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LedgerRow {
    date: &'static str,
    main_category: &'static str,
    sub_category: &'static str,
    amount: &'static str,
    location: &'static str,
    participant_count: &'static str,
    handler: &'static str,
    note: &'static str,
}

impl LedgerRow {
    fn from_array(row: [&'static str; 8]) -> Self {
        Self {
            date: row[0],
            main_category: row[1],
            sub_category: row[2],
            amount: row[3],
            location: row[4],
            participant_count: row[5],
            handler: row[6],
            note: row[7],
        }
    }
}

// Only used during testing so no need to return result
pub fn create_csv(rows: Vec<[&'static str; 8]>) -> String {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(LedgerRow::from_array(row)).unwrap();
    }
    wtr.flush().unwrap();
    let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
    format!("{}{}", BOM, data)
}

/// Writes ledger-file content straight to disk, BOM and header included,
/// the way the store's initialize + append sequence would leave it.
pub fn write_ledger(path: &Path, rows: Vec<[&'static str; 8]>) {
    std::fs::write(path, create_csv(rows)).unwrap();
}

#[cfg(test)]
mod tests {
    use crate::create_csv;

    #[test]
    fn create_csv_creates_single_row_with_bom_and_header() {
        let rows = vec![[
            "2024-05-01",
            "Income",
            "会费",
            "500",
            "北京天安假日",
            "4",
            "球队财务",
            "",
        ]];
        let sut = create_csv(rows);
        let expected = String::from(
            "\u{feff}date,mainCategory,subCategory,amount,location,participantCount,handler,note\n2024-05-01,Income,会费,500,北京天安假日,4,球队财务,\n",
        );
        assert_eq!(sut, expected);
    }

    #[test]
    fn create_csv_creates_multiple_rows_under_one_header() {
        let rows = vec![
            ["2024-05-01", "Income", "会费", "500", "", "0", "球队财务", ""],
            ["2024-05-02", "Expense", "餐饮费", "-200", "", "0", "球队财务", ""],
        ];
        let sut = create_csv(rows);
        let expected = String::from(
            "\u{feff}date,mainCategory,subCategory,amount,location,participantCount,handler,note\n2024-05-01,Income,会费,500,,0,球队财务,\n2024-05-02,Expense,餐饮费,-200,,0,球队财务,\n",
        );
        assert_eq!(sut, expected);
    }
}
