use crate::types::{MonetaryAmount, Record};

/// The three headline figures rendered above the transaction table.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct Totals {
    pub income: MonetaryAmount,
    pub expense: MonetaryAmount,
    pub balance: MonetaryAmount,
}

/// Partitions the record set by amount sign. `income` sums the positive
/// amounts, `expense` is the absolute value of the negative sum, and
/// `balance` is their difference. Zero-amount rows count towards neither.
pub fn compute_totals(records: &[Record]) -> Totals {
    let income = records
        .iter()
        .filter(|r| r.amount.is_income())
        .fold(MonetaryAmount::default(), |acc, r| acc + r.amount);
    let expense = records
        .iter()
        .filter(|r| r.amount.is_expense())
        .fold(MonetaryAmount::default(), |acc, r| acc + r.amount)
        .abs();

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Note phrases that flag a transaction as still owed. Matching is
/// case-sensitive substring containment against the note field.
#[derive(Clone, Debug)]
pub struct UnpaidMarkers(Vec<String>);

impl UnpaidMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, note: &str) -> bool {
        self.0.iter().any(|marker| note.contains(marker.as_str()))
    }
}

impl Default for UnpaidMarkers {
    fn default() -> Self {
        Self::new(["未交", "未缴", "欠", "未付"])
    }
}

/// Records whose note mentions an outstanding amount, in input order.
/// An empty result means nothing is outstanding.
pub fn filter_unpaid<'a>(records: &'a [Record], markers: &UnpaidMarkers) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| markers.matches(&record.note))
        .collect()
}

/// Newest transactions first, for the table view. Stable for equal dates,
/// so same-day rows keep their append order.
pub fn sorted_latest_first(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
