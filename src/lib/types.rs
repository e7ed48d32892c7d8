use std::ops::{Add, Neg, Sub};

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Handler recorded when the submitted form leaves the field blank.
pub const DEFAULT_HANDLER: &str = "球队财务";

#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Debug)]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    pub fn new(value: f64) -> Self {
        Self(
            Decimal::from_f64_retain(value)
                .unwrap_or_else(|| panic!("Failed to parse {:#?} into Decimal", value)),
        )
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_income(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl Add for MonetaryAmount {
    type Output = MonetaryAmount;

    fn add(self, rhs: Self) -> Self::Output {
        MonetaryAmount(self.value() + rhs.value())
    }
}

impl Sub for MonetaryAmount {
    type Output = MonetaryAmount;

    fn sub(self, rhs: Self) -> Self::Output {
        MonetaryAmount(self.value() - rhs.value())
    }
}

impl Neg for MonetaryAmount {
    type Output = MonetaryAmount;

    fn neg(self) -> Self::Output {
        MonetaryAmount(-self.value())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MainCategory {
    /// Money coming into the club; persisted amounts keep their sign.
    Income,
    /// Money leaving the club; persisted amounts are negated.
    Expense,
}

impl MainCategory {
    /// Applies the write-time sign convention to a non-negative magnitude.
    pub fn signed_amount(&self, magnitude: MonetaryAmount) -> MonetaryAmount {
        match self {
            MainCategory::Income => magnitude,
            MainCategory::Expense => -magnitude,
        }
    }

    /// Sub-category labels the input form offers for this category. The
    /// stored value is free text, so the list is advisory, not a closed set.
    pub fn suggested_subcategories(&self) -> &'static [&'static str] {
        match self {
            MainCategory::Income => &["会费", "报名费", "赞助费", "打球费", "其他"],
            MainCategory::Expense => &["餐饮费", "奖品费", "物料费(球帽/球衣)", "打球费", "其他"],
        }
    }
}

/// A populated input form. The amount is the user-entered non-negative
/// magnitude; the sign convention has not been applied yet.
#[derive(Clone, Debug)]
pub struct Entry {
    pub date: NaiveDate,
    pub main_category: MainCategory,
    pub sub_category: String,
    pub amount: MonetaryAmount,
    pub location: String,
    pub participant_count: u32,
    pub handler: String,
    pub note: String,
}

/// A persisted transaction. The amount carries its sign: negative exactly
/// when the main category is Expense.
#[derive(Clone, PartialEq, Debug)]
pub struct Record {
    pub date: NaiveDate,
    pub main_category: MainCategory,
    pub sub_category: String,
    pub amount: MonetaryAmount,
    pub location: String,
    pub participant_count: u32,
    pub handler: String,
    pub note: String,
}

impl Record {
    pub fn from_entry(entry: Entry) -> Self {
        let handler = if entry.handler.trim().is_empty() {
            DEFAULT_HANDLER.to_string()
        } else {
            entry.handler
        };
        Self {
            date: entry.date,
            main_category: entry.main_category,
            sub_category: entry.sub_category,
            amount: entry.main_category.signed_amount(entry.amount),
            location: entry.location,
            participant_count: entry.participant_count,
            handler,
            note: entry.note,
        }
    }
}
