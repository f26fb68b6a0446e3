//! Filter and sort parameters for an ad-hoc transaction search.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, macros::format_description};

use crate::{
    Error,
    transaction::{RawTransaction, Transaction, TransactionKind},
};

/// Which kinds of transaction a search covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Both incomes and expenses.
    #[default]
    All,
    /// Only incomes.
    Income,
    /// Only expenses.
    Expense,
}

impl FromStr for KindFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "income" => Ok(KindFilter::Income),
            "expense" => Ok(KindFilter::Expense),
            other => Err(Error::InvalidCriteria(format!(
                "unknown transaction type \"{other}\", expected all, income or expense"
            ))),
        }
    }
}

/// The field to order search results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Order by the transaction date.
    #[default]
    Date,
    /// Order by the transaction amount.
    Amount,
    /// Order by the transaction name, ignoring case.
    Name,
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "amount" => Ok(SortField::Amount),
            "name" => Ok(SortField::Name),
            other => Err(Error::InvalidCriteria(format!(
                "unknown sort field \"{other}\", expected date, amount or name"
            ))),
        }
    }
}

/// The order to sort search results in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Asc,
    /// Sort in order of decreasing value, i.e. most recent first for dates.
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(Error::InvalidCriteria(format!(
                "unknown sort order \"{other}\", expected asc or desc"
            ))),
        }
    }
}

/// The full set of filter and sort parameters for a search.
///
/// Empty values (an empty keyword, no date bounds) mean "no filter" on that
/// dimension, never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Which kinds of transaction to search.
    #[serde(rename = "type")]
    pub kind_filter: KindFilter,
    /// Only include transactions on or after this date.
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<Date>,
    /// Only include transactions on or before this date.
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<Date>,
    /// Only include transactions whose name contains this text, ignoring case.
    pub keyword: Option<String>,
    /// The field to order results by.
    pub sort_field: SortField,
    /// The direction to order results in.
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// A copy of the criteria with blank keywords removed and the keyword trimmed.
    pub fn normalized(&self) -> Self {
        let keyword = self
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_owned);

        Self {
            keyword,
            ..self.clone()
        }
    }

    /// A copy of the criteria scoped to a single kind of transaction.
    pub fn scoped_to(&self, kind: TransactionKind) -> Self {
        let kind_filter = match kind {
            TransactionKind::Income => KindFilter::Income,
            TransactionKind::Expense => KindFilter::Expense,
        };

        Self {
            kind_filter,
            ..self.clone()
        }
    }

    /// Whether `date` is inside the (inclusive) date bounds.
    pub fn contains_date(&self, date: Date) -> bool {
        self.start_date.is_none_or(|start| start <= date)
            && self.end_date.is_none_or(|end| date <= end)
    }

    /// Whether `name` matches the keyword. Always true when there is no keyword.
    pub fn matches_keyword(&self, name: &str) -> bool {
        match self.keyword.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(keyword) => name.to_lowercase().contains(&keyword.to_lowercase()),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an [Error::InvalidDate] if `text` is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Accepts `null`, `""` or a `YYYY-MM-DD` string.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;

    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// The fields a transaction list can be sorted on.
pub(crate) trait SortKey {
    fn sort_date(&self) -> Date;
    fn sort_amount(&self) -> f64;
    fn sort_name(&self) -> &str;
}

impl SortKey for Transaction {
    fn sort_date(&self) -> Date {
        self.date
    }

    fn sort_amount(&self) -> f64 {
        self.amount
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl SortKey for RawTransaction {
    fn sort_date(&self) -> Date {
        self.date
    }

    fn sort_amount(&self) -> f64 {
        self.amount
    }

    fn sort_name(&self) -> &str {
        self.display_name()
    }
}

/// Sort `items` on `field` in `order`.
///
/// The sort is stable: items that compare equal keep their original order in
/// both directions.
pub(crate) fn sort_transactions<T: SortKey>(items: &mut [T], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = match field {
            SortField::Date => a.sort_date().cmp(&b.sort_date()),
            SortField::Amount => a.sort_amount().total_cmp(&b.sort_amount()),
            SortField::Name => compare_names(a.sort_name(), b.sort_name()),
        };

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
