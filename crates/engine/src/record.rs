//! The module contains the `Record` type, a single dated amount.
//!
//! The same type is used for money spent and calories eaten: the unit only
//! matters to the report that owns the record.
use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Clock, EngineError, ResultEngine, clock::SystemClock};

/// Textual date format accepted by [`parse_date`].
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `DD.MM.YYYY` date.
///
/// ```rust
/// use engine::parse_date;
///
/// let date = parse_date("08.11.2022").unwrap();
/// assert_eq!(date.to_string(), "2022-11-08");
/// assert!(parse_date("2022-11-08").is_err());
/// assert!(parse_date("08.11.22").is_err());
/// ```
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    // chrono takes any year width and skips whitespace before numbers.
    let year = value.rsplit('.').next().unwrap_or_default();
    if value.contains(char::is_whitespace)
        || year.len() != 4
        || !year.chars().all(|c| c.is_ascii_digit())
    {
        return Err(EngineError::InvalidDate(format!(
            "{value}: expected DD.MM.YYYY"
        )));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| EngineError::InvalidDate(format!("{value}: {err}")))
}

/// A dated amount with an optional comment.
///
/// Records are immutable once built; the comment is informational only and
/// never takes part in a total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    date: NaiveDate,
    comment: Option<String>,
}

impl Record {
    /// Creates a record dated today according to the system clock.
    pub fn new(amount: f64) -> Self {
        Self::today_by(amount, &SystemClock)
    }

    /// Creates a record dated today according to `clock`.
    pub fn today_by(amount: f64, clock: &impl Clock) -> Self {
        Self::dated(amount, clock.today())
    }

    pub fn dated(amount: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            comment: None,
        }
    }

    /// Creates a record from a `DD.MM.YYYY` date string.
    pub fn parse(amount: f64, date: &str) -> ResultEngine<Self> {
        Ok(Self::dated(amount, parse_date(date)?))
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.date.format(DATE_FORMAT))?;
        if let Some(comment) = &self.comment {
            write!(f, " {comment}")?;
        }
        Ok(())
    }
}
