//! Cash report: how much money is left for today, in a chosen currency.
use core::fmt;

use crate::{Aggregator, Clock, Currency, Record, ResultEngine, clock::SystemClock};

/// Outcome of comparing today's spending against the limit.
///
/// Amounts are already converted and rounded to two decimals; `Debt` holds the
/// absolute value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CashStatus {
    Remaining { amount: f64, currency: Currency },
    Exhausted,
    Debt { amount: f64, currency: Currency },
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining { amount, currency } => write!(
                f,
                "На сегодня осталось {} {}",
                display_amount(*amount),
                currency.name()
            ),
            Self::Exhausted => f.write_str("Денег нет, держись"),
            Self::Debt { amount, currency } => write!(
                f,
                "Денег нет, держись: твой долг - {} {}",
                display_amount(*amount),
                currency.name()
            ),
        }
    }
}

/// Rounds to two decimals, exact halves to even.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Renders an amount keeping at least one fractional digit (`555.0`, `0.83`).
fn display_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[derive(Clone, Debug)]
pub struct CashReport<C = SystemClock> {
    aggregator: Aggregator<C>,
}

impl CashReport {
    /// `limit` is expressed in roubles, the base unit of every rate.
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> CashReport<C> {
    pub fn with_clock(limit: f64, clock: C) -> Self {
        Self {
            aggregator: Aggregator::with_clock(limit, clock),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.aggregator.add_record(record);
    }

    pub fn aggregator(&self) -> &Aggregator<C> {
        &self.aggregator
    }

    pub fn today_total(&self) -> f64 {
        self.aggregator.today_total()
    }

    pub fn week_total(&self) -> f64 {
        self.aggregator.week_total()
    }

    pub fn status(&self, currency: Currency) -> CashStatus {
        let left = self.aggregator.limit() - self.aggregator.today_total();
        let converted = round_cents(left / currency.rate());
        if converted > 0.0 {
            CashStatus::Remaining {
                amount: converted,
                currency,
            }
        } else if converted == 0.0 {
            CashStatus::Exhausted
        } else {
            CashStatus::Debt {
                amount: converted.abs(),
                currency,
            }
        }
    }

    /// Builds today's message for the currency with the given code.
    ///
    /// Fails with [`InvalidCurrency`] for codes outside the rate table.
    ///
    /// [`InvalidCurrency`]: crate::EngineError::InvalidCurrency
    pub fn remaining_message(&self, code: &str) -> ResultEngine<String> {
        let currency = Currency::try_from(code).inspect_err(|err| {
            tracing::warn!("rejected currency: {err}");
        })?;
        Ok(self.status(currency).to_string())
    }
}
