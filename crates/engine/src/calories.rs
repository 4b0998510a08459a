//! Calorie report: how much more can be eaten today.
use core::fmt;

use crate::{Aggregator, Clock, Record, clock::SystemClock};

/// Outcome of comparing today's calories against the limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalorieStatus {
    /// Calories still available today, unrounded.
    Remaining(f64),
    Exhausted,
}

impl fmt::Display for CalorieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(left) => write!(
                f,
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {left} кКал"
            ),
            Self::Exhausted => f.write_str("Хватит есть!"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CalorieReport<C = SystemClock> {
    aggregator: Aggregator<C>,
}

impl CalorieReport {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> CalorieReport<C> {
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

    pub fn status(&self) -> CalorieStatus {
        let eaten = self.aggregator.today_total();
        let limit = self.aggregator.limit();
        if eaten < limit {
            CalorieStatus::Remaining(limit - eaten)
        } else {
            CalorieStatus::Exhausted
        }
    }

    pub fn remaining_message(&self) -> String {
        self.status().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::FixedClock;

    fn report(limit: f64) -> CalorieReport<FixedClock> {
        CalorieReport::with_clock(limit, FixedClock(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()))
    }

    fn today(amount: f64) -> Record {
        Record::dated(amount, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    #[test]
    fn reports_remaining_calories() {
        let mut report = report(1000.0);
        report.add_record(today(118.0).with_comment("Кусок тортика. И ещё один."));
        report.add_record(today(84.0).with_comment("Йогурт."));
        report.add_record(Record::parse(1140.0, "24.02.2019").unwrap());

        assert_eq!(report.today_total(), 202.0);
        assert_eq!(report.status(), CalorieStatus::Remaining(798.0));
        assert_eq!(
            report.remaining_message(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 798 кКал"
        );
    }

    #[test]
    fn remaining_is_not_rounded() {
        let mut report = report(100.0);
        report.add_record(today(0.25));
        assert_eq!(report.status(), CalorieStatus::Remaining(99.75));
        assert!(report.remaining_message().ends_with("не более 99.75 кКал"));
    }

    #[test]
    fn limit_reached_stops_eating() {
        let mut report = report(500.0);
        report.add_record(today(500.0));
        assert_eq!(report.status(), CalorieStatus::Exhausted);
        assert_eq!(report.remaining_message(), "Хватит есть!");

        report.add_record(today(1.0));
        assert_eq!(report.remaining_message(), "Хватит есть!");
    }

    #[test]
    fn zero_limit_is_accepted() {
        let report = report(0.0);
        assert_eq!(report.status(), CalorieStatus::Exhausted);
    }
}
