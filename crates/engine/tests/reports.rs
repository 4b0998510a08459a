use chrono::{Days, NaiveDate};

use engine::{
    Aggregator, CalorieReport, CalorieStatus, CashReport, CashStatus, Clock, Currency,
    EngineError, FixedClock, Record, SystemClock,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 11, 20).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

#[test]
fn sample_cash_day() {
    let clock = FixedClock(today());
    let mut cash = CashReport::with_clock(1000.0, clock);
    cash.add_record(Record::today_by(145.0, &clock).with_comment("кофе"));
    cash.add_record(Record::today_by(300.0, &clock).with_comment("Серёге за обед"));
    cash.add_record(
        Record::parse(3000.0, "08.11.2022")
            .unwrap()
            .with_comment("Бар на Танин день рождения"),
    );

    assert_eq!(cash.today_total(), 445.0);
    assert_eq!(cash.week_total(), 445.0);
    assert_eq!(
        cash.remaining_message("rub").unwrap(),
        "На сегодня осталось 555.0 руб"
    );
    assert_eq!(
        cash.remaining_message("usd").unwrap(),
        "На сегодня осталось 9.25 USD"
    );
}

#[test]
fn sample_calorie_day() {
    let clock = FixedClock(today());
    let mut calories = CalorieReport::with_clock(1000.0, clock);
    calories.add_record(Record::today_by(118.0, &clock));
    calories.add_record(Record::today_by(84.0, &clock));
    calories.add_record(Record::parse(1140.0, "24.02.2019").unwrap());

    assert_eq!(calories.today_total(), 202.0);
    assert_eq!(calories.status(), CalorieStatus::Remaining(798.0));
    assert!(calories.remaining_message().contains("798 кКал"));
}

#[test]
fn week_window_bounds() {
    let mut agg = Aggregator::with_clock(0.0, FixedClock(today()));
    agg.add_record(Record::dated(1.0, today()));
    agg.add_record(Record::dated(2.0, days_ago(3)));
    agg.add_record(Record::dated(4.0, days_ago(7)));
    agg.add_record(Record::dated(8.0, days_ago(8)));
    agg.add_record(Record::dated(16.0, today().checked_add_days(Days::new(1)).unwrap()));

    assert_eq!(agg.today_total(), 1.0);
    assert_eq!(agg.week_total(), 7.0);
}

#[test]
fn totals_follow_the_clock() {
    struct Rollover(std::cell::Cell<NaiveDate>);

    impl Clock for Rollover {
        fn today(&self) -> NaiveDate {
            self.0.get()
        }
    }

    let clock = Rollover(std::cell::Cell::new(days_ago(1)));
    let mut agg = Aggregator::with_clock(100.0, &clock);
    agg.add_record(Record::dated(30.0, days_ago(1)));
    assert_eq!(agg.today_total(), 30.0);

    clock.0.set(today());
    assert_eq!(agg.today_total(), 0.0);
    assert_eq!(agg.week_total(), 30.0);
}

#[test]
fn cash_branches() {
    let clock = FixedClock(today());

    let mut exact = CashReport::with_clock(500.0, clock);
    exact.add_record(Record::dated(500.0, today()));
    assert_eq!(exact.status(Currency::Eur), CashStatus::Exhausted);
    assert_eq!(exact.remaining_message("eur").unwrap(), "Денег нет, держись");

    let mut over = CashReport::with_clock(100.0, clock);
    over.add_record(Record::dated(150.0, today()));
    assert_eq!(
        over.remaining_message("usd").unwrap(),
        "Денег нет, держись: твой долг - 0.83 USD"
    );
    assert_eq!(
        over.remaining_message("rub").unwrap(),
        "Денег нет, держись: твой долг - 50.0 руб"
    );
}

#[test]
fn invalid_inputs_are_errors() {
    let cash = CashReport::with_clock(100.0, FixedClock(today()));
    assert!(matches!(
        cash.remaining_message("xyz"),
        Err(EngineError::InvalidCurrency(code)) if code == "xyz"
    ));
    assert!(matches!(
        Record::parse(1.0, "2022-11-08"),
        Err(EngineError::InvalidDate(_))
    ));
}

#[test]
fn system_clock_record_counts_today() {
    let mut cash = CashReport::new(10.0);
    let record = Record::new(4.0);
    if record.date() != SystemClock.today() {
        // Crossed midnight between the two reads.
        return;
    }
    cash.add_record(record);
    assert_eq!(cash.today_total(), 4.0);
}

#[test]
fn records_serialize_with_iso_dates() {
    let record = Record::parse(84.0, "01.03.2024").unwrap().with_comment("Йогурт.");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"amount": 84.0, "date": "2024-03-01", "comment": "Йогурт."})
    );
}
